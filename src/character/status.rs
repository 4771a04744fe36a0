use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterStatus {
    #[default]
    Idle,
    Pressed,
    Jumping,
    /// Reserved. No transition enters it.
    Dead,
}

impl CharacterStatus {
    pub fn is_airborne(self) -> bool {
        self == CharacterStatus::Jumping
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterStatus::Idle => "idle",
            CharacterStatus::Pressed => "pressed",
            CharacterStatus::Jumping => "jumping",
            CharacterStatus::Dead => "dead",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
