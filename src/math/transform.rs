use glam::{DQuat, DVec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
        scale: DVec3::ONE,
    };

    pub fn from_position_rotation(position: DVec3, rotation: DQuat) -> Self {
        Self {
            position,
            rotation,
            scale: DVec3::ONE,
        }
    }

    /// Position, rotation (x, y, z, w) and scale packed for hosts that take
    /// flat number arrays.
    pub fn to_array(&self) -> [f64; 10] {
        let p = self.position;
        let r = self.rotation;
        let s = self.scale;
        [p.x, p.y, p.z, r.x, r.y, r.z, r.w, s.x, s.y, s.z]
    }
}
