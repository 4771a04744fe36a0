use std::f64::consts::PI;

/// Easing curves over normalized progress `k` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Overshoots the target and rings back, like a spring settling.
    ElasticOut,
}

impl Easing {
    pub fn apply(self, k: f64) -> f64 {
        let k = k.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::ElasticOut => {
                if k == 0.0 {
                    return 0.0;
                }
                if k == 1.0 {
                    return 1.0;
                }
                2.0_f64.powf(-10.0 * k) * ((k - 0.1) * 5.0 * PI).sin() + 1.0
            }
        }
    }
}
