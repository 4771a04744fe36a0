use glam::DVec3;
use std::f64::consts::PI;

/// Orbit camera around a target, in the alpha/beta convention used by
/// arc-rotate cameras: `alpha` is the azimuth in the xz plane, `beta` the
/// polar angle from +y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: DVec3,
    pub radius: f64,
    pub alpha: f64,
    pub beta: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_beta: f64,
    pub max_beta: f64,
    pub rotate_speed: f64,
    pub zoom_speed: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: DVec3::ZERO,
            radius: 10.0,
            alpha: -PI / 2.0,
            beta: PI / 2.5,
            min_radius: 0.5,
            max_radius: 500.0,
            min_beta: 0.05,
            max_beta: PI - 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
        }
    }
}

impl OrbitCamera {
    pub fn new(target: DVec3, radius: f64, alpha: f64, beta: f64) -> Self {
        Self {
            target,
            radius,
            alpha,
            beta,
            ..Default::default()
        }
    }

    pub fn position(&self) -> DVec3 {
        let x = self.radius * self.beta.sin() * self.alpha.cos();
        let y = self.radius * self.beta.cos();
        let z = self.radius * self.beta.sin() * self.alpha.sin();
        self.target + DVec3::new(x, y, z)
    }

    /// Pointer drag in pixels.
    pub fn rotate(&mut self, delta_x: f64, delta_y: f64) {
        self.alpha -= delta_x * self.rotate_speed;
        self.beta = (self.beta - delta_y * self.rotate_speed).clamp(self.min_beta, self.max_beta);
    }

    pub fn zoom(&mut self, delta: f64) {
        self.radius = (self.radius * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_radius, self.max_radius);
    }
}
