//! Launch math: charge-to-speed mapping, flight duration, heading and spin.

use glam::{DQuat, DVec3};

use crate::config::ChargeTuning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchVelocity {
    pub horizontal: f64,
    pub vertical: f64,
}

impl LaunchVelocity {
    /// Speeds ramp linearly with how long the press was held and saturate at
    /// `full_charge_ms`.
    pub fn from_hold(duration_ms: f64, tuning: &ChargeTuning) -> Self {
        let duration = if duration_ms.is_finite() {
            duration_ms.max(0.0)
        } else {
            0.0
        };
        let full = tuning.full_charge_ms;
        Self {
            horizontal: (tuning.max_velocity_horizontal / full * duration)
                .min(tuning.max_velocity_horizontal),
            vertical: (tuning.max_velocity_vertical / full * duration)
                .min(tuning.max_velocity_vertical),
        }
    }
}

/// Time in ms until the character is back on the ground, for an initial
/// vertical speed `v`, gravity `g` and starting height `h` above ground.
///
/// Computes `2v/g - (-v + sqrt(v² + 2gh)) / g`. For `h == 0` this is the
/// symmetric arc `2v/g`. Degenerate inputs give 0 so the flight ends on the
/// next frame instead of feeding NaN into the position.
pub fn flight_duration(v: f64, g: f64, h: f64) -> f64 {
    if v <= 0.0 || g <= 0.0 {
        return 0.0;
    }

    let correction = (-v + (v * v + 2.0 * g * h).sqrt()) / g;
    let total = 2.0 * v / g - correction;

    if total.is_finite() {
        total.max(0.0)
    } else {
        0.0
    }
}

/// Heading for a flight.
///
/// The y component is used for both y and z before normalizing. This is kept
/// as-is; it looks unintentional but only matters for non-zero input, and the
/// pointer host always releases with a zero vector.
pub fn translate_direction(direction: DVec3) -> DVec3 {
    DVec3::new(direction.x, direction.y, direction.y).normalize_or_zero()
}

/// Axis perpendicular to the horizontal heading and world up. Zero for a
/// purely vertical launch.
pub fn spin_axis(heading: DVec3) -> DVec3 {
    DVec3::new(heading.x, 0.0, heading.z)
        .cross(DVec3::Y)
        .normalize_or_zero()
}

pub fn spin_rotation(axis: DVec3, degrees: f64) -> DQuat {
    if axis == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    DQuat::from_axis_angle(axis, degrees.to_radians())
}
