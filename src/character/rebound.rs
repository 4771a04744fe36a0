//! Landing squash recovery: body scale and head offset spring back to rest.

use glam::DVec3;

use crate::config::ChargeTuning;
use crate::dynamics::{Easing, Interpolatable, Tween};

/// The deformable parts of the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReboundPose {
    pub body_scale: DVec3,
    pub head_offset_y: f64,
}

impl ReboundPose {
    pub fn rest(tuning: &ChargeTuning) -> Self {
        Self {
            body_scale: DVec3::ONE,
            head_offset_y: tuning.rest_head_offset,
        }
    }

    /// Elastic tween from `self` back to the rest pose.
    pub fn rebound(self, tuning: &ChargeTuning) -> Tween<Self> {
        Tween::new(self, Self::rest(tuning), tuning.rebound_ms).with_easing(Easing::ElasticOut)
    }
}

impl Interpolatable for ReboundPose {
    fn add(self, other: Self) -> Self {
        Self {
            body_scale: self.body_scale + other.body_scale,
            head_offset_y: self.head_offset_y + other.head_offset_y,
        }
    }

    fn sub(self, other: Self) -> Self {
        Self {
            body_scale: self.body_scale - other.body_scale,
            head_offset_y: self.head_offset_y - other.head_offset_y,
        }
    }

    fn scale(self, factor: f64) -> Self {
        Self {
            body_scale: self.body_scale * factor,
            head_offset_y: self.head_offset_y * factor,
        }
    }
}
