use glam::DVec3;

use crate::math::Transform;

/// Everything a render binding needs to draw the character for one frame.
///
/// `root` places the whole model; `body_scale` and `head_offset_y` deform its
/// two sub-parts relative to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterPose {
    pub root: Transform,
    pub body_scale: DVec3,
    pub head_offset_y: f64,
}

/// Receives the character pose each frame. Implemented by engine bindings.
pub trait TransformSink {
    fn apply(&mut self, pose: &CharacterPose);
}

impl<F: FnMut(&CharacterPose)> TransformSink for F {
    fn apply(&mut self, pose: &CharacterPose) {
        self(pose)
    }
}

/// Sink for hosts without a renderer: logs poses at debug level, at most one
/// per `every` frames.
#[derive(Debug, Clone)]
pub struct LogSink {
    every: u32,
    frame: u32,
}

impl LogSink {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            frame: 0,
        }
    }

    pub fn frames(&self) -> u32 {
        self.frame
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(30)
    }
}

impl TransformSink for LogSink {
    fn apply(&mut self, pose: &CharacterPose) {
        if self.frame % self.every == 0 {
            let p = pose.root.position;
            log::debug!(
                "pose #{}: position ({:.3}, {:.3}, {:.3}) body {:.3}x{:.3} head {:.3}",
                self.frame,
                p.x,
                p.y,
                p.z,
                pose.body_scale.x,
                pose.body_scale.y,
                pose.head_offset_y
            );
        }
        self.frame = self.frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;

    #[test]
    fn closures_collect_poses() {
        let pose = CharacterPose {
            root: Transform::from_position_rotation(DVec3::new(1.0, 2.0, 3.0), DQuat::IDENTITY),
            body_scale: DVec3::ONE,
            head_offset_y: 1.6,
        };
        let mut heights = Vec::new();
        {
            let mut sink = |p: &CharacterPose| heights.push(p.root.position.y);
            sink.apply(&pose);
            sink.apply(&pose);
        }
        assert_eq!(heights, vec![2.0, 2.0]);
    }

    #[test]
    fn log_sink_counts_frames() {
        let pose = CharacterPose {
            root: Transform::IDENTITY,
            body_scale: DVec3::ONE,
            head_offset_y: 1.6,
        };
        let mut sink = LogSink::new(0);
        for _ in 0..5 {
            sink.apply(&pose);
        }
        assert_eq!(sink.frames(), 5);
    }
}
