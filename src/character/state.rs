use glam::{DQuat, DVec3};

use super::launch::{self, LaunchVelocity};
use super::rebound::ReboundPose;
use super::status::CharacterStatus;
use crate::clock::Clock;
use crate::config::{ChargeTuning, GameConfig};
use crate::dynamics::Tween;
use crate::math::Transform;
use crate::render::{CharacterPose, TransformSink};

/// The jumping character and its press/charge/flight state machine.
///
/// All entry points are bounded, infallible state updates driven from a
/// single frame loop: `press` and `release` from pointer events, `update`
/// once per rendered frame with the elapsed milliseconds.
pub struct Character<C: Clock> {
    config: GameConfig,
    tuning: ChargeTuning,
    clock: C,
    status: CharacterStatus,
    position: DVec3,
    rotation: DQuat,
    body_scale: DVec3,
    head_offset_y: f64,
    velocity_vertical: f64,
    velocity_horizontal: f64,
    translate_direction: DVec3,
    rotate_axis: DVec3,
    touch_start_time: f64,
    jump_time: f64,
    jump_total_time: f64,
    rebound: Option<Tween<ReboundPose>>,
    spin: Option<Tween<f64>>,
}

impl<C: Clock> Character<C> {
    pub fn new(config: GameConfig, clock: C) -> Self {
        Self::with_tuning(config, ChargeTuning::STANDARD, clock)
    }

    pub fn with_tuning(config: GameConfig, tuning: ChargeTuning, clock: C) -> Self {
        let rest = ReboundPose::rest(&tuning);
        Self {
            config,
            tuning,
            clock,
            status: CharacterStatus::Idle,
            position: config.role_init_position,
            rotation: DQuat::IDENTITY,
            body_scale: rest.body_scale,
            head_offset_y: rest.head_offset_y,
            velocity_vertical: 0.0,
            velocity_horizontal: 0.0,
            translate_direction: DVec3::ZERO,
            rotate_axis: DVec3::Y,
            touch_start_time: 0.0,
            jump_time: 0.0,
            jump_total_time: 0.0,
            rebound: None,
            spin: None,
        }
    }

    /// Back to the spawn point, unrotated. Status, deformation and running
    /// animations are left alone.
    pub fn reset(&mut self) {
        self.position = self.config.role_init_position;
        self.rotation = DQuat::IDENTITY;
    }

    pub fn press(&mut self) {
        if self.status != CharacterStatus::Idle {
            log::trace!("press ignored while {}", self.status);
            return;
        }

        self.status = CharacterStatus::Pressed;
        self.touch_start_time = self.clock.now_ms();
        log::debug!("charge started at {:.1}ms", self.touch_start_time);
    }

    /// Launches the character. `direction` is raw pointer-space input; see
    /// [`launch::translate_direction`] for how it becomes a heading.
    pub fn release(&mut self, direction: DVec3) {
        if self.status != CharacterStatus::Pressed {
            log::trace!("release ignored while {}", self.status);
            return;
        }

        self.translate_direction = launch::translate_direction(direction);

        let held = self.clock.now_ms() - self.touch_start_time;
        let velocity = LaunchVelocity::from_hold(held, &self.tuning);
        self.velocity_horizontal = velocity.horizontal;
        self.velocity_vertical = velocity.vertical;

        self.jump_time = 0.0;
        self.jump_total_time = launch::flight_duration(
            self.velocity_vertical,
            self.config.gravity,
            (self.position.y - self.config.ground_y).abs(),
        );

        self.start_rebound();
        self.start_spin();
        self.status = CharacterStatus::Jumping;

        log::debug!(
            "launched after {:.1}ms hold: vertical {:.5}, horizontal {:.5}, flight {:.1}ms",
            held,
            self.velocity_vertical,
            self.velocity_horizontal,
            self.jump_total_time
        );
    }

    /// Advances animations and physics by `delta_ms`. Negative or non-finite
    /// deltas count as zero.
    pub fn update(&mut self, delta_ms: f64) {
        let dt = if delta_ms.is_finite() {
            delta_ms.max(0.0)
        } else {
            0.0
        };

        self.advance_animations(dt);

        match self.status {
            CharacterStatus::Pressed => self.charge(dt),
            CharacterStatus::Jumping => self.fly(dt),
            CharacterStatus::Idle | CharacterStatus::Dead => {}
        }
    }

    fn charge(&mut self, dt: f64) {
        let t = &self.tuning;

        let width = (self.body_scale.x + t.widen_rate * dt).clamp(1.0, t.max_width);
        let height = (self.body_scale.y - t.flatten_rate * dt).clamp(t.min_height, 1.0);
        self.body_scale = DVec3::new(width, height, width);

        self.head_offset_y = (self.head_offset_y - t.head_sink_rate * dt).max(t.min_head_offset);
    }

    fn fly(&mut self, dt: f64) {
        let translate_vertical = self.velocity_vertical * dt;
        let translate_horizontal = self.velocity_horizontal * dt;
        self.velocity_vertical -= self.config.gravity * dt;

        self.position.y += translate_vertical;
        self.position.x += translate_horizontal * self.translate_direction.x;
        self.position.z += translate_horizontal * self.translate_direction.z;
        self.jump_time += dt;

        if self.jump_time > self.jump_total_time {
            self.position.y = self.config.ground_y;
            self.status = CharacterStatus::Idle;
            log::debug!(
                "landed at ({:.2}, {:.2}, {:.2}) after {:.1}ms",
                self.position.x,
                self.position.y,
                self.position.z,
                self.jump_time
            );
        }
    }

    fn advance_animations(&mut self, dt: f64) {
        if let Some(tween) = &mut self.rebound {
            if let Some(pose) = tween.advance(dt) {
                self.body_scale = pose.body_scale;
                self.head_offset_y = pose.head_offset_y;
            }
            if !tween.is_running() {
                self.rebound = None;
            }
        }

        if let Some(tween) = &mut self.spin {
            if let Some(degrees) = tween.advance(dt) {
                self.rotation = launch::spin_rotation(self.rotate_axis, degrees);
            }
            if !tween.is_running() {
                self.rotation = DQuat::IDENTITY;
                self.spin = None;
            }
        }
    }

    fn start_rebound(&mut self) {
        if let Some(mut previous) = self.rebound.take() {
            previous.cancel();
            log::trace!("rebound replaced at {:.1}ms", previous.elapsed());
        }

        let from = ReboundPose {
            body_scale: self.body_scale,
            head_offset_y: self.head_offset_y,
        };
        self.rebound = Some(from.rebound(&self.tuning));
    }

    fn start_spin(&mut self) {
        if let Some(mut previous) = self.spin.take() {
            previous.cancel();
        }

        self.rotate_axis = launch::spin_axis(self.translate_direction);
        self.spin = Some(Tween::new(0.0, self.tuning.spin_degrees, self.jump_total_time));
    }

    pub fn pose(&self) -> CharacterPose {
        CharacterPose {
            root: Transform::from_position_rotation(self.position, self.rotation),
            body_scale: self.body_scale,
            head_offset_y: self.head_offset_y,
        }
    }

    pub fn write_to<S: TransformSink + ?Sized>(&self, sink: &mut S) {
        sink.apply(&self.pose());
    }

    pub fn status(&self) -> CharacterStatus {
        self.status
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn rotation(&self) -> DQuat {
        self.rotation
    }

    pub fn body_scale(&self) -> DVec3 {
        self.body_scale
    }

    pub fn head_offset_y(&self) -> f64 {
        self.head_offset_y
    }

    pub fn velocity_vertical(&self) -> f64 {
        self.velocity_vertical
    }

    pub fn velocity_horizontal(&self) -> f64 {
        self.velocity_horizontal
    }

    pub fn translate_direction(&self) -> DVec3 {
        self.translate_direction
    }

    pub fn rotate_axis(&self) -> DVec3 {
        self.rotate_axis
    }

    pub fn jump_time(&self) -> f64 {
        self.jump_time
    }

    pub fn jump_total_time(&self) -> f64 {
        self.jump_total_time
    }

    pub fn is_rebounding(&self) -> bool {
        self.rebound.is_some()
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tuning(&self) -> &ChargeTuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const FRAME: f64 = 16.0;

    fn character() -> (Character<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Character::new(GameConfig::STANDARD, clock.clone()), clock)
    }

    fn hold(character: &mut Character<ManualClock>, clock: &ManualClock, ms: f64) {
        character.press();
        clock.advance(ms);
        character.update(ms);
    }

    #[test]
    fn starts_idle_at_spawn() {
        let (c, _) = character();
        assert_eq!(c.status(), CharacterStatus::Idle);
        assert_eq!(c.position(), GameConfig::STANDARD.role_init_position);
        assert_eq!(c.body_scale(), DVec3::ONE);
        assert_eq!(c.head_offset_y(), 1.6);
    }

    #[test]
    fn press_only_from_idle() {
        let (mut c, clock) = character();
        clock.set(100.0);
        c.press();
        assert_eq!(c.status(), CharacterStatus::Pressed);

        clock.set(900.0);
        c.press();
        c.release(DVec3::ZERO);
        // hold is measured from the first press
        assert!((c.velocity_vertical() - 0.016).abs() < 1e-12);

        c.press();
        assert_eq!(c.status(), CharacterStatus::Jumping);
    }

    #[test]
    fn release_ignored_unless_pressed() {
        let (mut c, clock) = character();
        clock.advance(500.0);
        c.release(DVec3::X);
        assert_eq!(c.status(), CharacterStatus::Idle);
        assert_eq!(c.velocity_vertical(), 0.0);
        assert!(!c.is_rebounding());
    }

    #[test]
    fn charging_squashes_body() {
        let (mut c, clock) = character();
        hold(&mut c, &clock, 1000.0);
        let scale = c.body_scale();
        assert!((scale.x - 1.3).abs() < 1e-12);
        assert!((scale.y - 0.9).abs() < 1e-12);
        assert_eq!(scale.x, scale.z);
        assert!((c.head_offset_y() - 1.425).abs() < 1e-12);
    }

    #[test]
    fn charging_clamps_at_limits() {
        let (mut c, _) = character();
        c.press();
        for dt in [0.0, 1.0, 16.0, 500.0, 10_000.0, 1e9] {
            c.update(dt);
            let scale = c.body_scale();
            assert!(scale.x <= 1.8 && scale.x >= 1.0);
            assert!(scale.y >= 0.8 && scale.y <= 1.0);
            assert!(c.head_offset_y() >= 1.25);
            assert_eq!(scale.x, scale.z);
        }
        assert_eq!(c.body_scale(), DVec3::new(1.8, 0.8, 1.8));
        assert_eq!(c.head_offset_y(), 1.25);
    }

    #[test]
    fn idle_update_changes_nothing() {
        let (mut c, _) = character();
        let before = c.pose();
        c.update(FRAME);
        c.update(1000.0);
        assert_eq!(c.pose(), before);
    }

    #[test]
    fn release_sets_velocities_from_hold() {
        let (mut c, clock) = character();
        c.press();
        clock.advance(1000.0);
        c.release(DVec3::ZERO);
        assert_eq!(c.status(), CharacterStatus::Jumping);
        assert!((c.velocity_vertical() - 0.02).abs() < 1e-15);
        assert!((c.velocity_horizontal() - 0.01).abs() < 1e-15);
        assert!((c.jump_total_time() - 400.0).abs() < 1e-9);
        assert_eq!(c.jump_time(), 0.0);
        assert_eq!(c.translate_direction(), DVec3::ZERO);
        assert!(c.is_rebounding());
        assert!(c.is_spinning());
    }

    #[test]
    fn flight_rises_then_lands_on_ground() {
        let (mut c, clock) = character();
        c.press();
        clock.advance(1000.0);
        c.release(DVec3::ZERO);

        c.update(200.0);
        assert!(c.position().y > GameConfig::STANDARD.ground_y);
        assert_eq!(c.status(), CharacterStatus::Jumping);

        c.update(200.0);
        assert_eq!(c.status(), CharacterStatus::Jumping);
        c.update(1.0);
        assert_eq!(c.status(), CharacterStatus::Idle);
        assert_eq!(c.position().y, GameConfig::STANDARD.ground_y);
    }

    #[test]
    fn vertical_launch_keeps_horizontal_position() {
        let (mut c, clock) = character();
        c.press();
        clock.advance(2000.0);
        c.release(DVec3::ZERO);
        let start = c.position();
        while c.status() == CharacterStatus::Jumping {
            c.update(FRAME);
        }
        assert_eq!(c.position().x, start.x);
        assert_eq!(c.position().z, start.z);
    }

    #[test]
    fn directed_launch_travels_along_heading() {
        let (mut c, clock) = character();
        c.press();
        clock.advance(1000.0);
        c.release(DVec3::new(1.0, 0.0, 0.0));
        assert!((c.rotate_axis() - DVec3::Z).length() < 1e-12);

        c.update(100.0);
        let moved = c.position() - GameConfig::STANDARD.role_init_position;
        assert!((moved.x - 0.01 * 100.0).abs() < 1e-12);
        assert_eq!(moved.z, 0.0);
    }

    #[test]
    fn spin_rotates_during_flight_and_resets() {
        let (mut c, clock) = character();
        c.press();
        clock.advance(1000.0);
        c.release(DVec3::new(1.0, 0.0, 0.0));

        c.update(200.0);
        // half of -360 degrees about +z
        assert!((c.rotation() * DVec3::Y - DVec3::NEG_Y).length() < 1e-9);

        c.update(200.0);
        assert_eq!(c.rotation(), DQuat::IDENTITY);
        assert!(!c.is_spinning());
    }

    #[test]
    fn zero_hold_lands_next_frame() {
        let (mut c, _) = character();
        c.press();
        c.release(DVec3::ZERO);
        assert_eq!(c.jump_total_time(), 0.0);
        c.update(FRAME);
        assert_eq!(c.status(), CharacterStatus::Idle);
        assert_eq!(c.position().y, GameConfig::STANDARD.ground_y);
        assert!(c.position().is_finite());
    }

    #[test]
    fn invalid_delta_is_ignored() {
        let (mut c, clock) = character();
        c.press();
        clock.advance(1000.0);
        c.release(DVec3::ZERO);
        let before = c.position();
        c.update(f64::NAN);
        c.update(-20.0);
        assert_eq!(c.position(), before);
        assert_eq!(c.jump_time(), 0.0);
    }

    #[test]
    fn rebound_restores_rest_pose_after_release() {
        let (mut c, clock) = character();
        hold(&mut c, &clock, 1500.0);
        c.release(DVec3::ZERO);
        for _ in 0..15 {
            c.update(FRAME);
        }
        assert!(!c.is_rebounding());
        assert_eq!(c.body_scale(), DVec3::ONE);
        assert_eq!(c.head_offset_y(), 1.6);
    }

    #[test]
    fn reset_is_idempotent_and_keeps_status() {
        let (mut c, clock) = character();
        c.press();
        clock.advance(800.0);
        c.release(DVec3::X);
        c.update(100.0);

        c.reset();
        let once = (c.position(), c.rotation());
        c.reset();
        assert_eq!((c.position(), c.rotation()), once);
        assert_eq!(once.0, GameConfig::STANDARD.role_init_position);
        assert_eq!(once.1, DQuat::IDENTITY);
        assert_eq!(c.status(), CharacterStatus::Jumping);
        assert!(c.is_rebounding());
    }

    #[test]
    fn launch_from_above_ground_uses_height() {
        let clock = ManualClock::new();
        let config = GameConfig::STANDARD.with_spawn(DVec3::new(0.0, 12.0, 0.0));
        let mut c = Character::new(config, clock.clone());
        c.press();
        clock.advance(1000.0);
        c.release(DVec3::ZERO);
        let expected = launch::flight_duration(0.02, config.gravity, 2.0);
        assert!((c.jump_total_time() - expected).abs() < 1e-9);
    }

    #[test]
    fn pose_reaches_sink() {
        let (c, _) = character();
        let mut seen = Vec::new();
        let mut sink = |pose: &CharacterPose| seen.push(*pose);
        c.write_to(&mut sink);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].root.position, GameConfig::STANDARD.role_init_position);
        assert_eq!(seen[0].root.scale, DVec3::ONE);
    }
}
