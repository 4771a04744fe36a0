use super::easing::Easing;
use super::interpolate::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Finished,
    Cancelled,
}

/// A one-shot interpolation from `start` to `end` over `duration` milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Interpolatable> {
    start: T,
    end: T,
    duration: f64,
    easing: Easing,
    elapsed: f64,
    phase: Phase,
}

impl<T: Interpolatable> Tween<T> {
    pub fn new(start: T, end: T, duration: f64) -> Self {
        Self {
            start,
            end,
            duration,
            easing: Easing::Linear,
            elapsed: 0.0,
            phase: Phase::Running,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Normalized progress in `[0, 1]`. Non-positive durations count as done.
    pub fn progress(&self) -> f64 {
        Self::progress_for(self.elapsed, self.duration)
    }

    fn progress_for(elapsed: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            1.0
        } else {
            (elapsed / duration).clamp(0.0, 1.0)
        }
    }

    /// Samples the curve without advancing. The final sample is `end` exactly.
    pub fn value_at(&self, elapsed: f64) -> T {
        let k = Self::progress_for(elapsed, self.duration);
        if k >= 1.0 {
            return self.end;
        }
        self.start.lerp(self.end, self.easing.apply(k))
    }

    /// Moves the tween forward by `dt` milliseconds and returns the new value.
    ///
    /// Returns `None` once cancelled, and on every call after the one that
    /// reported completion.
    pub fn advance(&mut self, dt: f64) -> Option<T> {
        if self.phase != Phase::Running {
            return None;
        }

        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }

        if self.progress() >= 1.0 {
            self.phase = Phase::Finished;
            return Some(self.end);
        }

        Some(self.value_at(self.elapsed))
    }

    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Cancelled;
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.phase == Phase::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_tween_hits_midpoint_and_end() {
        let mut tween = Tween::new(0.0_f64, -360.0, 400.0);
        assert_eq!(tween.advance(200.0), Some(-180.0));
        assert!(tween.is_running());
        assert_eq!(tween.advance(200.0), Some(-360.0));
        assert!(tween.is_finished());
        assert_eq!(tween.advance(16.0), None);
    }

    #[test]
    fn overshooting_step_clamps_to_end() {
        let mut tween = Tween::new(1.8_f64, 1.0, 200.0).with_easing(Easing::ElasticOut);
        assert_eq!(tween.advance(500.0), Some(1.0));
        assert!(tween.is_finished());
    }

    #[test]
    fn zero_duration_completes_on_first_advance() {
        let mut tween = Tween::new(0.0_f64, 5.0, 0.0);
        assert_eq!(tween.value_at(0.0), 5.0);
        assert_eq!(tween.advance(0.0), Some(5.0));
        assert!(tween.is_finished());
    }

    #[test]
    fn cancelled_tween_yields_nothing() {
        let mut tween = Tween::new(0.0_f64, 1.0, 100.0);
        tween.advance(10.0);
        tween.cancel();
        assert!(tween.is_cancelled());
        assert_eq!(tween.advance(10.0), None);
        assert_eq!(tween.elapsed(), 10.0);
    }

    #[test]
    fn cancel_after_finish_keeps_finished() {
        let mut tween = Tween::new(0.0_f64, 1.0, 10.0);
        tween.advance(20.0);
        tween.cancel();
        assert!(tween.is_finished());
    }

    #[test]
    fn invalid_deltas_do_not_advance() {
        let mut tween = Tween::new(0.0_f64, 1.0, 100.0);
        tween.advance(-5.0);
        tween.advance(f64::NAN);
        assert_eq!(tween.elapsed(), 0.0);
        assert_eq!(tween.progress(), 0.0);
    }

    #[test]
    fn elastic_value_overshoots_target() {
        let tween = Tween::new(1.8_f64, 1.0, 200.0).with_easing(Easing::ElasticOut);
        // k = 0.2 peaks at 1.25 of the travel
        assert!(tween.value_at(40.0) < 1.0);
        assert_eq!(tween.start(), 1.8);
        assert_eq!(tween.end(), 1.0);
    }
}
