use glam::DVec3;

pub trait Interpolatable: Clone + Copy {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn scale(self, factor: f64) -> Self;

    /// `self + (other - self) * t`. `t` is not clamped: easing curves that
    /// overshoot rely on extrapolation.
    fn lerp(self, other: Self, t: f64) -> Self {
        self.add(other.sub(self).scale(t))
    }
}

impl Interpolatable for f64 {
    fn add(self, other: Self) -> Self { self + other }
    fn sub(self, other: Self) -> Self { self - other }
    fn scale(self, factor: f64) -> Self { self * factor }
}

impl Interpolatable for DVec3 {
    fn add(self, other: Self) -> Self { self + other }
    fn sub(self, other: Self) -> Self { self - other }
    fn scale(self, factor: f64) -> Self { self * factor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_extrapolates_past_one() {
        assert_eq!(2.0_f64.lerp(4.0, 0.5), 3.0);
        assert_eq!(2.0_f64.lerp(4.0, 1.5), 5.0);
        let v = DVec3::ONE.lerp(DVec3::new(3.0, 1.0, -1.0), 0.5);
        assert_eq!(v, DVec3::new(2.0, 1.0, 0.0));
    }
}
