//! Uniform circular motion, an example of a non-linear motion model.

use crate::TargetPredictor;

/// Target circling `center` in the plane spanned by axes 0 and 1.
///
/// In 3D (z up) that is a horizontal circle at the centre's height; in the
/// 2D firing plane it is a loop in the vertical plane. Remaining axes stay
/// at the centre's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularPredictor<const N: usize> {
    pub center: [f64; N],
    pub radius: f64,
    /// Angular rate in rad/s, positive counter-clockwise from axis 0 towards axis 1.
    pub angular_rate: f64,
    /// Angle at `t = 0`, radians.
    pub phase: f64,
}

impl<const N: usize> CircularPredictor<N> {
    pub fn new(center: [f64; N], radius: f64, angular_rate: f64, phase: f64) -> Self {
        const { assert!(N >= 2, "circular motion needs at least two axes") };
        Self {
            center,
            radius,
            angular_rate,
            phase,
        }
    }
}

impl<const N: usize> TargetPredictor for CircularPredictor<N> {
    type Position = [f64; N];

    fn predict(&self, t: f64) -> [f64; N] {
        let (sin, cos) = (self.phase + self.angular_rate * t).sin_cos();
        let mut p = self.center;
        p[0] += self.radius * cos;
        p[1] += self.radius * sin;
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn completes_a_revolution_and_keeps_radius() {
        let circle = CircularPredictor::new([10.0, 20.0, 5.0], 3.0, PI, 0.0);
        let start = circle.predict(0.0);
        let half = circle.predict(1.0);
        let full = circle.predict(2.0);
        assert!((start[0] - 13.0).abs() < 1e-12);
        assert!((half[0] - 7.0).abs() < 1e-12);
        assert!((full[0] - start[0]).abs() < 1e-9 && (full[1] - start[1]).abs() < 1e-9);
        for t in [0.1, 0.7, 1.3] {
            let p = circle.predict(t);
            let r = ((p[0] - 10.0).powi(2) + (p[1] - 20.0).powi(2)).sqrt();
            assert!((r - 3.0).abs() < 1e-12);
            assert_eq!(p[2], 5.0);
        }
    }
}
