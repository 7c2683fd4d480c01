//! Constant-velocity and constant-acceleration target motion.

use aim_core::vector::{add, scale, up_axis};

use crate::TargetPredictor;

/// Caller-owned snapshot of a target's kinematic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetState<const N: usize> {
    pub position: [f64; N],
    pub velocity: [f64; N],
}

impl<const N: usize> TargetState<N> {
    pub fn new(position: [f64; N], velocity: [f64; N]) -> Self {
        Self { position, velocity }
    }

    /// Freeze the snapshot into a constant-velocity predictor.
    pub fn linear(&self) -> LinearPredictor<N> {
        LinearPredictor {
            position: self.position,
            velocity: self.velocity,
        }
    }

    /// Freeze the snapshot into a predictor that also falls under `target_gravity`.
    pub fn ballistic(&self, target_gravity: f64) -> BallisticPredictor<N> {
        BallisticPredictor {
            position: self.position,
            velocity: self.velocity,
            target_gravity,
        }
    }
}

/// `position(t) = p0 + v0 * t`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPredictor<const N: usize> {
    pub position: [f64; N],
    pub velocity: [f64; N],
}

impl<const N: usize> TargetPredictor for LinearPredictor<N> {
    type Position = [f64; N];

    fn predict(&self, t: f64) -> [f64; N] {
        add(&self.position, &scale(&self.velocity, t))
    }
}

/// `position(t) = p0 + v0 * t - 0.5 * target_gravity * t^2` on the vertical axis.
///
/// `target_gravity` belongs to the target and is unrelated to the weapon's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticPredictor<const N: usize> {
    pub position: [f64; N],
    pub velocity: [f64; N],
    pub target_gravity: f64,
}

impl<const N: usize> TargetPredictor for BallisticPredictor<N> {
    type Position = [f64; N];

    fn predict(&self, t: f64) -> [f64; N] {
        let mut p = add(&self.position, &scale(&self.velocity, t));
        p[up_axis::<N>()] -= 0.5 * self.target_gravity * t * t;
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_prediction_advances_with_velocity() {
        let state = TargetState::new([1.0, 2.0, 3.0], [0.5, -1.0, 2.0]);
        assert_eq!(state.linear().predict(0.0), [1.0, 2.0, 3.0]);
        assert_eq!(state.linear().predict(2.0), [2.0, 0.0, 7.0]);
    }

    #[test]
    fn ballistic_prediction_only_drops_vertical_axis() {
        let predictor = TargetState::new([450.0, 0.0], [100.0, 100.0]).ballistic(20.0);
        let [x, y] = predictor.predict(1.0);
        assert_eq!(x, 550.0);
        assert_eq!(y, 90.0);
    }
}
