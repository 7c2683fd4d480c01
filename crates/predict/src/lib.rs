//! Target motion prediction.
//!
//! A predictor maps elapsed time since a frozen snapshot to the position the
//! target is expected to occupy. The intercept search only ever calls
//! [`TargetPredictor::predict`]; it makes no assumption about linearity or
//! smoothness of the motion, so new motion models are added by implementing
//! the trait.

use std::fmt::Debug;

pub mod circular;
pub mod kinematic;

pub use circular::CircularPredictor;
pub use kinematic::{BallisticPredictor, LinearPredictor, TargetState};

/// Capability: where will the target be `t` seconds after the snapshot?
///
/// Implementations must be pure and deterministic in `t` and defined for any
/// `t >= 0` the caller searches over.
pub trait TargetPredictor {
    type Position: Copy + Debug;

    fn predict(&self, t: f64) -> Self::Position;
}

impl<P: TargetPredictor + ?Sized> TargetPredictor for &P {
    type Position = P::Position;

    fn predict(&self, t: f64) -> Self::Position {
        (**self).predict(t)
    }
}

impl<P: TargetPredictor + ?Sized> TargetPredictor for Box<P> {
    type Position = P::Position;

    fn predict(&self, t: f64) -> Self::Position {
        (**self).predict(t)
    }
}

/// Adapter turning a closure into a predictor (scripted or recorded paths).
#[derive(Clone, Copy)]
pub struct FnPredictor<F>(pub F);

impl<F, P> TargetPredictor for FnPredictor<F>
where
    F: Fn(f64) -> P,
    P: Copy + Debug,
{
    type Position = P;

    fn predict(&self, t: f64) -> P {
        (self.0)(t)
    }
}

impl<F> Debug for FnPredictor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnPredictor(..)")
    }
}

/// A target that never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stationary<const N: usize>(pub [f64; N]);

impl<const N: usize> TargetPredictor for Stationary<N> {
    type Position = [f64; N];

    fn predict(&self, _t: f64) -> [f64; N] {
        self.0
    }
}
