//! Closed-form solution of the ballistic range equation for a fixed target.
//!
//! For a target at horizontal distance `x` and height `y` relative to the
//! muzzle, the launch angles that pass through it satisfy
//!
//! ```text
//! tan(theta) = (v0^2 -/+ sqrt(v0^4 - g (g x^2 + 2 y v0^2))) / (g x)
//! ```
//!
//! The minus branch is the flat (low) arc, the plus branch the lofted (high) arc.

use std::f64::consts::FRAC_PI_2;

use serde::Serialize;

use crate::weapon::{AimError, WeaponSpec};

/// Target position relative to the shooter inside the firing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarOffset {
    /// Horizontal distance. The solver uses its magnitude.
    pub x: f64,
    /// Signed vertical offset, positive above the muzzle.
    pub y: f64,
}

impl PlanarOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which of the two ballistic arcs a solution belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    /// Flatter trajectory, arrives first.
    Low,
    /// Lofted, mortar-like trajectory.
    High,
}

/// A launch angle (radians above the horizontal) tagged with its arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSolution {
    pub angle: f64,
    pub arm: Arm,
}

/// Outcome of a stationary solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StationaryAim {
    /// No launch angle reaches the target with this speed and gravity.
    Unreachable,
    /// Exactly one trajectory: tangent case, zero gravity, or a vertical shot.
    Single(f64),
    /// Two distinct trajectories, `|low| <= |high|`.
    Dual { low: f64, high: f64 },
}

impl StationaryAim {
    /// The low arm, if the target is reachable.
    pub fn low(&self) -> Option<AimSolution> {
        match *self {
            StationaryAim::Unreachable => None,
            StationaryAim::Single(angle) | StationaryAim::Dual { low: angle, .. } => {
                Some(AimSolution {
                    angle,
                    arm: Arm::Low,
                })
            }
        }
    }

    /// The high arm. Coincides with the low arm for single solutions.
    pub fn high(&self) -> Option<AimSolution> {
        match *self {
            StationaryAim::Unreachable => None,
            StationaryAim::Single(angle) | StationaryAim::Dual { high: angle, .. } => {
                Some(AimSolution {
                    angle,
                    arm: Arm::High,
                })
            }
        }
    }

    /// Look up a solution by arm.
    pub fn arm(&self, arm: Arm) -> Option<AimSolution> {
        match arm {
            Arm::Low => self.low(),
            Arm::High => self.high(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !matches!(self, StationaryAim::Unreachable)
    }
}

/// Solve for the launch angles that hit a fixed target.
///
/// Returns `Err` only for invalid inputs; an out-of-range target yields
/// `Ok(StationaryAim::Unreachable)`.
pub fn solve(offset: PlanarOffset, weapon: &WeaponSpec) -> Result<StationaryAim, AimError> {
    weapon.validate()?;
    if !offset.x.is_finite() || !offset.y.is_finite() {
        return Err(AimError::NonFiniteTarget {
            x: offset.x,
            y: offset.y,
        });
    }

    let x = offset.x.abs();
    let y = offset.y;
    let v0 = weapon.muzzle_speed;
    let g = weapon.gravity;
    let v0_sq = v0 * v0;

    // Without gravity the projectile flies straight at the target.
    if g == 0.0 {
        return Ok(StationaryAim::Single(y.atan2(x)));
    }

    if x == 0.0 {
        return Ok(solve_vertical(y, v0_sq, g));
    }

    let discriminant = v0_sq * v0_sq - g * (g * x * x + 2.0 * y * v0_sq);
    if discriminant < 0.0 {
        return Ok(StationaryAim::Unreachable);
    }
    if discriminant == 0.0 {
        return Ok(StationaryAim::Single(v0_sq.atan2(g * x)));
    }

    let root = discriminant.sqrt();
    let low = (v0_sq - root).atan2(g * x);
    let high = (v0_sq + root).atan2(g * x);
    Ok(StationaryAim::Dual { low, high })
}

fn solve_vertical(y: f64, v0_sq: f64, g: f64) -> StationaryAim {
    if y > 0.0 {
        // Apex of a vertical shot is v0^2 / (2 g).
        if v0_sq >= 2.0 * g * y {
            StationaryAim::Single(FRAC_PI_2)
        } else {
            StationaryAim::Unreachable
        }
    } else if y < 0.0 {
        StationaryAim::Single(-FRAC_PI_2)
    } else {
        StationaryAim::Single(0.0)
    }
}
