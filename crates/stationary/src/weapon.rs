use serde::Serialize;
use thiserror::Error;

/// Errors raised when solver inputs violate their preconditions.
///
/// An out-of-range target is not an error; it is reported through
/// [`crate::StationaryAim::Unreachable`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AimError {
    #[error("muzzle speed must be positive and finite (got {0})")]
    InvalidMuzzleSpeed(f64),
    #[error("projectile gravity must be non-negative and finite (got {0})")]
    InvalidGravity(f64),
    #[error("target offset must be finite (got x={x}, y={y})")]
    NonFiniteTarget { x: f64, y: f64 },
}

/// Projectile launch parameters, fixed for the duration of a solve.
///
/// `gravity` is the projectile's own constant and may differ from whatever
/// gravity the caller applies to characters or targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeaponSpec {
    pub muzzle_speed: f64,
    pub gravity: f64,
}

impl WeaponSpec {
    /// Build a validated weapon description.
    pub fn new(muzzle_speed: f64, gravity: f64) -> Result<Self, AimError> {
        let weapon = Self {
            muzzle_speed,
            gravity,
        };
        weapon.validate()?;
        Ok(weapon)
    }

    /// Check the invariants `muzzle_speed > 0` and `gravity >= 0`.
    pub fn validate(&self) -> Result<(), AimError> {
        if !self.muzzle_speed.is_finite() || self.muzzle_speed <= 0.0 {
            return Err(AimError::InvalidMuzzleSpeed(self.muzzle_speed));
        }
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(AimError::InvalidGravity(self.gravity));
        }
        Ok(())
    }

    /// Flat-ground range at 45 degrees, `v0^2 / g`. Infinite without gravity.
    pub fn max_flat_range(&self) -> f64 {
        if self.gravity == 0.0 {
            f64::INFINITY
        } else {
            self.muzzle_speed * self.muzzle_speed / self.gravity
        }
    }
}
