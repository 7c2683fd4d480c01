//! Fixed-step forward search for a self-consistent intercept.
//!
//! Candidate ("guess") times are sampled at `i * time_step`. For each one the
//! predicted target position is projected into the firing plane and solved as
//! a stationary target on the low arm. The first candidate whose flight time
//! has caught up with it (`t_hit <= t_guess`) is the intercept: the projectile
//! arrives no later than the target does.

use aim_core::constants::{DEFAULT_MAX_TIME_S, DEFAULT_TIME_STEP_S};
use aim_core::vector::Vector3;
use aim_predict::TargetPredictor;
use aim_stationary::{AimError, Arm, WeaponSpec, solve_stationary, time_of_flight};
use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

use crate::plane::{FiringPlaneProjector, aim_direction};

/// What to do when a candidate time puts the target out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreachablePolicy {
    /// Give up on the first out-of-range candidate.
    #[default]
    Abort,
    /// Ignore out-of-range candidates and keep stepping towards the horizon.
    Skip,
}

/// Search resolution and horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub time_step: f64,
    pub max_time: f64,
    pub policy: UnreachablePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP_S,
            max_time: DEFAULT_MAX_TIME_S,
            policy: UnreachablePolicy::Abort,
        }
    }
}

impl SearchConfig {
    pub fn new(time_step: f64, max_time: f64) -> Result<Self, InterceptError> {
        let config = Self {
            time_step,
            max_time,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_policy(mut self, policy: UnreachablePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), InterceptError> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(InterceptError::InvalidTimeStep(self.time_step));
        }
        if !self.max_time.is_finite() || self.max_time <= 0.0 {
            return Err(InterceptError::InvalidMaxTime(self.max_time));
        }
        Ok(())
    }

    /// Upper bound on the number of candidate times a search evaluates.
    pub fn max_iterations(&self) -> usize {
        (self.max_time / self.time_step).ceil() as usize
    }
}

/// Precondition violations. Never used for an unreachable target.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InterceptError {
    #[error("invalid solver input: {0}")]
    Solver(#[from] AimError),
    #[error("search time step must be positive and finite (got {0})")]
    InvalidTimeStep(f64),
    #[error("search horizon must be positive and finite (got {0})")]
    InvalidMaxTime(f64),
}

/// A converged intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptSolution<P> {
    /// Elevation above the horizontal, radians.
    pub angle: f64,
    /// Always [`Arm::Low`]; the lofted arm is not searched.
    pub arm: Arm,
    /// Flight time of the projectile to `aim_point`.
    pub time_to_impact: f64,
    /// Predicted target position the shot is aimed at.
    pub aim_point: P,
    /// Candidate time at which the search converged (`time_to_impact <= guess_time`).
    pub guess_time: f64,
    /// Heading of the firing plane at convergence.
    pub bearing: f64,
    /// Number of candidate times evaluated.
    pub iterations: usize,
}

impl<P> InterceptSolution<P> {
    /// World-space unit launch direction (z up).
    pub fn aim_direction(&self) -> Vector3 {
        aim_direction(self.bearing, self.angle)
    }
}

/// Why a search ended without a hit. Serialized as `{"reason": "out_of_range", ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum UnreachableReason {
    /// The target left weapon range at this candidate time (abort policy).
    OutOfRange { guess_time: f64 },
    /// No candidate converged before the horizon.
    HorizonExhausted { max_time: f64, iterations: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterceptOutcome<P> {
    Hit(InterceptSolution<P>),
    Unreachable(UnreachableReason),
}

impl<P> InterceptOutcome<P> {
    pub fn hit(&self) -> Option<&InterceptSolution<P>> {
        match self {
            InterceptOutcome::Hit(solution) => Some(solution),
            InterceptOutcome::Unreachable(_) => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, InterceptOutcome::Hit(_))
    }
}

/// Search for a low-arm intercept of the target described by `predictor`.
///
/// Invalid weapon or search parameters return `Err`; a target that cannot be
/// hit returns `Ok(InterceptOutcome::Unreachable(..))`.
pub fn solve<P, J>(
    predictor: &P,
    weapon: &WeaponSpec,
    projector: &J,
    config: &SearchConfig,
) -> Result<InterceptOutcome<P::Position>, InterceptError>
where
    P: TargetPredictor + ?Sized,
    J: FiringPlaneProjector<P::Position> + ?Sized,
{
    weapon.validate()?;
    config.validate()?;

    let mut iterations = 0usize;
    loop {
        let guess_time = config.time_step * iterations as f64;
        if guess_time >= config.max_time {
            break;
        }
        iterations += 1;

        let target = predictor.predict(guess_time);
        let plane = projector.project(&target);
        let offset = plane.offset();
        let low = solve_stationary(offset, weapon)?.low();
        let hit_time = low.and_then(|aim| {
            time_of_flight(offset, aim.angle, weapon).map(|t_hit| (aim.angle, t_hit))
        });

        let Some((angle, time_to_impact)) = hit_time else {
            match config.policy {
                UnreachablePolicy::Abort => {
                    debug!(
                        "intercept aborted: target out of range at t_guess={guess_time:.4}s \
                         (distance={:.3}, height={:.3})",
                        plane.distance, plane.vertical_offset
                    );
                    return Ok(InterceptOutcome::Unreachable(
                        UnreachableReason::OutOfRange { guess_time },
                    ));
                }
                UnreachablePolicy::Skip => {
                    trace!("t_guess={guess_time:.4}s out of range, skipping");
                    continue;
                }
            }
        };

        trace!(
            "t_guess={guess_time:.4}s angle={:.4}deg t_hit={time_to_impact:.4}s",
            angle.to_degrees()
        );

        if time_to_impact <= guess_time {
            debug!(
                "intercept converged after {iterations} iterations: angle={:.4}deg t_hit={time_to_impact:.4}s",
                angle.to_degrees()
            );
            return Ok(InterceptOutcome::Hit(InterceptSolution {
                angle,
                arm: Arm::Low,
                time_to_impact,
                aim_point: target,
                guess_time,
                bearing: plane.bearing,
                iterations,
            }));
        }
    }

    debug!(
        "intercept horizon of {:.3}s exhausted after {iterations} iterations",
        config.max_time
    );
    Ok(InterceptOutcome::Unreachable(
        UnreachableReason::HorizonExhausted {
            max_time: config.max_time,
            iterations,
        },
    ))
}
