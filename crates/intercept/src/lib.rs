//! Moving-target intercept: drives the stationary solver against a target
//! predictor and handles the reduction of world-space aiming to the firing plane.

pub mod plane;
pub mod search;

use aim_core::vector::{Vector2, Vector3};
use aim_predict::TargetPredictor;
use aim_stationary::WeaponSpec;

pub use plane::{
    FiringPlane, FiringPlaneProjector, Shooter2d, Shooter3d, aim_direction, to_firing_plane,
    to_firing_plane_2d, to_world,
};
pub use search::{
    InterceptError, InterceptOutcome, InterceptSolution, SearchConfig, UnreachablePolicy,
    UnreachableReason, solve as solve_intercept,
};

/// Intercept for a target moving in the shooter's vertical plane.
pub fn solve_intercept_2d<P>(
    predictor: &P,
    weapon: &WeaponSpec,
    shooter: Vector2,
    config: &SearchConfig,
) -> Result<InterceptOutcome<Vector2>, InterceptError>
where
    P: TargetPredictor<Position = Vector2> + ?Sized,
{
    search::solve(predictor, weapon, &Shooter2d(shooter), config)
}

/// Intercept for a target moving in world space (z up).
pub fn solve_intercept_3d<P>(
    predictor: &P,
    weapon: &WeaponSpec,
    shooter: Vector3,
    config: &SearchConfig,
) -> Result<InterceptOutcome<Vector3>, InterceptError>
where
    P: TargetPredictor<Position = Vector3> + ?Sized,
{
    search::solve(predictor, weapon, &Shooter3d(shooter), config)
}
