//! Stationary aim utilities: closed-form firing angles and parabolic flight helpers.

pub mod solver;
pub mod trajectory;
pub mod weapon;

pub use solver::{AimSolution, Arm, PlanarOffset, StationaryAim, solve as solve_stationary};
pub use trajectory::{
    TrajectorySample, apex_height, sample_trajectory, time_of_flight, trajectory_point,
    travel_time, vertical_travel_time,
};
pub use weapon::{AimError, WeaponSpec};
