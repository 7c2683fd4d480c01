//! Flight-time and sampling helpers for the drag-free parabola `(angle, v0, g)`.

use aim_core::constants::VERTICAL_COS_EPSILON;

use crate::solver::PlanarOffset;
use crate::weapon::WeaponSpec;

/// Time for a projectile launched at `angle` to cover horizontal distance `x`.
///
/// Gravity does not enter: horizontal speed is constant. Returns `None` when
/// the shot makes no horizontal progress (`cos(angle)` is zero or negative).
pub fn travel_time(x: f64, angle: f64, v0: f64) -> Option<f64> {
    let cos = angle.cos();
    if cos <= VERTICAL_COS_EPSILON {
        return None;
    }
    Some(x.abs() / (cos * v0))
}

/// First arrival time at height `y` for a shot fired straight up or down.
///
/// Returns `None` when an upward shot cannot climb that high.
pub fn vertical_travel_time(y: f64, weapon: &WeaponSpec) -> Option<f64> {
    let v0 = weapon.muzzle_speed;
    let g = weapon.gravity;
    if y == 0.0 {
        return Some(0.0);
    }
    if g == 0.0 {
        return Some(y.abs() / v0);
    }
    if y > 0.0 {
        // y = v0 t - g t^2 / 2, earlier root.
        let discriminant = v0 * v0 - 2.0 * g * y;
        if discriminant < 0.0 {
            return None;
        }
        Some((v0 - discriminant.sqrt()) / g)
    } else {
        // |y| = v0 t + g t^2 / 2
        let discriminant = v0 * v0 + 2.0 * g * y.abs();
        Some((discriminant.sqrt() - v0) / g)
    }
}

/// Flight time to `offset` along `angle`, covering the vertical-shot case.
pub fn time_of_flight(offset: PlanarOffset, angle: f64, weapon: &WeaponSpec) -> Option<f64> {
    if offset.x == 0.0 {
        vertical_travel_time(offset.y, weapon)
    } else {
        travel_time(offset.x, angle, weapon.muzzle_speed)
    }
}

/// Position `[horizontal, vertical]` of the projectile `t` seconds after launch.
pub fn trajectory_point(angle: f64, weapon: &WeaponSpec, t: f64) -> [f64; 2] {
    let (sin, cos) = angle.sin_cos();
    let v0 = weapon.muzzle_speed;
    [
        v0 * cos * t,
        v0 * sin * t - 0.5 * weapon.gravity * t * t,
    ]
}

/// Peak height above the muzzle. Infinite for upward shots without gravity.
pub fn apex_height(angle: f64, weapon: &WeaponSpec) -> f64 {
    let vy = weapon.muzzle_speed * angle.sin();
    if vy <= 0.0 {
        return 0.0;
    }
    if weapon.gravity == 0.0 {
        return f64::INFINITY;
    }
    vy * vy / (2.0 * weapon.gravity)
}

/// One point of a sampled trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x: f64,
    pub y: f64,
}

/// Evenly spaced samples over `[0, duration_s]`, both ends included.
pub fn sample_trajectory(
    angle: f64,
    weapon: &WeaponSpec,
    duration_s: f64,
    samples: usize,
) -> Vec<TrajectorySample> {
    let intervals = samples.max(1);
    let duration = duration_s.max(0.0);
    (0..=intervals)
        .map(|i| {
            let t = duration * i as f64 / intervals as f64;
            let [x, y] = trajectory_point(angle, weapon, t);
            TrajectorySample { time_s: t, x, y }
        })
        .collect()
}
