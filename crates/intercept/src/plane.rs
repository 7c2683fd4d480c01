//! Reduction of 3D aiming to the vertical firing plane and back.
//!
//! World coordinates are `[x, y, z]` with z up. The firing plane is the
//! vertical plane through the shooter and the target; inside it a position is
//! a horizontal distance plus a vertical offset.

use aim_core::vector::{Vector2, Vector3, sub};
use aim_stationary::PlanarOffset;

/// Target position expressed in the firing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiringPlane {
    /// Horizontal distance from shooter to target, never negative.
    pub distance: f64,
    /// Height of the target above the shooter.
    pub vertical_offset: f64,
    /// Horizontal heading (yaw) from shooter to target, radians from +x towards +y.
    pub bearing: f64,
}

impl FiringPlane {
    pub fn offset(&self) -> PlanarOffset {
        PlanarOffset::new(self.distance, self.vertical_offset)
    }
}

/// Project a world-space target onto the firing plane of `shooter`.
pub fn to_firing_plane(shooter: &Vector3, target: &Vector3) -> FiringPlane {
    let [dx, dy, dz] = sub(target, shooter);
    FiringPlane {
        distance: dx.hypot(dy),
        vertical_offset: dz,
        bearing: dy.atan2(dx),
    }
}

/// Planar variant: points are `[horizontal, vertical]`; the bearing is `0`
/// for targets ahead (+x) and `π` for targets behind.
pub fn to_firing_plane_2d(shooter: &Vector2, target: &Vector2) -> FiringPlane {
    let [dx, dy] = sub(target, shooter);
    FiringPlane {
        distance: dx.abs(),
        vertical_offset: dy,
        bearing: if dx < 0.0 { std::f64::consts::PI } else { 0.0 },
    }
}

/// Unit launch direction from a bearing (yaw) and an elevation (pitch).
pub fn aim_direction(bearing: f64, elevation: f64) -> Vector3 {
    let (sin_b, cos_b) = bearing.sin_cos();
    let (sin_e, cos_e) = elevation.sin_cos();
    [cos_e * cos_b, cos_e * sin_b, sin_e]
}

/// Lift a firing-plane point `[horizontal, vertical]` back into world space.
pub fn to_world(shooter: &Vector3, bearing: f64, planar: [f64; 2]) -> Vector3 {
    let (sin_b, cos_b) = bearing.sin_cos();
    [
        shooter[0] + planar[0] * cos_b,
        shooter[1] + planar[0] * sin_b,
        shooter[2] + planar[1],
    ]
}

/// Maps a predicted target position into the shooter's firing plane.
///
/// The intercept search calls this once per candidate time, so the bearing
/// follows a target that moves sideways.
pub trait FiringPlaneProjector<P> {
    fn project(&self, target: &P) -> FiringPlane;
}

/// Shooter position for planar problems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shooter2d(pub Vector2);

impl FiringPlaneProjector<Vector2> for Shooter2d {
    fn project(&self, target: &Vector2) -> FiringPlane {
        to_firing_plane_2d(&self.0, target)
    }
}

/// Shooter position for world-space problems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shooter3d(pub Vector3);

impl FiringPlaneProjector<Vector3> for Shooter3d {
    fn project(&self, target: &Vector3) -> FiringPlane {
        to_firing_plane(&self.0, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aim_core::vector::norm;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn projection_splits_horizontal_and_vertical() {
        let plane = to_firing_plane(&[1.0, 1.0, 2.0], &[4.0, 5.0, -1.0]);
        assert!((plane.distance - 5.0).abs() < 1e-12);
        assert!((plane.vertical_offset + 3.0).abs() < 1e-12);
        assert!((plane.bearing - 4.0_f64.atan2(3.0)).abs() < 1e-12);
    }

    #[test]
    fn planar_projection_reports_targets_behind() {
        let ahead = to_firing_plane_2d(&[10.0, 0.0], &[25.0, 3.0]);
        assert_eq!(ahead.distance, 15.0);
        assert_eq!(ahead.bearing, 0.0);
        let behind = to_firing_plane_2d(&[10.0, 0.0], &[4.0, -2.0]);
        assert_eq!(behind.distance, 6.0);
        assert_eq!(behind.vertical_offset, -2.0);
        assert_eq!(behind.bearing, std::f64::consts::PI);
    }

    #[test]
    fn aim_direction_is_unit_and_oriented() {
        let d = aim_direction(FRAC_PI_2, FRAC_PI_4);
        assert!((norm(&d) - 1.0).abs() < 1e-12);
        assert!(d[0].abs() < 1e-12);
        assert!((d[1] - d[2]).abs() < 1e-12);
    }

    #[test]
    fn to_world_inverts_projection() {
        let shooter = [3.0, -2.0, 1.0];
        let target = [-7.0, 6.0, 9.5];
        let plane = to_firing_plane(&shooter, &target);
        let back = to_world(
            &shooter,
            plane.bearing,
            [plane.distance, plane.vertical_offset],
        );
        for i in 0..3 {
            assert!((back[i] - target[i]).abs() < 1e-9);
        }
    }
}
