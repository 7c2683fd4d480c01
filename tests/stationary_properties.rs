use ballistic_aim::stationary::{
    PlanarOffset, WeaponSpec, solve_stationary, trajectory_point, travel_time,
};
use proptest::prelude::*;

fn discriminant(x: f64, y: f64, v0: f64, g: f64) -> f64 {
    let v0_sq = v0 * v0;
    v0_sq * v0_sq - g * (g * x * x + 2.0 * y * v0_sq)
}

proptest! {
    /// Property: every returned arc lands on the target.
    #[test]
    fn prop_reachable_arcs_land_on_target(
        x in 1.0f64..1_000.0,
        y in -500.0f64..500.0,
        v0 in 10.0f64..500.0,
        g in 1.0f64..100.0,
    ) {
        prop_assume!(discriminant(x, y, v0, g) >= 0.0);
        let weapon = WeaponSpec::new(v0, g).unwrap();
        let aim = solve_stationary(PlanarOffset::new(x, y), &weapon).unwrap();
        prop_assert!(aim.is_reachable());

        let scale = v0 * v0 / g + x + y.abs();
        for solution in [aim.low().unwrap(), aim.high().unwrap()] {
            let t = travel_time(x, solution.angle, v0).unwrap();
            let [px, py] = trajectory_point(solution.angle, &weapon, t);
            prop_assert!((px - x).abs() <= 1e-7 * scale, "x {} vs {}", px, x);
            prop_assert!((py - y).abs() <= 1e-7 * scale, "y {} vs {}", py, y);
        }
    }

    /// Property: a negative discriminant leaves both arms empty.
    #[test]
    fn prop_negative_discriminant_is_unreachable(
        x in 1.0f64..5_000.0,
        y in -500.0f64..500.0,
        v0 in 10.0f64..300.0,
        g in 1.0f64..100.0,
    ) {
        prop_assume!(discriminant(x, y, v0, g) < 0.0);
        let weapon = WeaponSpec::new(v0, g).unwrap();
        let aim = solve_stationary(PlanarOffset::new(x, y), &weapon).unwrap();
        prop_assert!(aim.low().is_none());
        prop_assert!(aim.high().is_none());
    }

    /// Property: the low arm never has a larger angle magnitude than the high arm.
    #[test]
    fn prop_low_arm_is_flatter(
        x in 0.1f64..2_000.0,
        y in -1_000.0f64..1_000.0,
        v0 in 1.0f64..1_000.0,
        g in 0.0f64..100.0,
    ) {
        let weapon = WeaponSpec::new(v0, g).unwrap();
        let aim = solve_stationary(PlanarOffset::new(x, y), &weapon).unwrap();
        if let (Some(low), Some(high)) = (aim.low(), aim.high()) {
            prop_assert!(low.angle.abs() <= high.angle.abs());
        }
    }

    /// Property: travel time grows strictly with horizontal distance.
    #[test]
    fn prop_travel_time_increases_with_distance(
        x in 0.0f64..1_000.0,
        dx in 0.001f64..1_000.0,
        angle in -1.5f64..1.5,
        v0 in 1.0f64..1_000.0,
    ) {
        let near = travel_time(x, angle, v0).unwrap();
        let far = travel_time(x + dx, angle, v0).unwrap();
        prop_assert!(far > near);
    }

    /// Property: without gravity the aim is the line of sight.
    #[test]
    fn prop_zero_gravity_is_line_of_sight(
        x in 0.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        v0 in 1.0f64..1_000.0,
    ) {
        let weapon = WeaponSpec::new(v0, 0.0).unwrap();
        let aim = solve_stationary(PlanarOffset::new(x, y), &weapon).unwrap();
        let low = aim.low().unwrap();
        let high = aim.high().unwrap();
        prop_assert_eq!(low.angle, y.atan2(x));
        prop_assert_eq!(low.angle, high.angle);
    }
}
