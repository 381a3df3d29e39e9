//! Property-based tests for the rocket physics and predictor.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::physics::{resolve_surface_contact, step_rocket};
use crate::prediction::{predict_ballistic, MAX_POINTS};
use crate::rocket::RocketControls;
use crate::terrain;
use crate::test_utils::fixtures;
use crate::types::{SimulationTime, TIME_SCALE_MAX, TIME_SCALE_MIN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The predictor is a pure function: identical inputs, identical paths,
    /// bit for bit.
    #[test]
    fn prop_prediction_is_deterministic(
        px in -1.0e8f64..1.0e8,
        py in 2.0e7f64..1.0e8,
        vx in -5.0e3f64..5.0e3,
        vy in -5.0e3f64..5.0e3,
        t0 in 0.0f64..1.0e6,
        horizon in 0.0f64..20_000.0,
    ) {
        let configs = fixtures::planet_with_moon();
        let pos = DVec2::new(px, py);
        let vel = DVec2::new(vx, vy);
        let a = predict_ballistic(pos, vel, &configs, t0, horizon, 0.5);
        let b = predict_ballistic(pos, vel, &configs, t0, horizon, 0.5);
        prop_assert_eq!(a, b);
    }

    /// Output size is bounded for any horizon and step.
    #[test]
    fn prop_prediction_is_bounded(
        horizon in 0.0f64..1.0e9,
        base_dt in 0.01f64..100.0,
    ) {
        let configs = fixtures::lone_planet();
        let pos = DVec2::new(0.0, fixtures::PLANET_RADIUS * 30.0);
        let vel = DVec2::new(fixtures::circular_speed(fixtures::PLANET_RADIUS * 30.0), 0.0);
        let path = predict_ballistic(pos, vel, &configs, 0.0, horizon, base_dt);
        prop_assert!(path.len() <= MAX_POINTS);
    }

    /// Throttle stays in [0, 1] under any sequence of held controls.
    #[test]
    fn prop_throttle_stays_clamped(
        flags in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..60),
        dt_real in 0.001f64..0.5,
    ) {
        let registry = fixtures::lone_planet_registry();
        let mut rocket = fixtures::rocket_high_above(&registry);
        for (up, down) in flags {
            let controls = RocketControls {
                thrust_up: up,
                thrust_down: down,
                ..Default::default()
            };
            step_rocket(&mut rocket, &controls, &registry, 1.0, dt_real);
            prop_assert!((0.0..=1.0).contains(&rocket.throttle));
        }
    }

    /// Any sequence of multiplies and assignments keeps the time scale in
    /// the legal range.
    #[test]
    fn prop_time_scale_stays_clamped(
        ops in proptest::collection::vec((any::<bool>(), 0.01f64..2000.0), 1..40),
    ) {
        let mut time = SimulationTime::default();
        for (multiply, value) in ops {
            if multiply {
                time.scale_by(value);
            } else {
                time.set_scale(value);
            }
            prop_assert!((TIME_SCALE_MIN..=TIME_SCALE_MAX).contains(&time.scale));
        }
    }

    /// Contact resolution never leaves the rocket below the surface, and
    /// never leaves inward ground-relative radial motion.
    #[test]
    fn prop_contact_resolution_is_sound(
        angle in 0.0f64..std::f64::consts::TAU,
        depth in 0.0f64..5.0e4,
        vx in -500.0f64..500.0,
        vy in -500.0f64..500.0,
        throttle in 0.0f64..1.0,
    ) {
        let registry = fixtures::bumpy_planet_registry();
        let body = registry.get(0);
        let dir = DVec2::new(angle.cos(), angle.sin());
        let mut pos = body.center + dir * (body.config.radius - depth);
        let mut vel = DVec2::new(vx, vy);

        resolve_surface_contact(&mut pos, &mut vel, throttle, body);

        let dist = pos.distance(body.center);
        let surface = terrain::surface_radius(body.config, body.center, pos);
        prop_assert!(
            dist >= surface - 1.0e-6,
            "still {} m below the surface",
            surface - dist
        );

        let normal = (pos - body.center) / dist;
        let ground_radial = (vel - body.center_vel).dot(normal);
        prop_assert!(ground_radial >= -1.0e-9, "inward radial speed {}", ground_radial);
    }

    /// A parked rocket stays exactly parked through repeated idle ticks.
    #[test]
    fn prop_rest_state_is_stable(ticks in 1usize..50, dt_real in 0.001f64..0.1) {
        let mut registry = fixtures::lone_planet_registry();
        let mut sim_time = SimulationTime::default();
        let mut rocket = fixtures::rocket_resting_on(&registry, 0);
        let home = rocket.pos;
        let controls = RocketControls::default();

        for _ in 0..ticks {
            sim_time.advance(dt_real);
            registry.refresh(sim_time.current);
            step_rocket(&mut rocket, &controls, &registry, sim_time.scale, dt_real);
            prop_assert_eq!(rocket.pos, home);
            prop_assert_eq!(rocket.vel, DVec2::ZERO);
        }
    }
}

mod regressions {
    use super::*;

    /// A sample point almost exactly at the body center stays finite. The
    /// radial floor only guards the division; the degenerate clamp is not
    /// required to land on the surface.
    #[test]
    fn center_penetration_resolves_finite() {
        let registry = fixtures::lone_planet_registry();
        let body = registry.get(0);
        let mut pos = body.center + DVec2::new(0.0, 1.0e-9);
        let mut vel = DVec2::ZERO;
        resolve_surface_contact(&mut pos, &mut vel, 0.0, body);
        assert!(pos.x.is_finite() && pos.y.is_finite());
        assert!(vel.x.is_finite() && vel.y.is_finite());
    }
}
