//! Property-based tests for on-rails propagation.
//!
//! These verify structural properties of the closed-form orbits across a
//! wide range of configurations: periodicity, parent composition, and
//! velocity being the true derivative of position.

use bevy::math::DVec2;
use proptest::prelude::*;
use std::f64::consts::TAU;

use super::data::{BodyConfig, BodyId, OrbitMode};
use super::rails::{nearest_index_at, state_at};

fn system(a: f64, axis_ratio: f64, omega: f64, phase: f64) -> Vec<BodyConfig> {
    vec![
        BodyConfig::new(
            BodyId::Sun,
            6.9634e8,
            1.32712440018e20,
            OrbitMode::Fixed { pos: DVec2::ZERO },
        ),
        BodyConfig::new(
            BodyId::Earth,
            6.371e6,
            3.986004418e14,
            OrbitMode::Rails {
                parent: 0,
                semi_major: a,
                semi_minor: a * axis_ratio,
                angular_rate: omega,
                phase,
            },
        ),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// One full period brings an orbiter back to where it was.
    #[test]
    fn prop_orbit_is_periodic(
        a in 1.0e7f64..1.0e11,
        axis_ratio in 0.5f64..1.0,
        omega in 1.0e-7f64..1.0e-3,
        phase in 0.0f64..TAU,
        t in 0.0f64..1.0e7,
    ) {
        let configs = system(a, axis_ratio, omega, phase);
        let period = configs[1].orbit_period().unwrap();

        let now = state_at(&configs, 1, t);
        let later = state_at(&configs, 1, t + period);

        let err = now.pos.distance(later.pos);
        prop_assert!(
            err <= a * 1.0e-6,
            "period {} failed to close: drift {} m on a {} m orbit",
            period, err, a
        );
    }

    /// Rails velocity matches the central finite difference of position.
    #[test]
    fn prop_velocity_is_position_derivative(
        a in 1.0e7f64..1.0e11,
        axis_ratio in 0.5f64..1.0,
        omega in 1.0e-6f64..1.0e-3,
        phase in 0.0f64..TAU,
        t in 0.0f64..1.0e6,
    ) {
        let configs = system(a, axis_ratio, omega, phase);
        // Small fraction of a radian per probe step
        let h = 1.0e-3 / omega;

        let before = state_at(&configs, 1, t - h);
        let now = state_at(&configs, 1, t);
        let after = state_at(&configs, 1, t + h);

        let numeric = (after.pos - before.pos) / (2.0 * h);
        let speed_scale = a * omega;
        prop_assert!(
            now.vel.distance(numeric) <= speed_scale * 1.0e-4 + 1.0e-9,
            "analytic {:?} vs numeric {:?}",
            now.vel, numeric
        );
    }

    /// A child's offset from its parent is periodic in the child's own
    /// period even while the parent keeps moving.
    #[test]
    fn prop_child_offset_is_periodic(
        parent_omega in 1.0e-7f64..1.0e-5,
        child_omega in 1.0e-5f64..1.0e-3,
        t in 0.0f64..1.0e6,
    ) {
        let mut configs = system(1.0e11, 1.0, parent_omega, 0.0);
        configs.push(BodyConfig::new(
            BodyId::Moon,
            1.7374e6,
            4.9048695e12,
            OrbitMode::Rails {
                parent: 1,
                semi_major: 3.844e8,
                semi_minor: 3.844e8,
                angular_rate: child_omega,
                phase: 0.0,
            },
        ));
        let child_period = configs[2].orbit_period().unwrap();

        let offset_now = state_at(&configs, 2, t).pos - state_at(&configs, 1, t).pos;
        let offset_later =
            state_at(&configs, 2, t + child_period).pos - state_at(&configs, 1, t + child_period).pos;

        prop_assert!(
            offset_now.distance(offset_later) <= 3.844e8 * 1.0e-6,
            "moon offset drifted {} m over one lunar period",
            offset_now.distance(offset_later)
        );
    }

    /// Nearest lookup always returns a valid index and is stable for the
    /// same inputs.
    #[test]
    fn prop_nearest_is_valid_and_stable(
        x in -1.0e12f64..1.0e12,
        y in -1.0e12f64..1.0e12,
        t in 0.0f64..1.0e8,
    ) {
        let configs = super::data::solar_system();
        let pos = DVec2::new(x, y);
        let first = nearest_index_at(&configs, pos, t);
        let second = nearest_index_at(&configs, pos, t);
        prop_assert!(first < configs.len());
        prop_assert_eq!(first, second);
    }
}
