//! Shared fixtures for flight simulation tests.

use bevy::math::DVec2;

use crate::bodies::data::{BodyConfig, BodyId, OrbitMode};
use crate::bodies::BodyRegistry;
use crate::rocket::Rocket;

/// Fixtures for building small test systems.
pub mod fixtures {
    use super::*;

    /// Earth-sized test planet.
    pub const PLANET_RADIUS: f64 = 6.371e6;
    pub const PLANET_MU: f64 = 3.986004418e14;

    /// Moon-sized test satellite.
    pub const MOON_RADIUS: f64 = 1.7374e6;
    pub const MOON_MU: f64 = 4.9048695e12;

    /// Circular-orbit speed at distance `r` around the test planet.
    pub fn circular_speed(r: f64) -> f64 {
        (PLANET_MU / r).sqrt()
    }

    /// One fixed, airless, perfectly spherical planet at the origin.
    pub fn lone_planet() -> Vec<BodyConfig> {
        vec![BodyConfig::new(
            BodyId::Earth,
            PLANET_RADIUS,
            PLANET_MU,
            OrbitMode::Fixed { pos: DVec2::ZERO },
        )]
    }

    /// One fixed planet with pronounced terrain.
    pub fn bumpy_planet() -> Vec<BodyConfig> {
        vec![BodyConfig::new(
            BodyId::Mars,
            PLANET_RADIUS,
            PLANET_MU,
            OrbitMode::Fixed { pos: DVec2::ZERO },
        )
        .with_terrain(1200.0, 8000.0)]
    }

    /// Fixed planet plus a moon on circular rails at a lunar distance.
    /// The rate matches the planet's gravity, so a free-falling companion
    /// roughly keeps station with the moon.
    pub fn planet_with_moon() -> Vec<BodyConfig> {
        let a = 3.844e8;
        let omega = (PLANET_MU / (a * a * a)).sqrt();
        vec![
            BodyConfig::new(
                BodyId::Earth,
                PLANET_RADIUS,
                PLANET_MU,
                OrbitMode::Fixed { pos: DVec2::ZERO },
            ),
            BodyConfig::new(
                BodyId::Moon,
                MOON_RADIUS,
                MOON_MU,
                OrbitMode::Rails {
                    parent: 0,
                    semi_major: a,
                    semi_minor: a,
                    angular_rate: omega,
                    phase: 0.0,
                },
            ),
        ]
    }

    pub fn lone_planet_registry() -> BodyRegistry {
        BodyRegistry::new(lone_planet()).unwrap()
    }

    pub fn bumpy_planet_registry() -> BodyRegistry {
        BodyRegistry::new(bumpy_planet()).unwrap()
    }

    /// Rocket parked on body `index`'s surface, straight above its center.
    pub fn rocket_resting_on(registry: &BodyRegistry, index: usize) -> Rocket {
        let mut rocket = Rocket::default();
        rocket.place_on(registry.get(index));
        rocket
    }

    /// Rocket floating far above the first body, at rest, engine idle.
    pub fn rocket_high_above(registry: &BodyRegistry) -> Rocket {
        let body = registry.get(0);
        Rocket {
            pos: body.center + DVec2::new(0.0, body.config.radius * 3.0),
            vel: body.center_vel,
            ..Default::default()
        }
    }
}
