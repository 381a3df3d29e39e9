//! Flight readouts for the HUD layer.
//!
//! Pure queries over the live state: everything here is derived, nothing is
//! stored. The embedding UI calls [`flight_readout`] once per frame.

use bevy::math::DVec2;

use crate::bodies::{BodyId, BodyRegistry};
use crate::physics::field_strength;
use crate::rocket::Rocket;
use crate::terrain;

/// Instantaneous flight metrics against the nearest body.
#[derive(Clone, Copy, Debug)]
pub struct FlightReadout {
    /// Body the local metrics are measured against
    pub nearest: BodyId,
    /// Height above the local terrain-aware surface, clamped ≥ 0 (m)
    pub altitude: f64,
    /// Descent rate: positive when moving toward the body (m/s)
    pub descent_speed: f64,
    /// Velocity along the local horizon (m/s)
    pub tangential_speed: f64,
    /// Net gravitational field strength at the rocket (m/s²)
    pub local_gravity: f64,
}

/// Compute the readout for the current tick.
///
/// The radial/tangential split uses the nearest body's current center;
/// speeds are world-frame (not ground-relative), matching what a surface
/// observer would read off a tracking display.
pub fn flight_readout(rocket: &Rocket, registry: &BodyRegistry) -> FlightReadout {
    let body = registry.nearest(rocket.pos);
    let offset = rocket.pos - body.center;
    let r = offset.length();
    let radial = offset / r.max(1e-9);
    let tangent = DVec2::new(-radial.y, radial.x);

    let surface = terrain::surface_radius(body.config, body.center, rocket.pos);

    FlightReadout {
        nearest: body.config.id,
        altitude: (r - surface).max(0.0),
        descent_speed: -rocket.vel.dot(radial),
        tangential_speed: rocket.vel.dot(tangent),
        local_gravity: field_strength(rocket.pos, registry.gravity_sources()),
    }
}
