//! Fixed-step integration and surface contact resolution.

use bevy::math::DVec2;

use crate::bodies::BodyRef;
use crate::terrain;

/// Tangential ground-speed damping factor applied per contact tick.
pub const GROUND_DAMPING: f64 = 0.98;

/// Throttle below which a slow rocket counts as parked.
pub const REST_THROTTLE: f64 = 0.02;

/// Ground-relative speed² (m²/s²) below which a parked rocket snaps to an
/// exact standstill instead of creeping asymptotically.
pub const REST_SPEED_SQ: f64 = 0.25;

/// Floor for normalizing the radial direction when clamping to the surface.
const RADIAL_NORM_FLOOR: f64 = 1e-6;

/// One semi-implicit Euler step: velocity from acceleration, then position
/// from the updated velocity.
///
/// The order is load-bearing. The ballistic predictor reuses this exact
/// step so plotted paths agree with live flight tick for tick.
#[inline]
pub fn semi_implicit_euler(pos: &mut DVec2, vel: &mut DVec2, acc: DVec2, dt: f64) {
    *vel += acc * dt;
    *pos += *vel * dt;
}

/// Resolve contact against `body` if `pos` has sunk below its local
/// (terrain-aware) surface. Returns whether contact was resolved.
///
/// Velocity is resolved in the body's ground frame — the frame moving with
/// the orbit's center velocity — so a rocket "at rest" on a moving planet
/// keeps the planet's velocity in world terms:
/// - the position clamps onto the surface along the radial direction,
/// - any inward radial component is removed (no bounce),
/// - tangential ground speed damps each tick, except that a parked rocket
///   ([`REST_THROTTLE`], [`REST_SPEED_SQ`]) snaps to exactly zero.
pub fn resolve_surface_contact(
    pos: &mut DVec2,
    vel: &mut DVec2,
    throttle: f64,
    body: BodyRef<'_>,
) -> bool {
    let offset = *pos - body.center;
    let dist = offset.length();
    let surface = terrain::surface_radius(body.config, body.center, *pos);
    if dist >= surface {
        return false;
    }

    let normal = offset / dist.max(RADIAL_NORM_FLOOR);
    *pos = body.center + normal * surface;

    let mut ground_vel = *vel - body.center_vel;
    let v_radial = ground_vel.dot(normal);
    if v_radial < 0.0 {
        ground_vel -= normal * v_radial;
    }
    if throttle < REST_THROTTLE && ground_vel.length_squared() < REST_SPEED_SQ {
        ground_vel = DVec2::ZERO;
    } else {
        ground_vel *= GROUND_DAMPING;
    }
    *vel = body.center_vel + ground_vel;
    true
}
