//! Procedural terrain for body surfaces.
//!
//! Elevation is a deterministic band-limited function of the polar angle
//! around a body's center: three sine harmonics over an arc-length proxy.
//! Surface contact resolves against it; renderers sample the same function
//! for horizon lines so the two can never disagree.

use std::f64::consts::TAU;

use bevy::math::DVec2;

use crate::bodies::data::BodyConfig;

/// Elevation above the spherical radius at polar angle `angle` (rad).
///
/// Zero for bodies with no terrain amplitude and for smooth-surface bodies.
/// The harmonic sum is deliberately not clamped: valleys may dip below the
/// spherical radius.
pub fn elevation(config: &BodyConfig, angle: f64) -> f64 {
    if config.smooth_surface || config.terrain_amp <= 0.0 {
        return 0.0;
    }
    // Arc-length proxy keeps the bump spacing in meters rather than radians
    let s = config.radius * angle;
    let k1 = TAU / config.terrain_wavelength;
    config.terrain_amp
        * (0.60 * (k1 * s + 0.3).sin()
            + 0.30 * (2.0 * k1 * s + 1.7).sin()
            + 0.10 * (4.0 * k1 * s + 5.1).sin())
}

/// Local surface radius under the world point `point`, for a body centered
/// at `center`: spherical radius plus elevation at the angle of `point`,
/// normalized to [0, 2π).
pub fn surface_radius(config: &BodyConfig, center: DVec2, point: DVec2) -> f64 {
    let d = point - center;
    let mut theta = d.y.atan2(d.x);
    if theta < 0.0 {
        theta += TAU;
    }
    config.radius + elevation(config, theta)
}
