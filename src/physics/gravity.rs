//! Point-mass gravity over the body field.

use bevy::math::DVec2;

/// Squared distance (m²) below which a body contributes no acceleration.
/// 1 m is far inside every body, so the guard only matters for degenerate
/// sample points.
const NEAR_FIELD_FLOOR_SQ: f64 = 1.0;

/// Sum gravitational acceleration at `pos` from `(center, μ)` sources.
///
/// Each body pulls with μ/r² toward its center; sources inside the
/// near-field floor are skipped rather than clamped, so the result stays
/// finite for any input. Body positions move, so callers must resample
/// sources for every integration sub-step.
#[inline]
pub fn compute_acceleration(pos: DVec2, sources: &[(DVec2, f64)]) -> DVec2 {
    let mut acc = DVec2::ZERO;
    for &(center, mu) in sources {
        let delta = center - pos;
        let r_squared = delta.length_squared();
        if r_squared > NEAR_FIELD_FLOOR_SQ {
            let r = r_squared.sqrt();
            // a = μ/r² along delta/r
            acc += delta * (mu / (r_squared * r));
        }
    }
    debug_assert!(
        acc.x.is_finite() && acc.y.is_finite(),
        "gravity produced a non-finite acceleration"
    );
    acc
}

/// Net field strength Σ μ/r² at `pos` (m/s²), with the same near-field
/// guard. HUD readout quantity; direction is discarded.
#[inline]
pub fn field_strength(pos: DVec2, sources: &[(DVec2, f64)]) -> f64 {
    let mut total = 0.0;
    for &(center, mu) in sources {
        let r_squared = pos.distance_squared(center);
        if r_squared > NEAR_FIELD_FLOOR_SQ {
            total += mu / r_squared;
        }
    }
    total
}
