//! Closed-form on-rails orbital propagation.
//!
//! Every body's motion is a prescribed function of absolute simulation
//! time: fixed bodies sit still, orbiting bodies trace their ellipse around
//! a parent whose state is evaluated at the same instant. These are pure
//! functions over the configuration, shared by the live registry refresh
//! and the ballistic predictor, so prediction can sample arbitrary future
//! times without touching live per-tick state.

use bevy::math::DVec2;

use super::data::{BodyConfig, OrbitMode};

/// Position and velocity of a body center at some instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RailState {
    /// Center position (m)
    pub pos: DVec2,
    /// Velocity of the orbit itself (m/s)
    pub vel: DVec2,
}

/// On-rails state of body `index` at absolute simulation time `time`.
///
/// Orbiting bodies compose with their parent recursively, so the Moon
/// carries Earth's orbital velocity around the Sun. The parent chain is
/// short by construction (at most Sun → planet → moon). Callable at any
/// time, in any order; no side effects.
pub fn state_at(configs: &[BodyConfig], index: usize, time: f64) -> RailState {
    match configs[index].orbit {
        OrbitMode::Fixed { pos } => RailState {
            pos,
            vel: DVec2::ZERO,
        },
        OrbitMode::Rails {
            parent,
            semi_major,
            semi_minor,
            angular_rate,
            phase,
        } => {
            let p = state_at(configs, parent, time);
            let theta = phase + angular_rate * time;
            let (sin_th, cos_th) = theta.sin_cos();
            RailState {
                pos: p.pos + DVec2::new(semi_major * cos_th, semi_minor * sin_th),
                vel: p.vel
                    + DVec2::new(
                        -semi_major * angular_rate * sin_th,
                        semi_minor * angular_rate * cos_th,
                    ),
            }
        }
    }
}

/// Index of the body whose center is closest to `pos` at `time`.
///
/// Ties resolve to the earliest body in declaration order.
pub fn nearest_index_at(configs: &[BodyConfig], pos: DVec2, time: f64) -> usize {
    let mut best = 0;
    let mut best_d2 = f64::INFINITY;
    for i in 0..configs.len() {
        let d2 = pos.distance_squared(state_at(configs, i, time).pos);
        if d2 < best_d2 {
            best_d2 = d2;
            best = i;
        }
    }
    best
}

/// Rebuild `out` with one `(center, μ)` pair per body at `time`.
///
/// Reuses the caller's buffer so per-step prediction sampling stays free of
/// allocations.
pub fn fill_gravity_sources(configs: &[BodyConfig], time: f64, out: &mut Vec<(DVec2, f64)>) {
    out.clear();
    out.extend(
        configs
            .iter()
            .enumerate()
            .map(|(i, config)| (state_at(configs, i, time).pos, config.mu)),
    );
}
