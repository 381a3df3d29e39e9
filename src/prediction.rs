//! Ballistic trajectory prediction.
//!
//! Forward-simulates a thrust-off coast from the current rocket state over
//! a bounded horizon, with the path re-expressed in the frame of the body
//! nearest the rocket at prediction start. The reference body keeps moving
//! during the predicted window; anchoring to its start position keeps the
//! plotted curve stable on screen.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::bodies::data::BodyConfig;
use crate::bodies::rails;
use crate::physics::{compute_acceleration, semi_implicit_euler};
use crate::terrain;

/// Hard cap on integration steps and returned points.
pub const MAX_POINTS: usize = 2000;

/// Default integration step (s); widened automatically for long horizons so
/// the step count never exceeds [`MAX_POINTS`].
pub const BASE_DT: f64 = 0.5;

/// Prediction horizon bounds (s).
pub const HORIZON_MIN: f64 = 10.0;
pub const HORIZON_MAX: f64 = 18_000.0;
pub const HORIZON_DEFAULT: f64 = 18_000.0;

/// Caller-tunable prediction parameters.
#[derive(Resource, Clone, Debug)]
pub struct PredictionSettings {
    /// Coast horizon (s), kept within [`HORIZON_MIN`]..[`HORIZON_MAX`]
    pub horizon_sec: f64,
    /// Base integration step (s)
    pub base_dt: f64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            horizon_sec: HORIZON_DEFAULT,
            base_dt: BASE_DT,
        }
    }
}

impl PredictionSettings {
    /// Nudge the horizon by a signed number of seconds, staying in bounds.
    pub fn nudge_horizon(&mut self, delta: f64) {
        self.horizon_sec = (self.horizon_sec + delta).clamp(HORIZON_MIN, HORIZON_MAX);
    }

    /// Restore the default horizon (used by reset).
    pub fn reset_horizon(&mut self) {
        self.horizon_sec = HORIZON_DEFAULT;
    }
}

/// Plugin registering the prediction settings.
pub struct PredictionPlugin;

impl Plugin for PredictionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PredictionSettings>();
    }
}

/// Predict the coast path from (`pos`, `vel`) at simulation time `t0`.
///
/// The integration mirrors live flight exactly — bodies sampled on their
/// rails at the advanced time, gravity summed with the same near-field
/// guard, velocity updated before position — so the plotted path is what
/// an unpowered rocket would actually fly. Each world point is translated
/// back by the reference body's displacement since `t0` before it is
/// appended; the path ends early where it would strike terrain.
///
/// Pure function of its arguments: identical inputs produce a bit-identical
/// path, nothing shared is read or written, and the work is bounded by
/// [`MAX_POINTS`] regardless of horizon. Hand it a clone of the body
/// configs and it can run on a worker thread while the live tick proceeds.
pub fn predict_ballistic(
    pos: DVec2,
    vel: DVec2,
    configs: &[BodyConfig],
    t0: f64,
    horizon_sec: f64,
    base_dt: f64,
) -> Vec<DVec2> {
    let dt = base_dt.max(horizon_sec / MAX_POINTS as f64);
    let steps = ((horizon_sec / dt).ceil() as usize).clamp(1, MAX_POINTS);

    let ref_index = rails::nearest_index_at(configs, pos, t0);
    let ref0 = rails::state_at(configs, ref_index, t0);

    let mut points = Vec::with_capacity(steps);
    let mut sources = Vec::with_capacity(configs.len());
    let (mut p, mut v) = (pos, vel);
    let mut t = t0;

    for _ in 0..steps {
        t += dt;

        rails::fill_gravity_sources(configs, t, &mut sources);
        let acc = compute_acceleration(p, &sources);
        semi_implicit_euler(&mut p, &mut v, acc, dt);

        let nearest = rails::nearest_index_at(configs, p, t);
        let nearest_state = rails::state_at(configs, nearest, t);
        let dist = p.distance(nearest_state.pos);
        if dist < terrain::surface_radius(&configs[nearest], nearest_state.pos, p) {
            break;
        }

        let ref_t = rails::state_at(configs, ref_index, t);
        points.push(ref0.pos + (p - ref_t.pos));
    }

    points
}
