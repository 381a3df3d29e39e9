//! Core simulation types and tuning constants.

use bevy::prelude::*;

/// System sets ordering one fixed-rate simulation tick.
///
/// A tick is clock advance, then on-rails body refresh, then the rocket
/// step. Gravity and collision queries are only consistent after the
/// refresh, so the chain must not be reordered.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Simulation-time advancement
    Clock,
    /// On-rails body state refresh
    Rails,
    /// Rocket integration and surface contact
    Rocket,
}

/// Physical constants (SI units)

/// Standard gravity at Earth's surface (m/s²), the reference for thrust-in-g.
pub const G0: f64 = 9.80665;

/// Maximum engine acceleration in multiples of [`G0`].
pub const MAX_THRUST_G: f64 = 4.0;

/// Turn rate while a rotation control is held (rad/s), ~78°/s.
pub const ANG_SPEED_RAD: f64 = 1.361357;

/// Throttle ramp rate while a throttle control is held (fraction per second).
pub const THROTTLE_RATE: f64 = 0.8;

/// Fixed simulation tick rate (Hz).
pub const TICK_HZ: f64 = 60.0;

/// Time-scale bounds; every assignment and multiply clamps into this range.
pub const TIME_SCALE_MIN: f64 = 0.25;
pub const TIME_SCALE_MAX: f64 = 500.0;

/// Discrete time-scale adjustment factors.
pub const TIME_SCALE_STEP_DOWN: f64 = 0.5;
pub const TIME_SCALE_STEP_UP: f64 = 2.0;

/// Simulation time resource.
///
/// Simulated seconds advance at `scale` times real time and drive the
/// on-rails body positions. Pausing freezes the simulated axis entirely;
/// real time keeps passing but none of it is applied.
#[derive(Resource, Clone, Debug)]
pub struct SimulationTime {
    /// Simulated seconds since the launch epoch
    pub current: f64,
    /// Simulated seconds per real second
    pub scale: f64,
    /// Whether simulation is paused
    pub paused: bool,
    /// Epoch restored by reset
    pub initial: f64,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            current: 0.0,
            scale: 1.0,
            paused: false,
            initial: 0.0,
        }
    }
}

impl SimulationTime {
    /// Advance by `dt_real` wall-clock seconds, scaled. No-op while paused.
    pub fn advance(&mut self, dt_real: f64) {
        if self.paused {
            return;
        }
        self.current += dt_real * self.scale;
    }

    /// Assign an absolute time scale, clamped to the legal range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(TIME_SCALE_MIN, TIME_SCALE_MAX);
    }

    /// Multiply the time scale, clamped to the legal range.
    pub fn scale_by(&mut self, mult: f64) {
        self.set_scale(self.scale * mult);
    }

    /// Rewind to the launch epoch at normal speed, unpaused.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.scale = 1.0;
        self.paused = false;
    }
}
