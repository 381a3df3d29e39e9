//! Rocket state, held controls, and launch-pad reset.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::bodies::{BodyId, BodyRef, BodyRegistry};
use crate::prediction::PredictionSettings;
use crate::types::SimulationTime;

/// Seconds of full-throttle burn in a full tank.
pub const FUEL_CAPACITY_SEC: f64 = 600.0;

/// Body the rocket launches from (and returns to on reset).
pub const HOME_BODY: BodyId = BodyId::Earth;

/// The player's rocket.
///
/// Positions and velocities are world-frame meters; `heading` is measured
/// clockwise from local "up", so heading 0 thrusts along +y.
#[derive(Resource, Clone, Debug)]
pub struct Rocket {
    /// World position (m)
    pub pos: DVec2,
    /// World velocity (m/s)
    pub vel: DVec2,
    /// Heading angle (rad); thrust direction is (sin θ, cos θ)
    pub heading: f64,
    /// Commanded throttle fraction in [0, 1]
    pub throttle: f64,
    /// Remaining full-throttle burn time (s); an empty tank produces no
    /// thrust but the rocket still steers
    pub fuel_sec: f64,
    /// Whether the last tick resolved surface contact
    pub contact: bool,
}

impl Default for Rocket {
    fn default() -> Self {
        Self {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            heading: 0.0,
            throttle: 0.0,
            fuel_sec: FUEL_CAPACITY_SEC,
            contact: false,
        }
    }
}

impl Rocket {
    /// Set the throttle directly, clamped to [0, 1].
    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle.clamp(0.0, 1.0);
    }

    /// Remaining fuel as a fraction of a full tank.
    pub fn fuel_frac(&self) -> f64 {
        self.fuel_sec / FUEL_CAPACITY_SEC
    }

    /// Park the rocket on `body`'s surface directly above its center.
    ///
    /// The rocket inherits the body's center velocity only — adding the
    /// orbital tangential term on top would double-count it.
    pub fn place_on(&mut self, body: BodyRef<'_>) {
        self.pos = body.center + DVec2::new(0.0, body.config.radius);
        self.vel = body.center_vel;
        self.heading = 0.0;
        self.throttle = 0.0;
        self.fuel_sec = FUEL_CAPACITY_SEC;
        self.contact = true;
    }
}

/// Held control flags, written by the embedding input layer.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct RocketControls {
    /// Ramp the throttle up while held
    pub thrust_up: bool,
    /// Ramp the throttle down while held
    pub thrust_down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Event requesting a full simulation reset.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetEvent;

/// Plugin owning the rocket resources and reset handling.
pub struct RocketPlugin;

impl Plugin for RocketPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Rocket>()
            .init_resource::<RocketControls>()
            .add_message::<ResetEvent>()
            .add_systems(Startup, initial_placement)
            .add_systems(Update, apply_reset);
    }
}

/// Put the rocket on the launch pad at startup.
fn initial_placement(mut rocket: ResMut<Rocket>, registry: Res<BodyRegistry>) {
    let home = registry.index_of(HOME_BODY).unwrap_or(0);
    rocket.place_on(registry.get(home));
}

/// Rewind the clock, snap the rails back to the epoch, and return the
/// rocket to the pad with the home body's velocity.
fn apply_reset(
    mut events: MessageReader<ResetEvent>,
    mut rocket: ResMut<Rocket>,
    mut registry: ResMut<BodyRegistry>,
    mut sim_time: ResMut<SimulationTime>,
    mut prediction: ResMut<PredictionSettings>,
) {
    if events.read().next().is_none() {
        return;
    }
    sim_time.reset();
    registry.refresh(sim_time.current);
    let home = registry.index_of(HOME_BODY).unwrap_or(0);
    let body = registry.get(home);
    rocket.place_on(body);
    prediction.reset_horizon();
    info!("reset: rocket back on the {} pad", body.config.id.name());
}
