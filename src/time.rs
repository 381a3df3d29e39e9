//! Time advancement for the flight simulation.
//!
//! Advances the simulated time axis by scaled wall-clock deltas and owns
//! the tick ordering: clock, then rails refresh, then the rocket step.

use bevy::prelude::*;

use crate::types::{SimSet, SimulationTime, TICK_HZ};

/// Plugin providing simulation-time advancement.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationTime>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .configure_sets(
                FixedUpdate,
                (SimSet::Clock, SimSet::Rails, SimSet::Rocket).chain(),
            )
            .add_systems(FixedUpdate, advance_time.in_set(SimSet::Clock));
    }
}

/// Advance simulation time based on scale and pause state.
///
/// `delta_secs` is the real-world time covered by this fixed tick; the
/// simulated axis moves `scale` times as fast and holds still while paused.
fn advance_time(mut sim_time: ResMut<SimulationTime>, time: Res<Time>) {
    sim_time.advance(time.delta_secs_f64());
}
