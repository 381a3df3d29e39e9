//! Inbound command boundary.
//!
//! The core consumes the held-control flags on
//! [`RocketControls`](crate::rocket::RocketControls) plus the discrete
//! commands here. How keys, buttons, or network messages map onto them is
//! the embedding layer's business.

use bevy::prelude::*;

use crate::prediction::PredictionSettings;
use crate::rocket::{ResetEvent, Rocket};
use crate::types::SimulationTime;

/// Absolute time-scale presets offered to UIs. Assignments clamp like every
/// other scale change, so the 1000 entry lands on the 500 cap.
pub const TIME_PRESETS: [f64; 5] = [1.0, 5.0, 25.0, 100.0, 1000.0];

/// Discrete simulation commands.
#[derive(Message, Clone, Copy, Debug)]
pub enum SimCommand {
    /// Toggle the pause state
    TogglePause,
    /// Rewind to the launch epoch and put the rocket back on the pad
    Reset,
    /// Multiply the time scale (clamped to the legal range)
    ScaleTime(f64),
    /// Assign an absolute time scale, e.g. a preset (same clamp)
    SetTimeScale(f64),
    /// Set the throttle directly, clamped to [0, 1]
    SetThrottle(f64),
    /// Nudge the prediction horizon by a signed number of seconds
    NudgePredictionHorizon(f64),
}

/// Plugin applying queued commands once per frame.
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SimCommand>()
            .add_systems(Update, apply_commands);
    }
}

fn apply_commands(
    mut commands: MessageReader<SimCommand>,
    mut sim_time: ResMut<SimulationTime>,
    mut rocket: ResMut<Rocket>,
    mut prediction: ResMut<PredictionSettings>,
    mut reset_events: MessageWriter<ResetEvent>,
) {
    for command in commands.read() {
        match *command {
            SimCommand::TogglePause => sim_time.paused = !sim_time.paused,
            SimCommand::Reset => {
                reset_events.write(ResetEvent);
            }
            SimCommand::ScaleTime(mult) => sim_time.scale_by(mult),
            SimCommand::SetTimeScale(scale) => sim_time.set_scale(scale),
            SimCommand::SetThrottle(throttle) => rocket.set_throttle(throttle),
            SimCommand::NudgePredictionHorizon(delta) => prediction.nudge_horizon(delta),
        }
    }
}
