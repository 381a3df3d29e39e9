//! Liftoff — headless simulation binary.
//!
//! Boots the core loop without a renderer: a graphical frontend adds its
//! own window, camera, and input mapping on top of the same plugins.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use liftoff::bodies::{BodiesPlugin, BodyRegistry};
use liftoff::control::ControlPlugin;
use liftoff::physics::PhysicsPlugin;
use liftoff::prediction::PredictionPlugin;
use liftoff::rocket::RocketPlugin;
use liftoff::time::TimePlugin;
use liftoff::types::SimulationTime;

fn main() {
    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        // Insert resources before plugins that depend on them
        .insert_resource(BodyRegistry::default())
        .insert_resource(SimulationTime::default())
        // Add simulation plugins
        .add_plugins((
            TimePlugin,
            BodiesPlugin,
            RocketPlugin,
            PhysicsPlugin,
            PredictionPlugin,
            ControlPlugin,
        ))
        .run();
}
