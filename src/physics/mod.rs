//! Rocket flight physics.
//!
//! Runs in `FixedUpdate` after the clock advance and rails refresh: controls
//! ramp in real time, thrust and gravity integrate over the scaled
//! simulation step, and surface contact resolves against the nearest body.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use gravity::{compute_acceleration, field_strength};
pub use integrator::{
    resolve_surface_contact, semi_implicit_euler, GROUND_DAMPING, REST_SPEED_SQ, REST_THROTTLE,
};

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::bodies::BodyRegistry;
use crate::rocket::{Rocket, RocketControls};
use crate::types::{SimSet, SimulationTime, ANG_SPEED_RAD, G0, MAX_THRUST_G, THROTTLE_RATE};

/// Plugin providing the per-tick rocket step.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, rocket_step.in_set(SimSet::Rocket));
    }
}

/// Advance the rocket each fixed tick.
///
/// Skipped while paused; the registry has already been refreshed at the new
/// simulation time by the rails set.
fn rocket_step(
    mut rocket: ResMut<Rocket>,
    controls: Res<RocketControls>,
    registry: Res<BodyRegistry>,
    sim_time: Res<SimulationTime>,
    time: Res<Time>,
) {
    if sim_time.paused {
        return;
    }
    let was_contact = rocket.contact;
    step_rocket(
        &mut rocket,
        &controls,
        &registry,
        sim_time.scale,
        time.delta_secs_f64(),
    );
    if rocket.contact && !was_contact {
        let body = registry.nearest(rocket.pos);
        info!(
            "touchdown on {} at {:.1} m/s ground speed",
            body.config.id.name(),
            (rocket.vel - body.center_vel).length()
        );
    }
}

/// Advance the rocket by one tick of `dt_real` wall-clock seconds.
///
/// Exposed so tests and embedding code can drive flight without an `App`;
/// the live system is a thin wrapper. Order of operations:
/// 1. throttle ramps toward 1/0 while the matching control is held,
/// 2. heading turns at the fixed rate (right positive),
/// 3. fuel drains by throttle × real seconds; an empty tank cuts thrust,
/// 4. thrust + summed gravity integrate semi-implicitly over
///    `dt_real × time_scale`,
/// 5. contact resolves against the nearest body.
pub fn step_rocket(
    rocket: &mut Rocket,
    controls: &RocketControls,
    registry: &BodyRegistry,
    time_scale: f64,
    dt_real: f64,
) {
    if controls.thrust_up {
        rocket.throttle = (rocket.throttle + THROTTLE_RATE * dt_real).min(1.0);
    }
    if controls.thrust_down {
        rocket.throttle = (rocket.throttle - THROTTLE_RATE * dt_real).max(0.0);
    }
    let turn = (controls.turn_right as i32 - controls.turn_left as i32) as f64;
    rocket.heading += ANG_SPEED_RAD * turn * dt_real;

    let thrust_throttle = if rocket.fuel_sec > 0.0 {
        rocket.throttle
    } else {
        0.0
    };
    rocket.fuel_sec = (rocket.fuel_sec - rocket.throttle * dt_real).max(0.0);

    let dt = dt_real * time_scale;
    let thrust_dir = DVec2::new(rocket.heading.sin(), rocket.heading.cos());
    let acc = thrust_dir * (MAX_THRUST_G * thrust_throttle * G0)
        + compute_acceleration(rocket.pos, registry.gravity_sources());
    semi_implicit_euler(&mut rocket.pos, &mut rocket.vel, acc, dt);

    let nearest = registry.nearest(rocket.pos);
    rocket.contact =
        resolve_surface_contact(&mut rocket.pos, &mut rocket.vel, rocket.throttle, nearest);
}
