//! Celestial bodies: configuration, on-rails propagation, and the live
//! per-tick registry.
//!
//! Coordinate frame: 2D world meters, Sun at the origin, y up.

pub mod data;
pub mod rails;

#[cfg(test)]
mod proptest_rails;

pub use data::{solar_system, BodyConfig, BodyId, OrbitMode};
pub use rails::RailState;

use bevy::math::DVec2;
use bevy::prelude::*;
use thiserror::Error;

use crate::types::{SimSet, SimulationTime};

/// Rejected body configurations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BodyConfigError {
    /// A rails orbit referenced a parent at or after the body itself.
    /// Declaration order doubles as the propagation order, so parents must
    /// come first; this also rules out cycles.
    #[error("body {body} orbits parent {parent}, which is not declared before it")]
    ParentNotEarlier { body: usize, parent: usize },
}

/// Immutable view of one body: configuration plus the center state from the
/// last refresh.
#[derive(Clone, Copy, Debug)]
pub struct BodyRef<'a> {
    /// Stable index in declaration order
    pub index: usize,
    pub config: &'a BodyConfig,
    /// Center position at the refreshed time (m)
    pub center: DVec2,
    /// Velocity of the orbit itself (m/s); the ground frame for contact
    pub center_vel: DVec2,
}

/// Resource holding every body's configuration and per-tick derived state.
///
/// [`BodyRegistry::refresh`] must run before any gravity or collision query
/// of a tick; the [`SimSet`] chain enforces that for the live loop. The
/// predictor never reads the derived state here — it samples
/// [`rails::state_at`] over [`BodyRegistry::configs`] at its own times.
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry {
    configs: Vec<BodyConfig>,
    centers: Vec<RailState>,
    gravity_sources: Vec<(DVec2, f64)>,
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new(solar_system()).expect("built-in solar system configuration is valid")
    }
}

impl BodyRegistry {
    /// Validate `configs` and build a registry refreshed at the epoch.
    pub fn new(configs: Vec<BodyConfig>) -> Result<Self, BodyConfigError> {
        for (i, config) in configs.iter().enumerate() {
            if let OrbitMode::Rails { parent, .. } = config.orbit {
                if parent >= i {
                    return Err(BodyConfigError::ParentNotEarlier { body: i, parent });
                }
            }
        }
        let centers = vec![
            RailState {
                pos: DVec2::ZERO,
                vel: DVec2::ZERO,
            };
            configs.len()
        ];
        let mut registry = Self {
            configs,
            centers,
            gravity_sources: Vec::new(),
        };
        registry.refresh(0.0);
        Ok(registry)
    }

    /// Recompute every body's center position/velocity at `time` and rebuild
    /// the cached gravity-source list.
    pub fn refresh(&mut self, time: f64) {
        for i in 0..self.configs.len() {
            self.centers[i] = rails::state_at(&self.configs, i, time);
        }
        self.gravity_sources.clear();
        self.gravity_sources.extend(
            self.centers
                .iter()
                .zip(&self.configs)
                .map(|(state, config)| (state.pos, config.mu)),
        );
    }

    /// Immutable body configurations — the snapshot source for prediction.
    pub fn configs(&self) -> &[BodyConfig] {
        &self.configs
    }

    /// `(center, μ)` pairs at the last refreshed time.
    pub fn gravity_sources(&self) -> &[(DVec2, f64)] {
        &self.gravity_sources
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn get(&self, index: usize) -> BodyRef<'_> {
        BodyRef {
            index,
            config: &self.configs[index],
            center: self.centers[index].pos,
            center_vel: self.centers[index].vel,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = BodyRef<'_>> {
        (0..self.configs.len()).map(|i| self.get(i))
    }

    /// Index of the first body with `id`.
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.configs.iter().position(|config| config.id == id)
    }

    /// Body whose current center is closest to `pos`.
    ///
    /// Ties resolve to the earliest body in declaration order.
    pub fn nearest(&self, pos: DVec2) -> BodyRef<'_> {
        let mut best = 0;
        let mut best_d2 = f64::INFINITY;
        for (i, state) in self.centers.iter().enumerate() {
            let d2 = pos.distance_squared(state.pos);
            if d2 < best_d2 {
                best_d2 = d2;
                best = i;
            }
        }
        self.get(best)
    }
}

/// Plugin refreshing the registry each tick.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyRegistry>()
            .add_systems(FixedUpdate, refresh_bodies.in_set(SimSet::Rails));
    }
}

/// Snap every body onto its rails at the current simulation time.
fn refresh_bodies(mut registry: ResMut<BodyRegistry>, sim_time: Res<SimulationTime>) {
    registry.refresh(sim_time.current);
}
