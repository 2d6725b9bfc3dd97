//! Configuration types for loading node-world scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`WorldConfig`]     – boundaries, drag, gravity, population size, seed
//! - [`NodeConfig`]      – settings every node is spawned with
//! - [`ShockWaveConfig`] – shock wave charge-up, fade and impulse guard
//! - [`EngineConfig`]    – tick rate and initial run state
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so a scenario file only lists what it changes.
//!
//! # YAML format
//!
//! ```yaml
//! world:
//!   boundaries: { x: 0.0, y: 0.0, width: 940.0, height: 660.0 }
//!   drag: 0.002             # fraction of speed lost per tick
//!   gravity:
//!     force: 0.2
//!     direction: 1.5707963  # radians from +x, +y points down the screen
//!   node_count: 2000
//!   seed: 42                # omit for a different layout every run
//!
//! node:
//!   mass: 1.0
//!   bounce_damp: 0.8
//!   size: 2.0
//!   inset: 0.0
//!   color: { r: 0, g: 160, b: 255, a: 1.0 }
//!
//! shockwave:
//!   growth_rate: 800.0      # magnitude per second of hold
//!   min_distance: 10.0      # floor of the 1/d impulse law
//!   blast_magnitude: 400.0  # keyboard blast
//!
//! engine:
//!   framerate: 60.0
//!   start_paused: false
//! ```

use anyhow::{ensure, Result};
use serde::Deserialize;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Boundaries, Rgba};
use crate::simulation::world::NodeTemplate;

/// Gravity as a force and a direction
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GravityConfig {
    pub force: f64,
    pub direction: f64, // radians, measured from +x towards +y (down)
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            force: 0.2,
            direction: std::f64::consts::FRAC_PI_2,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub boundaries: Boundaries,
    pub drag: f64,
    pub gravity: GravityConfig,
    pub node_count: usize,
    pub seed: Option<u64>, // fixed seed for a reproducible layout
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            boundaries: Boundaries::default(),
            drag: 0.002,
            gravity: GravityConfig::default(),
            node_count: 2000,
            seed: None,
        }
    }
}

/// Initial settings shared by every node
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct NodeConfig {
    pub mass: f64,
    pub bounce_damp: f64,
    pub size: f64,
    pub inset: f64,
    pub color: Rgba,
}

impl Default for NodeConfig {
    fn default() -> Self {
        let t = NodeTemplate::default();
        Self {
            mass: t.mass,
            bounce_damp: t.bounce_damp,
            size: t.size,
            inset: t.inset,
            color: t.color,
        }
    }
}

impl NodeConfig {
    pub fn template(&self) -> NodeTemplate {
        NodeTemplate {
            mass: self.mass,
            bounce_damp: self.bounce_damp,
            size: self.size,
            inset: self.inset,
            color: self.color,
        }
    }
}

/// The tunable part of the shock wave model
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ShockWaveConfig {
    pub growth_rate: f64,
    pub min_distance: f64,
    pub blast_magnitude: f64,
    pub alpha_decay: f64,
    pub alpha_cutoff: f64,
    pub inner_smoothing: f64,
    pub outer_smoothing: f64,
    pub color: Rgba,
}

impl Default for ShockWaveConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            growth_rate: p.growth_rate,
            min_distance: p.min_distance,
            blast_magnitude: p.blast_magnitude,
            alpha_decay: p.alpha_decay,
            alpha_cutoff: p.alpha_cutoff,
            inner_smoothing: p.inner_smoothing,
            outer_smoothing: p.outer_smoothing,
            color: p.color,
        }
    }
}

impl ShockWaveConfig {
    /// Runtime parameters; ratios not exposed here keep their defaults
    pub fn parameters(&self) -> Parameters {
        Parameters {
            growth_rate: self.growth_rate,
            min_distance: self.min_distance,
            blast_magnitude: self.blast_magnitude,
            alpha_decay: self.alpha_decay,
            alpha_cutoff: self.alpha_cutoff,
            inner_smoothing: self.inner_smoothing,
            outer_smoothing: self.outer_smoothing,
            color: self.color,
            ..Parameters::default()
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub framerate: f64,     // ticks per second
    pub start_paused: bool, // open the viewer with the engine stopped
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            framerate: 60.0,
            start_paused: false,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub world: WorldConfig,
    pub node: NodeConfig,
    pub shockwave: ShockWaveConfig,
    pub engine: EngineConfig,
}

impl ScenarioConfig {
    /// Reject values the physics cannot run with
    pub fn validate(&self) -> Result<()> {
        let b = &self.world.boundaries;
        ensure!(
            b.width > 0.0 && b.height > 0.0,
            "boundaries must have a positive size, got {}x{}",
            b.width,
            b.height
        );
        ensure!(
            (0.0..1.0).contains(&self.world.drag),
            "drag must be in [0, 1), got {}",
            self.world.drag
        );
        ensure!(
            self.world.gravity.force.is_finite() && self.world.gravity.direction.is_finite(),
            "gravity must be finite"
        );

        let n = &self.node;
        ensure!(n.mass > 0.0 && n.mass.is_finite(), "node mass must be positive, got {}", n.mass);
        ensure!(
            (0.0..=1.0).contains(&n.bounce_damp),
            "bounce_damp must be in [0, 1], got {}",
            n.bounce_damp
        );
        ensure!(n.size >= 0.0, "node size must not be negative, got {}", n.size);
        ensure!(
            n.inset >= 0.0 && 2.0 * n.inset <= b.width.min(b.height),
            "inset {} leaves no room inside {}x{}",
            n.inset,
            b.width,
            b.height
        );
        ensure!((0.0..=1.0).contains(&n.color.a), "node alpha must be in [0, 1]");

        let s = &self.shockwave;
        ensure!(s.growth_rate >= 0.0, "growth_rate must not be negative, got {}", s.growth_rate);
        ensure!(s.min_distance > 0.0, "min_distance must be positive, got {}", s.min_distance);
        ensure!(s.blast_magnitude >= 0.0, "blast_magnitude must not be negative");
        ensure!(
            s.alpha_decay > 0.0 && s.alpha_decay < 1.0,
            "alpha_decay must be in (0, 1), got {}",
            s.alpha_decay
        );
        ensure!(s.alpha_cutoff > 0.0, "alpha_cutoff must be positive, got {}", s.alpha_cutoff);
        ensure!(
            s.inner_smoothing >= 1.0 && s.outer_smoothing >= 1.0,
            "ring smoothing divisors must be at least 1"
        );
        ensure!((0.0..=1.0).contains(&s.color.a), "shock wave alpha must be in [0, 1]");

        ensure!(
            self.engine.framerate > 0.0 && self.engine.framerate.is_finite(),
            "framerate must be positive, got {}",
            self.engine.framerate
        );
        Ok(())
    }
}
