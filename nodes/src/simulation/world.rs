//! The node world
//!
//! `World` owns the physics constants (boundaries, drag, gravity), the node
//! population and the live shock waves. Per tick:
//! 1. every node takes drag + gravity, drifts and bounces
//! 2. every shock wave grows or decays, spent ones are dropped
//!
//! `draw` is a pure read producing a [`Frame`] for whatever renders it.

use bevy::log::{debug, info};
use rand::Rng;

use super::forces::{Force, UniformGravity};
use super::node::Node;
use super::params::Parameters;
use super::position::Position;
use super::shockwave::ShockWave;
use super::states::{Boundaries, NVec2, Rgba};

/// Settings every spawned node starts with
#[derive(Debug, Clone)]
pub struct NodeTemplate {
    pub mass: f64,
    pub bounce_damp: f64,
    pub size: f64,
    pub inset: f64,
    pub color: Rgba,
}

impl NodeTemplate {
    pub fn spawn(&self, x: f64, y: f64) -> Node {
        Node::new(x, y, self.mass)
            .with_bounce_damp(self.bounce_damp)
            .with_size(self.size)
            .with_inset(self.inset)
            .with_color(self.color)
    }
}

impl Default for NodeTemplate {
    fn default() -> Self {
        Self {
            mass: 1.0,
            bounce_damp: 0.8,
            size: 2.0,
            inset: 0.0,
            color: Rgba::new(0, 160, 255, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingSprite {
    pub x: f64,
    pub y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub color: Rgba,
    pub growing: bool,
}

/// Read-only snapshot of one tick, in draw order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub nodes: Vec<NodeSprite>,
    pub shockwaves: Vec<RingSprite>,
}

#[derive(Debug, Clone)]
pub struct World {
    pub boundaries: Boundaries,
    pub drag: f64,
    pub gravity: UniformGravity,
    pub node_count: usize,
    pub template: NodeTemplate,
    pub params: Parameters,
    pub nodes: Vec<Node>,
    pub shockwaves: Vec<ShockWave>,
    gravity_setting: (f64, f64), // (force, direction), turned into `gravity` by `initialize`
}

impl World {
    pub fn new(boundaries: Boundaries, drag: f64) -> Self {
        Self {
            boundaries,
            drag,
            gravity: UniformGravity::new(0.0, 0.0),
            node_count: 0,
            template: NodeTemplate::default(),
            params: Parameters::default(),
            nodes: Vec::new(),
            shockwaves: Vec::new(),
            gravity_setting: (0.0, 0.0),
        }
    }

    /// Gravity as (force, direction in radians); +y is down, so PI/2 falls.
    /// The force vector is built by `initialize`.
    pub fn with_gravity(mut self, force: f64, direction: f64) -> Self {
        self.gravity_setting = (force, direction);
        self
    }

    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    pub fn with_template(mut self, template: NodeTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_params(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }

    /// Build the gravity vector and fill the world with `node_count` nodes at
    /// uniform random positions inside the boundaries
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) {
        let (force, direction) = self.gravity_setting;
        self.gravity = UniformGravity::new(force, direction);

        let (x_lo, x_hi) = self.boundaries.x_range(self.template.inset);
        let (y_lo, y_hi) = self.boundaries.y_range(self.template.inset);

        self.nodes.clear();
        self.nodes.reserve(self.node_count);
        for _ in 0..self.node_count {
            let x = x_lo + rng.gen::<f64>() * (x_hi - x_lo);
            let y = y_lo + rng.gen::<f64>() * (y_hi - y_lo);
            self.nodes.push(self.template.spawn(x, y));
        }
        self.shockwaves.clear();

        info!(
            "world initialized: {} nodes in {}x{}, drag {}, gravity {:.3} @ {:.3} rad",
            self.nodes.len(),
            self.boundaries.width,
            self.boundaries.height,
            self.drag,
            force,
            direction
        );
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// One tick: nodes first, then shock waves (`now` in seconds)
    pub fn update(&mut self, now: f64) {
        for node in self.nodes.iter_mut() {
            let g = self.gravity.force_on(node);
            node.update(self.drag, Some(&g), &self.boundaries);
        }

        for wave in self.shockwaves.iter_mut() {
            wave.update(now, &self.params);
        }
        self.shockwaves.retain(|wave| !wave.is_spent());
    }

    pub fn draw(&self) -> Frame {
        let nodes = self
            .nodes
            .iter()
            .map(|n| NodeSprite {
                x: n.x,
                y: n.y,
                size: n.size,
                color: n.color,
            })
            .collect();

        let shockwaves = self
            .shockwaves
            .iter()
            .map(|w| {
                let origin = w.position();
                RingSprite {
                    x: origin.x,
                    y: origin.y,
                    inner_radius: w.inner_radius,
                    outer_radius: w.outer_radius,
                    color: w.color,
                    growing: w.is_growing(),
                }
            })
            .collect();

        Frame { nodes, shockwaves }
    }

    /// The wave currently charging, if any (always the latest one)
    pub fn growing_shockwave(&self) -> Option<&ShockWave> {
        self.shockwaves.last().filter(|w| w.is_growing())
    }

    /// Start charging a wave at `at`. A wave still charging is released first.
    pub fn begin_shockwave(&mut self, at: NVec2, now: f64) {
        self.release_shockwave(now);
        self.shockwaves.push(ShockWave::new(at, now, &self.params));
    }

    /// Release the latest wave if it is charging; false otherwise
    pub fn release_shockwave(&mut self, now: f64) -> bool {
        let Some(wave) = self.shockwaves.last_mut() else {
            return false;
        };
        let released = wave.release(now, &self.params, &mut self.nodes);
        if released {
            debug!("shock wave released, magnitude {:.1}", wave.magnitude);
        }
        released
    }

    /// Immediate blast at `at`, no charge-up
    pub fn blast(&mut self, magnitude: f64, at: NVec2) {
        let wave = ShockWave::blast(at, magnitude, &self.params, &mut self.nodes);
        debug!("manual blast at ({:.1}, {:.1}), magnitude {:.1}", at.x, at.y, magnitude);
        // keep the charging wave last so pointer-up still finds it
        match self.shockwaves.last() {
            Some(last) if last.is_growing() => {
                let idx = self.shockwaves.len() - 1;
                self.shockwaves.insert(idx, wave);
            }
            _ => self.shockwaves.push(wave),
        }
    }
}
