//! Pointer-driven shock waves
//!
//! A shock wave is anchored where the pointer went down and moves through two
//! phases:
//!
//! - `Growing`  charge-up while the button is held. Magnitude follows the hold
//!   time, only the inner ring is shown, nodes are untouched.
//! - `Decaying` entered once on release (or directly for a manual blast). The
//!   impulse hits every node exactly once, then the rings relax outward and the
//!   alpha fades until it snaps to 0 and the world drops the wave.

use super::forces::{Force, RadialImpulse};
use super::node::Node;
use super::params::Parameters;
use super::position::Position;
use super::states::{NVec2, Rgba};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Growing { pressed_at: f64 }, // press timestamp in seconds
    Decaying,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShockWave {
    origin: NVec2,
    pub magnitude: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub color: Rgba,
    phase: Phase,
}

impl ShockWave {
    /// Start charging a wave at `origin`, pressed at `pressed_at` seconds
    pub fn new(origin: NVec2, pressed_at: f64, params: &Parameters) -> Self {
        Self {
            origin,
            magnitude: 0.0,
            inner_radius: 0.0,
            outer_radius: 0.0,
            color: params.color,
            phase: Phase::Growing { pressed_at },
        }
    }

    /// A wave that skips the charge-up: released immediately with `magnitude`
    pub fn blast(origin: NVec2, magnitude: f64, params: &Parameters, nodes: &mut [Node]) -> Self {
        let mut wave = Self {
            origin,
            magnitude: magnitude.max(0.0),
            inner_radius: 0.0,
            outer_radius: 0.0,
            color: params.color,
            phase: Phase::Decaying,
        };
        wave.detonate(params, nodes);
        wave
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_growing(&self) -> bool {
        matches!(self.phase, Phase::Growing { .. })
    }

    /// Released and fully faded, ready to be dropped. A charging wave is
    /// never spent, whatever its color.
    pub fn is_spent(&self) -> bool {
        self.phase == Phase::Decaying && self.color.a == 0.0
    }

    /// The push this wave delivers at release
    pub fn impulse(&self, params: &Parameters) -> RadialImpulse {
        RadialImpulse {
            origin: self.origin,
            magnitude: self.magnitude,
            min_distance: params.min_distance,
        }
    }

    /// Advance one tick: grow while held, relax and fade once released
    pub fn update(&mut self, now: f64, params: &Parameters) {
        match self.phase {
            Phase::Growing { pressed_at } => self.grow(now - pressed_at, params),
            Phase::Decaying => self.decay(params),
        }
    }

    /// Pointer released at `now`: freeze the charge and hit every node once.
    /// Returns false when the wave was not growing.
    pub fn release(&mut self, now: f64, params: &Parameters, nodes: &mut [Node]) -> bool {
        let Phase::Growing { pressed_at } = self.phase else {
            return false;
        };
        self.grow(now - pressed_at, params);
        self.phase = Phase::Decaying;
        self.detonate(params, nodes);
        true
    }

    fn grow(&mut self, held: f64, params: &Parameters) {
        self.magnitude = held.max(0.0) * params.growth_rate;
        self.inner_radius = self.magnitude / params.growing_inner_ratio;
    }

    fn detonate(&mut self, params: &Parameters, nodes: &mut [Node]) {
        self.inner_radius = self.magnitude / params.release_inner_ratio;
        self.outer_radius = self.magnitude / params.release_outer_ratio;

        let impulse = self.impulse(params);
        for node in nodes.iter_mut() {
            let f = impulse.force_on(node);
            node.apply_force(&f);
        }
    }

    fn decay(&mut self, params: &Parameters) {
        let inner_target = self.magnitude / params.inner_target_ratio;
        let outer_target = self.magnitude / params.outer_target_ratio;
        self.inner_radius += (inner_target - self.inner_radius) / params.inner_smoothing;
        self.outer_radius += (outer_target - self.outer_radius) / params.outer_smoothing;

        let mut alpha = self.color.a * (1.0 - params.alpha_decay);
        if alpha < params.alpha_cutoff {
            alpha = 0.0;
        }
        self.color.a = alpha;
    }
}

impl Position for ShockWave {
    fn position(&self) -> NVec2 {
        self.origin
    }
}
