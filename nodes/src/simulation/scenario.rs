//! Build a fully-initialized simulation context from configuration
//!
//! `Scenario` bundles everything one running demo needs:
//! - the node `World`
//! - the tick driver (`Engine`)
//! - the last known `Pointer`
//!
//! It is inserted into Bevy as a `Resource`. Input handlers and the tick
//! system all go through it; nothing is kept in globals.

use bevy::log::debug;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::input::{KeyCommand, Pointer, PointerEvent};
use crate::simulation::states::NVec2;
use crate::simulation::world::{Frame, World};

#[derive(Resource)]
pub struct Scenario {
    pub world: World,
    pub engine: Engine,
    pub pointer: Pointer,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let w_cfg = cfg.world;
        let mut world = World::new(w_cfg.boundaries, w_cfg.drag)
            .with_gravity(w_cfg.gravity.force, w_cfg.gravity.direction)
            .with_node_count(w_cfg.node_count)
            .with_template(cfg.node.template())
            .with_params(cfg.shockwave.parameters());

        // Seeded runs are reproducible, unseeded ones differ every launch
        let mut rng = match w_cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        world.initialize(&mut rng);

        let mut engine = Engine::new(cfg.engine.framerate);
        if !cfg.engine.start_paused {
            engine.start();
        }

        Self {
            world,
            engine,
            pointer: Pointer::default(),
        }
    }

    /// One driver tick at `now` seconds: update then draw.
    /// Nothing happens while the engine is stopped.
    pub fn tick(&mut self, now: f64) -> Option<Frame> {
        if !self.engine.is_running() {
            return None;
        }
        self.world.update(now);
        Some(self.world.draw())
    }

    pub fn pointer_move(&mut self, ev: PointerEvent) {
        self.pointer.track(&ev);
    }

    /// Press: remember where, start charging a wave there at `ev.time`
    pub fn pointer_down(&mut self, ev: PointerEvent) {
        self.pointer.track(&ev);
        self.pointer.down = true;
        self.world.begin_shockwave(self.pointer.position(), ev.time);
    }

    /// Release: the charging wave goes off
    pub fn pointer_up(&mut self, ev: PointerEvent) {
        self.pointer.track(&ev);
        if !self.pointer.down {
            return;
        }
        self.pointer.down = false;
        self.world.release_shockwave(ev.time);
    }

    pub fn key_down(&mut self, cmd: KeyCommand) {
        debug!("key command {:?}", cmd);
        match cmd {
            KeyCommand::TogglePause => self.engine.toggle(),
            KeyCommand::Blast => {
                let at: NVec2 = self.pointer.position();
                let magnitude = self.world.params.blast_magnitude;
                self.world.blast(magnitude, at);
            }
        }
    }
}
