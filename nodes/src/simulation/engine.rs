//! Fixed-rate tick driver
//!
//! Holds the tick rate and whether ticks are currently being delivered.
//! Starting a running engine or stopping a stopped one does nothing.

use std::time::Duration;

use bevy::log::info;

#[derive(Debug, Clone)]
pub struct Engine {
    pub framerate: f64, // ticks per second
    running: bool,
}

impl Engine {
    pub fn new(framerate: f64) -> Self {
        Self {
            framerate: if framerate.is_finite() && framerate > 0.0 { framerate } else { 60.0 },
            running: false,
        }
    }

    /// Time between two ticks
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.framerate)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if the engine was stopped before
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        info!("engine started at {} Hz", self.framerate);
        true
    }

    /// Returns true if the engine was running before
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!("engine paused");
        true
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(60.0)
    }
}
