//! Input events handed to the simulation
//!
//! Raw device input is translated by the viewer into these explicit values;
//! the simulation never reads device state on its own.

use super::states::NVec2;

/// Pointer location in world coordinates, stamped with the time it happened
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub time: f64, // seconds
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, time: f64) -> Self {
        Self { x, y, time }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePause,
    Blast,
}

/// Last known pointer state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub down: bool,
}

impl Pointer {
    pub fn position(&self) -> NVec2 {
        NVec2::new(self.x, self.y)
    }

    pub fn track(&mut self, ev: &PointerEvent) {
        self.x = ev.x;
        self.y = ev.y;
    }
}
