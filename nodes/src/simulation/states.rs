//! Plain state types shared by the simulation.
//!
//! - `NVec2`      position type (nalgebra, f64)
//! - `Boundaries` the world rectangle nodes are kept inside
//! - `Rgba`       display color carried by nodes and shock waves
//!
//! Coordinates follow the drawing surface: origin top-left, +y down.

use nalgebra::Vector2;
use serde::Deserialize;

pub type NVec2 = Vector2<f64>;

/// Axis-aligned world rectangle
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Boundaries {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Usable `[lo, hi]` range on the x axis once `inset` is taken off both sides
    pub fn x_range(&self, inset: f64) -> (f64, f64) {
        (self.x + inset, self.x + self.width - inset)
    }

    /// Usable `[lo, hi]` range on the y axis once `inset` is taken off both sides
    pub fn y_range(&self, inset: f64) -> (f64, f64) {
        (self.y + inset, self.y + self.height - inset)
    }

    pub fn contains(&self, p: &NVec2, inset: f64) -> bool {
        let (x_lo, x_hi) = self.x_range(inset);
        let (y_lo, y_hi) = self.y_range(inset);
        p.x >= x_lo && p.x <= x_hi && p.y >= y_lo && p.y <= y_hi
    }
}

impl Default for Boundaries {
    fn default() -> Self {
        Self::new(0.0, 0.0, 940.0, 660.0)
    }
}

/// 8-bit RGB channels plus a floating alpha in [0, 1]
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}
