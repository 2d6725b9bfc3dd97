//! Point-mass node
//!
//! One tick of a node is:
//! 1. drag     `|v| *= 1 - d`
//! 2. force    `v += f / m`
//! 3. drift    `x += v`  (one tick is one unit of time)
//! 4. bounce   per-axis reflection against the world boundaries

use super::position::Position;
use super::states::{Boundaries, NVec2, Rgba};
use super::vector::Vector;

/// Smallest mass a node is built with; keeps `f / m` finite
pub const MIN_MASS: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub velocity: Vector,
    mass: f64,
    pub bounce_damp: f64, // fraction of velocity kept after hitting a wall
    pub size: f64,        // side of the drawn square
    pub inset: f64,       // margin taken off each side of the usable range
    pub color: Rgba,
}

impl Node {
    pub fn new(x: f64, y: f64, mass: f64) -> Self {
        Self {
            x,
            y,
            velocity: Vector::default(),
            mass: if mass.is_finite() { mass.max(MIN_MASS) } else { 1.0 },
            bounce_damp: 0.8,
            size: 2.0,
            inset: 0.0,
            color: Rgba::new(0, 160, 255, 1.0),
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_bounce_damp(mut self, bounce_damp: f64) -> Self {
        self.bounce_damp = bounce_damp.clamp(0.0, 1.0);
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Distance travelled per tick
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Advance one tick: drag, optional force, drift, then wall bounces
    pub fn update(&mut self, drag: f64, force: Option<&Vector>, bounds: &Boundaries) {
        self.drag(drag);
        if let Some(f) = force {
            self.apply_force(f);
        }
        self.x += self.velocity.x();
        self.y += self.velocity.y();
        self.check_collisions(bounds);
    }

    pub fn drag(&mut self, d: f64) {
        let d = if d.is_finite() { d } else { 0.0 };
        self.velocity.set_magnitude(self.velocity.magnitude() * (1.0 - d));
    }

    pub fn apply_force(&mut self, f: &Vector) {
        self.velocity.set_x(self.velocity.x() + f.x() / self.mass);
        self.velocity.set_y(self.velocity.y() + f.y() / self.mass);
    }

    /// Reflect off each axis independently. A corner hit bounces on both.
    pub fn check_collisions(&mut self, bounds: &Boundaries) {
        let b = self.bounce_damp;

        let (lo, hi) = bounds.x_range(self.inset);
        if self.x < lo || self.x > hi {
            self.velocity.set_x(self.velocity.x() * -b);
            self.velocity.set_y(self.velocity.y() * b);
            let wall = if self.x < lo { lo } else { hi };
            self.x += (1.0 + b) * (wall - self.x);
            self.x = self.x.max(lo).min(hi);
        }

        let (lo, hi) = bounds.y_range(self.inset);
        if self.y < lo || self.y > hi {
            self.velocity.set_y(self.velocity.y() * -b);
            self.velocity.set_x(self.velocity.x() * b);
            let wall = if self.y < lo { lo } else { hi };
            self.y += (1.0 + b) * (wall - self.y);
            self.y = self.y.max(lo).min(hi);
        }
    }
}

impl Position for Node {
    fn position(&self) -> NVec2 {
        NVec2::new(self.x, self.y)
    }
}
