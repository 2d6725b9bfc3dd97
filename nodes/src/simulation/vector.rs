//! Polar/Cartesian 2D vector
//!
//! A `Vector` stores both representations, (magnitude, angle) and (x, y),
//! and every setter restores the other one:
//! - `set_x` / `set_y` recompute magnitude and angle from the stored x, y
//! - `set_magnitude` / `set_angle` recompute x and y from the stored polar pair
//!
//! Setters are sequential: `set_x` followed by `set_y` reads the y that was
//! stored before the second call, not a re-derived one.

use super::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    magnitude: f64,
    angle: f64,
    x: f64,
    y: f64,
}

/// Missing or unusable numbers become 0 instead of poisoning the state
fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

impl Vector {
    /// Build from polar components
    pub fn new(magnitude: f64, angle: f64) -> Self {
        let mut v = Self {
            magnitude: sanitize(magnitude),
            angle: sanitize(angle),
            x: 0.0,
            y: 0.0,
        };
        v.update_xy();
        v
    }

    /// Build from Cartesian components
    pub fn from_xy(x: f64, y: f64) -> Self {
        let mut v = Self {
            magnitude: 0.0,
            angle: 0.0,
            x: sanitize(x),
            y: sanitize(y),
        };
        v.update_ma();
        v
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn to_nvec(&self) -> NVec2 {
        NVec2::new(self.x, self.y)
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = sanitize(x);
        self.update_ma();
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = sanitize(y);
        self.update_ma();
    }

    pub fn set_magnitude(&mut self, m: f64) {
        self.magnitude = sanitize(m);
        self.update_xy();
    }

    pub fn set_angle(&mut self, a: f64) {
        self.angle = sanitize(a);
        self.update_xy();
    }

    fn update_ma(&mut self) {
        self.magnitude = self.x.hypot(self.y);
        self.angle = self.y.atan2(self.x);
    }

    fn update_xy(&mut self) {
        self.x = self.magnitude * self.angle.cos();
        self.y = self.magnitude * self.angle.sin();
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
