//! Force laws acting on nodes
//!
//! Each law implements [`Force`] and returns the force vector a given node
//! feels; the node divides it by its own mass when it applies it.
//! - [`UniformGravity`]  the same vector for every node
//! - [`RadialImpulse`]   shock wave push, `magnitude / distance`, away from origin

use super::node::Node;
use super::position::Position;
use super::states::NVec2;
use super::vector::Vector;

pub trait Force {
    fn force_on(&self, node: &Node) -> Vector;
}

/// Constant field, built once from (force, direction)
#[derive(Debug, Clone, Copy)]
pub struct UniformGravity(pub Vector);

impl UniformGravity {
    pub fn new(force: f64, direction: f64) -> Self {
        Self(Vector::new(force, direction))
    }
}

impl Force for UniformGravity {
    fn force_on(&self, _node: &Node) -> Vector {
        self.0
    }
}

/// One-shot radial push with an inverse-distance falloff
///
/// The `1 / d` law diverges at the origin, so `d` is floored at
/// `min_distance`. A node sitting exactly on the origin is pushed along +x.
#[derive(Debug, Clone, Copy)]
pub struct RadialImpulse {
    pub origin: NVec2,
    pub magnitude: f64,
    pub min_distance: f64,
}

impl Force for RadialImpulse {
    fn force_on(&self, node: &Node) -> Vector {
        let d = self.origin.distance_to(node).max(self.min_distance);
        Vector::new(self.magnitude / d, self.origin.angle_to(node))
    }
}
