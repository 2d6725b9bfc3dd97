//! Shared "has a position" capability for nodes and shock waves

use super::states::NVec2;

pub trait Position {
    fn position(&self) -> NVec2;

    /// Euclidean distance to `other`
    fn distance_to<P: Position + ?Sized>(&self, other: &P) -> f64 {
        (other.position() - self.position()).norm()
    }

    /// Angle in radians of the direction from `self` towards `other`
    fn angle_to<P: Position + ?Sized>(&self, other: &P) -> f64 {
        let d = other.position() - self.position();
        d.y.atan2(d.x)
    }
}

impl Position for NVec2 {
    fn position(&self) -> NVec2 {
        *self
    }
}
