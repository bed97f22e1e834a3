//! Cloth segment (point mass).

use mantle_math::Vec3;

/// One simulated point mass of the cloth grid.
///
/// Velocity is implicit: it is the difference between `position`
/// and `previous_position` (position Verlet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub position: Vec3,
    pub previous_position: Vec3,
    /// Anchored segments are driven externally and never simulated.
    pub is_anchored: bool,
}

impl Segment {
    /// Creates a free segment at rest at `position`.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            previous_position: position,
            is_anchored: false,
        }
    }

    /// Displacement since the previous tick.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.position - self.previous_position
    }
}
