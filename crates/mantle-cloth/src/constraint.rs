//! Length constraints between two segments.

use mantle_types::SegmentId;

/// Topological role of a constraint in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Orthogonal neighbors.
    Structural,
    /// Diagonal neighbors.
    Shear,
    /// Neighbors two segments apart (row, column or diagonal).
    Bending,
}

/// Target distance between two segments, enforced by relaxation.
///
/// Segments are referenced by index into the owning cloth's segment
/// array, never by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub a: SegmentId,
    pub b: SegmentId,
    pub rest_length: f32,
    pub kind: ConstraintKind,
}

impl Constraint {
    pub fn new(a: SegmentId, b: SegmentId, rest_length: f32, kind: ConstraintKind) -> Self {
        Self {
            a,
            b,
            rest_length,
            kind,
        }
    }
}
