//! Ground plane collision.
//!
//! World Y grows downward, so the ground is everything at or below
//! (numerically greater than or equal to) `height`.

use serde::{Deserialize, Serialize};

use mantle_math::Vec2;

use crate::query::SolidQuery;

/// Solid floor at a fixed Y height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundPlane {
    /// Y coordinate of the floor surface.
    pub height: f32,
}

impl GroundPlane {
    /// Creates a new ground plane at the given height.
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl SolidQuery for GroundPlane {
    fn is_position_solid(&self, position: Vec2) -> bool {
        position.y >= self.height
    }

    fn name(&self) -> &str {
        "ground_plane"
    }
}
