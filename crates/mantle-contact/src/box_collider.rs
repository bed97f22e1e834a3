//! Axis-aligned rectangular collider.
//!
//! Suitable for walls and ledges the cape can press against.

use serde::{Deserialize, Serialize};

use mantle_math::Vec2;

use crate::query::SolidQuery;

/// Solid axis-aligned rectangle, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxCollider {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoxCollider {
    /// Creates a collider from two opposite corners in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// A wall occupying everything from `x` rightwards within `[top, bottom]`.
    pub fn wall_right_of(x: f32, top: f32, bottom: f32) -> Self {
        Self::new(Vec2::new(x, top), Vec2::new(f32::MAX, bottom))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl SolidQuery for BoxCollider {
    fn is_position_solid(&self, position: Vec2) -> bool {
        self.contains(position)
    }

    fn name(&self) -> &str {
        "box_collider"
    }
}
