//! Horizontal facing of the cape's wearer.

use serde::{Deserialize, Serialize};

/// Which way the wearer faces. Anchor offsets are mirrored in X for
/// [`Facing::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// `-1.0` for left, `1.0` for right.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing from a host direction value; negative means left.
    pub fn from_direction(direction: i32) -> Self {
        if direction < 0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}
