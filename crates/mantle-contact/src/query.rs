//! Solid-world query trait.

use mantle_math::Vec2;

/// Read-only collision predicate over world positions.
///
/// Queried by the solver during force application and constraint
/// relaxation, potentially several times per segment per tick, so
/// implementations should be cheap.
///
/// # Implementations
/// - [`OpenAir`]: Never solid (headless runs, tests)
/// - [`GroundPlane`](crate::GroundPlane): Solid floor
/// - [`BoxCollider`](crate::BoxCollider): Solid rectangle
/// - [`TileMap`](crate::TileMap): Solid tile grid
pub trait SolidQuery {
    /// Returns true if `position` lies inside solid world geometry.
    fn is_position_solid(&self, position: Vec2) -> bool;

    /// Returns the world's name for logging.
    fn name(&self) -> &str;
}

/// A world with no solid geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAir;

impl SolidQuery for OpenAir {
    fn is_position_solid(&self, _position: Vec2) -> bool {
        false
    }

    fn name(&self) -> &str {
        "open_air"
    }
}

/// Solid wherever any of its member worlds is solid.
#[derive(Default)]
pub struct Union {
    members: Vec<Box<dyn SolidQuery>>,
}

impl Union {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member world.
    pub fn with(mut self, member: impl SolidQuery + 'static) -> Self {
        self.members.push(Box::new(member));
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl SolidQuery for Union {
    fn is_position_solid(&self, position: Vec2) -> bool {
        self.members.iter().any(|m| m.is_position_solid(position))
    }

    fn name(&self) -> &str {
        "union"
    }
}
