//! # mantle-contact
//!
//! World collision for cape simulation.
//!
//! The solver never resolves contacts itself: it asks a read-only
//! [`SolidQuery`] whether a candidate position is inside solid geometry
//! and simply refuses the move when it is. This crate defines that
//! predicate and a few stock worlds:
//!
//! - [`OpenAir`]: nothing is solid
//! - [`GroundPlane`]: everything below a given height is solid
//! - [`BoxCollider`]: an axis-aligned solid rectangle
//! - [`TileMap`]: a grid of solid tiles

pub mod box_collider;
pub mod ground_plane;
pub mod query;
pub mod tile_map;

pub use box_collider::BoxCollider;
pub use ground_plane::GroundPlane;
pub use query::{OpenAir, SolidQuery, Union};
pub use tile_map::TileMap;
