//! # mantle-cloth
//!
//! The physical representation of a cape: a rectangular grid of point
//! masses ("segments") tied together by length constraints.
//!
//! ## Key Types
//!
//! - [`ClothDimensions`]: Validated grid size and derived constraint counts
//! - [`Segment`]: One simulated point mass
//! - [`Constraint`]: Target distance between two segments (by index)
//! - [`AnchorCurve`]: Hermite curve pinning the top row to a moving frame
//! - [`Cloth`]: Owns segments and constraints; derives render corners

pub mod anchor;
pub mod cloth;
pub mod constraint;
pub mod corners;
pub mod dimensions;
pub mod segment;

pub use anchor::AnchorCurve;
pub use cloth::Cloth;
pub use constraint::{Constraint, ConstraintKind};
pub use dimensions::ClothDimensions;
pub use segment::Segment;
