//! # mantle-types
//!
//! Shared identifiers, error types, and simulation constants
//! for the mantle cape simulation engine.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other mantle crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{MantleError, MantleResult};
pub use ids::{ConstraintId, SegmentId, VertexId};
