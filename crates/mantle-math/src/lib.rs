//! # mantle-math
//!
//! Vector math primitives for the mantle simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, `IVec2`)
//! - Cubic Hermite interpolation for anchor curves
//! - Point reflection used to extrapolate cloth border vertices

pub mod hermite;
pub mod reflect;

pub use hermite::hermite;
pub use reflect::{midpoint, point_reflect};

// Re-export glam types as the canonical math types for mantle.
pub use glam::{IVec2, Vec2, Vec3};
