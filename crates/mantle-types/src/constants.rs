//! Simulation constants and defaults.
//!
//! World space follows screen conventions: X grows to the right,
//! Y grows downward, Z points out of the screen towards the viewer.

/// √2, the rest-length factor of diagonal (shear) constraints.
pub const SQRT_2: f32 = std::f32::consts::SQRT_2;

/// Minimum segments along either grid axis.
pub const MIN_GRID_SEGMENTS: i32 = 2;

/// Minimum segment edge length (world units).
pub const MIN_SEGMENT_SIZE: i32 = 1;

/// Edge length of one world tile (world units). Lighting is sampled per tile.
pub const TILE_SIZE: f32 = 16.0;

/// Default velocity damping applied by the Verlet integrator.
pub const DEFAULT_DAMPING: f32 = 0.1;

/// Default number of constraint relaxation passes per tick.
pub const DEFAULT_CONSTRAINT_PASSES: i32 = 8;

/// Default stretch threshold (rest / current length) below which
/// collision blocking is ignored during relaxation.
pub const DEFAULT_STRETCH_THRESHOLD: f32 = 0.75;
