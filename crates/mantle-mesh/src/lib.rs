//! # mantle-mesh
//!
//! Turns simulated cloth corners into a renderable triangle grid.
//!
//! The grid is a fixed `width × height` lattice of vertices. Its index
//! buffer is built once, and every frame only the vertex data is
//! rewritten from the cloth's corner positions.
//!
//! ## Key Types
//!
//! - [`VertexGrid`]: Vertex buffer plus static triangle indices
//! - [`GridVertex`]: Position, colour, and texture coordinate of one vertex
//! - [`AmbientLight`]: Host-provided light sampler, queried per tile
//! - [`LightingMode`]: Full-bright or per-tile lighting
//! - [`Color`]: 8-bit RGBA colour

pub mod color;
pub mod lighting;
pub mod vertex_grid;

pub use color::Color;
pub use lighting::{AmbientLight, LightingMode, UniformLight};
pub use vertex_grid::{GridVertex, PrepareStats, VertexGrid};
