//! Ambient lighting interface.

use serde::{Deserialize, Serialize};

use mantle_math::IVec2;

use crate::color::Color;

/// How vertex colours are chosen when preparing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// Every vertex is white.
    FullBright,
    /// Every vertex takes the ambient light of the tile it lies in.
    #[default]
    PerSegment,
}

/// Samples the world's ambient light.
///
/// Supplied by the host. A grid samples each distinct tile at most once
/// per prepare, so implementations may be moderately expensive.
pub trait AmbientLight {
    /// Light colour at a tile coordinate.
    fn sample_ambient_light(&self, tile: IVec2) -> Color;

    /// Returns the light's name for logging.
    fn name(&self) -> &str;
}

/// The same colour everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniformLight(pub Color);

impl AmbientLight for UniformLight {
    fn sample_ambient_light(&self, _tile: IVec2) -> Color {
        self.0
    }

    fn name(&self) -> &str {
        "uniform"
    }
}
