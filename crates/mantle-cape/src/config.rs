//! Cape configuration.
//!
//! A [`CapeConfig`] fully describes one kind of cape: where it hangs on
//! its wearer, its grid, the shape of its anchored edge, and how it
//! reacts to gravity and wind. Configs are plain serde values and are
//! usually loaded from TOML.

use serde::{Deserialize, Serialize};

use mantle_cloth::{AnchorCurve, ClothDimensions};
use mantle_math::Vec2;
use mantle_solver::{SimulatorConfig, WindProperties};
use mantle_types::constants::{DEFAULT_CONSTRAINT_PASSES, DEFAULT_DAMPING, DEFAULT_STRETCH_THRESHOLD};
use mantle_types::{MantleError, MantleResult};

use crate::facing::Facing;
use crate::validator::validate_config;

/// How a cape responds to forces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalProperties {
    /// Fraction of the total force removed before simulation (0.0 to 1.0).
    pub drag: f32,
    /// Per-segment random jitter applied to the force on each axis.
    pub segment_drag_variance: f32,
    /// Downward acceleration per tick (world units, Y grows downward).
    pub gravity_factor: f32,
    /// Constraint ratio (rest / current) below which relaxation ignores
    /// collisions.
    pub stretch_threshold: f32,
    pub wind: WindProperties,
}

impl Default for PhysicalProperties {
    fn default() -> Self {
        Self {
            drag: 0.1,
            segment_drag_variance: 0.2,
            gravity_factor: 0.35,
            stretch_threshold: DEFAULT_STRETCH_THRESHOLD,
            wind: WindProperties::default(),
        }
    }
}

impl PhysicalProperties {
    /// Stiff, heavy fabric barely moved by wind.
    pub fn heavy() -> Self {
        Self {
            drag: 0.25,
            segment_drag_variance: 0.05,
            gravity_factor: 0.6,
            wind: WindProperties {
                wind_factor: 0.2,
                ..WindProperties::default()
            },
            ..Self::default()
        }
    }

    /// Light silk that billows in any breeze.
    pub fn light() -> Self {
        Self {
            drag: 0.05,
            segment_drag_variance: 0.35,
            gravity_factor: 0.2,
            wind: WindProperties {
                wind_factor: 1.0,
                flutter_speed: 0.35,
                flutter_strength: 0.5,
            },
            ..Self::default()
        }
    }
}

/// Complete description of a cape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapeConfig {
    /// Identifies the config to a host that swaps between several.
    #[serde(default)]
    pub id: u32,
    /// Offset of the anchor from the wearer's center, for a wearer
    /// facing right. X is mirrored when facing left.
    #[serde(default)]
    pub offset: Vec2,
    #[serde(default = "default_damping")]
    pub default_damping: f32,
    #[serde(default = "default_constraint_passes")]
    pub constraint_passes: i32,
    pub dimensions: ClothDimensions,
    #[serde(default)]
    pub anchor: AnchorCurve,
    #[serde(default)]
    pub physical: PhysicalProperties,
}

fn default_damping() -> f32 {
    DEFAULT_DAMPING
}

fn default_constraint_passes() -> i32 {
    DEFAULT_CONSTRAINT_PASSES
}

impl Default for CapeConfig {
    fn default() -> Self {
        Self {
            id: 0,
            offset: Vec2::new(-4.0, -10.0),
            default_damping: DEFAULT_DAMPING,
            constraint_passes: DEFAULT_CONSTRAINT_PASSES,
            dimensions: ClothDimensions::default(),
            anchor: AnchorCurve::default(),
            physical: PhysicalProperties::default(),
        }
    }
}

impl CapeConfig {
    /// Parses and validates a config from TOML.
    ///
    /// # Errors
    /// [`MantleError::Serialization`] for malformed TOML or invalid
    /// dimensions; [`MantleError::InvalidConfig`] when a value fails
    /// [`validate_config`].
    pub fn from_toml_str(text: &str) -> MantleResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| MantleError::Serialization(e.to_string()))?;
        validate_config(&config)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> MantleResult<String> {
        toml::to_string_pretty(self).map_err(|e| MantleError::Serialization(e.to_string()))
    }

    /// World position the cape hangs from for a wearer centered at
    /// `center`.
    pub fn attachment_point(&self, center: Vec2, facing: Facing) -> Vec2 {
        center + Vec2::new(self.offset.x * facing.sign(), self.offset.y)
    }

    /// Simulator settings this cape runs with by default.
    pub fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig {
            damping: self.default_damping,
            constraint_passes: self.constraint_passes,
        }
    }
}
