//! Simulator configuration.

use serde::{Deserialize, Serialize};

use mantle_types::constants::{DEFAULT_CONSTRAINT_PASSES, DEFAULT_DAMPING};

/// Tuning for one [`ClothSimulator`](crate::ClothSimulator) invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Fraction of the previous tick's motion removed each tick
    /// (0.0 = no damping, 1.0 = no carried momentum).
    pub damping: f32,

    /// Relaxation passes per tick. More passes stiffen the cloth and
    /// keep it stable under fast motion at the cost of CPU time.
    /// Zero or negative disables relaxation entirely.
    pub constraint_passes: i32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            constraint_passes: DEFAULT_CONSTRAINT_PASSES,
        }
    }
}

impl SimulatorConfig {
    /// Cheap and floppy; for distant or background capes.
    pub fn low_quality() -> Self {
        Self {
            constraint_passes: 2,
            ..Default::default()
        }
    }

    /// Stiff and stable under fast movement.
    pub fn high_quality() -> Self {
        Self {
            constraint_passes: 24,
            ..Default::default()
        }
    }
}
