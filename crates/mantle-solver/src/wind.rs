//! Wind force derivation.
//!
//! The ambient wind speed is scaled by a per-cape factor and modulated
//! by a sine "flutter" so that a constant breeze still animates.

use serde::{Deserialize, Serialize};

/// How a cape responds to ambient wind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindProperties {
    /// Multiplier on the ambient wind speed.
    pub wind_factor: f32,
    /// Angular speed of the flutter oscillation (radians per time unit).
    pub flutter_speed: f32,
    /// Relative amplitude of the flutter.
    pub flutter_strength: f32,
}

impl WindProperties {
    /// Horizontal wind force for the given ambient state:
    /// `wind_speed · wind_factor · (1 + sin(time · flutter_speed) · flutter_strength)`.
    pub fn force(&self, wind_speed: f32, time: f64) -> f32 {
        let base = wind_speed * self.wind_factor;
        let flutter = ((time * self.flutter_speed as f64).sin()) as f32;
        base * (1.0 + flutter * self.flutter_strength)
    }
}

impl Default for WindProperties {
    fn default() -> Self {
        Self {
            wind_factor: 0.5,
            flutter_speed: 0.2,
            flutter_strength: 0.3,
        }
    }
}
