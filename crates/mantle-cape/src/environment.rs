//! Ambient state supplied by the host each frame.

use serde::{Deserialize, Serialize};

/// Read-only view of the host world's ambient conditions.
pub trait Environment {
    /// Current horizontal wind speed. Positive blows towards +X.
    fn current_wind_speed(&self) -> f32;

    /// Monotonic clock driving cosmetic oscillations such as flutter.
    fn time_for_visual_effects(&self) -> f64;
}

/// An environment with explicitly set values, for headless runs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FixedEnvironment {
    pub wind_speed: f32,
    pub time: f64,
}

impl FixedEnvironment {
    /// No wind, clock at zero.
    pub fn calm() -> Self {
        Self::default()
    }

    pub fn with_wind(wind_speed: f32) -> Self {
        Self {
            wind_speed,
            time: 0.0,
        }
    }

    /// Moves the clock forward by `dt`.
    pub fn advance(&mut self, dt: f64) {
        self.time += dt;
    }
}

impl Environment for FixedEnvironment {
    fn current_wind_speed(&self) -> f32 {
        self.wind_speed
    }

    fn time_for_visual_effects(&self) -> f64 {
        self.time
    }
}
