//! Benchmark scenarios: a cape config, a scripted wearer, and a world.
//!
//! 1. **Idle**: wearer stands still above the ground, no wind
//! 2. **Walking**: wearer walks right at a steady pace
//! 3. **Windy**: wearer stands in a strong fluttering wind
//! 4. **Wall press**: wind pushes the cape into a wall behind the wearer

use serde::{Deserialize, Serialize};

use mantle_cape::{CapeConfig, Facing};
use mantle_contact::{BoxCollider, GroundPlane, Union};
use mantle_math::Vec2;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Idle,
    Walking,
    Windy,
    WallPress,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::Idle,
            ScenarioKind::Walking,
            ScenarioKind::Windy,
            ScenarioKind::WallPress,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Idle => "idle",
            ScenarioKind::Walking => "walking",
            ScenarioKind::Windy => "windy",
            ScenarioKind::WallPress => "wall_press",
        }
    }

    /// Parses a scenario name as printed by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    pub kind: ScenarioKind,
    pub config: CapeConfig,
    /// Frames to simulate.
    pub frames: u32,
    /// Wearer center at frame 0.
    pub start: Vec2,
    /// Wearer displacement per frame.
    pub velocity: Vec2,
    pub facing: Facing,
    /// Constant ambient wind speed.
    pub wind_speed: f32,
    /// Visual-effects clock advance per frame.
    pub time_step: f64,
    pub world: Union,
    /// Seed for the drag-variance RNG.
    pub seed: u64,
}

/// Feet of a wearer standing at the origin.
const GROUND: f32 = 24.0;

impl Scenario {
    /// Standing still for five seconds at 60 frames per second.
    pub fn idle() -> Self {
        Self {
            kind: ScenarioKind::Idle,
            config: CapeConfig::default(),
            frames: 300,
            start: Vec2::ZERO,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            wind_speed: 0.0,
            time_step: 1.0,
            world: Union::new().with(GroundPlane::new(GROUND)),
            seed: 1,
        }
    }

    /// Walking right at two units per frame.
    pub fn walking() -> Self {
        Self {
            kind: ScenarioKind::Walking,
            velocity: Vec2::new(2.0, 0.0),
            seed: 2,
            ..Self::idle()
        }
    }

    /// Standing in a strong wind.
    pub fn windy() -> Self {
        Self {
            kind: ScenarioKind::Windy,
            wind_speed: 8.0,
            seed: 3,
            ..Self::idle()
        }
    }

    /// Facing left with a wall just behind; the wind blows the cape
    /// into the wall.
    pub fn wall_press() -> Self {
        Self {
            kind: ScenarioKind::WallPress,
            facing: Facing::Left,
            wind_speed: 6.0,
            world: Union::new()
                .with(GroundPlane::new(GROUND))
                .with(BoxCollider::wall_right_of(16.0, -200.0, GROUND)),
            seed: 4,
            ..Self::idle()
        }
    }

    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Idle => Self::idle(),
            ScenarioKind::Walking => Self::walking(),
            ScenarioKind::Windy => Self::windy(),
            ScenarioKind::WallPress => Self::wall_press(),
        }
    }

    /// Overrides the frame count.
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Runs the scenario with a different cape.
    pub fn with_config(mut self, config: CapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Wearer center at `frame`.
    pub fn center_at(&self, frame: u32) -> Vec2 {
        self.start + self.velocity * frame as f32
    }
}
