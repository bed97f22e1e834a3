//! Simulation event types.
//!
//! Events are small value types tagged with the frame that produced
//! them. They carry counters, not cloth state.

use serde::{Deserialize, Serialize};

/// An event emitted while simulating one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed, per cape model).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started; the top row has been re-anchored.
    TickBegin {
        /// Attachment point the cape follows (world units).
        anchor: [f32; 2],
        /// Facing sign, -1 for left and +1 for right.
        facing: i8,
    },

    /// Force integration finished.
    ForcesApplied {
        /// Total force, after drag.
        force: [f32; 2],
        /// Free segments that moved.
        moved: u32,
        /// Free segments held by collision.
        held: u32,
    },

    /// Constraint relaxation finished.
    Relaxation {
        passes: u32,
        /// Endpoint corrections refused because of collision.
        corrections_suppressed: u32,
    },

    /// Frame completed.
    TickEnd {
        /// Largest constraint stretch (current / rest length).
        max_strain: f32,
        /// Wall-clock time for the frame (seconds).
        wall_time: f64,
    },

    /// Vertex grid rewritten from the new corners.
    MeshPrepared {
        light_samples: u32,
        cache_hits: u32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }

    /// Short stable name of the payload variant.
    pub fn label(&self) -> &str {
        match &self.kind {
            EventKind::TickBegin { .. } => "tick_begin",
            EventKind::ForcesApplied { .. } => "forces_applied",
            EventKind::Relaxation { .. } => "relaxation",
            EventKind::TickEnd { .. } => "tick_end",
            EventKind::MeshPrepared { .. } => "mesh_prepared",
            EventKind::Custom { label, .. } => label,
        }
    }
}
