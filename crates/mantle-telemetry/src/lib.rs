//! # mantle-telemetry
//!
//! Event bus for cape simulation telemetry. A cape model emits
//! structured events (tick boundaries, force and relaxation counters,
//! mesh lighting statistics) that are consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, SharedEvents, TracingSink, VecSink};
