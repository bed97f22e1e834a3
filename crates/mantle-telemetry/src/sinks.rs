//! Pluggable event sinks.

use std::sync::{Arc, Mutex, PoisonError};

use crate::events::SimulationEvent;

/// Consumer of simulation events.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called once when the simulation ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Handle onto the events collected by a [`VecSink`], readable after the
/// sink has been boxed into a bus.
#[derive(Debug, Clone, Default)]
pub struct SharedEvents(Arc<Mutex<Vec<SimulationEvent>>>);

impl SharedEvents {
    /// Copy of everything collected so far.
    pub fn snapshot(&self) -> Vec<SimulationEvent> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of collected events with the given [`label`](SimulationEvent::label).
    pub fn count(&self, label: &str) -> usize {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.label() == label)
            .count()
    }
}

/// Collects events in memory for tests and inspection.
#[derive(Debug, Default)]
pub struct VecSink {
    events: SharedEvents,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that keeps seeing this sink's events.
    pub fn events(&self) -> SharedEvents {
        self.events.clone()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards events to `tracing` at a fixed level.
pub struct TracingSink {
    level: tracing::Level,
    handled: u64,
}

impl TracingSink {
    pub fn new(level: tracing::Level) -> Self {
        Self { level, handled: 0 }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.handled += 1;
        let label = event.label();
        if self.level == tracing::Level::ERROR {
            tracing::error!(frame = event.frame, label, event = ?event.kind, "simulation_event");
        } else if self.level == tracing::Level::WARN {
            tracing::warn!(frame = event.frame, label, event = ?event.kind, "simulation_event");
        } else if self.level == tracing::Level::INFO {
            tracing::info!(frame = event.frame, label, event = ?event.kind, "simulation_event");
        } else if self.level == tracing::Level::DEBUG {
            tracing::debug!(frame = event.frame, label, event = ?event.kind, "simulation_event");
        } else {
            tracing::trace!(frame = event.frame, label, event = ?event.kind, "simulation_event");
        }
    }

    fn finalize(&mut self) {
        tracing::debug!(handled = self.handled, "tracing sink finished");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
