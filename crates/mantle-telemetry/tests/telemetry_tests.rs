//! Integration tests for mantle-telemetry.

use mantle_telemetry::{EventBus, EventKind, EventSink, SimulationEvent, TracingSink, VecSink};

fn tick_begin(frame: u64) -> SimulationEvent {
    SimulationEvent::new(
        frame,
        EventKind::TickBegin {
            anchor: [10.0, 20.0],
            facing: 1,
        },
    )
}

#[test]
fn emit_and_flush_reaches_sink() {
    let sink = VecSink::new();
    let events = sink.events();
    let mut bus = EventBus::new().with_sink(sink);

    bus.emit(tick_begin(0));
    bus.emit(SimulationEvent::new(
        0,
        EventKind::TickEnd {
            max_strain: 1.1,
            wall_time: 0.001,
        },
    ));
    assert!(events.is_empty());

    assert_eq!(bus.flush(), 2);
    assert_eq!(events.len(), 2);
    assert_eq!(events.count("tick_begin"), 1);
    assert_eq!(events.count("tick_end"), 1);
}

#[test]
fn flush_preserves_emission_order() {
    let sink = VecSink::new();
    let events = sink.events();
    let mut bus = EventBus::new().with_sink(sink);

    for frame in 0..5 {
        bus.emit(tick_begin(frame));
    }
    bus.flush();

    let frames: Vec<u64> = events.snapshot().iter().map(|e| e.frame).collect();
    assert_eq!(frames, vec![0, 1, 2, 3, 4]);
}

#[test]
fn disabled_bus_drops_events() {
    let sink = VecSink::new();
    let events = sink.events();
    let mut bus = EventBus::new().with_sink(sink);

    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(tick_begin(0));
    assert_eq!(bus.flush(), 0);
    assert!(events.is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let a = VecSink::new();
    let b = VecSink::new();
    let (events_a, events_b) = (a.events(), b.events());
    let mut bus = EventBus::new().with_sink(a).with_sink(b);
    assert_eq!(bus.sink_count(), 2);

    bus.emit(tick_begin(3));
    bus.finalize();

    assert_eq!(events_a.snapshot(), events_b.snapshot());
    assert_eq!(events_a.len(), 1);
}

#[test]
fn tracing_sink_accepts_all_levels() {
    let levels = [
        tracing::Level::ERROR,
        tracing::Level::WARN,
        tracing::Level::INFO,
        tracing::Level::DEBUG,
        tracing::Level::TRACE,
    ];
    for level in levels {
        let mut sink = TracingSink::new(level);
        sink.handle(&tick_begin(0));
        sink.finalize();
        assert_eq!(sink.name(), "tracing_sink");
    }
}

#[test]
fn custom_event_label_is_its_own() {
    let event = SimulationEvent::new(
        1,
        EventKind::Custom {
            label: "rebuild".into(),
            payload: "{}".into(),
        },
    );
    assert_eq!(event.label(), "rebuild");
}

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::Relaxation {
            passes: 8,
            corrections_suppressed: 3,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("corrections_suppressed"));
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}
