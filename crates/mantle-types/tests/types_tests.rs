//! Integration tests for mantle-types.

use mantle_types::{ConstraintId, MantleError, SegmentId, VertexId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn segment_id_index() {
    let id = SegmentId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn constraint_and_vertex_id_index() {
    assert_eq!(ConstraintId(7).index(), 7);
    assert_eq!(VertexId::from(3).index(), 3);
}

#[test]
fn segment_ids_order_by_index() {
    assert!(SegmentId(1) < SegmentId(2));
}

#[test]
fn ids_are_serializable() {
    let id = SegmentId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: SegmentId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn out_of_range_names_parameter() {
    let err = MantleError::below_minimum("width_segments", 1, 2);
    let msg = err.to_string();
    assert!(msg.contains("width_segments"));
    assert!(msg.contains('2'));
}

#[test]
fn index_out_of_bounds_display() {
    let err = MantleError::IndexOutOfBounds {
        what: "segment",
        index: -1,
        len: 4,
    };
    let msg = err.to_string();
    assert!(msg.contains("-1"));
    assert!(msg.contains("length 4"));
}

#[test]
fn position_count_display() {
    let err = MantleError::PositionCount {
        expected: 9,
        actual: 4,
    };
    assert_eq!(err.to_string(), "Expected 9 positions, got 4");
}
