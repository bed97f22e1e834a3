//! Integration tests for mantle-bench.

use mantle_bench::{BenchmarkMetrics, BenchmarkRunner, Scenario, ScenarioKind};
use mantle_cape::Facing;
use mantle_contact::SolidQuery;
use mantle_math::Vec2;

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 4);
}

#[test]
fn scenario_names_roundtrip() {
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
        assert_eq!(Scenario::from_kind(kind).kind, kind);
    }
    assert_eq!(ScenarioKind::from_name("hanging_sheet"), None);
}

#[test]
fn walking_moves_the_wearer() {
    let s = Scenario::walking();
    assert_eq!(s.center_at(0), s.start);
    assert_eq!(s.center_at(10), s.start + Vec2::new(20.0, 0.0));
}

#[test]
fn wall_press_has_wall_behind_wearer() {
    let s = Scenario::wall_press();
    assert_eq!(s.facing, Facing::Left);
    assert!(s.wind_speed > 0.0);
    assert_eq!(s.world.len(), 2);
    assert!(s.world.is_position_solid(Vec2::new(20.0, 0.0)));
    assert!(!s.world.is_position_solid(Vec2::new(0.0, 0.0)));
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_idle() {
    let scenario = Scenario::idle().with_frames(5);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "idle");
    assert_eq!(metrics.frames, 5);
    assert_eq!(metrics.segment_count, 60);
    assert!(metrics.total_wall_time >= 0.0);
    assert!(metrics.max_extent > 0.0);
    assert!(metrics.final_max_strain.is_finite());
}

#[test]
fn run_all_scenarios_briefly() {
    let results = BenchmarkRunner::run_kinds(ScenarioKind::all(), Some(3)).unwrap();
    assert_eq!(results.len(), 4);
    for (metrics, kind) in results.iter().zip(ScenarioKind::all()) {
        assert_eq!(metrics.scenario, kind.name());
        assert_eq!(metrics.frames, 3);
    }
}

#[test]
fn zero_frames_is_harmless() {
    let metrics = BenchmarkRunner::run(&Scenario::windy().with_frames(0)).unwrap();
    assert_eq!(metrics.frames, 0);
    assert_eq!(metrics.avg_step_time, 0.0);
    assert_eq!(metrics.min_step_time, 0.0);
}

#[test]
fn wall_press_suppresses_corrections() {
    let metrics = BenchmarkRunner::run(&Scenario::wall_press().with_frames(120)).unwrap();
    assert!(metrics.total_held + metrics.total_suppressed > 0);
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample() -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: "test".into(),
        frames: 100,
        segment_count: 60,
        constraint_count: 300,
        triangle_count: 240,
        total_wall_time: 1.5,
        avg_step_time: 0.015,
        min_step_time: 0.01,
        max_step_time: 0.02,
        total_held: 4,
        total_suppressed: 12,
        final_max_strain: 1.05,
        max_extent: 42.0,
    }
}

#[test]
fn metrics_csv_output() {
    let csv = BenchmarkMetrics::to_csv(&[sample(), sample()]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);

    let columns = lines[0].split(',').count();
    assert!(lines.iter().all(|l| l.split(',').count() == columns));
    assert!(lines[1].starts_with("test,100,60,300,240,"));
}

#[test]
fn metrics_json_roundtrip() {
    let json = serde_json::to_string(&sample()).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.total_suppressed, 12);
    assert_eq!(recovered.scenario, "test");
}
