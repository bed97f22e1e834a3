//! Integration tests for mantle-math.

use mantle_math::{hermite, midpoint, point_reflect, Vec3};

fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

// ─── Hermite Tests ────────────────────────────────────────────

#[test]
fn hermite_hits_end_points() {
    let p0 = Vec3::new(1.0, 2.0, 3.0);
    let p1 = Vec3::new(-4.0, 5.0, 0.5);
    let m0 = Vec3::new(10.0, 0.0, 0.0);
    let m1 = Vec3::new(0.0, -10.0, 0.0);

    assert_eq!(hermite(p0, m0, p1, m1, 0.0), p0);
    assert_eq!(hermite(p0, m0, p1, m1, 1.0), p1);
}

#[test]
fn hermite_zero_tangents_is_smoothstep() {
    let p = hermite(Vec3::ZERO, Vec3::ZERO, Vec3::splat(2.0), Vec3::ZERO, 0.25);
    // smoothstep(0.25) = 3t² − 2t³ = 0.15625
    assert!(approx_eq(p, Vec3::splat(2.0 * 0.15625)));
}

#[test]
fn hermite_is_symmetric_at_midpoint() {
    let p = hermite(Vec3::ZERO, Vec3::ZERO, Vec3::new(8.0, 0.0, 0.0), Vec3::ZERO, 0.5);
    assert!(approx_eq(p, Vec3::new(4.0, 0.0, 0.0)));
}

#[test]
fn hermite_linear_tangents_reproduce_line() {
    // Tangents equal to the chord give a straight, uniformly parameterized line.
    let p0 = Vec3::ZERO;
    let p1 = Vec3::new(3.0, 6.0, 0.0);
    let chord = p1 - p0;
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!(approx_eq(hermite(p0, chord, p1, chord, t), p0 + chord * t));
    }
}

// ─── Reflection Tests ─────────────────────────────────────────

#[test]
fn reflect_through_center() {
    let p = Vec3::new(1.0, 1.0, 0.0);
    let m = Vec3::new(2.0, 0.0, 1.0);
    assert_eq!(point_reflect(p, m), Vec3::new(3.0, -1.0, 2.0));
}

#[test]
fn reflect_twice_is_identity() {
    let p = Vec3::new(-3.5, 7.25, 0.125);
    let m = Vec3::new(10.0, -2.0, 4.0);
    assert!(approx_eq(point_reflect(point_reflect(p, m), m), p));
}

#[test]
fn reflect_of_center_is_center() {
    let m = Vec3::new(5.0, 5.0, 5.0);
    assert_eq!(point_reflect(m, m), m);
}

#[test]
fn midpoint_basic() {
    assert_eq!(
        midpoint(Vec3::new(0.0, 2.0, 4.0), Vec3::new(2.0, 4.0, 0.0)),
        Vec3::new(1.0, 3.0, 2.0)
    );
}
