//! Point reflection helpers.

use glam::Vec3;

/// Reflects `point` through `center`: `center * 2 − point`.
///
/// Applying the same reflection twice returns the original point.
#[inline]
pub fn point_reflect(point: Vec3, center: Vec3) -> Vec3 {
    center - (point - center)
}

/// Midpoint of two positions.
#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}
