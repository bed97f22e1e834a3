//! Cubic Hermite spline interpolation.
//!
//! Blends two end points and their tangents with the standard
//! Hermite basis:
//!
//! ```text
//! h00 =  2t³ − 3t² + 1
//! h10 =   t³ − 2t² + t
//! h01 = −2t³ + 3t²
//! h11 =   t³ −  t²
//! ```

use glam::Vec3;

/// Evaluates the Hermite curve through `p0` (tangent `m0`) and `p1`
/// (tangent `m1`) at parameter `t`.
///
/// `t = 0` yields exactly `p0` and `t = 1` yields exactly `p1`;
/// values outside `[0, 1]` extrapolate the cubic.
///
/// # Example
/// ```
/// use mantle_math::{hermite, Vec3};
/// let p = hermite(Vec3::ZERO, Vec3::ZERO, Vec3::X, Vec3::ZERO, 0.5);
/// assert!((p.x - 0.5).abs() < 1e-6);
/// ```
pub fn hermite(p0: Vec3, m0: Vec3, p1: Vec3, m1: Vec3, t: f32) -> Vec3 {
    if t == 0.0 {
        return p0;
    }
    if t == 1.0 {
        return p1;
    }

    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11
}
