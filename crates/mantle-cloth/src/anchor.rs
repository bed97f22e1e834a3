//! Anchor curve: pins the top row of a cloth to a moving frame.
//!
//! The curve runs from `start_point` to `end_point` in the XY plane.
//! When the nominal anchor length is longer than that span, the end of
//! the curve is pushed forward along Z so the anchored edge domes out
//! instead of compressing, which reads as the cloth bunching up.

use serde::{Deserialize, Serialize};

use mantle_math::{hermite, Vec2, Vec3};

/// Hermite-interpolated anchoring curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorCurve {
    pub start_point: Vec2,
    pub end_point: Vec2,
    pub start_tangent: Vec3,
    pub end_tangent: Vec3,
    /// Constant offset applied to every anchor, scaled by half a segment.
    pub direction: Vec3,
    /// How far the curve domes forward when the span is too short.
    pub scrunch: f32,
}

impl AnchorCurve {
    pub fn new(
        start_point: Vec2,
        end_point: Vec2,
        start_tangent: Vec3,
        end_tangent: Vec3,
        direction: Vec3,
        scrunch: f32,
    ) -> Self {
        Self {
            start_point,
            end_point,
            start_tangent,
            end_tangent,
            direction,
            scrunch,
        }
    }

    /// A straight anchor of the given span with chord tangents and no
    /// offset; useful for tests and headless scenarios.
    pub fn straight(span: f32) -> Self {
        let chord = Vec3::new(span, 0.0, 0.0);
        Self::new(Vec2::ZERO, Vec2::new(span, 0.0), chord, chord, Vec3::ZERO, 0.0)
    }

    /// Length of the curve's XY span (`|end − start|`).
    pub fn span_length(&self) -> f32 {
        (self.end_point - self.start_point).length()
    }

    /// Offset of the anchor for a segment at `progress ∈ [0, 1]` along the
    /// anchored edge, relative to the anchor frame origin.
    pub fn segment_offset(&self, anchor_length: f32, segment_size: f32, progress: f32) -> Vec3 {
        let end = self.end_point.extend(self.dome_depth(anchor_length));
        self.direction * segment_size * 0.5
            + hermite(
                self.start_point.extend(0.0),
                self.start_tangent,
                end,
                self.end_tangent,
                progress,
            )
    }

    /// Z of the curve end: zero when the span covers `anchor_length`,
    /// otherwise the missing length scaled by `scrunch`.
    pub fn dome_depth(&self, anchor_length: f32) -> f32 {
        let span_squared = (self.end_point - self.start_point).length_squared();
        let anchor_squared = anchor_length * anchor_length;
        if span_squared >= anchor_squared {
            return 0.0;
        }
        (anchor_squared - span_squared).sqrt() * self.scrunch
    }
}

impl Default for AnchorCurve {
    /// Shoulder-to-shoulder anchor of a small cape, curving slightly
    /// backwards at both ends.
    fn default() -> Self {
        Self::new(
            Vec2::new(-8.0, 0.0),
            Vec2::new(8.0, 0.0),
            Vec3::new(0.0, 0.0, -8.0),
            Vec3::new(0.0, 0.0, 8.0),
            Vec3::new(0.0, 1.0, 0.0),
            0.5,
        )
    }
}
