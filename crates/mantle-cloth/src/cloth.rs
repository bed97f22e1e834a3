//! Cloth: owner of the segment and constraint arenas.
//!
//! Both arrays are allocated once at construction and never resized.
//! Constraints refer to segments by [`SegmentId`]; the only mutable
//! access to segments goes through [`Cloth`] itself.

use mantle_math::{Vec2, Vec3};
use mantle_types::constants::SQRT_2;
use mantle_types::{ConstraintId, MantleError, MantleResult, SegmentId};

use crate::constraint::{Constraint, ConstraintKind};
use crate::dimensions::ClothDimensions;
use crate::segment::Segment;

/// A rectangular grid of point masses tied together by length constraints.
///
/// # Layout
///
/// Segments are row-major, index `y * width + x`, with row 0 being the
/// anchored edge:
/// ```text
/// 0 ─ 1 ─ 2     (anchored)
/// │ ╳ │ ╳ │
/// 3 ─ 4 ─ 5
/// ```
#[derive(Debug, Clone)]
pub struct Cloth {
    dimensions: ClothDimensions,
    segments: Vec<Segment>,
    constraints: Vec<Constraint>,
    segment_drag_variance: f32,
    stretch_threshold: f32,
}

impl Cloth {
    /// Creates a cloth hanging from `initial_position`.
    ///
    /// Every segment starts one segment size below `initial_position`
    /// (Y grows downward), at rest and unanchored. The full constraint
    /// topology is built here, once.
    ///
    /// `segment_drag_variance` is clamped to `[0, 1]`; a non-finite value
    /// disables the per-segment jitter.
    pub fn new(
        initial_position: Vec2,
        dimensions: ClothDimensions,
        segment_drag_variance: f32,
        stretch_threshold: f32,
    ) -> Self {
        let size = dimensions.segment_size();
        let start = Vec3::new(initial_position.x, initial_position.y + size, 0.0);

        let segments = vec![Segment::at_rest(start); dimensions.total_segments()];
        let constraints = build_constraints(&dimensions);

        debug_assert_eq!(constraints.len(), dimensions.total_constraints());
        tracing::debug!(
            width = dimensions.width_segments(),
            length = dimensions.length_segments(),
            segments = segments.len(),
            constraints = constraints.len(),
            "cloth created"
        );

        Self {
            dimensions,
            segments,
            constraints,
            segment_drag_variance: sanitize_variance(segment_drag_variance),
            stretch_threshold,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &ClothDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Maximum relative per-axis jitter applied to forces on each segment.
    #[inline]
    pub fn segment_drag_variance(&self) -> f32 {
        self.segment_drag_variance
    }

    /// Ratio (rest / current length) below which relaxation ignores collisions.
    #[inline]
    pub fn stretch_threshold(&self) -> f32 {
        self.stretch_threshold
    }

    /// Returns the segment at `id`.
    pub fn segment(&self, id: SegmentId) -> MantleResult<&Segment> {
        let len = self.segments.len();
        self.segments
            .get(id.index())
            .ok_or(MantleError::IndexOutOfBounds {
                what: "segment",
                index: id.0 as i64,
                len,
            })
    }

    /// Returns the constraint at `id`.
    pub fn constraint(&self, id: ConstraintId) -> MantleResult<&Constraint> {
        let len = self.constraints.len();
        self.constraints
            .get(id.index())
            .ok_or(MantleError::IndexOutOfBounds {
                what: "constraint",
                index: id.0 as i64,
                len,
            })
    }

    /// Mutable segments alongside the read-only constraint list.
    ///
    /// This is the split borrow the simulator iterates with: constraints
    /// are read while the segments they name are moved.
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut [Segment], &[Constraint]) {
        (&mut self.segments, &self.constraints)
    }

    /// Marks a segment as anchored, optionally moving it to `position`.
    ///
    /// Called every tick for the top row to re-pin it to the moving frame.
    /// Only `position` is overwritten; the previous position is kept.
    ///
    /// # Errors
    /// [`MantleError::IndexOutOfBounds`] when `index` is negative or past
    /// the last segment.
    pub fn anchor_segment(&mut self, index: isize, position: Option<Vec3>) -> MantleResult<()> {
        let len = self.segments.len();
        let segment = usize::try_from(index)
            .ok()
            .and_then(|i| self.segments.get_mut(i))
            .ok_or(MantleError::IndexOutOfBounds {
                what: "segment",
                index: index as i64,
                len,
            })?;

        segment.is_anchored = true;
        if let Some(position) = position {
            segment.position = position;
        }
        Ok(())
    }

    /// Releases an anchored segment back into the simulation.
    pub fn release_segment(&mut self, id: SegmentId) -> MantleResult<()> {
        let len = self.segments.len();
        let segment = self
            .segments
            .get_mut(id.index())
            .ok_or(MantleError::IndexOutOfBounds {
                what: "segment",
                index: id.0 as i64,
                len,
            })?;
        segment.is_anchored = false;
        Ok(())
    }

    /// Current length of a constraint divided by its rest length.
    ///
    /// `1.0` is satisfied, above is stretched, below is compressed.
    pub fn constraint_strain(&self, constraint: &Constraint) -> f32 {
        let a = self.segments[constraint.a.index()].position;
        let b = self.segments[constraint.b.index()].position;
        (b - a).length() / constraint.rest_length
    }

    /// Largest [`constraint_strain`](Self::constraint_strain) over all constraints.
    pub fn max_strain(&self) -> f32 {
        self.constraints
            .iter()
            .map(|c| self.constraint_strain(c))
            .fold(0.0, f32::max)
    }
}

/// Builds the constraint list, scanning only forward and downward from
/// each segment so every pair is created exactly once.
fn sanitize_variance(variance: f32) -> f32 {
    if variance.is_finite() {
        variance.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn build_constraints(dims: &ClothDimensions) -> Vec<Constraint> {
    let width = dims.width_segments();
    let length = dims.length_segments();
    let straight = dims.segment_size();
    let diagonal = straight * SQRT_2;

    let mut constraints = Vec::with_capacity(dims.total_constraints());

    for index in 0..dims.total_segments() {
        let left = index % width;
        let right = width - (left + 1);
        let below = length - (index / width + 1);

        let mut link = |offset: usize, rest_length: f32, kind: ConstraintKind| {
            constraints.push(Constraint::new(
                SegmentId(index as u32),
                SegmentId((index + offset) as u32),
                rest_length,
                kind,
            ));
        };

        if right >= 1 {
            link(1, straight, ConstraintKind::Structural);
            if below >= 1 {
                link(width + 1, diagonal, ConstraintKind::Shear);
            }
            if right >= 2 {
                link(2, straight * 2.0, ConstraintKind::Bending);
                if below >= 2 {
                    link(width * 2 + 2, diagonal * 2.0, ConstraintKind::Bending);
                }
            }
        }

        if below >= 1 {
            link(width, straight, ConstraintKind::Structural);
            if left >= 1 {
                link(width - 1, diagonal, ConstraintKind::Shear);
            }
            if below >= 2 {
                link(width * 2, straight * 2.0, ConstraintKind::Bending);
                if left >= 2 {
                    link(width * 2 - 2, diagonal * 2.0, ConstraintKind::Bending);
                }
            }
        }
    }

    constraints
}
