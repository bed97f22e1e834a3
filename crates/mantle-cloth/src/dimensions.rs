//! Validated cloth grid dimensions.
//!
//! A cloth one segment wide or tall has no well-defined surface normal,
//! so both grid axes must hold at least two segments.

use serde::{Deserialize, Serialize};

use mantle_types::constants::{MIN_GRID_SEGMENTS, MIN_SEGMENT_SIZE};
use mantle_types::{MantleError, MantleResult};

/// Immutable description of a cloth's segment grid.
///
/// Deserialization goes through [`ClothDimensions::new`], so a config
/// file can never produce an invalid grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions", into = "RawDimensions")]
pub struct ClothDimensions {
    width_segments: u32,
    length_segments: u32,
    segment_size: u32,
}

/// Unvalidated wire form of [`ClothDimensions`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDimensions {
    width_segments: i32,
    length_segments: i32,
    segment_size: i32,
}

impl ClothDimensions {
    /// Creates validated dimensions.
    ///
    /// # Errors
    /// [`MantleError::OutOfRange`] naming the first offending parameter when
    /// `width_segments < 2`, `length_segments < 2`, or `segment_size < 1`.
    ///
    /// # Example
    /// ```
    /// use mantle_cloth::ClothDimensions;
    /// assert!(ClothDimensions::new(1, 2, 10).is_err());
    /// let dims = ClothDimensions::new(2, 2, 10).unwrap();
    /// assert_eq!(dims.total_constraints(), 6);
    /// ```
    pub fn new(width_segments: i32, length_segments: i32, segment_size: i32) -> MantleResult<Self> {
        check_minimum("width_segments", width_segments, MIN_GRID_SEGMENTS)?;
        check_minimum("length_segments", length_segments, MIN_GRID_SEGMENTS)?;
        check_minimum("segment_size", segment_size, MIN_SEGMENT_SIZE)?;

        Ok(Self {
            width_segments: width_segments as u32,
            length_segments: length_segments as u32,
            segment_size: segment_size as u32,
        })
    }

    /// Segments along the anchored edge.
    #[inline]
    pub fn width_segments(&self) -> usize {
        self.width_segments as usize
    }

    /// Segments from the anchored edge to the hem.
    #[inline]
    pub fn length_segments(&self) -> usize {
        self.length_segments as usize
    }

    /// Edge length of one segment in world units.
    #[inline]
    pub fn segment_size(&self) -> f32 {
        self.segment_size as f32
    }

    #[inline]
    pub fn total_segments(&self) -> usize {
        self.width_segments() * self.length_segments()
    }

    /// Render vertices along the width (`width_segments + 1`).
    #[inline]
    pub fn vertex_width(&self) -> usize {
        self.width_segments() + 1
    }

    /// Render vertices along the length (`length_segments + 1`).
    #[inline]
    pub fn vertex_length(&self) -> usize {
        self.length_segments() + 1
    }

    #[inline]
    pub fn total_vertices(&self) -> usize {
        self.vertex_width() * self.vertex_length()
    }

    /// Nominal length of the anchored edge (`width_segments * segment_size`).
    #[inline]
    pub fn anchor_length(&self) -> f32 {
        (self.width_segments * self.segment_size) as f32
    }

    /// Nominal cloth height (`length_segments * segment_size`).
    #[inline]
    pub fn cloth_length(&self) -> f32 {
        (self.length_segments * self.segment_size) as f32
    }

    /// Constraints between horizontally and vertically adjacent segments.
    pub fn structural_constraint_count(&self) -> usize {
        let (w, l) = (self.width_segments(), self.length_segments());
        (w - 1) * l + w * (l - 1)
    }

    /// Constraints between diagonally adjacent segments.
    pub fn shear_constraint_count(&self) -> usize {
        let (w, l) = (self.width_segments(), self.length_segments());
        (w - 1) * (l - 1) * 2
    }

    /// Constraints between segments with one other segment in between
    /// (horizontally, vertically or diagonally).
    pub fn bending_constraint_count(&self) -> usize {
        let (w, l) = (self.width_segments(), self.length_segments());
        let in_row = w - 2;
        let in_column = l - 2;
        in_row * l + w * in_column + in_row * in_column * 2
    }

    pub fn total_constraints(&self) -> usize {
        self.structural_constraint_count()
            + self.shear_constraint_count()
            + self.bending_constraint_count()
    }

    /// Column of a segment index.
    #[inline]
    pub fn column_of(&self, segment: usize) -> usize {
        segment % self.width_segments()
    }

    /// Row of a segment index.
    #[inline]
    pub fn row_of(&self, segment: usize) -> usize {
        segment / self.width_segments()
    }
}

impl Default for ClothDimensions {
    /// A small shoulder cape: 6 segments across, 10 down, 4 units each.
    fn default() -> Self {
        Self {
            width_segments: 6,
            length_segments: 10,
            segment_size: 4,
        }
    }
}

fn check_minimum(parameter: &'static str, value: i32, minimum: i32) -> MantleResult<()> {
    if value < minimum {
        return Err(MantleError::below_minimum(parameter, value as i64, minimum as i64));
    }
    Ok(())
}

impl TryFrom<RawDimensions> for ClothDimensions {
    type Error = MantleError;

    fn try_from(raw: RawDimensions) -> MantleResult<Self> {
        Self::new(raw.width_segments, raw.length_segments, raw.segment_size)
    }
}

impl From<ClothDimensions> for RawDimensions {
    fn from(dims: ClothDimensions) -> Self {
        Self {
            width_segments: dims.width_segments as i32,
            length_segments: dims.length_segments as i32,
            segment_size: dims.segment_size as i32,
        }
    }
}
