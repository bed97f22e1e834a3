//! Render corner derivation.
//!
//! A cloth of `w × l` segments is drawn as a quad grid of
//! `(w + 1) × (l + 1)` vertices. Segments sit at the centres of the
//! quads, so vertices have to be reconstructed from them:
//!
//! 1. **Interior** vertices touch four segments and are their mean.
//! 2. **Edge** vertices (outer rows/columns, corners excluded) are the
//!    adjacent interior vertex point-reflected through the midpoint of
//!    the two border segments they sit between.
//! 3. **Corner** vertices are the diagonal interior vertex reflected
//!    through the corner segment itself.
//!
//! Each stage reads vertices resolved by the previous one, so the order
//! is fixed.

use mantle_math::{midpoint, point_reflect, Vec3};
use mantle_types::{MantleError, MantleResult};

use crate::cloth::Cloth;

impl Cloth {
    /// Derives one render vertex per quad corner from the current
    /// segment positions. Deterministic and allocation-bounded to the
    /// returned buffer.
    pub fn calculate_segment_corners(&self) -> Vec<Vec3> {
        let mut corners = vec![Vec3::ZERO; self.dimensions().total_vertices()];
        self.fill_corners(&mut corners);
        corners
    }

    /// In-place variant of [`calculate_segment_corners`](Self::calculate_segment_corners).
    ///
    /// # Errors
    /// [`MantleError::PositionCount`] unless `corners` holds exactly
    /// `(w + 1) * (l + 1)` entries; the buffer is left untouched.
    pub fn write_segment_corners(&self, corners: &mut [Vec3]) -> MantleResult<()> {
        let expected = self.dimensions().total_vertices();
        if corners.len() != expected {
            return Err(MantleError::PositionCount {
                expected,
                actual: corners.len(),
            });
        }
        self.fill_corners(corners);
        Ok(())
    }

    /// `corners.len()` is `total_vertices()`.
    fn fill_corners(&self, corners: &mut [Vec3]) {
        let dims = self.dimensions();
        let w = dims.width_segments();
        let l = dims.length_segments();
        let vw = dims.vertex_width();
        let seg = |i: usize| self.segments()[i].position;

        // Interior: vertex (x, y) with 1 ≤ x < w, 1 ≤ y < l sits between
        // segments (x−1, y−1), (x, y−1), (x−1, y), (x, y).
        for y in 1..l {
            for x in 1..w {
                let upper_left = (y - 1) * w + (x - 1);
                corners[y * vw + x] = (seg(upper_left)
                    + seg(upper_left + 1)
                    + seg(upper_left + w)
                    + seg(upper_left + w + 1))
                    * 0.25;
            }
        }

        // Top and bottom rows.
        let last_row_vertex = vw * l;
        let last_row_segment = w * (l - 1);
        for x in 1..w {
            let top = midpoint(seg(x - 1), seg(x));
            corners[x] = point_reflect(corners[vw + x], top);

            let bottom = midpoint(seg(last_row_segment + x - 1), seg(last_row_segment + x));
            corners[last_row_vertex + x] = point_reflect(corners[last_row_vertex - vw + x], bottom);
        }

        // Left and right columns.
        for y in 1..l {
            let left_vertex = y * vw;
            let left = midpoint(seg((y - 1) * w), seg(y * w));
            corners[left_vertex] = point_reflect(corners[left_vertex + 1], left);

            let right_vertex = left_vertex + w;
            let right = midpoint(seg(y * w - 1), seg(y * w + w - 1));
            corners[right_vertex] = point_reflect(corners[right_vertex - 1], right);
        }

        // Corners, reflected from their diagonal neighbour.
        corners[0] = point_reflect(corners[vw + 1], seg(0));
        corners[w] = point_reflect(corners[vw + w - 1], seg(w - 1));
        corners[last_row_vertex] = point_reflect(corners[last_row_vertex - vw + 1], seg(last_row_segment));
        let last = dims.total_vertices() - 1;
        corners[last] = point_reflect(corners[last - vw - 1], seg(w * l - 1));
    }
}
