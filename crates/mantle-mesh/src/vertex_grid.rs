//! Renderable vertex grid.
//!
//! Vertices are row-major, index `y * width + x`. Each cell between four
//! vertices becomes two triangles:
//!
//! ```text
//! tl ─ tr
//! │  ╱ │     front: (tl, tr, bl), (bl, tr, br)
//! bl ─ br    back:  (tl, bl, tr), (bl, br, tr)
//! ```
//!
//! The back faces repeat the front ones with reversed winding so the cape
//! stays visible from behind when the renderer culls back faces.

use std::collections::HashMap;

use mantle_math::{IVec2, Vec2, Vec3};
use mantle_types::constants::TILE_SIZE;
use mantle_types::{MantleError, MantleResult, VertexId};

use crate::color::Color;
use crate::lighting::{AmbientLight, LightingMode};

const FACES_PER_CELL: usize = 2;
const VERTICES_PER_FACE: usize = 3;

/// One renderable vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridVertex {
    /// View-relative X/Y, with Z compressed into `[0, 1]`.
    pub position: Vec3,
    pub color: Color,
    pub texture_coord: Vec2,
}

/// Light sampling counters for one [`VertexGrid::prepare`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareStats {
    /// Calls made into the [`AmbientLight`].
    pub light_samples: u32,
    /// Vertices coloured from the per-call tile cache instead.
    pub cache_hits: u32,
}

/// A `width × height` lattice of vertices with a fixed index buffer.
#[derive(Debug, Clone)]
pub struct VertexGrid {
    width: usize,
    height: usize,
    include_backsides: bool,
    vertices: Vec<GridVertex>,
    indices: Vec<u32>,
    view_origin: Vec2,
}

impl VertexGrid {
    /// Creates a grid of `width × height` vertices.
    ///
    /// # Errors
    /// [`MantleError::OutOfRange`] if either extent is below 1.
    ///
    /// # Example
    /// ```
    /// use mantle_mesh::VertexGrid;
    /// let grid = VertexGrid::new(3, 3, false).unwrap();
    /// assert_eq!(grid.vertex_count(), 9);
    /// assert_eq!(grid.triangle_count(), 8);
    /// ```
    pub fn new(width: i32, height: i32, include_backsides: bool) -> MantleResult<Self> {
        if width < 1 {
            return Err(MantleError::below_minimum("width", width as i64, 1));
        }
        if height < 1 {
            return Err(MantleError::below_minimum("height", height as i64, 1));
        }

        let width = width as usize;
        let height = height as usize;
        let indices = build_indices(width, height, include_backsides);

        tracing::debug!(
            width,
            height,
            include_backsides,
            triangles = indices.len() / VERTICES_PER_FACE,
            "vertex grid created"
        );

        Ok(Self {
            width,
            height,
            include_backsides,
            vertices: vec![GridVertex::default(); width * height],
            indices,
            view_origin: Vec2::ZERO,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn include_backsides(&self) -> bool {
        self.include_backsides
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / VERTICES_PER_FACE
    }

    /// Vertex data as of the last [`prepare`](Self::prepare).
    #[inline]
    pub fn vertices(&self) -> &[GridVertex] {
        &self.vertices
    }

    /// Triangle list, three indices per triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the three vertices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [VertexId; 3] {
        let base = t * VERTICES_PER_FACE;
        [
            VertexId(self.indices[base]),
            VertexId(self.indices[base + 1]),
            VertexId(self.indices[base + 2]),
        ]
    }

    /// Returns the prepared vertex at `id`.
    pub fn vertex(&self, id: VertexId) -> MantleResult<&GridVertex> {
        let len = self.vertices.len();
        self.vertices
            .get(id.index())
            .ok_or(MantleError::IndexOutOfBounds {
                what: "vertex",
                index: id.0 as i64,
                len,
            })
    }

    #[inline]
    pub fn view_origin(&self) -> Vec2 {
        self.view_origin
    }

    /// World position of the view's top-left corner. Prepared vertex
    /// positions are relative to it.
    pub fn set_view_origin(&mut self, origin: Vec2) {
        self.view_origin = origin;
    }

    /// Rewrites every vertex from world-space `positions`.
    ///
    /// `max_z` bounds the expected depth range `[-max_z, max_z]`, which is
    /// compressed into `[0, 1]`. Lighting is sampled at each position's
    /// tile; with [`LightingMode::PerSegment`] each distinct tile is
    /// sampled once per call.
    ///
    /// # Errors
    /// [`MantleError::PositionCount`] unless exactly one position per
    /// vertex is given. The grid is left untouched in that case.
    pub fn prepare(
        &mut self,
        positions: &[Vec3],
        lighting_mode: LightingMode,
        light: &dyn AmbientLight,
        max_z: f32,
    ) -> MantleResult<PrepareStats> {
        if positions.len() != self.vertices.len() {
            return Err(MantleError::PositionCount {
                expected: self.vertices.len(),
                actual: positions.len(),
            });
        }

        let u_step = texture_step(self.width);
        let v_step = texture_step(self.height);
        let view = self.view_origin.extend(0.0);

        let mut stats = PrepareStats::default();
        let mut tile_colors: HashMap<IVec2, Color> = HashMap::new();

        for (i, (vertex, &position)) in self.vertices.iter_mut().zip(positions).enumerate() {
            let color = match lighting_mode {
                LightingMode::FullBright => Color::WHITE,
                LightingMode::PerSegment => {
                    let tile = tile_of(position);
                    match tile_colors.get(&tile) {
                        Some(&color) => {
                            stats.cache_hits += 1;
                            color
                        }
                        None => {
                            let color = light.sample_ambient_light(tile);
                            stats.light_samples += 1;
                            tile_colors.insert(tile, color);
                            color
                        }
                    }
                }
            };

            let depth = (position.z + max_z) / (max_z * 2.0);
            *vertex = GridVertex {
                position: Vec3::new(position.x, position.y, depth) - view,
                color,
                texture_coord: Vec2::new(
                    (i % self.width) as f32 * u_step,
                    (i / self.width) as f32 * v_step,
                ),
            };
        }

        tracing::trace!(
            light = light.name(),
            samples = stats.light_samples,
            hits = stats.cache_hits,
            "vertex grid prepared"
        );

        Ok(stats)
    }
}

/// Texture coordinate advance per vertex along an axis of `count` vertices.
#[inline]
fn texture_step(count: usize) -> f32 {
    if count > 1 {
        1.0 / (count - 1) as f32
    } else {
        0.0
    }
}

#[inline]
fn tile_of(position: Vec3) -> IVec2 {
    (position.truncate() / TILE_SIZE).floor().as_ivec2()
}

fn build_indices(width: usize, height: usize, include_backsides: bool) -> Vec<u32> {
    let cells = (width - 1) * (height - 1);
    let per_cell = FACES_PER_CELL * VERTICES_PER_FACE * if include_backsides { 2 } else { 1 };
    let mut indices = Vec::with_capacity(cells * per_cell);

    for y in 0..height - 1 {
        for x in 0..width - 1 {
            let top_left = (y * width + x) as u32;
            let top_right = top_left + 1;
            let bottom_left = top_left + width as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                top_right,
                bottom_left,
                bottom_left,
                top_right,
                bottom_right,
            ]);

            if include_backsides {
                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    bottom_left,
                    bottom_right,
                    top_right,
                ]);
            }
        }
    }

    indices
}
