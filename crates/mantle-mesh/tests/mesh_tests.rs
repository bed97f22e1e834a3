//! Integration tests for mantle-mesh.

use std::cell::Cell;
use std::collections::HashSet;

use mantle_math::{IVec2, Vec2, Vec3};
use mantle_mesh::{AmbientLight, Color, LightingMode, UniformLight, VertexGrid};
use mantle_types::{MantleError, VertexId};

/// Colours tiles by their coordinate and counts how often it is asked.
struct CountingLight {
    calls: Cell<u32>,
}

impl CountingLight {
    fn new() -> Self {
        Self { calls: Cell::new(0) }
    }
}

impl AmbientLight for CountingLight {
    fn sample_ambient_light(&self, tile: IVec2) -> Color {
        self.calls.set(self.calls.get() + 1);
        Color::rgb(tile.x as u8, tile.y as u8, 7)
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn flat_positions(width: usize, height: usize, spacing: f32) -> Vec<Vec3> {
    (0..width * height)
        .map(|i| Vec3::new((i % width) as f32 * spacing, (i / width) as f32 * spacing, 0.0))
        .collect()
}

// ─── Construction Tests ───────────────────────────────────────

#[test]
fn rejects_zero_width() {
    let err = VertexGrid::new(0, 3, false).unwrap_err();
    assert_eq!(
        err,
        MantleError::OutOfRange {
            parameter: "width",
            value: 0,
            minimum: 1
        }
    );
}

#[test]
fn rejects_negative_height() {
    let err = VertexGrid::new(3, -1, true).unwrap_err();
    assert!(err.to_string().contains("height"));
}

#[test]
fn single_vertex_grid_has_no_triangles() {
    let grid = VertexGrid::new(1, 1, true).unwrap();
    assert_eq!(grid.vertex_count(), 1);
    assert_eq!(grid.triangle_count(), 0);
}

#[test]
fn front_face_indices_for_one_cell() {
    let grid = VertexGrid::new(2, 2, false).unwrap();
    assert_eq!(grid.indices(), &[0, 1, 2, 2, 1, 3]);
}

#[test]
fn backside_indices_reverse_winding() {
    let grid = VertexGrid::new(2, 2, true).unwrap();
    assert_eq!(grid.indices(), &[0, 1, 2, 2, 1, 3, 0, 2, 1, 2, 3, 1]);
}

#[test]
fn index_counts_scale_with_cells() {
    let front = VertexGrid::new(4, 5, false).unwrap();
    let both = VertexGrid::new(4, 5, true).unwrap();
    assert_eq!(front.triangle_count(), 3 * 4 * 2);
    assert_eq!(both.triangle_count(), 3 * 4 * 4);
}

#[test]
fn indices_are_in_range_and_non_degenerate() {
    let grid = VertexGrid::new(5, 4, true).unwrap();
    for t in 0..grid.triangle_count() {
        let [a, b, c] = grid.triangle(t);
        for id in [a, b, c] {
            assert!(grid.vertex(id).is_ok());
        }
        assert!(a != b && b != c && a != c);
    }
}

#[test]
fn vertex_lookup_rejects_out_of_range() {
    let grid = VertexGrid::new(2, 2, false).unwrap();
    assert_eq!(
        grid.vertex(VertexId(4)).unwrap_err(),
        MantleError::IndexOutOfBounds {
            what: "vertex",
            index: 4,
            len: 4
        }
    );
}

#[test]
fn every_vertex_is_referenced() {
    let grid = VertexGrid::new(4, 3, false).unwrap();
    let used: HashSet<u32> = grid.indices().iter().copied().collect();
    assert_eq!(used.len(), grid.vertex_count());
}

// ─── Prepare Tests ────────────────────────────────────────────

#[test]
fn prepare_rejects_wrong_position_count() {
    let mut grid = VertexGrid::new(3, 3, false).unwrap();
    let positions = flat_positions(3, 2, 1.0);
    let err = grid
        .prepare(&positions, LightingMode::FullBright, &UniformLight::default(), 10.0)
        .unwrap_err();
    assert_eq!(err, MantleError::PositionCount { expected: 9, actual: 6 });
}

#[test]
fn depth_is_compressed_into_unit_range() {
    let mut grid = VertexGrid::new(3, 1, false).unwrap();
    let positions = [
        Vec3::new(0.0, 0.0, -20.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 20.0),
    ];
    grid.prepare(&positions, LightingMode::FullBright, &UniformLight::default(), 20.0)
        .unwrap();

    let depths: Vec<f32> = grid.vertices().iter().map(|v| v.position.z).collect();
    assert_eq!(depths, vec![0.0, 0.5, 1.0]);
}

#[test]
fn texture_coords_span_unit_square() {
    let mut grid = VertexGrid::new(3, 5, false).unwrap();
    let positions = flat_positions(3, 5, 4.0);
    grid.prepare(&positions, LightingMode::FullBright, &UniformLight::default(), 10.0)
        .unwrap();

    let v = grid.vertices();
    assert_eq!(v[0].texture_coord, Vec2::new(0.0, 0.0));
    assert_eq!(v[1].texture_coord, Vec2::new(0.5, 0.0));
    assert_eq!(v[2].texture_coord, Vec2::new(1.0, 0.0));
    assert_eq!(v[14].texture_coord, Vec2::new(1.0, 1.0));
    assert_eq!(v[7].texture_coord, Vec2::new(0.5, 0.5));
}

#[test]
fn single_column_texture_coords_are_finite() {
    let mut grid = VertexGrid::new(1, 3, false).unwrap();
    let positions = flat_positions(1, 3, 4.0);
    grid.prepare(&positions, LightingMode::FullBright, &UniformLight::default(), 10.0)
        .unwrap();

    for v in grid.vertices() {
        assert_eq!(v.texture_coord.x, 0.0);
        assert!(v.texture_coord.y.is_finite());
    }
    assert_eq!(grid.vertices()[2].texture_coord.y, 1.0);
}

#[test]
fn positions_are_relative_to_view_origin() {
    let mut grid = VertexGrid::new(2, 2, false).unwrap();
    grid.set_view_origin(Vec2::new(100.0, 50.0));
    let positions = flat_positions(2, 2, 10.0)
        .into_iter()
        .map(|p| p + Vec3::new(100.0, 50.0, 0.0))
        .collect::<Vec<_>>();
    grid.prepare(&positions, LightingMode::FullBright, &UniformLight::default(), 10.0)
        .unwrap();

    assert_eq!(grid.vertices()[3].position, Vec3::new(10.0, 10.0, 0.5));
}

// ─── Lighting Tests ───────────────────────────────────────────

#[test]
fn full_bright_never_samples_light() {
    let light = CountingLight::new();
    let mut grid = VertexGrid::new(3, 3, false).unwrap();
    let stats = grid
        .prepare(&flat_positions(3, 3, 40.0), LightingMode::FullBright, &light, 10.0)
        .unwrap();

    assert_eq!(light.calls.get(), 0);
    assert_eq!(stats.light_samples, 0);
    assert!(grid.vertices().iter().all(|v| v.color == Color::WHITE));
}

#[test]
fn per_segment_samples_each_tile_once() {
    let light = CountingLight::new();
    let mut grid = VertexGrid::new(4, 4, false).unwrap();
    // Spacing 8 puts each 2×2 block of vertices in one 16-unit tile.
    let stats = grid
        .prepare(&flat_positions(4, 4, 8.0), LightingMode::PerSegment, &light, 10.0)
        .unwrap();

    assert_eq!(light.calls.get(), 4);
    assert_eq!(stats.light_samples, 4);
    assert_eq!(stats.cache_hits, 12);
    assert_eq!(grid.vertices()[15].color, Color::rgb(1, 1, 7));
}

#[test]
fn light_cache_does_not_outlive_prepare() {
    let light = CountingLight::new();
    let mut grid = VertexGrid::new(2, 2, false).unwrap();
    let positions = flat_positions(2, 2, 1.0);
    grid.prepare(&positions, LightingMode::PerSegment, &light, 10.0).unwrap();
    grid.prepare(&positions, LightingMode::PerSegment, &light, 10.0).unwrap();
    assert_eq!(light.calls.get(), 2);
}

#[test]
fn lighting_uses_world_tiles_not_view_tiles() {
    let light = CountingLight::new();
    let mut grid = VertexGrid::new(1, 1, false).unwrap();
    grid.set_view_origin(Vec2::new(1000.0, 1000.0));
    grid.prepare(&[Vec3::new(40.0, 20.0, 0.0)], LightingMode::PerSegment, &light, 10.0)
        .unwrap();
    assert_eq!(grid.vertices()[0].color, Color::rgb(2, 1, 7));
}

#[test]
fn negative_positions_floor_into_tiles() {
    let light = CountingLight::new();
    let mut grid = VertexGrid::new(2, 1, false).unwrap();
    let positions = [Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
    let stats = grid
        .prepare(&positions, LightingMode::PerSegment, &light, 10.0)
        .unwrap();
    assert_eq!(stats.light_samples, 2);
    assert_eq!(grid.vertices()[0].color, Color::rgb(255, 0, 7));
}

// ─── Color Tests ──────────────────────────────────────────────

#[test]
fn color_normalizes_channels() {
    assert_eq!(Color::WHITE.to_f32_array(), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(Color::BLACK.to_f32_array(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn lighting_mode_serializes_snake_case() {
    let json = serde_json::to_string(&LightingMode::PerSegment).unwrap();
    assert_eq!(json, "\"per_segment\"");
    let mode: LightingMode = serde_json::from_str("\"full_bright\"").unwrap();
    assert_eq!(mode, LightingMode::FullBright);
}
