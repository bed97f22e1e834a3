//! Tile-grid world.
//!
//! Worlds in side-scrolling games are grids of square tiles; a
//! position is solid when the tile containing it is. Positions
//! outside the map are open.

use std::collections::HashSet;

use mantle_math::{IVec2, Vec2};
use mantle_types::constants::TILE_SIZE;

use crate::query::SolidQuery;

/// Sparse set of solid tiles.
#[derive(Debug, Clone)]
pub struct TileMap {
    tile_size: f32,
    solid: HashSet<IVec2>,
}

impl TileMap {
    /// Creates an empty map with the default tile size.
    pub fn new() -> Self {
        Self::with_tile_size(TILE_SIZE)
    }

    pub fn with_tile_size(tile_size: f32) -> Self {
        Self {
            tile_size,
            solid: HashSet::new(),
        }
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Tile coordinate containing a world position.
    pub fn tile_at(&self, position: Vec2) -> IVec2 {
        (position / self.tile_size).floor().as_ivec2()
    }

    pub fn set_solid(&mut self, tile: IVec2, solid: bool) {
        if solid {
            self.solid.insert(tile);
        } else {
            self.solid.remove(&tile);
        }
    }

    /// Marks every tile in the inclusive rectangle `[from, to]` solid.
    pub fn fill(&mut self, from: IVec2, to: IVec2) {
        let (lo, hi) = (from.min(to), from.max(to));
        for y in lo.y..=hi.y {
            for x in lo.x..=hi.x {
                self.solid.insert(IVec2::new(x, y));
            }
        }
    }

    pub fn is_tile_solid(&self, tile: IVec2) -> bool {
        self.solid.contains(&tile)
    }

    pub fn solid_count(&self) -> usize {
        self.solid.len()
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SolidQuery for TileMap {
    fn is_position_solid(&self, position: Vec2) -> bool {
        self.is_tile_solid(self.tile_at(position))
    }

    fn name(&self) -> &str {
        "tile_map"
    }
}
