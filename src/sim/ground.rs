//! Tile-granular ground
//!
//! The ground is a fixed run of tiles, present or absent, indexed by
//! horizontal position. Collision is tile-exact: a world x maps to one
//! tile index, and a gap means no support at all, whatever the
//! neighbouring tiles look like.

use crate::level::GroundSpec;

#[derive(Debug, Clone)]
pub struct Ground {
    pub tile_width: f32,
    pub height: f32,
    tiles: Vec<bool>,
    /// Screen x of tile 0; the scroll offset negated.
    pub offset_x: f32,
    /// Y of the tile tops.
    pub surface_y: f32,
}

impl Ground {
    pub fn from_spec(spec: &GroundSpec, canvas_height: f32) -> Self {
        Self {
            tile_width: spec.tile_width,
            height: spec.height,
            tiles: spec.tiles.clone(),
            offset_x: 0.0,
            surface_y: canvas_height - spec.height,
        }
    }

    /// Keep the tiles in step with the world scroll.
    pub fn sync_scroll(&mut self, scroll_offset: f32) {
        self.offset_x = -scroll_offset;
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Is there a tile under screen-space x? False for any x mapping
    /// outside `[0, tile_count)` or onto a gap.
    pub fn has_ground_at(&self, x: f32) -> bool {
        let index = ((x - self.offset_x) / self.tile_width).floor();
        if index < 0.0 || index >= self.tiles.len() as f32 {
            return false;
        }
        self.tiles[index as usize]
    }

    /// Screen x of each present tile, for drawing.
    pub fn tile_positions(&self) -> impl Iterator<Item = f32> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(i, _)| self.offset_x + i as f32 * self.tile_width)
    }

    /// Screen x where the last ground segment begins.
    pub fn last_segment_start(&self) -> f32 {
        for i in (0..self.tiles.len()).rev() {
            if self.tiles[i] {
                let mut start = i;
                while start > 0 && self.tiles[start - 1] {
                    start -= 1;
                }
                return self.offset_x + start as f32 * self.tile_width;
            }
        }
        0.0
    }

    /// Screen x just past the last present tile.
    pub fn last_segment_end(&self) -> f32 {
        for i in (0..self.tiles.len()).rev() {
            if self.tiles[i] {
                return self.offset_x + (i + 1) as f32 * self.tile_width;
            }
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::GroundSpec;

    fn ground(tiles: Vec<bool>) -> Ground {
        Ground::from_spec(
            &GroundSpec {
                tile_width: 100.0,
                height: 100.0,
                tiles,
            },
            720.0,
        )
    }

    #[test]
    fn test_tile_exact_lookup() {
        let g = ground(vec![true, false, true]);
        assert!(g.has_ground_at(0.0));
        assert!(g.has_ground_at(99.9));
        assert!(!g.has_ground_at(100.0));
        assert!(!g.has_ground_at(199.9));
        assert!(g.has_ground_at(200.0));
    }

    #[test]
    fn test_out_of_range_is_gap() {
        let g = ground(vec![true, true]);
        assert!(!g.has_ground_at(-0.1));
        assert!(!g.has_ground_at(200.0));
        assert!(!g.has_ground_at(10_000.0));
    }

    #[test]
    fn test_scroll_shifts_lookup() {
        let mut g = ground(vec![true, false, true]);
        g.sync_scroll(100.0);
        // Tile 0 now spans -100..0 on screen; tile 2 spans 100..200.
        assert!(!g.has_ground_at(0.0));
        assert!(g.has_ground_at(150.0));
        assert!(g.has_ground_at(-50.0));
    }

    #[test]
    fn test_last_segment_bounds() {
        let g = ground(vec![true, false, true, true, false]);
        assert_eq!(g.last_segment_start(), 200.0);
        assert_eq!(g.last_segment_end(), 400.0);
    }

    #[test]
    fn test_surface_y() {
        let g = ground(vec![true]);
        assert_eq!(g.surface_y, 620.0);
    }
}
