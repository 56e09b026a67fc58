use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord, Coord2, Rect, Vec2};

/// Board edge, in tiles.
pub const GRID_SIZE: Coord = 9;
/// Mines per board.
pub const MINE_COUNT: CellCount = 10;
/// Tile edge, in pixels.
pub const TILE_SIZE: u32 = 40;
/// Empty border around the board, in pixels.
pub const MARGIN: u32 = 50;
/// Nominal frame rate of the update/render loop.
pub const FRAME_RATE: u32 = 60;

/// Pixel layout of the board inside the window. Constructed once at startup
/// and passed by reference wherever pixel geometry is needed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub grid: Coord,
    pub tile: u32,
    pub margin: u32,
}

impl Layout {
    pub const DEFAULT: Self = Self {
        grid: GRID_SIZE,
        tile: TILE_SIZE,
        margin: MARGIN,
    };

    /// Window width in pixels.
    pub const fn width(self) -> u32 {
        self.tile * self.grid as u32 + self.margin * 2
    }

    /// Window height in pixels.
    pub const fn height(self) -> u32 {
        self.width()
    }

    /// Center of the play area; the sprite's home and the modal anchor.
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }

    /// Screen rectangle of the tile at `coords`.
    pub fn tile_rect(self, (x, y): Coord2) -> Rect {
        Rect::new(
            (self.margin + x as u32 * self.tile) as f32,
            (self.margin + y as u32 * self.tile) as f32,
            self.tile as f32,
            self.tile as f32,
        )
    }

    /// The tile under a pixel position, if any.
    pub fn tile_at_point(self, pos: Vec2) -> Option<Coord2> {
        let margin = self.margin as f32;
        if pos.x < margin || pos.y < margin {
            return None;
        }
        let x = ((pos.x - margin) / self.tile as f32) as u32;
        let y = ((pos.y - margin) / self.tile as f32) as u32;
        if x < self.grid as u32 && y < self.grid as u32 {
            Some((x as Coord, y as Coord))
        } else {
            None
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_square() {
        let layout = Layout::DEFAULT;
        assert_eq!(layout.width(), 40 * 9 + 50 * 2);
        assert_eq!(layout.width(), layout.height());
    }

    #[test]
    fn tile_rect_round_trips_through_hit_test() {
        let layout = Layout::DEFAULT;
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                let rect = layout.tile_rect((x, y));
                assert_eq!(layout.tile_at_point(rect.center()), Some((x, y)));
            }
        }
    }

    #[test]
    fn margin_and_outside_are_not_tiles() {
        let layout = Layout::DEFAULT;
        assert_eq!(layout.tile_at_point(Vec2::new(0.0, 0.0)), None);
        assert_eq!(layout.tile_at_point(Vec2::new(49.0, 200.0)), None);
        let beyond = layout.margin as f32 + layout.grid as f32 * layout.tile as f32 + 1.0;
        assert_eq!(layout.tile_at_point(Vec2::new(beyond, 200.0)), None);
    }
}
