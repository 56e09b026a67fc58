use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord, Coord2, GameError, NdIndex, Result};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let mines = mines.clamp(1, total(size_x, size_y));
        Self::new_unchecked((size_x, size_y), mines)
    }

    pub const fn total_tiles(&self) -> CellCount {
        total(self.size.0, self.size.1)
    }
}

const fn total(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

/// One board cell. `adjacent` is fixed at generation time and meaningful only
/// when `mine` is false; `revealed` is the only field mutated afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub mine: bool,
    pub revealed: bool,
    pub adjacent: u8,
}

/// Outcome of revealing a tile.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::HitMine)
    }
}

/// The board: mines, per-tile adjacency counts, and reveal marks. The mine
/// layout and counts never change after generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    tiles: Array2<Tile>,
    mine_count: CellCount,
}

impl Minefield {
    pub(crate) fn from_tiles(tiles: Array2<Tile>) -> Self {
        let mine_count = tiles
            .iter()
            .filter(|tile| tile.mine)
            .count()
            .try_into()
            .expect("tile count fits CellCount");
        Self { tiles, mine_count }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.tiles.dim();
        (
            dim.0.try_into().expect("board width fits Coord"),
            dim.1.try_into().expect("board height fits Coord"),
        )
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(self.tiles[coords.nd()])
    }

    /// Every tile with its coordinates, for rendering.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((x, y), &tile)| ((x as Coord, y as Coord), tile))
    }

    /// Marks a tile revealed. Already-revealed tiles are left untouched, so a
    /// mine reports `HitMine` at most once.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        let tile = &mut self.tiles[coords.nd()];

        if tile.revealed {
            return Ok(NoChange);
        }
        tile.revealed = true;

        Ok(if tile.mine {
            log::debug!("revealed mine at {:?}", coords);
            HitMine
        } else {
            log::debug!("revealed tile at {:?}, adjacent mines: {}", coords, tile.adjacent);
            Revealed
        })
    }
}
