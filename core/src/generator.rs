use ndarray::Array2;

use crate::{Coord, GameConfig, Minefield, NdIndex, Tile, moore_neighbors};

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield;
}

/// Purely random placement: mines land on distinct tiles drawn uniformly,
/// re-drawing on collision. Adjacency counts are computed once, after every
/// mine is placed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield {
        use rand::prelude::*;

        let (size_x, size_y) = config.size;
        let total_tiles = config.total_tiles();
        let mut tiles: Array2<Tile> = Array2::default(config.size.nd());

        // full boards need no sampling
        if config.mines >= total_tiles {
            if config.mines > total_tiles {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_tiles
                );
            }
            tiles.map_inplace(|tile| tile.mine = true);
            return Minefield::from_tiles(tiles);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed = 0;
        while mines_placed < config.mines {
            let x: Coord = rng.random_range(0..size_x);
            let y: Coord = rng.random_range(0..size_y);
            let tile = &mut tiles[(x, y).nd()];
            if !tile.mine {
                tile.mine = true;
                mines_placed += 1;
            }
        }

        for x in 0..size_x {
            for y in 0..size_y {
                if tiles[(x, y).nd()].mine {
                    continue;
                }
                let adjacent = moore_neighbors((x, y), config.size)
                    .filter(|&pos| tiles[pos.nd()].mine)
                    .count() as u8;
                tiles[(x, y).nd()].adjacent = adjacent;
            }
        }

        log::debug!(
            "generated {}x{} minefield with {} mines (seed {})",
            size_x,
            size_y,
            mines_placed,
            self.seed
        );
        Minefield::from_tiles(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, size: (u8, u8), mines: u16) -> Minefield {
        RandomMinefieldGenerator::new(seed).generate(GameConfig::new(size, mines))
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..20 {
            let field = generate(seed, (9, 9), 10);
            let counted = field.tiles().filter(|(_, tile)| tile.mine).count();
            assert_eq!(counted, 10);
            assert_eq!(field.mine_count(), 10);
        }
    }

    #[test]
    fn adjacency_matches_brute_force_count() {
        let field = generate(42, (9, 9), 10);
        for (coords, tile) in field.tiles() {
            if tile.mine {
                continue;
            }
            let expected = moore_neighbors(coords, field.size())
                .filter(|&pos| field.tile_at(pos).unwrap().mine)
                .count() as u8;
            assert_eq!(tile.adjacent, expected, "at {:?}", coords);
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        assert_eq!(generate(3, (9, 9), 10), generate(3, (9, 9), 10));
    }

    #[test]
    fn different_seeds_differ() {
        // not guaranteed in principle, but astronomically unlikely to collide
        assert_ne!(generate(1, (9, 9), 10), generate(2, (9, 9), 10));
    }

    #[test]
    fn nothing_is_revealed_after_generation() {
        let field = generate(5, (9, 9), 10);
        assert!(field.tiles().all(|(_, tile)| !tile.revealed));
    }

    #[test]
    fn full_board_is_all_mines() {
        let field = generate(0, (3, 3), 9);
        assert!(field.tiles().all(|(_, tile)| tile.mine));
    }
}
