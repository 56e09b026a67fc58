/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional board coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Conversion into an `ndarray` index.
pub trait NdIndex {
    type Output;
    fn nd(self) -> Self::Output;
}

impl NdIndex for Coord2 {
    type Output = [usize; 2];

    fn nd(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the Moore neighborhood of `center`, clamped to `bounds`
/// (exclusive). Corner tiles yield 3 neighbors, edges 5, interior tiles 8.
pub fn moore_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.into_iter().filter_map(move |(dx, dy)| {
        let x = center.0.checked_add_signed(dx)?;
        let y = center.1.checked_add_signed(dy)?;
        (x < bounds.0 && y < bounds.1).then_some((x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        moore_neighbors(center, bounds).collect()
    }

    #[test]
    fn interior_tile_has_eight_neighbors() {
        assert_eq!(collect((1, 1), (3, 3)).len(), 8);
    }

    #[test]
    fn corner_tile_has_three_neighbors() {
        let mut neighbors = collect((0, 0), (3, 3));
        neighbors.sort();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_tile_has_five_neighbors() {
        assert_eq!(collect((1, 0), (3, 3)).len(), 5);
    }

    #[test]
    fn neighbors_never_include_center() {
        assert!(!collect((1, 1), (3, 3)).contains(&(1, 1)));
    }
}
