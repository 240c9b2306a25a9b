//! Property tests for the torus grid.

use proptest::prelude::*;

use thornwald::world::{Direction, Grid, Tile, TileId};

fn square_grid(size: usize) -> Grid {
    let tiles = (0..size * size)
        .map(|i| Tile::new(format!("tile {i}")))
        .collect();
    Grid::new(size, tiles)
}

proptest! {
    #[test]
    fn stepping_back_returns_home(size in 1usize..16, x in 0usize..16, y in 0usize..16) {
        let grid = square_grid(size);
        let home = TileId::new(x % size, y % size);
        for direction in Direction::ALL {
            let there = grid.neighbor(home, direction);
            prop_assert_eq!(grid.neighbor(there, direction.opposite()), home);
        }
    }

    #[test]
    fn a_full_circuit_wraps_around(size in 1usize..16, x in 0usize..16, y in 0usize..16) {
        let grid = square_grid(size);
        let home = TileId::new(x % size, y % size);
        for direction in Direction::ALL {
            let mut walker = home;
            for _ in 0..size {
                walker = grid.neighbor(walker, direction);
            }
            prop_assert_eq!(walker, home);
        }
    }

    #[test]
    fn neighbors_stay_in_bounds(size in 1usize..16, x in 0usize..16, y in 0usize..16) {
        let grid = square_grid(size);
        let home = TileId::new(x % size, y % size);
        for direction in Direction::ALL {
            let there = grid.neighbor(home, direction);
            prop_assert!(there.x < size && there.y < size);
        }
    }
}

#[test]
fn display_and_parse_agree() {
    for direction in Direction::ALL {
        let word = direction.to_string();
        assert_eq!(word.parse::<Direction>(), Ok(direction));
    }
}
