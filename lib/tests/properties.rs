use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rlifesim_lib::{CellState, Grid};

fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    Grid::random(rows, cols, 0.4, &mut StdRng::seed_from_u64(seed))
}

proptest! {
    /// Coordinates wrap around in both directions.
    #[test]
    fn prop_toroidal_wrap(
        rows in 1usize..12,
        cols in 1usize..12,
        seed: u64,
        row in -40i32..40,
        col in -40i32..40,
        k in -4i32..4,
        j in -4i32..4,
    ) {
        let grid = random_grid(rows, cols, seed);
        let wrapped = (row + k * rows as i32, col + j * cols as i32);
        prop_assert_eq!(grid.get(wrapped), grid.get((row, col)));
    }

    /// Computing the next generation leaves the grid alone.
    #[test]
    fn prop_next_does_not_mutate(rows in 0usize..10, cols in 0usize..10, seed: u64) {
        let grid = random_grid(rows, cols, seed);
        let copy = grid.clone();
        let next = grid.next();
        prop_assert_eq!(&grid, &copy);
        prop_assert_eq!(next.size(), grid.size());
    }

    /// Born and survived cells were respectively dead and living before,
    /// and the labels agree with the plain B3/S23 rule.
    #[test]
    fn prop_labels_follow_the_rule(rows in 1usize..10, cols in 1usize..10, seed: u64) {
        let grid = random_grid(rows, cols, seed);
        let next = grid.next();
        for ((row, col), state) in next.iter() {
            let was_alive = grid.get((row, col)).is_alive();
            let neighbors = (-1..=1)
                .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
                .filter(|&d| d != (0, 0))
                .filter(|(dr, dc)| grid.get((row + dr, col + dc)).is_alive())
                .count();
            let expected = match (was_alive, neighbors) {
                (true, 2) | (true, 3) => CellState::Alive,
                (false, 3) => CellState::Born,
                (true, _) => CellState::Died,
                (false, _) => CellState::Empty,
            };
            prop_assert_eq!(state, expected);
        }
    }
}
