use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_columns, Card, Cell, Column, FREE_COL, FREE_ROW, SIDE};

/// Deterministic card generator backed by a seeded ChaCha20 RNG.
///
/// The same seed always yields the same sequence of cards, which is what
/// makes the generation invariants testable. Hosts that want a fresh card
/// each run seed from `rand::random()`.
#[derive(Debug)]
pub struct CardGenerator {
    rng: ChaCha20Rng,
}

impl CardGenerator {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Produce a valid card: five distinct numbers per column band, each
    /// column sorted ascending, free cell at the center.
    ///
    /// Generation cannot fail; every band has 15 candidates for 5 slots, so
    /// the rejection sampling always terminates.
    pub fn generate(&mut self) -> Card {
        let mut columns = [[0u8; SIDE]; SIDE];
        for column in all_columns() {
            columns[column.index()] = self.draw_column(column);
        }

        // Transpose the per-column lists into row-major order.
        let mut grid = [[Cell::Free; SIDE]; SIDE];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = Cell::Number(columns[col][row]);
            }
        }
        // The center slot discards its generated number.
        grid[FREE_ROW][FREE_COL] = Cell::Free;

        Card::from_rows_unchecked(grid)
    }

    /// Draw five distinct numbers from the column's range by rejection
    /// sampling, returned in ascending order.
    fn draw_column(&mut self, column: Column) -> [u8; SIDE] {
        let mut seen = HashSet::new();
        while seen.len() < SIDE {
            seen.insert(self.rng.random_range(column.range()));
        }
        let mut values: Vec<u8> = seen.into_iter().collect();
        values.sort_unstable();
        let mut out = [0u8; SIDE];
        out.copy_from_slice(&values);
        out
    }
}
