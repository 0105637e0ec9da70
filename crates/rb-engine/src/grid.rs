//! Spin grid generation

use rand::Rng;
use rand::rngs::StdRng;

use crate::symbols::SymbolTable;

/// One spin's visible window: `cols` reels of `rows` symbol ids, column-major.
/// A grid has no identity beyond the spin that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Vec<u32>>,
}

impl Grid {
    /// Draw a fresh grid. Every cell is an independent weighted draw with
    /// replacement: one uniform roll in `0..total_weight`, mapped through
    /// the table's cumulative weights.
    pub fn generate(table: &SymbolTable, rows: usize, cols: usize, rng: &mut StdRng) -> Self {
        let mut columns = Vec::with_capacity(cols);
        for _ in 0..cols {
            let mut column = Vec::with_capacity(rows);
            for _ in 0..rows {
                let roll = rng.gen_range(0..table.total_weight());
                column.push(table.pick(roll).id);
            }
            columns.push(column);
        }
        Self { columns }
    }

    /// Wrap prepared columns (forced outcomes in tests and tooling).
    pub fn from_columns(columns: Vec<Vec<u32>>) -> Self {
        Self { columns }
    }

    /// Number of visible rows.
    pub fn rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Number of reels.
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Symbol id at (reel, row).
    pub fn symbol_at(&self, col: usize, row: usize) -> u32 {
        self.columns[col][row]
    }

    /// The symbols along one betting line (one row across all reels).
    pub fn line(&self, row: usize) -> Vec<u32> {
        self.columns.iter().map(|column| column[row]).collect()
    }
}
