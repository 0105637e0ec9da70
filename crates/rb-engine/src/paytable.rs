//! Line evaluation and win calculation

use crate::grid::Grid;
use crate::symbols::SymbolTable;

/// Outcome of one betting line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// Line index (0-based; line i reads grid row i)
    pub line_index: usize,
    /// The symbol filling the line, when it matched across all reels
    pub symbol_id: Option<u32>,
    /// Win amount for this line, 0 when it did not match
    pub win_amount: u64,
}

impl LineResult {
    pub fn is_win(&self) -> bool {
        self.win_amount > 0
    }
}

/// Everything one spin's line evaluation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// One entry per active line, in line order
    pub lines: Vec<LineResult>,
    /// Sum of all line wins; the progressive payout is not part of this
    pub total_win: u64,
    /// A full line of the jackpot symbol landed
    pub jackpot_triggered: bool,
}

impl Evaluation {
    /// Check if any line paid
    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }

    /// 1-based indices of the lines that paid, for display.
    pub fn winning_lines(&self) -> Vec<usize> {
        self.lines
            .iter()
            .filter(|line| line.is_win())
            .map(|line| line.line_index + 1)
            .collect()
    }
}

/// Evaluate the active lines of a grid.
///
/// Line `i` is grid row `i`. A line pays iff every reel shows the same
/// symbol on it, and then pays `bet_per_line × multiplier(symbol)`. Bounds
/// on `lines` and `bet_per_line` are the caller's job and are not
/// re-checked here.
pub fn evaluate_lines(
    grid: &Grid,
    table: &SymbolTable,
    lines: usize,
    bet_per_line: u64,
) -> Evaluation {
    let mut results = Vec::with_capacity(lines);
    let mut total_win = 0u64;
    let mut jackpot_triggered = false;

    for line_index in 0..lines {
        let result = evaluate_line(grid, table, line_index, bet_per_line);
        if result.symbol_id == Some(table.jackpot_id()) {
            jackpot_triggered = true;
        }
        total_win += result.win_amount;
        results.push(result);
    }

    Evaluation {
        lines: results,
        total_win,
        jackpot_triggered,
    }
}

fn evaluate_line(
    grid: &Grid,
    table: &SymbolTable,
    line_index: usize,
    bet_per_line: u64,
) -> LineResult {
    let symbols = grid.line(line_index);
    let matched = match symbols.split_first() {
        Some((first, rest)) if rest.iter().all(|s| s == first) => Some(*first),
        _ => None,
    };

    // A matched id that is not in the table cannot pay.
    match matched.and_then(|id| table.get(id)) {
        Some(symbol) => LineResult {
            line_index,
            symbol_id: Some(symbol.id),
            win_amount: bet_per_line * symbol.multiplier,
        },
        None => LineResult {
            line_index,
            symbol_id: None,
            win_amount: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Standard ids: 1 💎, 2 👑, 3 🍒, 4 🍋, 5 🔔, 6 ⭐, 7 🍇, 8 🍊.

    fn full_row_grid(row0: u32, row1: u32, row2: u32) -> Grid {
        Grid::from_columns(vec![vec![row0, row1, row2]; 5])
    }

    #[test]
    fn test_matched_line_pays_bet_times_multiplier() {
        let table = SymbolTable::standard();
        let grid = full_row_grid(8, 3, 4); // oranges on line 1
        let eval = evaluate_lines(&grid, &table, 1, 10);

        assert!(eval.is_win());
        assert_eq!(eval.total_win, 20); // 10 × orange multiplier 2
        assert_eq!(eval.lines[0].symbol_id, Some(8));
        assert!(!eval.jackpot_triggered);
    }

    #[test]
    fn test_mismatched_line_pays_nothing() {
        let table = SymbolTable::standard();
        let mut columns = vec![vec![8u32, 3, 4]; 5];
        columns[2][0] = 7; // one grape breaks the orange line
        let eval = evaluate_lines(&Grid::from_columns(columns), &table, 1, 10);

        assert!(!eval.is_win());
        assert_eq!(eval.total_win, 0);
        assert_eq!(eval.lines[0].symbol_id, None);
    }

    #[test]
    fn test_only_active_lines_pay() {
        let table = SymbolTable::standard();
        // Row 1 is a full orange line, but only line 0 is active.
        let mut columns = vec![vec![5u32, 8, 4]; 5];
        columns[0][0] = 6; // break line 0
        let eval = evaluate_lines(&Grid::from_columns(columns), &table, 1, 10);

        assert_eq!(eval.total_win, 0);
        assert_eq!(eval.lines.len(), 1);
    }

    #[test]
    fn test_multiple_winning_lines_sum() {
        let table = SymbolTable::standard();
        let grid = full_row_grid(8, 1, 2); // orange, diamond, crown rows
        let eval = evaluate_lines(&grid, &table, 3, 10);

        // 10×2 + 10×50 + 10×25
        assert_eq!(eval.total_win, 770);
        assert_eq!(eval.winning_lines(), vec![1, 2, 3]);
        assert!(eval.jackpot_triggered);
    }

    #[test]
    fn test_jackpot_flag_only_for_jackpot_symbol() {
        let table = SymbolTable::standard();
        let crowns = full_row_grid(2, 3, 4);
        assert!(!evaluate_lines(&crowns, &table, 1, 10).jackpot_triggered);

        let diamonds = full_row_grid(1, 3, 4);
        assert!(evaluate_lines(&diamonds, &table, 1, 10).jackpot_triggered);
    }

    #[test]
    fn test_unknown_symbol_cannot_pay() {
        let table = SymbolTable::standard();
        let grid = full_row_grid(99, 3, 4);
        let eval = evaluate_lines(&grid, &table, 1, 10);
        assert_eq!(eval.total_win, 0);
        assert_eq!(eval.lines[0].symbol_id, None);
    }
}
