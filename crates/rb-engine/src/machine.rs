//! The slot machine: wallet, pool, RNG and the spin transaction

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::jackpot::ProgressiveJackpot;
use crate::paytable::{Evaluation, evaluate_lines};
use crate::stats::GameStats;
use crate::symbols::SymbolTable;

/// Why a spin was refused. Nothing is mutated when these are returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpinError {
    #[error("line count must be between 1 and {max}, got {got}")]
    InvalidLines { got: usize, max: usize },

    #[error("bet per line must be between ${min} and ${max}, got ${got}")]
    InvalidBet { got: u64, min: u64, max: u64 },

    #[error("insufficient balance: stake ${stake} exceeds balance ${balance}")]
    InsufficientBalance { stake: u64, balance: u64 },
}

/// Why a deposit was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepositError {
    #[error("deposit must be between ${min} and ${max}, got ${got}")]
    OutOfRange { got: u64, min: u64, max: u64 },
}

/// Everything a single accepted spin produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    /// The window that was drawn
    pub grid: Grid,
    /// Per-line results
    pub evaluation: Evaluation,
    /// Progressive payout, 0 unless the jackpot line landed
    pub jackpot_payout: u64,
    /// Total credited: line wins plus the progressive payout
    pub total_win: u64,
    /// The stake that was debited
    pub stake: u64,
    /// Balance after the spin settled
    pub balance_after: u64,
}

impl SpinOutcome {
    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }

    /// Net wallet movement for this spin.
    pub fn net(&self) -> i64 {
        self.total_win as i64 - self.stake as i64
    }
}

/// Owns every piece of mutable game state and is its only writer. A spin
/// either settles fully or is refused without touching anything.
#[derive(Debug)]
pub struct SlotMachine {
    config: GameConfig,
    table: SymbolTable,
    rng: StdRng,
    balance: u64,
    jackpot: ProgressiveJackpot,
    stats: GameStats,
}

impl SlotMachine {
    /// Fresh machine: default wallet, pool at its floor, OS-seeded RNG.
    pub fn new(config: GameConfig, table: SymbolTable) -> Result<Self, ConfigError> {
        let balance = config.default_balance;
        Self::with_state(config, table, balance, config.jackpot_floor, GameStats::default())
    }

    /// Machine resuming from persisted state. A pool below the floor clamps
    /// up to it.
    pub fn with_state(
        config: GameConfig,
        table: SymbolTable,
        balance: u64,
        jackpot_value: u64,
        stats: GameStats,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            balance,
            jackpot: ProgressiveJackpot::restore(
                jackpot_value,
                config.jackpot_floor,
                config.jackpot_rate,
            ),
            stats,
            rng: StdRng::from_entropy(),
            config,
            table,
        })
    }

    /// Reseed the RNG for a reproducible session.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Count this program launch.
    pub fn begin_session(&mut self) {
        self.stats.record_session();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Current progressive pool value.
    pub fn jackpot(&self) -> u64 {
        self.jackpot.value()
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Add funds to the wallet; returns the new balance.
    pub fn deposit(&mut self, amount: u64) -> Result<u64, DepositError> {
        if amount < self.config.deposit_min || amount > self.config.deposit_max {
            return Err(DepositError::OutOfRange {
                got: amount,
                min: self.config.deposit_min,
                max: self.config.deposit_max,
            });
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Run one full spin: validate, debit, accrue, draw, evaluate, settle.
    pub fn spin(&mut self, lines: usize, bet_per_line: u64) -> Result<SpinOutcome, SpinError> {
        // The stake is rejected before any grid is drawn.
        self.check_bet(lines, bet_per_line)?;
        let grid = Grid::generate(&self.table, self.config.rows, self.config.cols, &mut self.rng);
        Ok(self.settle(grid, lines, bet_per_line))
    }

    /// Like [`SlotMachine::spin`], but plays out a prepared grid, which must
    /// cover the active lines. Forced outcomes keep the settling path
    /// testable end to end.
    pub fn spin_with_grid(
        &mut self,
        grid: Grid,
        lines: usize,
        bet_per_line: u64,
    ) -> Result<SpinOutcome, SpinError> {
        self.check_bet(lines, bet_per_line)?;
        Ok(self.settle(grid, lines, bet_per_line))
    }

    fn check_bet(&self, lines: usize, bet_per_line: u64) -> Result<(), SpinError> {
        if lines == 0 || lines > self.config.max_lines {
            return Err(SpinError::InvalidLines {
                got: lines,
                max: self.config.max_lines,
            });
        }
        if bet_per_line < self.config.min_bet || bet_per_line > self.config.max_bet {
            return Err(SpinError::InvalidBet {
                got: bet_per_line,
                min: self.config.min_bet,
                max: self.config.max_bet,
            });
        }
        let stake = lines as u64 * bet_per_line;
        if stake > self.balance {
            return Err(SpinError::InsufficientBalance {
                stake,
                balance: self.balance,
            });
        }
        Ok(())
    }

    fn settle(&mut self, grid: Grid, lines: usize, bet_per_line: u64) -> SpinOutcome {
        let stake = lines as u64 * bet_per_line;
        self.balance -= stake;
        let contribution = self.jackpot.contribute(stake);

        let evaluation = evaluate_lines(&grid, &self.table, lines, bet_per_line);
        let jackpot_payout = if evaluation.jackpot_triggered {
            self.jackpot.award()
        } else {
            0
        };
        let total_win = evaluation.total_win + jackpot_payout;
        self.balance += total_win;
        self.stats.record_spin(stake, total_win, evaluation.jackpot_triggered);

        log::debug!(
            "spin settled: stake {stake}, pool contribution {contribution}, win {total_win}, balance {}",
            self.balance
        );
        if evaluation.jackpot_triggered {
            log::info!("progressive jackpot hit for ${jackpot_payout}");
        }

        SpinOutcome {
            grid,
            evaluation,
            jackpot_payout,
            total_win,
            stake,
            balance_after: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_with_balance(balance: u64) -> SlotMachine {
        SlotMachine::with_state(
            GameConfig::default(),
            SymbolTable::standard(),
            balance,
            1000,
            GameStats::default(),
        )
        .unwrap()
    }

    fn full_row_grid(row0: u32, row1: u32, row2: u32) -> Grid {
        Grid::from_columns(vec![vec![row0, row1, row2]; 5])
    }

    #[test]
    fn test_orange_line_pays_double() {
        let mut machine = machine_with_balance(100);
        let outcome = machine
            .spin_with_grid(full_row_grid(8, 1, 2), 1, 10)
            .unwrap();

        assert_eq!(outcome.total_win, 20); // $10 × orange multiplier 2
        assert_eq!(outcome.balance_after, 110);
        assert_eq!(machine.balance(), 110);
        assert_eq!(machine.stats().total_winnings, 20);
        assert_eq!(machine.stats().biggest_win, 20);
        assert_eq!(machine.stats().total_spins, 1);
    }

    #[test]
    fn test_stake_over_balance_rejected_without_mutation() {
        let mut machine = machine_with_balance(5);
        let err = machine.spin(1, 10).unwrap_err();

        assert_eq!(
            err,
            SpinError::InsufficientBalance {
                stake: 10,
                balance: 5
            }
        );
        assert_eq!(machine.balance(), 5);
        assert_eq!(machine.jackpot(), 1000);
        assert_eq!(machine.stats(), &GameStats::default());
    }

    #[test]
    fn test_line_and_bet_bounds() {
        let mut machine = machine_with_balance(10_000);

        assert!(matches!(
            machine.spin(0, 10),
            Err(SpinError::InvalidLines { got: 0, .. })
        ));
        assert!(matches!(
            machine.spin(4, 10),
            Err(SpinError::InvalidLines { got: 4, .. })
        ));
        assert!(matches!(
            machine.spin(1, 0),
            Err(SpinError::InvalidBet { got: 0, .. })
        ));
        assert!(matches!(
            machine.spin(1, 1001),
            Err(SpinError::InvalidBet { got: 1001, .. })
        ));
        assert_eq!(machine.stats().total_spins, 0);
    }

    #[test]
    fn test_losing_spin_still_feeds_the_pool() {
        let mut machine = machine_with_balance(1000);
        let mut columns = vec![vec![8u32, 7, 6]; 5];
        columns[0][0] = 7;
        columns[0][1] = 8;
        columns[0][2] = 5; // no row matches
        let outcome = machine
            .spin_with_grid(Grid::from_columns(columns), 3, 100)
            .unwrap();

        assert_eq!(outcome.total_win, 0);
        assert_eq!(machine.balance(), 700);
        assert_eq!(machine.jackpot(), 1003); // floor(300 × 0.01)
        assert_eq!(machine.stats().total_spins, 1);
    }

    #[test]
    fn test_jackpot_line_pays_pool_on_top_of_line_win() {
        let mut machine = machine_with_balance(1000);
        let outcome = machine
            .spin_with_grid(full_row_grid(1, 2, 3), 1, 100)
            .unwrap();

        // Stake 100 contributes 1 before the award, so the pool pays 1001.
        assert_eq!(outcome.jackpot_payout, 1001);
        assert_eq!(outcome.evaluation.total_win, 5000); // 100 × diamond 50
        assert_eq!(outcome.total_win, 6001);
        assert_eq!(machine.balance(), 1000 - 100 + 6001);
        assert_eq!(machine.jackpot(), 1000); // reset to floor
        assert_eq!(machine.stats().jackpots_won, 1);
        assert_eq!(machine.stats().biggest_win, 6001);
    }

    #[test]
    fn test_balance_equation_holds() {
        let mut machine = machine_with_balance(100_000);
        machine.seed(99);

        for _ in 0..200 {
            let before = machine.balance();
            let outcome = machine.spin(3, 25).unwrap();
            assert_eq!(
                outcome.balance_after,
                before - outcome.stake + outcome.total_win
            );
            assert!(machine.jackpot() >= 1000);
        }
        assert_eq!(machine.stats().total_spins, 200);
        assert_eq!(machine.stats().total_bet, 200 * 75);
    }

    #[test]
    fn test_deposit_bounds() {
        let mut machine = machine_with_balance(100);

        assert_eq!(machine.deposit(500), Ok(600));
        assert!(matches!(
            machine.deposit(0),
            Err(DepositError::OutOfRange { got: 0, .. })
        ));
        assert!(matches!(
            machine.deposit(10_001),
            Err(DepositError::OutOfRange { got: 10_001, .. })
        ));
        assert_eq!(machine.balance(), 600); // rejected deposits leave no trace
    }

    #[test]
    fn test_begin_session_counts_launches() {
        let mut machine = machine_with_balance(100);
        machine.begin_session();
        assert_eq!(machine.stats().sessions_played, 1);
    }

    #[test]
    fn test_restored_pool_clamps_to_floor() {
        let machine = SlotMachine::with_state(
            GameConfig::default(),
            SymbolTable::standard(),
            100,
            250, // save edited below the floor
            GameStats::default(),
        )
        .unwrap();
        assert_eq!(machine.jackpot(), 1000);
    }

    #[test]
    fn test_invalid_config_refused() {
        let config = GameConfig {
            max_lines: 9,
            ..Default::default()
        };
        let result = SlotMachine::new(config, SymbolTable::standard());
        assert!(matches!(result, Err(ConfigError::BadLineCount { .. })));
    }
}
