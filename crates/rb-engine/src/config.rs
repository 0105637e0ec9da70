//! Game configuration and betting limits

use thiserror::Error;

/// Starting balance for a fresh wallet.
pub const DEFAULT_BALANCE: u64 = 100;

/// The progressive pool starts here and resets here after every hit.
pub const JACKPOT_FLOOR: u64 = 1000;

/// Validation errors for [`GameConfig`] and the symbol table.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("max_lines must be between 1 and {rows} (a line is a grid row), got {max_lines}")]
    BadLineCount { max_lines: usize, rows: usize },

    #[error("bet bounds invalid: min {min}, max {max}")]
    BadBetBounds { min: u64, max: u64 },

    #[error("deposit bounds invalid: min {min}, max {max}")]
    BadDepositBounds { min: u64, max: u64 },

    #[error("jackpot contribution rate must be in (0.0, 1.0), got {rate}")]
    BadContributionRate { rate: f64 },

    #[error("symbol table is empty")]
    EmptyTable,

    #[error("symbol {name:?} has zero weight")]
    ZeroWeight { name: String },

    #[error("symbol {name:?} has zero payout multiplier")]
    ZeroMultiplier { name: String },

    #[error("duplicate symbol id {id}")]
    DuplicateSymbol { id: u32 },

    #[error("jackpot symbol id {id} is not in the table")]
    UnknownJackpotSymbol { id: u32 },
}

/// Immutable game parameters, built once at startup and passed by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Visible rows per reel.
    pub rows: usize,
    /// Number of reels (columns).
    pub cols: usize,
    /// Highest selectable line count; a line is one grid row.
    pub max_lines: usize,
    /// Minimum bet per line.
    pub min_bet: u64,
    /// Maximum bet per line.
    pub max_bet: u64,
    /// Minimum single deposit.
    pub deposit_min: u64,
    /// Maximum single deposit.
    pub deposit_max: u64,
    /// Wallet balance for a brand new player.
    pub default_balance: u64,
    /// Progressive pool floor and reset value.
    pub jackpot_floor: u64,
    /// Fraction of every accepted stake fed into the pool.
    pub jackpot_rate: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 5,
            max_lines: 3,
            min_bet: 1,
            max_bet: 1000,
            deposit_min: 1,
            deposit_max: 10_000,
            default_balance: DEFAULT_BALANCE,
            jackpot_floor: JACKPOT_FLOOR,
            jackpot_rate: 0.01,
        }
    }
}

impl GameConfig {
    /// Check all bounds. Called once when the machine is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.max_lines == 0 || self.max_lines > self.rows {
            return Err(ConfigError::BadLineCount {
                max_lines: self.max_lines,
                rows: self.rows,
            });
        }
        if self.min_bet == 0 || self.min_bet > self.max_bet {
            return Err(ConfigError::BadBetBounds {
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        if self.deposit_min == 0 || self.deposit_min > self.deposit_max {
            return Err(ConfigError::BadDepositBounds {
                min: self.deposit_min,
                max: self.deposit_max,
            });
        }
        if self.jackpot_rate <= 0.0 || self.jackpot_rate >= 1.0 {
            return Err(ConfigError::BadContributionRate {
                rate: self.jackpot_rate,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_more_lines_than_rows_rejected() {
        let config = GameConfig {
            max_lines: 5,
            rows: 3,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BadLineCount {
                max_lines: 5,
                rows: 3
            })
        );
    }

    #[test]
    fn test_zero_lines_rejected() {
        let config = GameConfig {
            max_lines: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_bet_bounds_rejected() {
        let config = GameConfig {
            min_bet: 100,
            max_bet: 10,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BadBetBounds { min: 100, max: 10 })
        );
    }

    #[test]
    fn test_contribution_rate_bounds() {
        for rate in [0.0, 1.0, -0.5, 1.5] {
            let config = GameConfig {
                jackpot_rate: rate,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }
}
