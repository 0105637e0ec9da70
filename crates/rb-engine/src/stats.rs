//! Player statistics

use serde::{Deserialize, Serialize};

/// Lifetime player counters. Everything here persists across sessions and is
/// monotonically non-decreasing apart from `biggest_win`, which tracks a max.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    /// Accepted spins over all sessions
    pub total_spins: u64,
    /// Sum of every accepted stake
    pub total_bet: u64,
    /// Sum of every payout, progressive included
    pub total_winnings: u64,
    /// Largest single-spin payout
    pub biggest_win: u64,
    /// Progressive jackpot hits
    pub jackpots_won: u64,
    /// Program launches
    pub sessions_played: u64,
}

impl GameStats {
    /// Winnings minus stakes over the whole history.
    pub fn net_profit(&self) -> i64 {
        self.total_winnings as i64 - self.total_bet as i64
    }

    /// Percentage of staked money returned, 0 when nothing was bet yet.
    pub fn win_rate(&self) -> f64 {
        if self.total_bet == 0 {
            return 0.0;
        }
        self.total_winnings as f64 / self.total_bet as f64 * 100.0
    }

    /// Fold one accepted spin into the counters.
    pub fn record_spin(&mut self, stake: u64, win: u64, jackpot: bool) {
        self.total_spins += 1;
        self.total_bet += stake;
        self.total_winnings += win;
        self.biggest_win = self.biggest_win.max(win);
        if jackpot {
            self.jackpots_won += 1;
        }
    }

    /// Count a program launch.
    pub fn record_session(&mut self) {
        self.sessions_played += 1;
    }
}
