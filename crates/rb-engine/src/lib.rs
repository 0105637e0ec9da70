//! # rb-engine — Slot Machine Core for ReelBandit
//!
//! Provides the complete game math for a terminal slot machine: weighted
//! symbol draws, line evaluation, a progressive jackpot pool and lifetime
//! statistics. The engine is deterministic under a fixed seed and performs
//! no IO of its own.
//!
//! ## Features
//!
//! - **Weighted Reels**: Cumulative-weight symbol draws, one roll per cell
//! - **Line Wins**: Horizontal paylines, all-equal rows pay bet × multiplier
//! - **Progressive Jackpot**: Every stake feeds the pool, diamond line drains it
//! - **Wallet Safety**: A spin settles fully or is refused without mutation
//! - **Statistics**: Spins, winnings, biggest win and session counters
//!
//! ## Architecture
//!
//! ```text
//! SlotMachine
//!     │
//!     ├── GameConfig (grid size, bet and deposit bounds)
//!     ├── SymbolTable (weights, multipliers, jackpot symbol)
//!     ├── ProgressiveJackpot (pool, floor, contribution rate)
//!     └── GameStats (lifetime counters)
//!           │
//!           v
//!     Grid → Evaluation → SpinOutcome
//! ```

pub mod config;
pub mod grid;
pub mod jackpot;
pub mod machine;
pub mod paytable;
pub mod stats;
pub mod symbols;

pub use config::*;
pub use grid::*;
pub use jackpot::*;
pub use machine::*;
pub use paytable::*;
pub use stats::*;
pub use symbols::*;
