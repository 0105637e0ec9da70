//! rb-state: Save file persistence for ReelBandit
//!
//! Loads and stores the pieces of game state that outlive a single run.

mod save;

pub use save::*;
