//! Symbol definitions and the weighted symbol table

use std::collections::HashSet;
use std::fmt;

use crate::config::ConfigError;

/// How often a symbol lands, judged from its frequency weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Rare,
    Common,
    VeryCommon,
}

impl Rarity {
    /// Classify a frequency weight.
    pub fn from_weight(weight: u32) -> Self {
        match weight {
            0..=2 => Rarity::Rare,
            3..=5 => Rarity::Common,
            _ => Rarity::VeryCommon,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Rare => "Rare",
            Rarity::Common => "Common",
            Rarity::VeryCommon => "Very Common",
        };
        f.write_str(label)
    }
}

/// A paying reel symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Unique symbol ID
    pub id: u32,
    /// Glyph shown on the grid
    pub glyph: char,
    /// Symbol name (e.g. "Diamond")
    pub name: String,
    /// Relative frequency weight; higher lands more often
    pub weight: u32,
    /// Per-line payout multiplier applied to the bet per line
    pub multiplier: u64,
}

impl Symbol {
    pub fn new(id: u32, glyph: char, name: impl Into<String>, weight: u32, multiplier: u64) -> Self {
        Self {
            id,
            glyph,
            name: name.into(),
            weight,
            multiplier,
        }
    }

    /// Rarity label for the paytable display.
    pub fn rarity(&self) -> Rarity {
        Rarity::from_weight(self.weight)
    }
}

/// The validated, ordered symbol set with precomputed total weight.
///
/// Order is the draw order: a uniform roll in `0..total_weight` maps onto the
/// symbols by walking their cumulative weights, so each symbol owns exactly
/// `weight` rolls.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    total_weight: u32,
    jackpot_id: u32,
}

impl SymbolTable {
    /// Build and validate a table. `jackpot_id` marks the symbol whose
    /// full line pays the progressive pool on top of its line win.
    pub fn new(symbols: Vec<Symbol>, jackpot_id: u32) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        let mut seen = HashSet::new();
        for symbol in &symbols {
            if symbol.weight == 0 {
                return Err(ConfigError::ZeroWeight {
                    name: symbol.name.clone(),
                });
            }
            if symbol.multiplier == 0 {
                return Err(ConfigError::ZeroMultiplier {
                    name: symbol.name.clone(),
                });
            }
            if !seen.insert(symbol.id) {
                return Err(ConfigError::DuplicateSymbol { id: symbol.id });
            }
        }
        if !seen.contains(&jackpot_id) {
            return Err(ConfigError::UnknownJackpotSymbol { id: jackpot_id });
        }
        Ok(Self::from_parts(symbols, jackpot_id))
    }

    fn from_parts(symbols: Vec<Symbol>, jackpot_id: u32) -> Self {
        let total_weight = symbols.iter().map(|s| s.weight).sum();
        Self {
            symbols,
            total_weight,
            jackpot_id,
        }
    }

    /// The classic fruit machine set. The diamond is the jackpot symbol.
    pub fn standard() -> Self {
        Self::from_parts(
            vec![
                Symbol::new(1, '💎', "Diamond", 1, 50),
                Symbol::new(2, '👑', "Crown", 2, 25),
                Symbol::new(3, '🍒', "Cherry", 3, 15),
                Symbol::new(4, '🍋', "Lemon", 4, 10),
                Symbol::new(5, '🔔', "Bell", 5, 8),
                Symbol::new(6, '⭐', "Star", 6, 5),
                Symbol::new(7, '🍇', "Grapes", 8, 3),
                Symbol::new(8, '🍊', "Orange", 10, 2),
            ],
            1,
        )
    }

    /// Get symbol by ID
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// Map a uniform roll in `0..total_weight` to its symbol.
    pub fn pick(&self, roll: u32) -> &Symbol {
        let mut cumulative = 0u32;
        for symbol in &self.symbols {
            cumulative += symbol.weight;
            if roll < cumulative {
                return symbol;
            }
        }
        // new() guarantees a non-empty table; out-of-range rolls clamp to the last entry
        &self.symbols[self.symbols.len() - 1]
    }

    /// Symbols sorted by payout multiplier, highest first.
    pub fn by_payout_desc(&self) -> Vec<&Symbol> {
        let mut sorted: Vec<&Symbol> = self.symbols.iter().collect();
        sorted.sort_by(|a, b| b.multiplier.cmp(&a.multiplier));
        sorted
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    pub fn jackpot_id(&self) -> u32 {
        self.jackpot_id
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}
