//! Terminal Rendering
//!
//! Every piece of printed output in one place. Functions take plain values
//! and never read input, so the prompt flow stays in `main`.

use rb_engine::{GameConfig, GameStats, SpinOutcome, SymbolTable};

pub fn welcome() {
    println!("🎰 Welcome to ReelBandit! 🎰");
    println!("Type 'q' at any prompt to go back a step.");
}

/// The header block shown above the main menu.
pub fn game_info(balance: u64, jackpot: u64, stats: &GameStats) {
    println!("\n{}", "=".repeat(60));
    println!("🎰 REELBANDIT 🎰");
    println!("{}", "=".repeat(60));
    println!("💰 Balance: ${balance}");
    println!("🎁 Progressive Jackpot: ${jackpot}");
    println!("🎯 Total Spins: {}", stats.total_spins);
    println!("📊 Win Rate: {:.1}%", stats.win_rate());
    println!("{}", "=".repeat(60));
}

pub fn main_menu() {
    println!("\n🎮 MAIN MENU:");
    println!("1. 🎰 Play Slot Machine");
    println!("2. 💰 Deposit Funds");
    println!("3. 💎 View Paytable");
    println!("4. 📊 View Statistics");
    println!("5. 💾 Save Game");
    println!("6. 👋 Quit");
}

pub fn deposit_header(balance: u64) {
    println!("\n💰 DEPOSIT FUNDS 💰");
    println!("Current balance: ${balance}");
}

pub fn deposit_done(amount: u64, balance: u64) {
    println!("✅ Deposited ${amount}! New balance: ${balance}");
}

pub fn lines_header(max_lines: usize) {
    println!("\n📏 SELECT BETTING LINES (1-{max_lines}) 📏");
    println!("More lines = more chances to win, but higher total bet!");
}

pub fn bet_header(min_bet: u64, max_bet: u64) {
    println!("\n💵 SET BET PER LINE (${min_bet}-${max_bet}) 💵");
}

/// The stake review shown before the confirm prompt.
pub fn stake_summary(lines: usize, bet_per_line: u64, stake: u64, balance: u64) {
    println!("\n🎲 SPIN SUMMARY:");
    println!("Lines: {lines}");
    println!("Bet per line: ${bet_per_line}");
    println!("Total bet: ${stake}");
    println!("Remaining balance after bet: ${}", balance - stake);
}

pub fn insufficient_funds(stake: u64, balance: u64) {
    println!("❌ Insufficient funds! You need ${stake} but only have ${balance}");
    println!("💡 Try betting on fewer lines or reducing your bet per line.");
}

pub fn spin_cancelled() {
    println!("Spin cancelled.");
}

pub fn spinning() {
    println!("\n🎰 Spinning...");
}

/// The settled spin: the drawn window, wins and the wallet movement.
pub fn spin_result(outcome: &SpinOutcome, table: &SymbolTable) {
    println!("\n{}", "=".repeat(50));
    println!("🎰 SLOT MACHINE RESULT 🎰");
    println!("{}", "=".repeat(50));
    for row in 0..outcome.grid.rows() {
        let cells: Vec<String> = outcome
            .grid
            .line(row)
            .iter()
            .map(|id| glyph(table, *id))
            .collect();
        println!("   {}: {}", row + 1, cells.join(" | "));
    }
    println!("{}", "=".repeat(50));

    if outcome.is_win() {
        if outcome.jackpot_payout > 0 {
            println!("\n🎉🎉🎉 JACKPOT! YOU WON ${}! 🎉🎉🎉", outcome.total_win);
        } else {
            println!("\n🎉 You won ${}!", outcome.total_win);
        }
        let lines = outcome.evaluation.winning_lines();
        if !lines.is_empty() {
            let list: Vec<String> = lines.iter().map(|n| n.to_string()).collect();
            println!("🏆 Winning lines: {}", list.join(", "));
        }
    } else {
        println!("\n😞 No winning combinations. Better luck next time!");
    }

    println!("\n💰 New balance: ${}", outcome.balance_after);
    let net = outcome.net();
    if net > 0 {
        println!("📈 Net gain this spin: +${net}");
    } else if net < 0 {
        println!("📉 Net loss this spin: ${}", net.abs());
    } else {
        println!("➡️  Broke even this spin!");
    }
}

/// Symbol payouts, best first, with the live jackpot value underneath.
pub fn paytable(table: &SymbolTable, config: &GameConfig, jackpot: u64) {
    println!("\n{}", "=".repeat(40));
    println!("💎 SYMBOL PAYTABLE 💎");
    println!("{}", "=".repeat(40));

    for symbol in table.by_payout_desc() {
        println!(
            "{} {} = {}x bet ({})",
            symbol.glyph,
            symbol.name,
            symbol.multiplier,
            symbol.rarity()
        );
    }

    let jackpot_glyph = glyph(table, table.jackpot_id());
    println!("\n🎁 JACKPOT: All {jackpot_glyph} on a line = ${jackpot}");
    println!(
        "Lines pay on {} matching symbols across all {} reels.",
        config.cols, config.cols
    );
    println!("{}", "=".repeat(40));
}

pub fn statistics(stats: &GameStats) {
    println!("\n{}", "=".repeat(50));
    println!("📊 PLAYER STATISTICS 📊");
    println!("{}", "=".repeat(50));
    println!("Total Spins: {}", stats.total_spins);
    println!("Total Amount Bet: ${}", stats.total_bet);
    println!("Total Winnings: ${}", stats.total_winnings);
    println!("Net Profit/Loss: ${}", stats.net_profit());
    println!("Biggest Single Win: ${}", stats.biggest_win);
    println!("Jackpots Won: {}", stats.jackpots_won);
    println!("Win Rate: {:.1}%", stats.win_rate());
    println!("Sessions Played: {}", stats.sessions_played);
    println!("{}", "=".repeat(50));
}

pub fn out_of_money() {
    println!("💸 You're out of money! Please deposit more funds.");
}

pub fn load_ok() {
    println!("✅ Previous game loaded!");
}

pub fn load_failed(err: &rb_state::SaveError) {
    println!("⚠️  Warning: Could not load saved game: {err}");
    println!("Starting with default values...");
}

pub fn save_ok() {
    println!("✅ Game saved successfully!");
}

pub fn save_failed(err: &rb_state::SaveError) {
    println!("⚠️  Warning: Could not save game: {err}");
}

pub fn interrupted() {
    println!("\n\n⚡ Game interrupted!");
}

/// The sign-off printed on every exit path.
pub fn goodbye(balance: u64, stats: &GameStats) {
    println!("\n👋 Thanks for playing!");
    println!("💰 Final balance: ${balance}");
    if stats.total_spins > 0 {
        println!("📊 You played {} spins", stats.total_spins);
        println!("🎯 Net result: ${}", stats.net_profit());
    }
}

fn glyph(table: &SymbolTable, id: u32) -> String {
    table
        .get(id)
        .map(|s| s.glyph.to_string())
        .unwrap_or_else(|| "?".to_string())
}
