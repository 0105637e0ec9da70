//! ReelBandit, a terminal slot machine
//!
//! Usage:
//!   reelbandit                        - Play with the default save file
//!   reelbandit --save-file my.json    - Keep game state somewhere else
//!   reelbandit --seed 42              - Reproducible reels

mod display;
mod input;
mod screen;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use parking_lot::Mutex;
use rb_engine::{GameConfig, SlotMachine, SymbolTable};
use rb_state::{LoadedSave, SaveData};

use crate::input::Answer;
use crate::screen::{Event, MenuChoice, Screen, transition};

#[derive(Parser)]
#[command(name = "reelbandit", about = "Terminal slot machine with a progressive jackpot")]
struct Cli {
    /// Save file location (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    save_file: Option<PathBuf>,

    /// Seed the reels for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let save_path = resolve_save_path(&cli);
    log::debug!("save file: {}", save_path.display());

    let saved = match SaveData::load_from(&save_path) {
        LoadedSave::Restored(data) => {
            display::load_ok();
            data
        }
        LoadedSave::FirstRun => SaveData::default(),
        LoadedSave::Unreadable(err) => {
            display::load_failed(&err);
            SaveData::default()
        }
    };

    let mut machine = SlotMachine::with_state(
        GameConfig::default(),
        SymbolTable::standard(),
        saved.balance,
        saved.progressive_jackpot,
        saved.stats,
    )
    .context("game configuration is invalid")?;

    if let Some(seed) = cli.seed {
        machine.seed(seed);
        log::debug!("reels seeded with {seed}");
    }
    machine.begin_session();

    let game = Game {
        machine: Arc::new(Mutex::new(machine)),
        save_path,
    };
    game.install_interrupt_handler()?;

    display::welcome();
    game.run()?;

    game.save_and_report();
    let machine = game.machine.lock();
    display::goodbye(machine.balance(), machine.stats());
    Ok(())
}

fn resolve_save_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.save_file {
        return path.clone();
    }
    if let Ok(path) = env::var("REELBANDIT_SAVE_FILE") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    rb_state::default_save_path()
}

/// Shares the machine with the interrupt handler. Prompts never run while
/// the lock is held.
struct Game {
    machine: Arc<Mutex<SlotMachine>>,
    save_path: PathBuf,
}

impl Game {
    /// Ctrl-C saves the game and exits, like choosing Quit.
    fn install_interrupt_handler(&self) -> Result<()> {
        let machine = Arc::clone(&self.machine);
        let path = self.save_path.clone();
        ctrlc::set_handler(move || {
            display::interrupted();
            let machine = machine.lock();
            match SaveData::from_machine(&machine).save_to(&path) {
                Ok(()) => display::save_ok(),
                Err(e) => display::save_failed(&e),
            }
            display::goodbye(machine.balance(), machine.stats());
            std::process::exit(0);
        })
        .context("could not install the Ctrl-C handler")
    }

    fn run(&self) -> Result<()> {
        let mut screen = Screen::MainMenu;
        loop {
            let event = match screen {
                Screen::Exit => break,
                Screen::MainMenu => self.main_menu()?,
                Screen::BetLines => self.choose_lines()?,
                Screen::BetAmount { .. } => self.choose_bet()?,
                Screen::Confirm { lines, bet } => self.confirm_and_spin(lines, bet)?,
                Screen::SpinResult => self.ask_play_again()?,
                Screen::Deposit => self.take_deposit()?,
                Screen::Paytable => self.show_paytable()?,
                Screen::Stats => self.show_statistics()?,
            };
            screen = transition(screen, event);
        }
        Ok(())
    }

    fn main_menu(&self) -> Result<Event> {
        {
            let machine = self.machine.lock();
            display::game_info(machine.balance(), machine.jackpot(), machine.stats());
        }
        display::main_menu();

        let choice = loop {
            let Some(line) = input::read_line("\nSelect option (1-6): ")? else {
                return Ok(Event::QuitRequested);
            };
            if input::is_quit_word(&line) {
                break MenuChoice::Quit;
            }
            match MenuChoice::parse(&line) {
                Some(choice) => break choice,
                None => println!("❌ Please enter a number between 1 and 6"),
            }
        };

        match choice {
            MenuChoice::Play if self.machine.lock().balance() == 0 => {
                display::out_of_money();
                return Ok(Event::Viewed);
            }
            MenuChoice::Save => self.save_and_report(),
            _ => {}
        }
        Ok(Event::Menu(choice))
    }

    fn choose_lines(&self) -> Result<Event> {
        let max_lines = self.machine.lock().config().max_lines;
        display::lines_header(max_lines);

        let prompt = format!("Number of lines to bet on (1-{max_lines}): ");
        match input::ask_number(&prompt, 1, max_lines as u64)? {
            Answer::Value(n) => Ok(Event::Lines(Some(n as usize))),
            Answer::Back => Ok(Event::Lines(None)),
            Answer::Eof => Ok(Event::QuitRequested),
        }
    }

    fn choose_bet(&self) -> Result<Event> {
        let (min_bet, max_bet) = {
            let machine = self.machine.lock();
            (machine.config().min_bet, machine.config().max_bet)
        };
        display::bet_header(min_bet, max_bet);

        let prompt = format!("Bet per line (${min_bet}-${max_bet}): $");
        match input::ask_number(&prompt, min_bet, max_bet)? {
            Answer::Value(bet) => Ok(Event::Bet(Some(bet))),
            Answer::Back => Ok(Event::Bet(None)),
            Answer::Eof => Ok(Event::QuitRequested),
        }
    }

    fn confirm_and_spin(&self, lines: usize, bet: u64) -> Result<Event> {
        let stake = lines as u64 * bet;
        let balance = self.machine.lock().balance();
        if stake > balance {
            display::insufficient_funds(stake, balance);
            return Ok(Event::SpinRefused);
        }

        display::stake_summary(lines, bet, stake, balance);
        match input::ask_yes_no("Confirm this spin?")? {
            Answer::Value(true) => {}
            Answer::Value(false) | Answer::Back => {
                display::spin_cancelled();
                return Ok(Event::SpinCancelled);
            }
            Answer::Eof => return Ok(Event::QuitRequested),
        }

        display::spinning();
        let mut machine = self.machine.lock();
        match machine.spin(lines, bet) {
            Ok(outcome) => {
                display::spin_result(&outcome, machine.table());
                let out_of_money = machine.balance() == 0;
                if out_of_money {
                    display::out_of_money();
                }
                Ok(Event::SpinDone { out_of_money })
            }
            Err(e) => {
                println!("❌ {e}");
                Ok(Event::SpinCancelled)
            }
        }
    }

    fn ask_play_again(&self) -> Result<Event> {
        match input::ask_yes_no("\nPlay another spin?")? {
            Answer::Value(again) => Ok(Event::PlayAgain(again)),
            Answer::Back => Ok(Event::PlayAgain(false)),
            Answer::Eof => Ok(Event::QuitRequested),
        }
    }

    fn take_deposit(&self) -> Result<Event> {
        let (min, max, balance) = {
            let machine = self.machine.lock();
            (
                machine.config().deposit_min,
                machine.config().deposit_max,
                machine.balance(),
            )
        };
        display::deposit_header(balance);

        match input::ask_number("Enter deposit amount (or 'q' to cancel): $", min, max)? {
            Answer::Value(amount) => {
                let mut machine = self.machine.lock();
                match machine.deposit(amount) {
                    Ok(new_balance) => display::deposit_done(amount, new_balance),
                    Err(e) => println!("❌ {e}"),
                }
                Ok(Event::DepositDone)
            }
            Answer::Back => Ok(Event::DepositDone),
            Answer::Eof => Ok(Event::QuitRequested),
        }
    }

    fn show_paytable(&self) -> Result<Event> {
        {
            let machine = self.machine.lock();
            display::paytable(machine.table(), machine.config(), machine.jackpot());
        }
        if input::pause("\nPress Enter to continue...")? {
            Ok(Event::Viewed)
        } else {
            Ok(Event::QuitRequested)
        }
    }

    fn show_statistics(&self) -> Result<Event> {
        {
            let machine = self.machine.lock();
            display::statistics(machine.stats());
        }
        if input::pause("\nPress Enter to continue...")? {
            Ok(Event::Viewed)
        } else {
            Ok(Event::QuitRequested)
        }
    }

    fn save_and_report(&self) {
        let data = SaveData::from_machine(&self.machine.lock());
        match data.save_to(&self.save_path) {
            Ok(()) => display::save_ok(),
            Err(e) => {
                log::error!("save failed: {e}");
                display::save_failed(&e);
            }
        }
    }
}
