//! Screen Flow
//!
//! The UI is a small state machine: every prompt belongs to a screen and
//! every answer becomes an event. `transition` is the only place screens
//! change, which keeps the quit-backs-out-one-step rule in a single table.

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Deposit,
    Paytable,
    Stats,
    Save,
    Quit,
}

impl MenuChoice {
    /// Map a menu answer to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Play),
            "2" => Some(Self::Deposit),
            "3" => Some(Self::Paytable),
            "4" => Some(Self::Stats),
            "5" => Some(Self::Save),
            "6" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Where the player currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    /// Choosing how many lines to bet on
    BetLines,
    /// Choosing the bet per line
    BetAmount { lines: usize },
    /// Reviewing the stake before the reels move
    Confirm { lines: usize, bet: u64 },
    /// A spin just settled, asking whether to go again
    SpinResult,
    Deposit,
    Paytable,
    Stats,
    Exit,
}

/// What the player answered on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Menu(MenuChoice),
    /// Line count entered, or `None` to back out
    Lines(Option<usize>),
    /// Bet per line entered, or `None` to back out
    Bet(Option<u64>),
    /// The player declined the stake
    SpinCancelled,
    /// The stake exceeded the balance
    SpinRefused,
    /// A spin settled; the flag is set when the wallet hit zero
    SpinDone { out_of_money: bool },
    /// Answer to "play another spin?"
    PlayAgain(bool),
    /// Deposit finished or was backed out of
    DepositDone,
    /// An informational screen was dismissed
    Viewed,
    /// Closed stdin, quit from anywhere
    QuitRequested,
}

/// The complete screen flow. Unmatched pairs stay on the current screen.
pub fn transition(screen: Screen, event: Event) -> Screen {
    use Screen::*;

    match (screen, event) {
        (_, Event::QuitRequested) => Exit,

        (MainMenu, Event::Menu(MenuChoice::Play)) => BetLines,
        (MainMenu, Event::Menu(MenuChoice::Deposit)) => Deposit,
        (MainMenu, Event::Menu(MenuChoice::Paytable)) => Paytable,
        (MainMenu, Event::Menu(MenuChoice::Stats)) => Stats,
        (MainMenu, Event::Menu(MenuChoice::Save)) => MainMenu,
        (MainMenu, Event::Menu(MenuChoice::Quit)) => Exit,

        (BetLines, Event::Lines(Some(lines))) => BetAmount { lines },
        (BetLines, Event::Lines(None)) => MainMenu,

        (BetAmount { lines }, Event::Bet(Some(bet))) => Confirm { lines, bet },
        (BetAmount { .. }, Event::Bet(None)) => BetLines,

        (Confirm { .. }, Event::SpinCancelled) => MainMenu,
        (Confirm { lines, .. }, Event::SpinRefused) => BetAmount { lines },
        (Confirm { .. }, Event::SpinDone { out_of_money: false }) => SpinResult,
        (Confirm { .. }, Event::SpinDone { out_of_money: true }) => MainMenu,

        (SpinResult, Event::PlayAgain(true)) => BetLines,
        (SpinResult, Event::PlayAgain(false)) => MainMenu,

        (Deposit, Event::DepositDone) => MainMenu,
        (Paytable, Event::Viewed) => MainMenu,
        (Stats, Event::Viewed) => MainMenu,

        (current, _) => current,
    }
}
