//! Menu state machine
//!
//! The session is a small finite-state machine:
//!
//! | state      | event                         | next state  |
//! |------------|-------------------------------|-------------|
//! | MainMenu   | LoggedIn                      | UserMenu    |
//! | MainMenu   | ExitRequested                 | Exited      |
//! | MainMenu   | Registered / LoginFailed / .. | MainMenu    |
//! | UserMenu   | LogoutRequested               | MainMenu    |
//! | UserMenu   | ActionFinished / ..           | UserMenu    |
//! | any        | InputClosed                   | Exited      |

use std::str::FromStr;

use crate::domain::result::{Error, Result};
use crate::services::directory::UserHandle;

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    UserMenu(UserHandle),
    Exited,
}

/// Outcome of handling one menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Registered,
    RegistrationFailed,
    LoggedIn(UserHandle),
    LoginFailed,
    ExitRequested,
    /// A user-menu action completed or was aborted
    ActionFinished,
    LogoutRequested,
    InvalidChoice,
    InputClosed,
}

/// Transition table for the session state machine
pub fn transition(state: SessionState, event: Event) -> SessionState {
    use SessionState::*;

    match (state, event) {
        (_, Event::InputClosed) => Exited,
        (Exited, _) => Exited,
        (MainMenu, Event::LoggedIn(user)) => UserMenu(user),
        (MainMenu, Event::ExitRequested) => Exited,
        (MainMenu, _) => MainMenu,
        (UserMenu(_), Event::LogoutRequested) => MainMenu,
        (UserMenu(user), _) => UserMenu(user),
    }
}

/// Which menu is being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    User,
}

impl Menu {
    pub fn title(&self) -> &'static str {
        match self {
            Menu::Main => "Main Menu",
            Menu::User => "User Menu",
        }
    }

    /// (key, label) pairs in display order
    pub fn options(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            Menu::Main => MainMenuChoice::ALL.iter().map(|c| (c.key(), c.label())).collect(),
            Menu::User => UserMenuChoice::ALL.iter().map(|c| (c.key(), c.label())).collect(),
        }
    }
}

/// Top-level menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Register,
    Login,
    Exit,
}

impl MainMenuChoice {
    pub const ALL: [MainMenuChoice; 3] = [Self::Register, Self::Login, Self::Exit];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Register => "1",
            Self::Login => "2",
            Self::Exit => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Login",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MainMenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == input)
            .ok_or_else(|| Error::InvalidMenuChoice(input.to_string()))
    }
}

/// Post-login menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuChoice {
    OpenAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    PrintStatement,
    AddInterest,
    Logout,
}

impl UserMenuChoice {
    pub const ALL: [UserMenuChoice; 7] = [
        Self::OpenAccount,
        Self::Deposit,
        Self::Withdraw,
        Self::CheckBalance,
        Self::PrintStatement,
        Self::AddInterest,
        Self::Logout,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::OpenAccount => "1",
            Self::Deposit => "2",
            Self::Withdraw => "3",
            Self::CheckBalance => "4",
            Self::PrintStatement => "5",
            Self::AddInterest => "6",
            Self::Logout => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAccount => "Open Account",
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::CheckBalance => "Check Balance",
            Self::PrintStatement => "Print Statement",
            Self::AddInterest => "Add Monthly Interest",
            Self::Logout => "Logout",
        }
    }

    /// Name used in the session event log
    pub fn command(&self) -> &'static str {
        match self {
            Self::OpenAccount => "open_account",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::CheckBalance => "check_balance",
            Self::PrintStatement => "statement",
            Self::AddInterest => "add_interest",
            Self::Logout => "logout",
        }
    }

    /// Actions that operate on one existing account
    pub fn needs_account(&self) -> bool {
        !matches!(self, Self::OpenAccount | Self::Logout)
    }
}

impl FromStr for UserMenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == input)
            .ok_or_else(|| Error::InvalidMenuChoice(input.to_string()))
    }
}
