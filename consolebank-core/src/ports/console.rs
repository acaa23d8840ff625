//! Console port - interactive text I/O abstraction

use rust_decimal::Decimal;

use crate::domain::result::Result;
use crate::domain::{AccountId, AccountSummary, Statement};
use crate::services::menu::Menu;

/// Something the session wants shown to the user
///
/// Adapters decide how each variant is rendered (colors, tables, plain text).
#[derive(Debug, Clone)]
pub enum Output {
    /// Welcome banner shown above the main menu
    Banner,
    Menu(Menu),
    Success(String),
    Error(String),
    Warning(String),
    Info(String),
    /// The logged-in user's accounts
    Accounts(Vec<AccountSummary>),
    Balance {
        account_id: AccountId,
        balance: Decimal,
    },
    Statement(Statement),
}

impl Output {
    /// Plain-text rendering, used by non-styled adapters and tests
    pub fn to_plain_text(&self) -> String {
        match self {
            Output::Banner => "Welcome to Console Bank".to_string(),
            Output::Menu(menu) => {
                let mut text = menu.title().to_string();
                for (key, label) in menu.options() {
                    text.push_str(&format!("\n{}. {}", key, label));
                }
                text
            }
            Output::Success(msg) | Output::Error(msg) | Output::Warning(msg) | Output::Info(msg) => {
                msg.clone()
            }
            Output::Accounts(accounts) => accounts
                .iter()
                .map(|a| {
                    format!(
                        "{}  {:<8}  {}  {}",
                        a.id, a.account_type, a.holder_name, a.balance
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Output::Balance { balance, .. } => format!("Account Balance: {}", balance),
            Output::Statement(statement) => statement_text(statement),
        }
    }
}

fn statement_text(statement: &Statement) -> String {
    let mut text = format!("Account Statement for Account No: {}", statement.account_id);
    text.push_str("\nDate\t\t\tType\t\tAmount");
    for tx in &statement.transactions {
        text.push_str(&format!(
            "\n{}\t{}\t\t{}",
            tx.timestamp().format("%Y-%m-%d %H:%M:%S"),
            tx.kind(),
            tx.amount()
        ));
    }
    text.push_str(&format!("\nCurrent Balance: {}", statement.balance));
    text
}

/// Interactive console used by the session dispatcher
pub trait Console {
    /// Ask for one line of input
    ///
    /// Returns `Error::InputClosed` once no more input can arrive.
    fn prompt(&mut self, label: &str) -> Result<String>;

    /// Ask for a secret (password). Defaults to a normal prompt.
    fn prompt_secret(&mut self, label: &str) -> Result<String> {
        self.prompt(label)
    }

    fn show(&mut self, output: Output);
}
