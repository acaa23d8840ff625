//! Terminal console adapter
//!
//! On a TTY, prompts go through dialoguer (line editing, hidden passwords).
//! Otherwise input is read line by line from stdin so sessions can be piped.

use std::io::{self, BufRead, Write};

use dialoguer::{Input, Password};

use consolebank_core::{Console, Error, Output, Result};

use crate::output;

pub struct TerminalConsole {
    interactive: bool,
    currency_symbol: String,
}

impl TerminalConsole {
    pub fn new(interactive: bool, currency_symbol: impl Into<String>) -> Self {
        Self {
            interactive,
            currency_symbol: currency_symbol.into(),
        }
    }

    fn read_plain_line(&self, label: &str) -> Result<String> {
        print!("{}: ", label);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            println!();
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Map prompt failures; a closed or interrupted terminal ends the session
fn prompt_error(err: dialoguer::Error) -> Error {
    let dialoguer::Error::IO(err) = err;
    match err.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => Error::InputClosed,
        _ => Error::Io(err),
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, label: &str) -> Result<String> {
        if !self.interactive {
            return self.read_plain_line(label);
        }
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn prompt_secret(&mut self, label: &str) -> Result<String> {
        if !self.interactive {
            return self.read_plain_line(label);
        }
        Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }

    fn show(&mut self, out: Output) {
        match out {
            Output::Banner => output::banner(),
            Output::Menu(menu) => output::menu(menu),
            Output::Success(msg) => output::success(&msg),
            Output::Error(msg) => output::error(&msg),
            Output::Warning(msg) => output::warning(&msg),
            Output::Info(msg) => output::info(&msg),
            Output::Accounts(accounts) => output::accounts(&self.currency_symbol, &accounts),
            Output::Balance { balance, .. } => {
                println!(
                    "Account Balance: {}",
                    output::format_amount(&self.currency_symbol, balance)
                );
            }
            Output::Statement(statement) => output::statement(&self.currency_symbol, &statement),
        }
    }
}
