//! Session dispatcher - drives the menu state machine over a console

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{AccountId, AccountType, InterestOutcome};
use crate::ports::{Console, Output};
use crate::services::directory::UserHandle;
use crate::services::logging::LogEvent;
use crate::services::menu::{transition, Event, MainMenuChoice, Menu, SessionState, UserMenuChoice};
use crate::BankContext;

/// Parse a money amount typed by the user
///
/// Sign and range are not checked here; the ledger decides what it accepts.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed).map_err(|_| Error::malformed(trimmed))
}

/// Runs one interactive session against a `Console`
pub struct Dispatcher<'a, C: Console> {
    ctx: &'a mut BankContext,
    console: &'a mut C,
    state: SessionState,
}

impl<'a, C: Console> Dispatcher<'a, C> {
    pub fn new(ctx: &'a mut BankContext, console: &'a mut C) -> Self {
        Self {
            ctx,
            console,
            state: SessionState::MainMenu,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run until the user exits or input ends
    ///
    /// Only non-recoverable errors (I/O failures) are returned.
    pub fn run(&mut self) -> Result<()> {
        self.ctx.logger.log(LogEvent::new("session_started"));
        while self.state != SessionState::Exited {
            self.step()?;
        }
        self.ctx.logger.log(LogEvent::new("session_ended"));
        Ok(())
    }

    /// Display the current menu, handle one selection and transition
    pub fn step(&mut self) -> Result<SessionState> {
        let outcome = match self.state {
            SessionState::MainMenu => self.main_menu(),
            SessionState::UserMenu(user) => self.user_menu(user),
            SessionState::Exited => return Ok(SessionState::Exited),
        };

        let event = match outcome {
            Ok(event) => event,
            Err(Error::InputClosed) => {
                tracing::debug!("input closed, ending session");
                Event::InputClosed
            }
            Err(e) if e.is_recoverable() => {
                self.report("session", None, &e);
                Event::ActionFinished
            }
            Err(e) => return Err(e),
        };

        self.state = transition(self.state, event);
        Ok(self.state)
    }

    fn main_menu(&mut self) -> Result<Event> {
        self.console.show(Output::Banner);
        self.console.show(Output::Menu(Menu::Main));
        let input = self.console.prompt("Choose an option")?;

        let choice = match input.parse::<MainMenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                self.report("main_menu", None, &e);
                return Ok(Event::InvalidChoice);
            }
        };

        match choice {
            MainMenuChoice::Register => self.register(),
            MainMenuChoice::Login => self.login(),
            MainMenuChoice::Exit => {
                self.console.show(Output::Info("Goodbye.".to_string()));
                Ok(Event::ExitRequested)
            }
        }
    }

    fn register(&mut self) -> Result<Event> {
        let username = self.console.prompt("Enter Username")?;
        let password = self.console.prompt_secret("Enter Password")?;

        match self.ctx.directory.register(&username, &password) {
            Ok(_) => {
                self.ctx.logger.log(LogEvent::new("user_registered").with_command("register"));
                self.console
                    .show(Output::Success("User registered successfully.".to_string()));
                Ok(Event::Registered)
            }
            Err(e) => {
                self.report("register", None, &e);
                Ok(Event::RegistrationFailed)
            }
        }
    }

    fn login(&mut self) -> Result<Event> {
        let username = self.console.prompt("Enter Username")?;
        let password = self.console.prompt_secret("Enter Password")?;

        match self.ctx.directory.login(&username, &password) {
            Ok(user) => {
                self.ctx.logger.log(LogEvent::new("login_succeeded").with_command("login"));
                self.console.show(Output::Success("Login successful.".to_string()));
                Ok(Event::LoggedIn(user))
            }
            Err(e) => {
                self.report("login", None, &e);
                Ok(Event::LoginFailed)
            }
        }
    }

    fn user_menu(&mut self, user: UserHandle) -> Result<Event> {
        let accounts = self.ctx.directory.accounts(user);
        if !accounts.is_empty() {
            self.console.show(Output::Accounts(accounts));
        }
        self.console.show(Output::Menu(Menu::User));
        let input = self.console.prompt("Choose an option")?;

        let choice = match input.parse::<UserMenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                self.report("user_menu", None, &e);
                return Ok(Event::InvalidChoice);
            }
        };

        if choice == UserMenuChoice::Logout {
            self.ctx.logger.log(LogEvent::new("logged_out").with_command(choice.command()));
            self.console.show(Output::Info("Logged out.".to_string()));
            return Ok(Event::LogoutRequested);
        }
        if choice == UserMenuChoice::OpenAccount {
            self.open_account(user)?;
            return Ok(Event::ActionFinished);
        }

        // Every remaining action works on one of the user's accounts
        let account_id =
            self.prompt_parsed(choice.command(), "Enter Account Number", AccountId::from_str)?;
        if let Err(e) = self.ctx.directory.select_account(user, account_id) {
            self.report(choice.command(), Some(account_id), &e);
            return Ok(Event::ActionFinished);
        }

        match choice {
            UserMenuChoice::Deposit => self.deposit(user, account_id)?,
            UserMenuChoice::Withdraw => self.withdraw(user, account_id)?,
            UserMenuChoice::CheckBalance => self.check_balance(user, account_id)?,
            UserMenuChoice::PrintStatement => self.print_statement(user, account_id)?,
            UserMenuChoice::AddInterest => self.add_interest(user, account_id)?,
            UserMenuChoice::OpenAccount | UserMenuChoice::Logout => {}
        }
        Ok(Event::ActionFinished)
    }

    fn open_account(&mut self, user: UserHandle) -> Result<()> {
        let holder_name = self.prompt_parsed("open_account", "Enter Account Holder's Name", |s| {
            let name = s.trim();
            if name.is_empty() {
                Err(Error::validation("account holder name cannot be empty"))
            } else {
                Ok(name.to_string())
            }
        })?;
        let account_type = self.prompt_parsed(
            "open_account",
            "Enter Account Type (Savings/Checking)",
            AccountType::from_str,
        )?;
        let initial_deposit = self.prompt_parsed("open_account", "Enter Initial Deposit", |s| {
            let amount = parse_amount(s)?;
            if amount < Decimal::ZERO {
                Err(Error::InvalidAmount)
            } else {
                Ok(amount)
            }
        })?;

        match self
            .ctx
            .directory
            .open_account(user, &holder_name, account_type, initial_deposit)
        {
            Ok(id) => {
                self.ctx.logger.log(
                    LogEvent::new("account_opened")
                        .with_command("open_account")
                        .with_account(id.value()),
                );
                self.console.show(Output::Success(format!(
                    "Account opened successfully. Account Number: {}",
                    id
                )));
            }
            Err(e) => self.report("open_account", None, &e),
        }
        Ok(())
    }

    fn deposit(&mut self, user: UserHandle, account_id: AccountId) -> Result<()> {
        let amount = self.prompt_parsed("deposit", "Enter amount to deposit", parse_amount)?;
        let result = self
            .ctx
            .directory
            .select_account_mut(user, account_id)
            .and_then(|account| account.deposit(amount));

        match result {
            Ok(_) => {
                self.ctx.logger.log(
                    LogEvent::new("deposit")
                        .with_command("deposit")
                        .with_account(account_id.value()),
                );
                self.console.show(Output::Success("Deposit successful.".to_string()));
            }
            Err(e) => self.report("deposit", Some(account_id), &e),
        }
        Ok(())
    }

    fn withdraw(&mut self, user: UserHandle, account_id: AccountId) -> Result<()> {
        let amount = self.prompt_parsed("withdraw", "Enter amount to withdraw", parse_amount)?;
        let result = self
            .ctx
            .directory
            .select_account_mut(user, account_id)
            .and_then(|account| account.withdraw(amount));

        match result {
            Ok(_) => {
                self.ctx.logger.log(
                    LogEvent::new("withdrawal")
                        .with_command("withdraw")
                        .with_account(account_id.value()),
                );
                self.console
                    .show(Output::Success("Withdrawal successful.".to_string()));
            }
            Err(e) => self.report("withdraw", Some(account_id), &e),
        }
        Ok(())
    }

    fn check_balance(&mut self, user: UserHandle, account_id: AccountId) -> Result<()> {
        let balance = self.ctx.directory.select_account(user, account_id)?.balance();
        self.console.show(Output::Balance {
            account_id,
            balance,
        });
        Ok(())
    }

    fn print_statement(&mut self, user: UserHandle, account_id: AccountId) -> Result<()> {
        let statement = self
            .ctx
            .directory
            .select_account(user, account_id)?
            .statement();
        self.console.show(Output::Statement(statement));
        Ok(())
    }

    fn add_interest(&mut self, user: UserHandle, account_id: AccountId) -> Result<()> {
        let outcome = self
            .ctx
            .directory
            .select_account_mut(user, account_id)?
            .add_monthly_interest();

        match outcome {
            InterestOutcome::Applied(interest) => {
                self.ctx.logger.log(
                    LogEvent::new("interest_added")
                        .with_command("add_interest")
                        .with_account(account_id.value()),
                );
                self.console.show(Output::Success(format!(
                    "Monthly interest of {} added.",
                    interest
                )));
            }
            InterestOutcome::NotEligible => {
                self.console.show(Output::Warning(
                    "Monthly interest applies to Savings accounts only.".to_string(),
                ));
            }
            InterestOutcome::OutOfRange => {
                self.report("add_interest", Some(account_id), &Error::AmountOutOfRange);
            }
            InterestOutcome::NothingToAccrue => {
                self.console.show(Output::Info(
                    "Balance is zero; no interest accrued.".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Ask until the input parses; recoverable parse errors are shown and re-asked
    ///
    /// Failures are logged under `command`, the action the field belongs to.
    fn prompt_parsed<T>(
        &mut self,
        command: &str,
        label: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let input = self.console.prompt(label)?;
            match parse(&input) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => self.report(command, None, &e),
                Err(e) => return Err(e),
            }
        }
    }

    /// Show a user-facing error and record it without its payload
    fn report(&mut self, command: &str, account_id: Option<AccountId>, err: &Error) {
        let mut event = LogEvent::new(format!("{}_failed", command))
            .with_command(command)
            .with_error(err.kind(), err.log_message());
        if let Some(id) = account_id {
            event = event.with_account(id.value());
        }
        self.ctx.logger.log(event);
        self.console.show(Output::Error(err.to_string()));
    }
}
