//! Console Bank Core - in-memory banking simulator
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Account, Transaction, User, Statement)
//! - **ports**: Trait definitions for external dependencies (Console)
//! - **services**: Directory, menu state machine, session dispatcher, logging
//! - **adapters**: Concrete implementations (scripted console, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use config::Config;
use services::{Directory, EntryPoint, LoggingService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{
    Account, AccountId, AccountSummary, AccountType, InterestOutcome, Statement, Transaction,
    TransactionKind, User,
};
pub use ports::{Console, Output};
pub use services::{DemoService, Dispatcher, LogEvent, SessionState};

/// Main context for a banking session
///
/// Owns everything that lives for the duration of the application: the
/// configuration, the user directory (with its account-id sequence) and the
/// session event log. Nothing here outlives the process.
pub struct BankContext {
    pub config: Config,
    pub directory: Directory,
    pub logger: LoggingService,
}

impl BankContext {
    /// Create a context from an already loaded configuration
    pub fn new(config: Config, entry_point: EntryPoint) -> Self {
        let directory = Directory::new(&config);
        let logger = LoggingService::new(entry_point, env!("CARGO_PKG_VERSION"));
        Self {
            config,
            directory,
            logger,
        }
    }

    /// Create a context, reading settings from the bank directory
    pub fn load(bank_dir: &Path, entry_point: EntryPoint) -> Result<Self> {
        let config = Config::load(bank_dir)?;
        Ok(Self::new(config, entry_point))
    }

    /// Run an interactive session to completion on the given console
    pub fn run_session<C: Console>(&mut self, console: &mut C) -> Result<()> {
        Dispatcher::new(self, console).run()
    }
}

impl Default for BankContext {
    fn default() -> Self {
        Self::new(Config::default(), EntryPoint::Cli)
    }
}
