//! CLI command implementations

pub mod config;
pub mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use consolebank_core::services::EntryPoint;
use consolebank_core::BankContext;

/// Resolve the settings directory: explicit flag/env, else ~/.consolebank
pub fn get_bank_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    dirs::home_dir()
        .map(|home| home.join(".consolebank"))
        .unwrap_or_else(|| PathBuf::from(".consolebank"))
}

/// Create the bank context from settings in `bank_dir`
///
/// The directory does not have to exist; defaults apply when it doesn't.
pub fn get_context(bank_dir: &Path, entry_point: EntryPoint) -> Result<BankContext> {
    BankContext::load(bank_dir, entry_point).with_context(|| {
        format!(
            "Failed to initialize bank context from {}",
            bank_dir.display()
        )
    })
}
