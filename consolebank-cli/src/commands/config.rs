//! Config command - show or change the bank settings

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use consolebank_core::config::Config;

use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Change one setting in settings.json
    Set {
        /// interestRate, firstAccountId, allowDuplicateUsernames or currencySymbol
        key: String,
        value: String,
    },
}

pub fn run(bank_dir: &Path, command: Option<ConfigCommands>, json: bool) -> Result<()> {
    match command {
        Some(ConfigCommands::Set { key, value }) => set(bank_dir, &key, &value),
        None => show(bank_dir, json),
    }
}

fn set(bank_dir: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_file(bank_dir)?;
    config.set(key, value)?;
    config
        .save(bank_dir)
        .with_context(|| format!("Failed to save settings in {}", bank_dir.display()))?;

    output::success(&format!("Set {} = {}", key, value.trim()));
    Ok(())
}

fn show(bank_dir: &Path, json: bool) -> Result<()> {
    let config = Config::load(bank_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Console Bank Configuration".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        "Settings file".to_string(),
        bank_dir.join("settings.json").display().to_string(),
    ]);
    table.add_row(vec![
        "Monthly interest rate".to_string(),
        format!("{}%", config.interest_rate * rust_decimal::Decimal::ONE_HUNDRED),
    ]);
    table.add_row(vec![
        "First account number".to_string(),
        config.first_account_id.to_string(),
    ]);
    table.add_row(vec![
        "Duplicate usernames".to_string(),
        if config.allow_duplicate_usernames { "allowed" } else { "rejected" }.to_string(),
    ]);
    table.add_row(vec!["Currency symbol".to_string(), config.currency_symbol.clone()]);

    println!("{}", table);
    Ok(())
}
