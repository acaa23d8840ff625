//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};
use rust_decimal::Decimal;

use consolebank_core::services::Menu;
use consolebank_core::{AccountSummary, Statement};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format an amount with the configured symbol and two decimals
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

pub fn banner() {
    println!();
    println!("{}", "Welcome to Console Bank".bold());
    println!("{}", "=======================".dimmed());
}

pub fn menu(menu: Menu) {
    println!();
    println!("{}", menu.title().bold());
    for (key, label) in menu.options() {
        println!("  {}. {}", key.cyan(), label);
    }
}

pub fn accounts(symbol: &str, accounts: &[AccountSummary]) {
    let mut table = create_table();
    table.set_header(vec!["Account No", "Type", "Holder", "Balance", "Transactions"]);
    for account in accounts {
        table.add_row(vec![
            Cell::new(account.id),
            Cell::new(account.account_type),
            Cell::new(&account.holder_name),
            Cell::new(format_amount(symbol, account.balance)).set_alignment(CellAlignment::Right),
            Cell::new(account.transaction_count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!();
    println!("{}", "Your Accounts".bold());
    println!("{}", table);
}

pub fn statement(symbol: &str, statement: &Statement) {
    println!();
    println!(
        "{} {} ({}, {})",
        "Account Statement for Account No:".bold(),
        statement.account_id,
        statement.account_type,
        statement.holder_name
    );

    let mut table = create_table();
    table.set_header(vec!["Date", "Type", "Amount"]);
    for tx in &statement.transactions {
        let amount = format_amount(symbol, tx.signed_amount());
        let amount = if tx.kind().is_debit() {
            amount.red().to_string()
        } else {
            amount.green().to_string()
        };
        table.add_row(vec![
            Cell::new(
                tx.timestamp()
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M:%S"),
            ),
            Cell::new(tx.kind()),
            Cell::new(amount).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    println!(
        "Current Balance: {}",
        format_amount(symbol, statement.balance).bold()
    );
}
