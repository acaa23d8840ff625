//! Console Bank CLI - an interactive in-memory banking simulator

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod terminal;

use commands::{config, session};

/// Console Bank - register, open accounts, deposit, withdraw and accrue interest
#[derive(Parser)]
#[command(name = "bank", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed a demo user (demo/demo) with sample accounts
    #[arg(long)]
    demo: bool,

    /// Write the session event log as JSON to this file on exit
    #[arg(long, value_name = "PATH")]
    audit_log: Option<PathBuf>,

    /// Disable colors and interactive prompts
    #[arg(long)]
    plain: bool,

    /// Settings directory (defaults to ~/.consolebank)
    #[arg(long, env = "CONSOLEBANK_DIR", global = true)]
    bank_dir: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration, or change a setting
    Config {
        #[command(subcommand)]
        command: Option<config::ConfigCommands>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.plain {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let bank_dir = commands::get_bank_dir(cli.bank_dir);

    match cli.command {
        Some(Commands::Config { command, json }) => config::run(&bank_dir, command, json),
        None => session::run(&bank_dir, cli.demo, cli.audit_log, cli.plain),
    }
}
