//! Session command - run the interactive banking menus

use std::path::{Path, PathBuf};

use anyhow::Result;
use consolebank_core::services::EntryPoint;
use consolebank_core::DemoService;

use super::get_context;
use crate::output;
use crate::terminal::TerminalConsole;

pub fn run(bank_dir: &Path, demo: bool, audit_log: Option<PathBuf>, plain: bool) -> Result<()> {
    let interactive = !plain && atty::is(atty::Stream::Stdin);
    let entry_point = if interactive {
        EntryPoint::Cli
    } else {
        EntryPoint::Scripted
    };
    let mut ctx = get_context(bank_dir, entry_point)?;

    if demo {
        let seed = DemoService::seed(&mut ctx.directory)?;
        output::info(&format!(
            "Demo mode: log in as '{}' with password '{}' ({} accounts).",
            seed.username,
            seed.password,
            seed.accounts.len()
        ));
    }

    let mut console = TerminalConsole::new(interactive, ctx.config.currency_symbol.clone());
    let session = ctx.run_session(&mut console);

    // Export whatever was recorded, even if the session ended on an error
    if let Some(path) = audit_log {
        ctx.logger.export_json(&path)?;
        tracing::info!(path = %path.display(), "wrote audit log");
    }

    session?;
    Ok(())
}
