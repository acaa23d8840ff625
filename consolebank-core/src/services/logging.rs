//! Logging service - structured session event log
//!
//! Keeps a privacy-safe, in-memory record of what happened during a session.
//! Passwords, holder names and balances are never logged; account numbers
//! and error kinds are. Every event is also forwarded to `tracing` so it
//! shows up in diagnostic output when enabled.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// What drove the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    /// Interactive terminal
    Cli,
    /// Pre-recorded input (tests, piped scripts)
    Scripted,
}

impl EntryPoint {
    fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Cli => "cli",
            EntryPoint::Scripted => "scripted",
        }
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            account_id: None,
            error_kind: None,
            error_message: None,
        }
    }

    /// Set the menu command context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the account the event concerns
    pub fn with_account(mut self, account_id: u64) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Set error information
    pub fn with_error(mut self, kind: impl Into<String>, message: impl Into<String>) -> Self {
        self.error_kind = Some(kind.into());
        self.error_message = Some(message.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.error_kind.is_some()
    }
}

/// A recorded log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    pub entry_point: String,
    pub app_version: String,
    pub platform: String,
    pub event: String,
    pub command: Option<String>,
    pub account_id: Option<u64>,
    pub error_kind: Option<String>,
    pub error_message: Option<String>,
}

/// Summary counts over the session log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub total_entries: usize,
    pub error_entries: usize,
    pub oldest_timestamp: Option<i64>,
    pub newest_timestamp: Option<i64>,
}

/// Service for structured session event logging
pub struct LoggingService {
    entries: Vec<LogEntry>,
    next_id: u64,
    entry_point: EntryPoint,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    pub fn new(entry_point: EntryPoint, app_version: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            entry_point,
            app_version: app_version.into(),
            platform: detect_platform(),
        }
    }

    pub fn entry_point(&self) -> EntryPoint {
        self.entry_point
    }

    /// Record an event
    pub fn log(&mut self, event: LogEvent) {
        if let Some(kind) = &event.error_kind {
            tracing::warn!(
                event = %event.event,
                command = event.command.as_deref().unwrap_or("-"),
                error_kind = %kind,
                "session error"
            );
        } else {
            tracing::debug!(
                event = %event.event,
                command = event.command.as_deref().unwrap_or("-"),
                account_id = event.account_id,
                "session event"
            );
        }

        let entry = LogEntry {
            id: self.next_id,
            timestamp: Utc::now().timestamp_millis(),
            entry_point: self.entry_point.as_str().to_string(),
            app_version: self.app_version.clone(),
            platform: self.platform.to_string(),
            event: event.event,
            command: event.command,
            account_id: event.account_id,
            error_kind: event.error_kind,
            error_message: event.error_message,
        };
        self.next_id += 1;
        self.entries.push(entry);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Most recent entries, newest first
    pub fn get_recent(&self, limit: usize) -> Vec<LogEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    /// Most recent error entries, newest first
    pub fn get_errors(&self, limit: usize) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| e.error_kind.is_some())
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn get_stats(&self) -> LogStats {
        LogStats {
            total_entries: self.entries.len(),
            error_entries: self.entries.iter().filter(|e| e.error_kind.is_some()).count(),
            oldest_timestamp: self.entries.first().map(|e| e.timestamp),
            newest_timestamp: self.entries.last().map(|e| e.timestamp),
        }
    }

    /// Write the whole log as pretty JSON
    pub fn export_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write audit log: {}", path.display()))?;
        Ok(())
    }
}
