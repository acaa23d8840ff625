//! Configuration management
//!
//! Optional settings file at `<bank_dir>/settings.json`:
//! ```json
//! {
//!   "bank": {
//!     "interestRate": "0.01",
//!     "firstAccountId": 100000,
//!     "allowDuplicateUsernames": false,
//!     "currencySymbol": "$"
//!   }
//! }
//! ```
//! A missing file yields the defaults, so a fresh install behaves exactly
//! like an unconfigured session.

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{DEFAULT_MONTHLY_INTEREST_RATE, FIRST_ACCOUNT_ID};

/// Environment override for the monthly interest rate
pub const INTEREST_RATE_ENV: &str = "CONSOLEBANK_INTEREST_RATE";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    bank: BankSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BankSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interest_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_account_id: Option<u64>,
    #[serde(default)]
    allow_duplicate_usernames: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency_symbol: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Effective bank configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Monthly rate credited to Savings accounts
    pub interest_rate: Decimal,
    pub first_account_id: u64,
    pub allow_duplicate_usernames: bool,
    /// Display only; amounts are not currency-aware
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interest_rate: DEFAULT_MONTHLY_INTEREST_RATE,
            first_account_id: FIRST_ACCOUNT_ID,
            allow_duplicate_usernames: false,
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    /// Load config from the bank directory
    ///
    /// The interest rate can also be set through `CONSOLEBANK_INTEREST_RATE`,
    /// which wins over the file.
    pub fn load(bank_dir: &Path) -> Result<Self> {
        let raw = Self::read_settings(bank_dir)?;
        let env_rate = std::env::var(INTEREST_RATE_ENV).ok();
        Self::from_parts(raw, env_rate.as_deref())
    }

    /// Load only what the settings file says, ignoring the environment
    ///
    /// Used before `save` so an environment override is never persisted.
    pub fn load_file(bank_dir: &Path) -> Result<Self> {
        Self::from_parts(Self::read_settings(bank_dir)?, None)
    }

    fn from_parts(raw: SettingsFile, env_rate: Option<&str>) -> Result<Self> {
        let defaults = Self::default();

        let interest_rate = match env_rate {
            Some(value) => value.trim().parse::<Decimal>().map_err(|_| {
                Error::config(format!("{} is not a decimal: {:?}", INTEREST_RATE_ENV, value))
            })?,
            None => raw.bank.interest_rate.unwrap_or(defaults.interest_rate),
        };

        let config = Self {
            interest_rate,
            first_account_id: raw.bank.first_account_id.unwrap_or(defaults.first_account_id),
            allow_duplicate_usernames: raw.bank.allow_duplicate_usernames,
            currency_symbol: raw.bank.currency_symbol.unwrap_or(defaults.currency_symbol),
        };
        config.validate()?;
        Ok(config)
    }

    fn read_settings(bank_dir: &Path) -> Result<SettingsFile> {
        let settings_path = bank_dir.join(SETTINGS_FILE);
        if !settings_path.exists() {
            return Ok(SettingsFile::default());
        }

        let content = std::fs::read_to_string(&settings_path)?;
        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(path = %settings_path.display(), error = %e, "ignoring unreadable settings file");
                Ok(SettingsFile::default())
            }
        }
    }

    /// Save config to the bank directory
    /// Preserves other settings this crate doesn't manage
    pub fn save(&self, bank_dir: &Path) -> Result<()> {
        let settings_path = bank_dir.join(SETTINGS_FILE);
        let mut settings = Self::read_settings(bank_dir)?;

        settings.bank.interest_rate = Some(self.interest_rate);
        settings.bank.first_account_id = Some(self.first_account_id);
        settings.bank.allow_duplicate_usernames = self.allow_duplicate_usernames;
        settings.bank.currency_symbol = Some(self.currency_symbol.clone());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::create_dir_all(bank_dir)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Set one setting by its settings.json key, then validate
    ///
    /// Accepts `interestRate`, `firstAccountId`, `allowDuplicateUsernames`
    /// and `currencySymbol`. Leaves `self` unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        let value = value.trim();
        match key {
            "interestRate" => {
                updated.interest_rate = value
                    .parse()
                    .map_err(|_| Error::config(format!("{} is not a decimal: {:?}", key, value)))?;
            }
            "firstAccountId" => {
                updated.first_account_id = value
                    .parse()
                    .map_err(|_| Error::config(format!("{} is not a number: {:?}", key, value)))?;
            }
            "allowDuplicateUsernames" => {
                updated.allow_duplicate_usernames = value
                    .parse()
                    .map_err(|_| Error::config(format!("{} must be true or false", key)))?;
            }
            "currencySymbol" => updated.currency_symbol = value.to_string(),
            _ => return Err(Error::config(format!("unknown setting: {}", key))),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.interest_rate < Decimal::ZERO {
            return Err(Error::config("interest rate cannot be negative"));
        }
        if self.interest_rate > Decimal::ONE {
            return Err(Error::config("interest rate is monthly and cannot exceed 1 (100%)"));
        }
        Ok(())
    }
}
