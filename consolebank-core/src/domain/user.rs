//! User domain model

use serde::Serialize;

use super::account::{Account, AccountId, AccountSummary};
use super::result::{Error, Result};

/// A registered user and the accounts they own
///
/// Passwords are compared in plaintext; this is a simulator.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    username: String,
    #[serde(skip_serializing)]
    password: String,
    accounts: Vec<Account>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            accounts: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact match on both username and password
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Linear scan of this user's accounts
    pub fn account(&self, id: AccountId) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|a| a.id() == id)
            .ok_or(Error::AccountNotFound(id))
    }

    pub fn account_mut(&mut self, id: AccountId) -> Result<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(Error::AccountNotFound(id))
    }

    pub fn account_summaries(&self) -> Vec<AccountSummary> {
        self.accounts.iter().map(Account::summary).collect()
    }
}
