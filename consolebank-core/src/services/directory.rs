//! Directory service - user registry and account ownership

use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{Account, AccountId, AccountIdSequence, AccountSummary, AccountType, User};

/// Stable reference to a registered user
///
/// Users are never removed, so the position in the registry is stable for
/// the lifetime of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserHandle(usize);

/// In-memory registry of users for the lifetime of the application
///
/// Owns the account-id sequence so ids stay unique across every user.
pub struct Directory {
    users: Vec<User>,
    account_ids: AccountIdSequence,
    interest_rate: Decimal,
    allow_duplicate_usernames: bool,
}

impl Directory {
    pub fn new(config: &Config) -> Self {
        Self {
            users: Vec::new(),
            account_ids: AccountIdSequence::starting_at(config.first_account_id),
            interest_rate: config.interest_rate,
            allow_duplicate_usernames: config.allow_duplicate_usernames,
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Register a new user with no accounts
    pub fn register(&mut self, username: &str, password: &str) -> Result<UserHandle> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::validation("username cannot be empty"));
        }
        if !self.allow_duplicate_usernames && self.users.iter().any(|u| u.username() == username) {
            return Err(Error::DuplicateUsername(username.to_string()));
        }

        self.users.push(User::new(username, password));
        tracing::info!(username, "registered user");
        Ok(UserHandle(self.users.len() - 1))
    }

    /// Authenticate by exact username/password match; first match wins
    pub fn login(&self, username: &str, password: &str) -> Result<UserHandle> {
        self.users
            .iter()
            .position(|u| u.matches(username.trim(), password))
            .map(UserHandle)
            .ok_or(Error::AuthenticationFailed)
    }

    pub fn user(&self, handle: UserHandle) -> &User {
        &self.users[handle.0]
    }

    fn user_mut(&mut self, handle: UserHandle) -> &mut User {
        &mut self.users[handle.0]
    }

    /// Open an account for the user and return its number
    ///
    /// The id is only consumed once validation has passed.
    pub fn open_account(
        &mut self,
        handle: UserHandle,
        holder_name: &str,
        account_type: AccountType,
        initial_deposit: Decimal,
    ) -> Result<AccountId> {
        let account = Account::open(
            self.account_ids.peek(),
            holder_name,
            account_type,
            initial_deposit,
        )?
        .with_interest_rate(self.interest_rate);

        let id = self.account_ids.allocate();
        self.user_mut(handle).add_account(account);

        tracing::info!(account_id = %id, %account_type, "opened account");
        Ok(id)
    }

    /// Find one of the user's own accounts
    pub fn select_account(&self, handle: UserHandle, account_id: AccountId) -> Result<&Account> {
        self.user(handle).account(account_id)
    }

    pub fn select_account_mut(
        &mut self,
        handle: UserHandle,
        account_id: AccountId,
    ) -> Result<&mut Account> {
        self.user_mut(handle).account_mut(account_id)
    }

    pub fn accounts(&self, handle: UserHandle) -> Vec<AccountSummary> {
        self.user(handle).account_summaries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Directory {
        Directory::new(&Config::default())
    }

    #[test]
    fn test_register_and_login() {
        let mut dir = directory();
        let alice = dir.register("alice", "secret").unwrap();

        assert_eq!(dir.login("alice", "secret").unwrap(), alice);
        assert_eq!(dir.user(alice).username(), "alice");
        assert!(matches!(
            dir.login("alice", "wrong"),
            Err(Error::AuthenticationFailed)
        ));
        assert!(matches!(
            dir.login("bob", "secret"),
            Err(Error::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_duplicate_usernames_rejected() {
        let mut dir = directory();
        dir.register("alice", "secret").unwrap();
        assert!(matches!(
            dir.register("alice", "other"),
            Err(Error::DuplicateUsername(_))
        ));
        assert_eq!(dir.user_count(), 1);
    }

    #[test]
    fn test_duplicate_usernames_allowed_when_configured() {
        let config = Config {
            allow_duplicate_usernames: true,
            ..Config::default()
        };
        let mut dir = Directory::new(&config);
        let first = dir.register("alice", "same").unwrap();
        let second = dir.register("alice", "same").unwrap();
        assert_ne!(first, second);
        assert_eq!(dir.user_count(), 2);
        assert_eq!(dir.login("alice", "same").unwrap(), first);
    }

    #[test]
    fn test_blank_username_rejected() {
        let mut dir = directory();
        assert!(matches!(dir.register("  ", "pw"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_account_ids_unique_across_users() {
        let mut dir = directory();
        let alice = dir.register("alice", "a").unwrap();
        let bob = dir.register("bob", "b").unwrap();

        let a1 = dir
            .open_account(alice, "Alice", AccountType::Savings, Decimal::new(10, 0))
            .unwrap();
        let b1 = dir
            .open_account(bob, "Bob", AccountType::Checking, Decimal::new(20, 0))
            .unwrap();
        let a2 = dir
            .open_account(alice, "Alice", AccountType::Checking, Decimal::ZERO)
            .unwrap();

        assert_eq!(a1, AccountId::new(100_000));
        assert_eq!(b1, AccountId::new(100_001));
        assert_eq!(a2, AccountId::new(100_002));
        assert_eq!(dir.accounts(alice).len(), 2);
    }

    #[test]
    fn test_failed_open_does_not_consume_id() {
        let mut dir = directory();
        let alice = dir.register("alice", "a").unwrap();
        assert!(dir
            .open_account(alice, "Alice", AccountType::Savings, Decimal::new(-1, 0))
            .is_err());
        let id = dir
            .open_account(alice, "Alice", AccountType::Savings, Decimal::ONE)
            .unwrap();
        assert_eq!(id, AccountId::new(100_000));
    }

    #[test]
    fn test_select_account_is_scoped_to_owner() {
        let mut dir = directory();
        let alice = dir.register("alice", "a").unwrap();
        let bob = dir.register("bob", "b").unwrap();
        let id = dir
            .open_account(alice, "Alice", AccountType::Savings, Decimal::new(10, 0))
            .unwrap();

        assert!(dir.select_account(alice, id).is_ok());
        assert!(matches!(
            dir.select_account(bob, id),
            Err(Error::AccountNotFound(_))
        ));
    }

    #[test]
    fn test_opened_account_uses_configured_rate() {
        let config = Config {
            interest_rate: Decimal::new(2, 2),
            first_account_id: 42,
            ..Config::default()
        };
        let mut dir = Directory::new(&config);
        let alice = dir.register("alice", "a").unwrap();
        let id = dir
            .open_account(alice, "Alice", AccountType::Savings, Decimal::new(100, 0))
            .unwrap();
        assert_eq!(id, AccountId::new(42));

        let account = dir.select_account_mut(alice, id).unwrap();
        account.add_monthly_interest();
        assert_eq!(account.balance(), Decimal::new(102, 0));
    }
}
