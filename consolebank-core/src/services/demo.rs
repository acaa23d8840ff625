//! Demo service - seed a session with sample data
//!
//! Demo mode provides a ready-made user and accounts for trying the menus
//! without registering first.

use rust_decimal::Decimal;

use crate::adapters::demo::{generate_demo_accounts, DEMO_PASSWORD, DEMO_USERNAME};
use crate::domain::result::Result;
use crate::domain::AccountId;
use crate::services::directory::{Directory, UserHandle};

/// What was created by `DemoService::seed`
#[derive(Debug, Clone)]
pub struct DemoSeed {
    pub user: UserHandle,
    pub username: &'static str,
    pub password: &'static str,
    pub accounts: Vec<AccountId>,
}

/// Demo service for populating a directory
pub struct DemoService;

impl DemoService {
    /// Register the demo user and open the demo accounts
    ///
    /// Fails with `DuplicateUsername` if the demo user already exists.
    pub fn seed(directory: &mut Directory) -> Result<DemoSeed> {
        let user = directory.register(DEMO_USERNAME, DEMO_PASSWORD)?;

        let mut accounts = Vec::new();
        for demo in generate_demo_accounts() {
            let id = directory.open_account(
                user,
                demo.holder_name,
                demo.account_type,
                demo.initial_deposit,
            )?;
            let account = directory.select_account_mut(user, id)?;
            for amount in demo.activity {
                if amount >= Decimal::ZERO {
                    account.deposit(amount)?;
                } else {
                    account.withdraw(-amount)?;
                }
            }
            accounts.push(id);
        }

        tracing::info!(accounts = accounts.len(), "seeded demo data");
        Ok(DemoSeed {
            user,
            username: DEMO_USERNAME,
            password: DEMO_PASSWORD,
            accounts,
        })
    }
}
