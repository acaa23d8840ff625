//! Demo data provider
//!
//! A demo user with one Savings and one Checking account and a short
//! history of deposits and withdrawals on each.

use rust_decimal::Decimal;

use crate::domain::AccountType;

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo";

/// One demo account and the activity replayed onto it after opening
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub holder_name: &'static str,
    pub account_type: AccountType,
    pub initial_deposit: Decimal,
    /// Positive amounts are deposits, negative amounts withdrawals
    pub activity: Vec<Decimal>,
}

/// Generate demo accounts
pub fn generate_demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            holder_name: "Demo User",
            account_type: AccountType::Savings,
            initial_deposit: Decimal::new(1_000_000, 2), // 10,000.00
            activity: vec![
                Decimal::new(50_000, 2),  // monthly transfer in
                Decimal::new(-120_000, 2), // car repair
                Decimal::new(50_000, 2),
            ],
        },
        DemoAccount {
            holder_name: "Demo User",
            account_type: AccountType::Checking,
            initial_deposit: Decimal::new(250_000, 2), // 2,500.00
            activity: vec![
                Decimal::new(-8_745, 2),   // groceries
                Decimal::new(-145_000, 2), // rent
                Decimal::new(310_000, 2),  // paycheck
                Decimal::new(-4_299, 2),   // utilities
            ],
        },
    ]
}
