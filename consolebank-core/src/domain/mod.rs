//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
mod statement;
mod transaction;
mod user;
pub mod result;

pub use account::{
    Account, AccountId, AccountIdSequence, AccountSummary, AccountType, InterestOutcome,
    DEFAULT_MONTHLY_INTEREST_RATE, FIRST_ACCOUNT_ID,
};
pub use statement::Statement;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
