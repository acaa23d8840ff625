//! Account statement

use rust_decimal::Decimal;
use serde::Serialize;

use super::account::{AccountId, AccountType};
use super::transaction::Transaction;

/// Point-in-time listing of an account's transactions and balance
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub account_id: AccountId,
    pub holder_name: String,
    pub account_type: AccountType,
    /// In creation order
    pub transactions: Vec<Transaction>,
    pub balance: Decimal,
}

impl Statement {
    pub fn new(
        account_id: AccountId,
        holder_name: String,
        account_type: AccountType,
        transactions: Vec<Transaction>,
        balance: Decimal,
    ) -> Self {
        Self {
            account_id,
            holder_name,
            account_type,
            transactions,
            balance,
        }
    }

    /// Sum of signed transaction amounts; equals `balance` since the
    /// initial deposit is itself logged
    pub fn signed_total(&self) -> Decimal {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }
}
