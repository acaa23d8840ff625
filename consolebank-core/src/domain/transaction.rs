//! Transaction domain model

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What kind of balance-affecting event a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    InitialDeposit,
    Deposit,
    Withdrawal,
    Interest,
}

impl TransactionKind {
    /// Human-readable label used in statements
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::InitialDeposit => "Initial Deposit",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Interest => "Interest",
        }
    }

    /// True if this kind reduces the balance
    pub fn is_debit(&self) -> bool {
        matches!(self, TransactionKind::Withdrawal)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single immutable ledger entry belonging to an account
///
/// `amount` is always non-negative; the direction comes from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Record a transaction happening now
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self::at(kind, amount, Utc::now())
    }

    /// Record a transaction with an explicit timestamp
    pub fn at(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        debug_assert!(amount >= Decimal::ZERO, "transaction amounts are stored unsigned");
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Amount with the sign implied by the kind (withdrawals negative)
    pub fn signed_amount(&self) -> Decimal {
        if self.kind.is_debit() {
            -self.amount
        } else {
            self.amount
        }
    }
}
