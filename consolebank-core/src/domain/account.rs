//! Account domain model

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};
use super::statement::Statement;
use super::transaction::{Transaction, TransactionKind};

/// Monthly interest applied to Savings accounts (1%)
pub const DEFAULT_MONTHLY_INTEREST_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// First account number handed out in a fresh session
pub const FIRST_ACCOUNT_ID: u64 = 100_000;

/// Account number, unique for the lifetime of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(AccountId)
            .map_err(|_| Error::malformed(s.trim()))
    }
}

/// Hands out strictly increasing account numbers; never reuses one
#[derive(Debug, Clone)]
pub struct AccountIdSequence {
    next: u64,
}

impl AccountIdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Peek at the number the next call to `allocate` will return
    pub fn peek(&self) -> AccountId {
        AccountId(self.next)
    }

    pub fn allocate(&mut self) -> AccountId {
        let id = AccountId(self.next);
        self.next += 1;
        id
    }
}

impl Default for AccountIdSequence {
    fn default() -> Self {
        Self::starting_at(FIRST_ACCOUNT_ID)
    }
}

/// Closed set of supported account types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Savings,
    Checking,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
        }
    }

    /// Only Savings accounts accrue monthly interest
    pub fn accrues_interest(&self) -> bool {
        matches!(self, AccountType::Savings)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "savings" | "s" => Ok(AccountType::Savings),
            "checking" | "c" => Ok(AccountType::Checking),
            _ => Err(Error::InvalidAccountType(s.trim().to_string())),
        }
    }
}

/// Result of a monthly interest request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestOutcome {
    /// Interest of this amount was credited
    Applied(Decimal),
    /// Account type does not accrue interest
    NotEligible,
    /// Savings account with a zero balance; nothing was recorded
    NothingToAccrue,
    /// The balance is too large to credit; nothing was recorded
    OutOfRange,
}

/// A balance-bearing ledger owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    account_type: AccountType,
    balance: Decimal,
    interest_rate: Decimal,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Open an account, logging the initial deposit as its first transaction
    ///
    /// A zero initial deposit is allowed; a negative one is not.
    pub fn open(
        id: AccountId,
        holder_name: impl Into<String>,
        account_type: AccountType,
        initial_deposit: Decimal,
    ) -> Result<Self> {
        let holder_name = holder_name.into().trim().to_string();
        if holder_name.is_empty() {
            return Err(Error::validation("account holder name cannot be empty"));
        }
        if initial_deposit < Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }

        Ok(Self {
            id,
            holder_name,
            account_type,
            balance: initial_deposit,
            interest_rate: DEFAULT_MONTHLY_INTEREST_RATE,
            transactions: vec![Transaction::new(
                TransactionKind::InitialDeposit,
                initial_deposit,
            )],
        })
    }

    /// Override the monthly interest rate
    pub fn with_interest_rate(mut self, rate: Decimal) -> Self {
        self.interest_rate = rate;
        self
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Current balance (checkBalance)
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Transactions in creation order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal> {
        self.credit(TransactionKind::Deposit, amount)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        self.transactions
            .push(Transaction::new(TransactionKind::Withdrawal, amount));
        Ok(self.balance)
    }

    /// Credit one month of interest to a Savings account
    ///
    /// Interest goes through the same credit path as a deposit but is
    /// logged with its own kind.
    pub fn add_monthly_interest(&mut self) -> InterestOutcome {
        if !self.account_type.accrues_interest() {
            return InterestOutcome::NotEligible;
        }

        if self.balance.is_zero() {
            return InterestOutcome::NothingToAccrue;
        }
        let Some(interest) = self.balance.checked_mul(self.interest_rate) else {
            return InterestOutcome::OutOfRange;
        };
        match self.credit(TransactionKind::Interest, interest) {
            Ok(_) => InterestOutcome::Applied(interest),
            Err(Error::AmountOutOfRange) => InterestOutcome::OutOfRange,
            Err(_) => InterestOutcome::NothingToAccrue,
        }
    }

    /// Read-only snapshot of the ledger
    pub fn statement(&self) -> Statement {
        Statement::new(
            self.id,
            self.holder_name.clone(),
            self.account_type,
            self.transactions.clone(),
            self.balance,
        )
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            holder_name: self.holder_name.clone(),
            account_type: self.account_type,
            balance: self.balance,
            transaction_count: self.transactions.len(),
        }
    }

    fn credit(&mut self, kind: TransactionKind, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::AmountOutOfRange)?;
        self.transactions.push(Transaction::new(kind, amount));
        Ok(self.balance)
    }
}

/// Compact view of an account for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub holder_name: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    pub transaction_count: usize,
}
