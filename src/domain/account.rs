use crate::error::{Result, TransferError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Unique, immutable identifier of an account.
///
/// The total order on ids is the canonical lock order used by transfers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TransferError::InvalidAccount(
                "Account id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = TransferError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative monetary value held by an account.
///
/// This is a wrapper around `rust_decimal::Decimal`. There is no public
/// subtraction: the only way to lower a balance is `Account::debit`, which
/// checks for sufficient funds first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Balance(Decimal);

/// Represents a strictly positive amount moved by a transfer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(TransferError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = TransferError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(TransferError::InvalidAccount(
                "Initial balance must be positive.".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn covers(&self, amount: Amount) -> bool {
        self.0 >= amount.0
    }

    /// Adds two balances, or `None` if the sum is not representable.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

impl TryFrom<Decimal> for Balance {
    type Error = TransferError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Balance> for Decimal {
    fn from(balance: Balance) -> Self {
        balance.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A monetary account: identity plus a non-negative balance.
///
/// `debit` and `credit` are the only balance mutators. Neither locks anything;
/// callers obtain exclusivity through the owning `AccountHandle`. `debited` and
/// `credited` compute the outcome without writing it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    id: AccountId,
    balance: Balance,
}

impl Account {
    pub fn new(id: AccountId, balance: Balance) -> Self {
        Self { id, balance }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Balance after withdrawing `amount`, failing if the balance does not cover it.
    pub fn debited(&self, amount: Amount) -> Result<Balance> {
        if !self.balance.covers(amount) {
            return Err(TransferError::InsufficientFunds {
                account_id: self.id.to_string(),
                amount: amount.value(),
            });
        }
        Ok(Balance(self.balance.0 - amount.0))
    }

    /// Balance after depositing `amount`, failing if it is not representable.
    pub fn credited(&self, amount: Amount) -> Result<Balance> {
        self.balance
            .0
            .checked_add(amount.0)
            .map(Balance)
            .ok_or_else(|| TransferError::BalanceOverflow(self.id.to_string()))
    }

    /// Withdraws `amount`; on failure the account is left untouched.
    pub fn debit(&mut self, amount: Amount) -> Result<()> {
        self.balance = self.debited(amount)?;
        Ok(())
    }

    /// Deposits `amount`; on failure the account is left untouched.
    pub fn credit(&mut self, amount: Amount) -> Result<()> {
        self.balance = self.credited(amount)?;
        Ok(())
    }
}

/// Shared reference to an account owned by a store.
///
/// Cloning a handle never copies the account; every clone points at the same
/// authoritative state. The id is kept outside the mutex so lock ordering can
/// be decided without locking.
#[derive(Debug, Clone)]
pub struct AccountHandle {
    id: AccountId,
    inner: Arc<Mutex<Account>>,
}

impl AccountHandle {
    pub fn new(account: Account) -> Self {
        Self {
            id: account.id.clone(),
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Returns a copy of the account as of the last completed mutation.
    pub async fn snapshot(&self) -> Account {
        self.inner.lock().await.clone()
    }

    pub async fn balance(&self) -> Balance {
        self.inner.lock().await.balance
    }

    /// Whether both handles refer to the same stored account.
    pub fn same_account(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock().await
    }
}
