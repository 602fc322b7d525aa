use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Account id {0} already exists!")]
    DuplicateAccountId(String),
    #[error("Account: {0} does not exist")]
    NonexistentAccount(String),
    #[error("Origin account is the same as destination account")]
    SameAccountTransfer,
    #[error("Transfer amount must be bigger than 0")]
    InvalidAmount(Decimal),
    #[error("Account: {account_id} does not have sufficient funds to perform a transfer of {amount}")]
    InsufficientFunds { account_id: String, amount: Decimal },
    #[error("Account: {0} cannot hold the resulting balance")]
    BalanceOverflow(String),
    #[error("Invalid account: {0}")]
    InvalidAccount(String),
    #[error("Notification error: {0}")]
    Notification(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransferError {
    /// Whether the error is a rejected request rather than an internal fault.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAccountId(_)
                | Self::NonexistentAccount(_)
                | Self::SameAccountTransfer
                | Self::InvalidAmount(_)
                | Self::InsufficientFunds { .. }
                | Self::BalanceOverflow(_)
                | Self::InvalidAccount(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;
