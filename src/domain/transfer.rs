use rust_decimal::Decimal;
use serde::Deserialize;

/// A single request to move money between two accounts.
///
/// Fields are kept raw so that every check happens in the engine, in order.
/// Nothing about a transfer is retained after it completes.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}
