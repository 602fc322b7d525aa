use crate::domain::account::Account;
use crate::domain::ports::NotificationPort;
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Notification port that emits every notice as a tracing event.
#[derive(Debug, Default, Clone)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationPort for LoggingNotifier {
    async fn notify(&self, account: &Account, message: &str) -> Result<()> {
        info!(
            account_id = %account.id(),
            balance = %account.balance(),
            "Sending notification to owner: {message}"
        );
        Ok(())
    }
}
