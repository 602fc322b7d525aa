use super::account::{Account, AccountHandle, AccountId};
use crate::error::Result;
use async_trait::async_trait;

/// Concurrent keyed registry of accounts.
///
/// The store owns every account it holds; callers only ever receive handles.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts a new account, failing with `DuplicateAccountId` if the id is taken.
    async fn create(&self, account: Account) -> Result<AccountHandle>;
    async fn get(&self, id: &AccountId) -> Result<Option<AccountHandle>>;
    async fn all_accounts(&self) -> Result<Vec<AccountHandle>>;
}

/// Receives best-effort notice of a balance change.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify(&self, account: &Account, message: &str) -> Result<()>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type NotificationPortBox = Box<dyn NotificationPort>;
