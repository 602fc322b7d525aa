use crate::domain::account::{Account, AccountHandle, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{Result, TransferError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// A thread-safe in-memory store for accounts.
///
/// Uses `Arc<RwLock<HashMap<AccountId, AccountHandle>>>` so lookups run
/// concurrently with each other and with in-flight transfers. The map lock only
/// guards membership; balances are guarded by each handle's own mutex.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, AccountHandle>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: Account) -> Result<AccountHandle> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.id().clone()) {
            Entry::Occupied(entry) => {
                Err(TransferError::DuplicateAccountId(entry.key().to_string()))
            }
            Entry::Vacant(entry) => {
                info!(account_id = %account.id(), balance = %account.balance(), "Account created");
                Ok(entry.insert(AccountHandle::new(account)).clone())
            }
        }
    }

    async fn get(&self, id: &AccountId) -> Result<Option<AccountHandle>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).cloned())
    }

    async fn all_accounts(&self) -> Result<Vec<AccountHandle>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().cloned().collect())
    }
}
