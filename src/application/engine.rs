use crate::domain::account::{Account, AccountHandle, AccountId, Amount, Balance};
use crate::domain::ports::{AccountStoreBox, NotificationPortBox};
use crate::domain::transfer::TransferRequest;
use crate::error::{Result, TransferError};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Moves money between accounts held in an `AccountStore`.
///
/// Transfers that share no account run fully in parallel: the engine only ever
/// holds the two account locks a transfer needs, acquired in ascending id order.
/// Share it between tasks behind an `Arc`.
pub struct TransferEngine {
    account_store: AccountStoreBox,
    notifier: NotificationPortBox,
}

impl TransferEngine {
    /// Creates a new `TransferEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `account_store` - The store that owns every account.
    /// * `notifier` - Receives a notice for each side of a completed transfer.
    pub fn new(account_store: AccountStoreBox, notifier: NotificationPortBox) -> Self {
        Self {
            account_store,
            notifier,
        }
    }

    /// Registers a new account. Fails with `DuplicateAccountId` if the id is taken.
    pub async fn create_account(&self, account: Account) -> Result<AccountHandle> {
        self.account_store.create(account).await
    }

    pub async fn get_account(&self, id: &str) -> Result<Option<AccountHandle>> {
        match AccountId::new(id) {
            Ok(id) => self.account_store.get(&id).await,
            Err(_) => Ok(None),
        }
    }

    /// Snapshots of every account, sorted by id.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        let mut snapshots = Vec::new();
        for handle in self.account_store.all_accounts().await? {
            snapshots.push(handle.snapshot().await);
        }
        snapshots.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(snapshots)
    }

    /// Sum of all balances in the store. Unchanged by any transfer.
    ///
    /// Fails with `BalanceOverflow` if the sum is not representable.
    pub async fn total_balance(&self) -> Result<Balance> {
        let mut total = Balance::ZERO;
        for handle in self.account_store.all_accounts().await? {
            total = total
                .checked_add(handle.balance().await)
                .ok_or_else(|| TransferError::BalanceOverflow(handle.id().to_string()))?;
        }
        Ok(total)
    }

    pub async fn submit(&self, request: TransferRequest) -> Result<()> {
        self.transfer(&request.from, &request.to, request.amount).await
    }

    /// Moves `amount` from `from_id` to `to_id`.
    ///
    /// Checks run in a fixed order: source exists, endpoints differ, amount is
    /// positive, destination exists, then funds under lock. Any failure leaves
    /// both balances untouched.
    pub async fn transfer(&self, from_id: &str, to_id: &str, amount: Decimal) -> Result<()> {
        let from = self
            .get_account(from_id)
            .await?
            .ok_or_else(|| TransferError::NonexistentAccount(from_id.to_string()))?;

        if from_id == to_id {
            return Err(TransferError::SameAccountTransfer);
        }

        let amount = Amount::new(amount)?;

        let to = self
            .get_account(to_id)
            .await?
            .ok_or_else(|| TransferError::NonexistentAccount(to_id.to_string()))?;

        let (from_after, to_after) = self.apply(&from, &to, amount).await?;

        info!(from = %from.id(), to = %to.id(), %amount, "Transfer completed");

        self.notify(
            &from_after,
            format!("Debit of {amount} to account: {}", to.id()),
        )
        .await;
        self.notify(
            &to_after,
            format!("Deposit of {amount} from account: {}", from.id()),
        )
        .await;

        Ok(())
    }

    /// Debits `from` and credits `to` while holding both locks.
    ///
    /// Returns post-transfer snapshots; both guards are dropped before returning.
    async fn apply(
        &self,
        from: &AccountHandle,
        to: &AccountHandle,
        amount: Amount,
    ) -> Result<(Account, Account)> {
        let (mut from_guard, mut to_guard) = if from.id() < to.id() {
            let from_guard = from.lock().await;
            let to_guard = to.lock().await;
            (from_guard, to_guard)
        } else {
            let to_guard = to.lock().await;
            let from_guard = from.lock().await;
            (from_guard, to_guard)
        };
        debug!(from = %from.id(), to = %to.id(), "Acquired account locks");

        // Authoritative funds check; the balance may have moved since lookup.
        // Both sides are checked before either is written.
        from_guard.debited(amount)?;
        to_guard.credited(amount)?;
        from_guard.debit(amount)?;
        to_guard.credit(amount)?;

        Ok(((*from_guard).clone(), (*to_guard).clone()))
    }

    async fn notify(&self, account: &Account, message: String) {
        if let Err(e) = self.notifier.notify(account, &message).await {
            warn!(
                account_id = %account.id(),
                error = %e,
                "Failed to deliver transfer notification"
            );
        }
    }
}
