#![allow(dead_code)]

use async_trait::async_trait;
use fund_transfer::application::engine::TransferEngine;
use fund_transfer::domain::account::{Account, AccountId, Balance};
use fund_transfer::domain::ports::{NotificationPort, NotificationPortBox};
use fund_transfer::error::{Result, TransferError};
use fund_transfer::infrastructure::in_memory::InMemoryAccountStore;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Notifier that remembers every (account id, message) pair it receives.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationPort for RecordingNotifier {
    async fn notify(&self, account: &Account, message: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((account.id().to_string(), message.to_string()));
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl NotificationPort for FailingNotifier {
    async fn notify(&self, _account: &Account, _message: &str) -> Result<()> {
        Err(TransferError::Notification("mail relay unavailable".to_string()))
    }
}

pub fn account(id: &str, balance: Decimal) -> Account {
    Account::new(AccountId::new(id).unwrap(), Balance::new(balance).unwrap())
}

pub async fn engine_with_accounts(
    notifier: NotificationPortBox,
    accounts: &[(&str, Decimal)],
) -> TransferEngine {
    let engine = TransferEngine::new(Box::new(InMemoryAccountStore::new()), notifier);
    for (id, balance) in accounts {
        engine
            .create_account(account(id, *balance))
            .await
            .expect("Failed to create account");
    }
    engine
}

pub async fn balance_of(engine: &TransferEngine, id: &str) -> Decimal {
    engine
        .get_account(id)
        .await
        .unwrap()
        .expect("Account should exist")
        .balance()
        .await
        .value()
}

pub fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{header}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}
