use clap::Parser;
use fund_transfer::application::engine::TransferEngine;
use fund_transfer::domain::account::Account;
use fund_transfer::domain::ports::{AccountStoreBox, NotificationPortBox};
use fund_transfer::domain::transfer::TransferRequest;
use fund_transfer::error::{Result as TransferResult, TransferError};
use fund_transfer::infrastructure::in_memory::InMemoryAccountStore;
use fund_transfer::infrastructure::notification::LoggingNotifier;
use fund_transfer::interfaces::csv::account_writer::AccountWriter;
use fund_transfer::interfaces::csv::record_reader::RecordReader;
use fund_transfer::interfaces::rejection::Rejection;
use fund_transfer::logging::init_logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Accounts CSV file (`id,balance`)
    accounts: PathBuf,

    /// Transfers CSV file (`from,to,amount`)
    transfers: Option<PathBuf>,

    /// Run every transfer as its own task instead of in file order.
    #[arg(long)]
    concurrent: bool,

    /// Log filter directives; falls back to RUST_LOG, then "warn".
    #[arg(long)]
    log_level: Option<String>,

    /// Print rejections as JSON bodies instead of text.
    #[arg(long)]
    json_rejections: bool,
}

fn report_rejection(subject: &str, error: &TransferError, json: bool) {
    if !error.is_validation() {
        error!(error = %error, "{subject} failed");
    }
    let rejection = Rejection::from(error);
    if json {
        match rejection.to_json() {
            Ok(body) => eprintln!("{body}"),
            Err(e) => error!(error = %e, "Failed to encode rejection"),
        }
    } else {
        eprintln!("{subject} rejected {rejection}");
    }
}

fn report_transfer(result: TransferResult<()>, json: bool) {
    if let Err(e) = result {
        report_rejection("Transfer", &e, json);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let account_store: AccountStoreBox = Box::new(InMemoryAccountStore::new());
    let notifier: NotificationPortBox = Box::new(LoggingNotifier::new());
    let engine = Arc::new(TransferEngine::new(account_store, notifier));

    let file = File::open(&cli.accounts).into_diagnostic()?;
    for record in RecordReader::new(file).records::<Account>() {
        match record {
            Ok(account) => {
                if let Err(e) = engine.create_account(account).await {
                    report_rejection("Account", &e, cli.json_rejections);
                }
            }
            Err(e) => eprintln!("Error reading account: {}", e),
        }
    }

    if let Some(path) = cli.transfers {
        let file = File::open(path).into_diagnostic()?;
        let mut tasks = JoinSet::new();
        for record in RecordReader::new(file).records::<TransferRequest>() {
            match record {
                Ok(request) if cli.concurrent => {
                    let engine = Arc::clone(&engine);
                    tasks.spawn(async move { engine.submit(request).await });
                }
                Ok(request) => {
                    report_transfer(engine.submit(request).await, cli.json_rejections)
                }
                Err(e) => eprintln!("Error reading transfer: {}", e),
            }
        }
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => report_transfer(result, cli.json_rejections),
                Err(e) => error!(error = %e, "Transfer task did not complete"),
            }
        }
    }

    match engine.total_balance().await {
        Ok(total) => info!(%total, "All transfers processed"),
        Err(e) => warn!(error = %e, "Total balance is not representable"),
    }

    let accounts = engine.accounts().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}
