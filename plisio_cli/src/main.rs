mod commands;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plisio_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "plisio")]
#[command(about = "Create invoices and inspect operations through the Plisio payment API")]
struct Cli {
    /// Output format: table, json, csv, markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Shop secret key
    #[arg(long, env = "PLISIO_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// API root, without the version segment
    #[arg(long, env = "PLISIO_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "PLISIO_TIMEOUT_SECS", global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an invoice
    Invoice(Box<commands::invoice::InvoiceArgs>),
    /// List operations
    Transactions(commands::operations::TransactionsArgs),
    /// Show a single operation
    Transaction(commands::operations::TransactionArgs),
    /// Withdraw to one or several addresses
    Withdraw(commands::operations::WithdrawArgs),
    /// Show wallet balances
    Balance(commands::account::BalanceArgs),
    /// List the fee plans of a currency
    FeePlans(commands::account::FeePlansArgs),
    /// Estimate the network fee of a withdrawal
    FeeEstimate(commands::fees::FeeEstimateArgs),
    /// Show the commission Plisio would charge
    PlisioFee(commands::fees::PlisioFeeArgs),
    /// List the cryptocurrencies enabled for the shop
    Coins,
    /// List the currency codes this tool knows (no network access)
    Currencies(commands::currencies::CurrenciesArgs),
}

impl Cli {
    fn client(&self) -> Result<Client> {
        let api_key = self
            .api_key
            .as_deref()
            .context("missing API key: pass --api-key or set PLISIO_API_KEY")?;

        let mut config = ClientConfig::default();
        if let Some(ref base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(Client::with_config(api_key, config)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plisio=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    run(&cli, &format).await
}

/// Only the network commands build a client, so `currencies` works without a key.
async fn run(cli: &Cli, format: &OutputFormat) -> Result<()> {
    match &cli.command {
        Commands::Currencies(args) => commands::currencies::run(args, format),
        Commands::Invoice(args) => {
            commands::invoice::run(args.as_ref(), &cli.client()?, format).await
        }
        Commands::Transactions(args) => {
            commands::operations::run_transactions(args, &cli.client()?, format).await
        }
        Commands::Transaction(args) => {
            commands::operations::run_transaction(args, &cli.client()?, format).await
        }
        Commands::Withdraw(args) => {
            commands::operations::run_withdraw(args, &cli.client()?, format).await
        }
        Commands::Balance(args) => {
            commands::account::run_balance(args, &cli.client()?, format).await
        }
        Commands::FeePlans(args) => {
            commands::account::run_fee_plans(args, &cli.client()?, format).await
        }
        Commands::FeeEstimate(args) => {
            commands::fees::run_fee_estimate(args, &cli.client()?, format).await
        }
        Commands::PlisioFee(args) => {
            commands::fees::run_plisio_fee(args, &cli.client()?, format).await
        }
        Commands::Coins => commands::account::run_coins(&cli.client()?, format).await,
    }
}
