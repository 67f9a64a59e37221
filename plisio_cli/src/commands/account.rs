use anyhow::Result;
use clap::Args;
use plisio_api::types::Currency;
use plisio_api::Client;

use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct BalanceArgs {
    /// Only this cryptocurrency; all wallets when omitted
    #[arg(long)]
    pub currency: Option<Currency>,
}

#[derive(Args)]
pub struct FeePlansArgs {
    /// Cryptocurrency (e.g. BTC)
    #[arg(long)]
    pub currency: Currency,
}

pub async fn run_balance(args: &BalanceArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.balance(args.currency).await?;
    print_response(&resp, format)
}

pub async fn run_fee_plans(
    args: &FeePlansArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client.fee_plans(args.currency).await?;
    print_response(&resp, format)
}

pub async fn run_coins(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.crypto_coins().await?;
    if let Some(coins) = resp["data"].as_array() {
        eprintln!("{} cryptocurrencies enabled", coins.len());
    }
    print_response(&resp, format)
}
