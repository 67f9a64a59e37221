use anyhow::Result;
use clap::Args;
use plisio_api::types::{Currency, FeePlan, TransactionType};
use plisio_api::{Client, Decimal, FeeEstimationQuery, PlisioFeeQuery};

use crate::output::{print_response, OutputFormat};

use super::recipients;

#[derive(Args)]
pub struct FeeEstimateArgs {
    /// Cryptocurrency (e.g. BTC)
    #[arg(long)]
    pub currency: Currency,

    /// Destination address; repeat or comma-separate for several
    #[arg(long, required = true, value_delimiter = ',')]
    pub to: Vec<String>,

    /// Amount per destination, in the same order as --to
    #[arg(long, required = true, value_delimiter = ',')]
    pub amount: Vec<Decimal>,

    /// Fee plan: economy, normal, priority, custom
    #[arg(long)]
    pub fee_plan: Option<FeePlan>,
}

#[derive(Args)]
pub struct PlisioFeeArgs {
    /// Cryptocurrency (e.g. BTC)
    #[arg(long)]
    pub currency: Currency,

    /// Destination address; repeat or comma-separate for several
    #[arg(long, value_delimiter = ',')]
    pub to: Vec<String>,

    /// Amount per destination, in the same order as --to
    #[arg(long, value_delimiter = ',')]
    pub amount: Vec<Decimal>,

    /// Operation type: cash_in, cash_out, mass_cash_out, invoice
    #[arg(long = "type")]
    pub tx_type: Option<TransactionType>,

    /// Fee plan: economy, normal, priority, custom
    #[arg(long)]
    pub fee_plan: Option<FeePlan>,
}

pub fn build_fee_estimation(args: &FeeEstimateArgs) -> Result<FeeEstimationQuery> {
    let mut query = FeeEstimationQuery::new(args.currency);
    for (to, amount) in recipients(&args.to, &args.amount)? {
        query = query.with_recipient(&to, amount);
    }
    if let Some(fee_plan) = args.fee_plan {
        query = query.with_fee_plan(fee_plan);
    }
    Ok(query)
}

pub fn build_plisio_fee(args: &PlisioFeeArgs) -> Result<PlisioFeeQuery> {
    let mut query = PlisioFeeQuery::new(args.currency);
    for (to, amount) in recipients(&args.to, &args.amount)? {
        query = query.with_recipient(&to, amount);
    }
    if let Some(tx_type) = args.tx_type {
        query = query.with_type(tx_type);
    }
    if let Some(fee_plan) = args.fee_plan {
        query = query.with_fee_plan(fee_plan);
    }
    Ok(query)
}

pub async fn run_fee_estimate(
    args: &FeeEstimateArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_fee_estimation(args)?;
    let resp = client.fee_estimation(&query).await?;
    print_response(&resp, format)
}

pub async fn run_plisio_fee(
    args: &PlisioFeeArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_plisio_fee(args)?;
    let resp = client.plisio_fee(&query).await?;
    print_response(&resp, format)
}
