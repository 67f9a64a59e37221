use anyhow::{bail, Result};
use clap::Args;
use plisio_api::types::{Currency, FeePlan, TransactionStatus, TransactionType};
use plisio_api::{Client, Decimal, TransactionsQuery, WithdrawRequest};
use serde_json::Value;

use crate::output::{print_response, OutputFormat};

use super::recipients;

#[derive(Args)]
pub struct TransactionsArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Only operations of this shop
    #[arg(long)]
    pub shop_id: Option<String>,

    /// Operation type: cash_in, cash_out, mass_cash_out, invoice
    #[arg(long = "type")]
    pub tx_type: Option<TransactionType>,

    /// Status: new, pending, "pending internal", expired, completed, mismatch, error, cancelled
    #[arg(long)]
    pub status: Option<TransactionStatus>,

    /// Cryptocurrency (e.g. BTC)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Search by transaction id, order number or address
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct TransactionArgs {
    /// Operation id
    pub id: String,
}

#[derive(Args)]
pub struct WithdrawArgs {
    /// Cryptocurrency to withdraw
    #[arg(long)]
    pub currency: Currency,

    /// Destination address; repeat or comma-separate for a mass withdrawal
    #[arg(long, required = true, value_delimiter = ',')]
    pub to: Vec<String>,

    /// Amount per destination, in the same order as --to
    #[arg(long, required = true, value_delimiter = ',')]
    pub amount: Vec<Decimal>,

    /// Fee plan: economy, normal, priority, custom
    #[arg(long)]
    pub fee_plan: Option<FeePlan>,
}

pub fn build_transactions_query(args: &TransactionsArgs) -> Result<TransactionsQuery> {
    let mut query = TransactionsQuery::default();

    if let Some(page) = args.page {
        if page == 0 {
            bail!("--page starts at 1");
        }
        query = query.with_page(page);
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }
    if let Some(ref shop_id) = args.shop_id {
        query = query.with_shop_id(shop_id);
    }
    if let Some(tx_type) = args.tx_type {
        query = query.with_type(tx_type);
    }
    if let Some(status) = args.status {
        query = query.with_status(status);
    }
    if let Some(currency) = args.currency {
        query = query.with_currency(currency);
    }
    if let Some(ref search) = args.search {
        query = query.with_search(search.trim());
    }

    Ok(query)
}

pub fn build_withdraw_request(args: &WithdrawArgs) -> Result<WithdrawRequest> {
    let pairs = recipients(&args.to, &args.amount)?;
    let mut request = match pairs.as_slice() {
        [(to, amount)] => WithdrawRequest::new(args.currency, to, *amount),
        _ => WithdrawRequest::mass(args.currency, &pairs),
    };
    if let Some(fee_plan) = args.fee_plan {
        request = request.with_fee_plan(fee_plan);
    }
    Ok(request)
}

pub async fn run_transactions(
    args: &TransactionsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_transactions_query(args)?;
    let resp = client.transactions(&query).await?;

    if let Some(meta) = resp["data"].get("_meta") {
        eprintln!(
            "Page {}/{} ({} total operations)",
            meta_field(meta, "currentPage"),
            meta_field(meta, "pageCount"),
            meta_field(meta, "totalCount")
        );
    }

    print_response(&resp, format)
}

pub async fn run_transaction(
    args: &TransactionArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client.transaction_details(&args.id).await?;
    print_response(&resp, format)
}

pub async fn run_withdraw(args: &WithdrawArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let request = build_withdraw_request(args)?;
    tracing::info!(
        currency = %request.currency,
        recipients = request.to.len(),
        "submitting withdrawal"
    );

    let resp = client.withdraw(&request).await?;
    print_response(&resp, format)
}

fn meta_field(meta: &Value, key: &str) -> String {
    meta.get(key).map(Value::to_string).unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use plisio_api::types::WithdrawType;
    use plisio_api::Query;

    use super::*;

    #[derive(Parser)]
    struct TransactionsHarness {
        #[command(flatten)]
        args: TransactionsArgs,
    }

    #[derive(Parser)]
    struct WithdrawHarness {
        #[command(flatten)]
        args: WithdrawArgs,
    }

    #[test]
    fn test_transactions_query_from_flags() {
        let args = TransactionsHarness::try_parse_from([
            "transactions", "--page", "2", "--type", "cash-out", "--status", "PENDING_INTERNAL",
        ])
        .unwrap()
        .args;
        let query = build_transactions_query(&args).unwrap();
        assert_eq!(
            query.to_params().to_query_string(),
            "page=2&type=cash_out&status=pending+internal"
        );
    }

    #[test]
    fn test_transactions_rejects_page_zero() {
        let args = TransactionsHarness::try_parse_from(["transactions", "--page", "0"])
            .unwrap()
            .args;
        assert!(build_transactions_query(&args).is_err());
    }

    #[test]
    fn test_single_withdraw() {
        let args = WithdrawHarness::try_parse_from([
            "withdraw", "--currency", "BTC", "--to", "bc1q", "--amount", "0.01",
        ])
        .unwrap()
        .args;
        let request = build_withdraw_request(&args).unwrap();
        assert_eq!(request.withdraw_type, WithdrawType::CashOut);
        assert_eq!(request.to, vec!["bc1q".to_string()]);
    }

    #[test]
    fn test_mass_withdraw() {
        let args = WithdrawHarness::try_parse_from([
            "withdraw", "--currency", "ETH", "--to", "a,b", "--amount", "1,2",
            "--fee-plan", "priority",
        ])
        .unwrap()
        .args;
        let request = build_withdraw_request(&args).unwrap();
        assert_eq!(request.withdraw_type, WithdrawType::MassCashOut);
        assert_eq!(
            request.to_params().to_query_string(),
            "currency=ETH&type=mass_cash_out&to=a,b&amount=1,2&fee_plan=priority"
        );
    }

    #[test]
    fn test_withdraw_mismatched_lists() {
        let args = WithdrawHarness::try_parse_from([
            "withdraw", "--currency", "ETH", "--to", "a,b", "--amount", "1",
        ])
        .unwrap()
        .args;
        assert!(build_withdraw_request(&args).is_err());
    }
}
