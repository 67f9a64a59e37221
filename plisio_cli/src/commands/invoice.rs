use anyhow::{bail, Result};
use clap::Args;
use plisio_api::types::{Currency, FiatCurrency};
use plisio_api::{Client, Decimal, InvoiceRequest, Url};

use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct InvoiceArgs {
    /// Cryptocurrency to invoice in (e.g. BTC, USDT_TRX)
    #[arg(long)]
    pub currency: Currency,

    /// Amount in the invoice currency
    #[arg(long)]
    pub amount: Decimal,

    /// Merchant-facing order name
    #[arg(long)]
    pub order_name: String,

    /// Order number; a random one is generated when omitted
    #[arg(long)]
    pub order_number: Option<String>,

    /// Fiat currency to quote the invoice in (e.g. USD)
    #[arg(long, requires = "source_amount")]
    pub source_currency: Option<FiatCurrency>,

    /// Amount in the fiat source currency
    #[arg(long, requires = "source_currency")]
    pub source_amount: Option<Decimal>,

    /// Cryptocurrencies the payer may choose from, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub allowed: Vec<Currency>,

    #[arg(long)]
    pub description: Option<String>,

    /// URL notified on every status change
    #[arg(long)]
    pub callback_url: Option<Url>,

    #[arg(long)]
    pub success_callback_url: Option<Url>,

    #[arg(long)]
    pub fail_callback_url: Option<Url>,

    /// Payer email
    #[arg(long)]
    pub email: Option<String>,

    /// Invoice page language, e.g. en_US
    #[arg(long)]
    pub language: Option<String>,

    /// Minutes until the invoice expires
    #[arg(long)]
    pub expire_min: Option<u32>,

    /// Ask Plisio to redirect the payer to the invoice page
    #[arg(long)]
    pub redirect_to_invoice: bool,
}

pub fn build_request(args: &InvoiceArgs) -> Result<InvoiceRequest> {
    if args.amount <= Decimal::ZERO {
        bail!("--amount must be positive, got {}", args.amount);
    }
    if args.order_name.trim().is_empty() {
        bail!("--order-name must not be empty");
    }

    let mut request = InvoiceRequest::new(&args.order_name, args.currency, args.amount);

    if let Some(ref order_number) = args.order_number {
        request = request.with_order_number(order_number);
    }
    if let (Some(currency), Some(amount)) = (args.source_currency, args.source_amount) {
        request = request.with_source(currency, amount);
    }
    if !args.allowed.is_empty() {
        request = request.with_allowed_psys_cids(&args.allowed);
    }
    if let Some(ref description) = args.description {
        request = request.with_description(description);
    }
    if let Some(ref url) = args.callback_url {
        request = request.with_callback_url(url.clone());
    }
    if let Some(ref url) = args.success_callback_url {
        request = request.with_success_callback_url(url.clone());
    }
    if let Some(ref url) = args.fail_callback_url {
        request = request.with_fail_callback_url(url.clone());
    }
    if let Some(ref email) = args.email {
        request = request.with_email(email);
    }
    if let Some(ref language) = args.language {
        request = request.with_language(Some(language));
    }
    if let Some(minutes) = args.expire_min {
        request = request.with_expire_min(minutes);
    }
    if args.redirect_to_invoice {
        request = request.with_redirect_to_invoice(true);
    }

    Ok(request)
}

pub async fn run(args: &InvoiceArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let request = build_request(args)?;
    tracing::info!(order_number = %request.order_number, "creating invoice");

    let resp = client.invoice(&request).await?;
    print_response(&resp, format)
}
