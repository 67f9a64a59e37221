use anyhow::Result;
use clap::Args;

use crate::output::{build_currency_rows, print_rows, OutputFormat};

#[derive(Args)]
pub struct CurrenciesArgs {
    /// Include fiat currencies usable as an invoice source currency
    #[arg(long)]
    pub fiat: bool,
}

pub fn run(args: &CurrenciesArgs, format: &OutputFormat) -> Result<()> {
    let rows = build_currency_rows(args.fiat);
    eprintln!("{} currencies", rows.len());
    print_rows(&rows, format)
}
