//! CLI subcommand implementations.

pub mod account;
pub mod currencies;
pub mod fees;
pub mod invoice;
pub mod operations;

use anyhow::{bail, Result};
use plisio_api::Decimal;

/// Pairs each destination address with its amount.
pub(crate) fn recipients(to: &[String], amounts: &[Decimal]) -> Result<Vec<(String, Decimal)>> {
    if to.len() != amounts.len() {
        bail!(
            "got {} address(es) but {} amount(s); pass one --amount per --to",
            to.len(),
            amounts.len()
        );
    }
    if let Some(amount) = amounts.iter().find(|a| a.is_sign_negative() || a.is_zero()) {
        bail!("amount must be positive, got {}", amount);
    }
    Ok(to.iter().cloned().zip(amounts.iter().copied()).collect())
}
