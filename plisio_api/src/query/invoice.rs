use rust_decimal::Decimal;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::{
    params::{list, opt},
    request::RequestOverrides,
    types::{Currency, FiatCurrency},
};

use super::{decimal, Query};

/// Invoice page language used when none is given.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Arguments for `invoices/new`.
///
/// `order_number` defaults to a fresh UUID v4 per request and `language` to
/// [`DEFAULT_LANGUAGE`]; every other optional field is omitted until set.
#[derive(Clone, Debug)]
pub struct InvoiceRequest {
    pub order_name: String,
    pub order_number: String,
    pub currency: Currency,
    pub amount: Decimal,
    /// Fiat currency the amount was originally quoted in.
    pub source_currency: Option<FiatCurrency>,
    pub source_amount: Option<Decimal>,
    /// Restricts which cryptocurrencies the payer may choose from.
    pub allowed_psys_cids: Vec<Currency>,
    pub description: Option<String>,
    /// Where Plisio posts status updates for this invoice.
    pub callback_url: Option<Url>,
    pub success_callback_url: Option<Url>,
    pub fail_callback_url: Option<Url>,
    /// Payer email, pre-filled on the invoice page.
    pub email: Option<String>,
    pub language: Option<String>,
    pub plugin: Option<String>,
    pub version: Option<String>,
    pub redirect_to_invoice: Option<bool>,
    /// Minutes until the invoice expires.
    pub expire_min: Option<u32>,
    overrides: RequestOverrides,
}

impl Query for InvoiceRequest {
    fn args(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("order_name", self.order_name.clone().into()),
            ("currency", self.currency.into()),
            ("amount", decimal(self.amount)),
            ("order_number", self.order_number.clone().into()),
            ("source_currency", opt(self.source_currency)),
            ("source_amount", self.source_amount.map(decimal).unwrap_or(Value::Null)),
            ("allowed_psys_cids", list(self.allowed_psys_cids.iter().copied())),
            ("description", opt(self.description.clone())),
            ("callback_url", opt(self.callback_url.as_ref().map(Url::to_string))),
            (
                "success_callback_url",
                opt(self.success_callback_url.as_ref().map(Url::to_string)),
            ),
            (
                "fail_callback_url",
                opt(self.fail_callback_url.as_ref().map(Url::to_string)),
            ),
            ("email", opt(self.email.clone())),
            ("language", opt(self.language.clone())),
            ("plugin", opt(self.plugin.clone())),
            ("version", opt(self.version.clone())),
            ("redirect_to_invoice", opt(self.redirect_to_invoice)),
            ("expire_min", opt(self.expire_min)),
        ]
    }

    fn overrides_mut(&mut self) -> &mut RequestOverrides {
        &mut self.overrides
    }

    fn overrides(&self) -> &RequestOverrides {
        &self.overrides
    }
}

impl InvoiceRequest {
    pub fn new(order_name: &str, currency: Currency, amount: Decimal) -> Self {
        Self {
            order_name: order_name.to_string(),
            order_number: Uuid::new_v4().to_string(),
            currency,
            amount,
            source_currency: None,
            source_amount: None,
            allowed_psys_cids: Vec::new(),
            description: None,
            callback_url: None,
            success_callback_url: None,
            fail_callback_url: None,
            email: None,
            language: Some(DEFAULT_LANGUAGE.to_string()),
            plugin: None,
            version: None,
            redirect_to_invoice: None,
            expire_min: None,
            overrides: RequestOverrides::default(),
        }
    }

    pub fn with_order_number(mut self, order_number: &str) -> Self {
        self.order_number = order_number.to_string();
        self
    }

    /// Quotes the invoice in fiat; Plisio converts at the current rate.
    pub fn with_source(mut self, source_currency: FiatCurrency, source_amount: Decimal) -> Self {
        self.source_currency = Some(source_currency);
        self.source_amount = Some(source_amount);
        self
    }

    pub fn with_allowed_psys_cid(mut self, currency: Currency) -> Self {
        self.allowed_psys_cids.push(currency);
        self
    }
    pub fn with_allowed_psys_cids(mut self, currencies: &[Currency]) -> Self {
        self.allowed_psys_cids.extend_from_slice(currencies);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_callback_url(mut self, url: Url) -> Self {
        self.callback_url = Some(url);
        self
    }
    pub fn with_success_callback_url(mut self, url: Url) -> Self {
        self.success_callback_url = Some(url);
        self
    }
    pub fn with_fail_callback_url(mut self, url: Url) -> Self {
        self.fail_callback_url = Some(url);
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Sets the invoice page language; `None` lets Plisio pick.
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(str::to_string);
        self
    }

    pub fn with_plugin(mut self, plugin: &str, version: &str) -> Self {
        self.plugin = Some(plugin.to_string());
        self.version = Some(version.to_string());
        self
    }

    pub fn with_redirect_to_invoice(mut self, redirect: bool) -> Self {
        self.redirect_to_invoice = Some(redirect);
        self
    }

    pub fn with_expire_min(mut self, minutes: u32) -> Self {
        self.expire_min = Some(minutes);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::query::Query;

    use super::*;

    #[test]
    fn required_fields_only() {
        let params = InvoiceRequest::new("Order 1", Currency::Btc, Decimal::from_str("0.001").unwrap())
            .with_order_number("42")
            .to_params();

        insta::assert_snapshot!(
            params.to_query_string(),
            @"order_name=Order+1&currency=BTC&amount=0.001&order_number=42&language=en_US"
        );
    }

    #[test]
    fn fresh_order_number_per_request() {
        let a = InvoiceRequest::new("A", Currency::Eth, Decimal::ONE);
        let b = InvoiceRequest::new("A", Currency::Eth, Decimal::ONE);
        assert_ne!(a.order_number, b.order_number);
        assert!(Uuid::parse_str(&a.order_number).is_ok());
    }

    #[test]
    fn optional_fields_render() {
        let params = InvoiceRequest::new("Shop", Currency::UsdtTrx, Decimal::new(1050, 2))
            .with_order_number("7")
            .with_source(FiatCurrency::Usd, Decimal::new(10, 0))
            .with_allowed_psys_cids(&[Currency::Btc, Currency::UsdtTrx])
            .with_callback_url(Url::parse("https://shop.example/cb?json=true").unwrap())
            .with_redirect_to_invoice(true)
            .with_expire_min(30)
            .with_language(None)
            .to_params();

        assert_eq!(params.get("amount"), Some(&Value::from("10.5")));
        assert_eq!(params.get("source_currency"), Some(&Value::from("USD")));
        assert!(!params.contains_key("language"));
        let query = params.to_query_string();
        assert!(query.contains("allowed_psys_cids=BTC,USDT_TRX"));
        assert!(query.contains("redirect_to_invoice=true"));
        assert!(query.contains("expire_min=30"));
        assert!(query.contains("callback_url=https%3A%2F%2Fshop.example%2Fcb%3Fjson%3Dtrue"));
    }

    #[test]
    fn per_call_overrides_ride_along() {
        let params = InvoiceRequest::new("A", Currency::Btc, Decimal::ONE)
            .with_header("X-Request-Id", "r-1")
            .to_params();
        let overrides = params.overrides().expect("overrides attached");
        assert_eq!(overrides.headers[0].1, "r-1");
    }
}
