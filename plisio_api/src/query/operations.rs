use rust_decimal::Decimal;
use serde_json::Value;

use crate::{
    params::{list, opt},
    request::RequestOverrides,
    types::{Currency, FeePlan, TransactionStatus, TransactionType, WithdrawType},
};

use super::{decimal, Query};

/// Filters for the paginated `operations` listing.
#[derive(Clone, Debug, Default)]
pub struct TransactionsQuery {
    /// Page number.
    pub page: Option<u32>,
    /// Results per page.
    pub limit: Option<u32>,
    pub shop_id: Option<String>,
    pub tx_type: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    pub currency: Option<Currency>,
    /// Free-text search over transaction ids, order numbers and addresses.
    pub search: Option<String>,
    overrides: RequestOverrides,
}

impl Query for TransactionsQuery {
    fn args(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("page", opt(self.page)),
            ("limit", opt(self.limit)),
            ("shop_id", opt(self.shop_id.clone())),
            ("type", opt(self.tx_type)),
            ("status", opt(self.status)),
            ("currency", opt(self.currency)),
            ("search", opt(self.search.clone())),
        ]
    }

    fn overrides_mut(&mut self) -> &mut RequestOverrides {
        &mut self.overrides
    }

    fn overrides(&self) -> &RequestOverrides {
        &self.overrides
    }
}

impl TransactionsQuery {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_shop_id(mut self, shop_id: &str) -> Self {
        self.shop_id = Some(shop_id.to_string());
        self
    }

    pub fn with_type(mut self, tx_type: TransactionType) -> Self {
        self.tx_type = Some(tx_type);
        self
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

/// Arguments for `operations/withdraw`.
///
/// A single withdrawal sends one address and one amount; a mass withdrawal
/// sends parallel lists, which travel comma-joined.
#[derive(Clone, Debug)]
pub struct WithdrawRequest {
    pub currency: Currency,
    pub withdraw_type: WithdrawType,
    /// Destination addresses.
    pub to: Vec<String>,
    /// Amounts, one per destination.
    pub amounts: Vec<Decimal>,
    pub fee_plan: Option<FeePlan>,
    overrides: RequestOverrides,
}

impl Query for WithdrawRequest {
    fn args(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("currency", self.currency.into()),
            ("type", self.withdraw_type.into()),
            ("to", list(self.to.iter().cloned())),
            ("amount", list(self.amounts.iter().copied().map(decimal))),
            ("fee_plan", opt(self.fee_plan)),
        ]
    }

    fn overrides_mut(&mut self) -> &mut RequestOverrides {
        &mut self.overrides
    }

    fn overrides(&self) -> &RequestOverrides {
        &self.overrides
    }
}

impl WithdrawRequest {
    /// A single `cash_out` to one address.
    pub fn new(currency: Currency, to: &str, amount: Decimal) -> Self {
        Self {
            currency,
            withdraw_type: WithdrawType::CashOut,
            to: vec![to.to_string()],
            amounts: vec![amount],
            fee_plan: None,
            overrides: RequestOverrides::default(),
        }
    }

    /// A `mass_cash_out` to several `(address, amount)` pairs.
    pub fn mass(currency: Currency, recipients: &[(String, Decimal)]) -> Self {
        Self {
            currency,
            withdraw_type: WithdrawType::MassCashOut,
            to: recipients.iter().map(|(to, _)| to.clone()).collect(),
            amounts: recipients.iter().map(|(_, amount)| *amount).collect(),
            fee_plan: None,
            overrides: RequestOverrides::default(),
        }
    }

    pub fn with_fee_plan(mut self, fee_plan: FeePlan) -> Self {
        self.fee_plan = Some(fee_plan);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::Query;

    use super::*;

    #[test]
    fn transactions_default_is_empty() {
        assert!(TransactionsQuery::default().to_params().is_empty());
    }

    #[test]
    fn transactions_filters() {
        let params = TransactionsQuery::default()
            .with_page(2)
            .with_limit(50)
            .with_type(TransactionType::CashIn)
            .with_status(TransactionStatus::PendingInternal)
            .with_currency(Currency::Ltc)
            .to_params();
        insta::assert_snapshot!(
            params.to_query_string(),
            @"page=2&limit=50&type=cash_in&status=pending+internal&currency=LTC"
        );
    }

    #[test]
    fn single_withdraw() {
        let params = WithdrawRequest::new(Currency::Btc, "bc1qxyz", Decimal::new(25, 3)).to_params();
        assert_eq!(
            params.to_query_string(),
            "currency=BTC&type=cash_out&to=bc1qxyz&amount=0.025"
        );
    }

    #[test]
    fn mass_withdraw_joins_lists() {
        let recipients = vec![
            ("addr1".to_string(), Decimal::new(1, 0)),
            ("addr2".to_string(), Decimal::new(25, 1)),
        ];
        let params = WithdrawRequest::mass(Currency::Eth, &recipients)
            .with_fee_plan(FeePlan::Economy)
            .to_params();
        assert_eq!(
            params.to_query_string(),
            "currency=ETH&type=mass_cash_out&to=addr1,addr2&amount=1,2.5&fee_plan=economy"
        );
    }
}
