use rust_decimal::Decimal;
use serde_json::Value;

use crate::{
    params::{list, opt},
    request::RequestOverrides,
    types::{Currency, FeePlan, TransactionType},
};

use super::{decimal, Query};

/// Arguments for `operations/fee`: the network fee of a prospective withdrawal.
#[derive(Clone, Debug, Default)]
pub struct FeeEstimationQuery {
    pub currency: Option<Currency>,
    pub addresses: Vec<String>,
    pub amounts: Vec<Decimal>,
    pub fee_plan: Option<FeePlan>,
    overrides: RequestOverrides,
}

impl Query for FeeEstimationQuery {
    fn args(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("currency", opt(self.currency)),
            ("addresses", list(self.addresses.iter().cloned())),
            ("amounts", list(self.amounts.iter().copied().map(decimal))),
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

impl FeeEstimationQuery {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency: Some(currency),
            ..Self::default()
        }
    }

    /// Adds one destination and the amount it would receive.
    pub fn with_recipient(mut self, address: &str, amount: Decimal) -> Self {
        self.addresses.push(address.to_string());
        self.amounts.push(amount);
        self
    }

    pub fn with_fee_plan(mut self, fee_plan: FeePlan) -> Self {
        self.fee_plan = Some(fee_plan);
        self
    }
}

/// Arguments for `operations/plisio-fee`: the commission Plisio charges.
#[derive(Clone, Debug, Default)]
pub struct PlisioFeeQuery {
    pub currency: Option<Currency>,
    pub addresses: Vec<String>,
    pub amounts: Vec<Decimal>,
    pub tx_type: Option<TransactionType>,
    pub fee_plan: Option<FeePlan>,
    overrides: RequestOverrides,
}

impl Query for PlisioFeeQuery {
    fn args(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("currency", opt(self.currency)),
            ("addresses", list(self.addresses.iter().cloned())),
            ("amounts", list(self.amounts.iter().copied().map(decimal))),
            ("type", opt(self.tx_type)),
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

impl PlisioFeeQuery {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency: Some(currency),
            ..Self::default()
        }
    }

    pub fn with_recipient(mut self, address: &str, amount: Decimal) -> Self {
        self.addresses.push(address.to_string());
        self.amounts.push(amount);
        self
    }

    pub fn with_type(mut self, tx_type: TransactionType) -> Self {
        self.tx_type = Some(tx_type);
        self
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
    fn fee_estimation_lists() {
        let params = FeeEstimationQuery::new(Currency::Btc)
            .with_recipient("a1", Decimal::new(1, 1))
            .with_recipient("a2", Decimal::new(2, 1))
            .with_fee_plan(FeePlan::Normal)
            .to_params();
        insta::assert_snapshot!(
            params.to_query_string(),
            @"currency=BTC&addresses=a1,a2&amounts=0.1,0.2&fee_plan=normal"
        );
    }

    #[test]
    fn empty_fee_estimation_sends_nothing() {
        assert!(FeeEstimationQuery::default().to_params().is_empty());
    }

    #[test]
    fn plisio_fee_with_type() {
        let params = PlisioFeeQuery::new(Currency::Doge)
            .with_type(TransactionType::MassCashOut)
            .to_params();
        assert_eq!(params.to_query_string(), "currency=DOGE&type=mass_cash_out");
    }
}
