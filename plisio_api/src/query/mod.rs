//! Typed arguments for the endpoints that take more than one or two values.

use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::{params::Params, request::RequestOverrides};

mod invoice;
pub use self::invoice::{InvoiceRequest, DEFAULT_LANGUAGE};

mod operations;
pub use self::operations::{TransactionsQuery, WithdrawRequest};

mod fees;
pub use self::fees::{FeeEstimationQuery, PlisioFeeQuery};

/// Trait implemented by all endpoint argument builders. Lowers the builder into
/// normalized [`Params`] and provides per-call transport overrides.
pub trait Query {
    /// Named arguments in the endpoint's documented order; unset ones are `null`.
    fn args(&self) -> Vec<(&'static str, Value)>;

    /// Returns a mutable reference to this call's transport overrides.
    fn overrides_mut(&mut self) -> &mut RequestOverrides;

    /// Returns this call's transport overrides.
    fn overrides(&self) -> &RequestOverrides;

    /// Normalized parameters, with unset arguments removed.
    fn to_params(&self) -> Params {
        let params = Params::from_args(self.args(), true);
        if self.overrides().is_empty() {
            params
        } else {
            params.with_overrides(self.overrides().clone())
        }
    }

    /// Adds a header to this call only.
    fn with_header(mut self, name: &str, value: &str) -> Self
    where
        Self: Sized,
    {
        let overrides = std::mem::take(self.overrides_mut());
        *self.overrides_mut() = overrides.with_header(name, value);
        self
    }

    /// Replaces the timeout for this call only.
    fn with_timeout(mut self, timeout: Duration) -> Self
    where
        Self: Sized,
    {
        self.overrides_mut().timeout = Some(timeout);
        self
    }
}

/// Amounts travel as their exact decimal text.
pub(crate) fn decimal(value: Decimal) -> Value {
    Value::String(value.normalize().to_string())
}
