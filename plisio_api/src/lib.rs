//! Clients for the [Plisio](https://plisio.net/documentation) cryptocurrency payment API.
//!
//! [`Client`] is async; [`BlockingClient`] (feature `blocking`, on by default)
//! blocks the calling thread. Both share the same parameter normalization,
//! request building and response handling.

#[cfg(feature = "blocking")]
pub mod blocking;
mod client;
mod config;
mod endpoints;
mod errors;
mod params;
mod query;
mod request;
mod response;
mod transport;
pub mod types;

#[cfg(test)]
mod testing;

#[cfg(feature = "blocking")]
pub use self::blocking::{BlockingClient, BlockingTransport, ReqwestBlockingTransport};
pub use self::client::Client;
pub use self::config::{ClientConfig, API_VERSION_V1, BASE_URL, USER_AGENT};
pub use self::errors::{ApiError, Error};
pub use self::params::{Params, RECEIVER_KEY};
pub use self::query::{
    FeeEstimationQuery, InvoiceRequest, PlisioFeeQuery, Query, TransactionsQuery, WithdrawRequest,
    DEFAULT_LANGUAGE,
};
pub use self::request::{
    build_request, HttpRequest, RequestOverrides, API_KEY_FIELD, DEFAULT_HEADERS, REQUEST_TIMEOUT,
};
pub use self::response::{handle_response, HttpResponse};
pub use self::transport::{ReqwestTransport, Transport};

pub use rust_decimal::Decimal;
pub use url::Url;
