//! Endpoint table: which path and parameters each public method sends.
//!
//! Both clients lower their method arguments through these functions, so the
//! async and blocking variants cannot drift apart.

use std::fmt;

use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    params::{opt, Params},
    query::{FeeEstimationQuery, InvoiceRequest, PlisioFeeQuery, Query, TransactionsQuery, WithdrawRequest},
    request::{build_request, HttpRequest, RequestOverrides},
    types::{Currency, HttpMethod},
    Error,
};

/// One API call before the credential and transport options are applied.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Call {
    pub method: HttpMethod,
    pub path: String,
    pub params: Params,
    pub force_query: bool,
}

impl Call {
    pub fn new(method: HttpMethod, path: &str, params: Params, force_query: bool) -> Self {
        Self {
            method,
            path: path.to_string(),
            params,
            force_query,
        }
    }

    /// Every Plisio endpoint is a GET with its data in the query string.
    fn get(path: &str, params: Params) -> Self {
        Self::new(HttpMethod::Get, path, params, true)
    }
}

pub(crate) fn invoice(request: &InvoiceRequest) -> Call {
    Call::get("invoices/new", request.to_params())
}

pub(crate) fn transactions(query: &TransactionsQuery) -> Call {
    Call::get("operations", query.to_params())
}

pub(crate) fn transaction_details(id: &str) -> Call {
    Call::get("operations", Params::from_args([("id", Value::from(id))], true))
}

pub(crate) fn withdraw(request: &WithdrawRequest) -> Call {
    Call::get("operations/withdraw", request.to_params())
}

pub(crate) fn balance(psys_cid: Option<Currency>) -> Call {
    Call::get("balance", Params::from_args([("psys_cid", opt(psys_cid))], true))
}

pub(crate) fn fee_plans(psys_cid: Currency) -> Call {
    Call::get("operations/fee-plan", Params::new().with("psys_cid", psys_cid))
}

pub(crate) fn fee_estimation(query: &FeeEstimationQuery) -> Call {
    Call::get("operations/fee", query.to_params())
}

pub(crate) fn plisio_fee(query: &PlisioFeeQuery) -> Call {
    Call::get("operations/plisio-fee", query.to_params())
}

pub(crate) fn crypto_coins() -> Call {
    Call::get("crypto-coins", Params::new())
}

/// Credential, URL root and default overrides shared by both clients.
#[derive(Clone)]
pub(crate) struct ClientCore {
    api_key: String,
    /// `<base>/<version>`, with no query or fragment.
    root: Url,
    defaults: RequestOverrides,
}

impl ClientCore {
    pub fn new(api_key: String, config: &ClientConfig) -> Result<Self, Error> {
        let mut root = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url, e);
            Error::InvalidUrl(e)
        })?;
        if root.query().is_some() || root.fragment().is_some() {
            return Err(config_error(format!(
                "base URL {} must not carry a query or fragment",
                config.base_url
            )));
        }

        let version: Vec<&str> = segments(&config.api_version).collect();
        if version.is_empty() {
            return Err(config_error("API version must not be empty".to_string()));
        }
        root.path_segments_mut()
            .map_err(|_| config_error(format!("base URL {} cannot hold a path", config.base_url)))?
            .pop_if_empty()
            .extend(version);

        Ok(Self {
            api_key,
            root,
            defaults: config.overrides.clone(),
        })
    }

    /// `<base>/<version>/<path>`, with the path's outer slashes trimmed.
    pub fn uri(&self, path: &str) -> Result<Url, Error> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| config_error(format!("cannot append {} to {}", path, self.root)))?
            .extend(segments(path));
        Ok(url)
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    pub fn prepare(&self, call: Call) -> Result<HttpRequest, Error> {
        let url = self.uri(&call.path)?;
        tracing::debug!(method = %call.method, %url, "sending Plisio request");
        Ok(build_request(
            call.method,
            url,
            call.params,
            call.force_query,
            &self.api_key,
            &self.defaults,
        ))
    }
}

impl fmt::Debug for ClientCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCore")
            .field("api_key", &"<redacted>")
            .field("root", &self.root.as_str())
            .field("defaults", &self.defaults)
            .finish()
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn config_error(message: String) -> Error {
    tracing::error!("{}", message);
    Error::Config { message }
}
