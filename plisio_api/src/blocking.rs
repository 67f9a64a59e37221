//! Blocking client, for callers without an async runtime.
//!
//! Mirrors [`Client`](crate::Client) method for method; only the transport
//! differs.

use std::fmt;

use serde_json::Value;

use crate::{
    config::{ClientConfig, USER_AGENT},
    endpoints::{self, Call, ClientCore},
    params::Params,
    query::{FeeEstimationQuery, InvoiceRequest, PlisioFeeQuery, TransactionsQuery, WithdrawRequest},
    request::HttpRequest,
    response::{handle_response, HttpResponse},
    types::{Currency, HttpMethod},
    Error,
};

/// The blocking counterpart of [`Transport`](crate::Transport).
pub trait BlockingTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// [`BlockingTransport`] backed by `reqwest::blocking::Client`.
///
/// Must not be created or dropped inside an async runtime.
#[derive(Clone, Debug)]
pub struct ReqwestBlockingTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestBlockingTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| {
                tracing::error!("Invalid proxy {}: {}", proxy, e);
                Error::Transport(e)
            })?;
            builder = builder.proxy(proxy);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build blocking HTTP client: {}", e);
            Error::Transport(e)
        })?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl BlockingTransport for ReqwestBlockingTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self
            .client
            .request(request.method.as_reqwest(), request.full_url())
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().map_err(|e| {
            tracing::error!("Failed to reach Plisio: {}", e);
            Error::Transport(e)
        })?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        Ok(HttpResponse { status, body })
    }
}

/// Blocking client for the Plisio API.
pub struct BlockingClient<T = ReqwestBlockingTransport> {
    core: ClientCore,
    transport: T,
}

impl BlockingClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestBlockingTransport::new(&config)?;
        BlockingClient::with_transport(api_key, config, transport)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self, Error> {
        Self::with_config(api_key, ClientConfig::default().with_base_url(base_url))
    }
}

impl<T: BlockingTransport> BlockingClient<T> {
    pub fn with_transport(
        api_key: impl Into<String>,
        config: ClientConfig,
        transport: T,
    ) -> Result<Self, Error> {
        Ok(Self {
            core: ClientCore::new(api_key.into(), &config)?,
            transport,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
        force_query: bool,
    ) -> Result<Value, Error> {
        self.execute(Call::new(method, path, params, force_query))
    }

    fn execute(&self, call: Call) -> Result<Value, Error> {
        let request = self.core.prepare(call)?;
        let response = self.transport.send(request)?;
        handle_response(&response)
    }

    pub fn invoice(&self, request: &InvoiceRequest) -> Result<Value, Error> {
        self.execute(endpoints::invoice(request))
    }

    pub fn transactions(&self, query: &TransactionsQuery) -> Result<Value, Error> {
        self.execute(endpoints::transactions(query))
    }

    pub fn transaction_details(&self, id: &str) -> Result<Value, Error> {
        self.execute(endpoints::transaction_details(id))
    }

    pub fn withdraw(&self, request: &WithdrawRequest) -> Result<Value, Error> {
        self.execute(endpoints::withdraw(request))
    }

    pub fn balance(&self, psys_cid: Option<Currency>) -> Result<Value, Error> {
        self.execute(endpoints::balance(psys_cid))
    }

    pub fn fee_plans(&self, psys_cid: Currency) -> Result<Value, Error> {
        self.execute(endpoints::fee_plans(psys_cid))
    }

    pub fn fee_estimation(&self, query: &FeeEstimationQuery) -> Result<Value, Error> {
        self.execute(endpoints::fee_estimation(query))
    }

    pub fn plisio_fee(&self, query: &PlisioFeeQuery) -> Result<Value, Error> {
        self.execute(endpoints::plisio_fee(query))
    }

    pub fn crypto_coins(&self) -> Result<Value, Error> {
        self.execute(endpoints::crypto_coins())
    }
}

impl<T> fmt::Display for BlockingClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<BlockingClient: {}>", self.core.root())
    }
}

impl<T: fmt::Debug> fmt::Debug for BlockingClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingClient")
            .field("core", &self.core)
            .field("transport", &self.transport)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{testing::Recorder, types::FeePlan, Client};

    use super::*;

    #[test]
    fn non_json_success_is_a_request_error() {
        let client =
            BlockingClient::with_transport("k", ClientConfig::default(), Recorder::replying(200, "not json"))
                .unwrap();
        let err = client.crypto_coins().unwrap_err();
        assert!(err.is_request_error());
        assert!(err.to_string().contains("not json"));
    }

    #[tokio::test]
    async fn both_clients_build_identical_requests() {
        let config = ClientConfig::default().with_header("X-Shop", "1");
        let blocking =
            BlockingClient::with_transport("k", config.clone(), Recorder::replying(200, "{}")).unwrap();
        let client = Client::with_transport("k", config, Recorder::replying(200, "{}")).unwrap();

        let request = WithdrawRequest::new(Currency::Btc, "bc1q", Decimal::new(1, 3))
            .with_fee_plan(FeePlan::Priority);
        blocking.withdraw(&request).unwrap();
        client.withdraw(&request).await.unwrap();

        assert_eq!(blocking.transport().last(), client.transport().last());
    }

    #[test]
    fn malformed_proxy_is_a_transport_error() {
        let config = ClientConfig::default().with_proxy("http://[::1");
        assert!(matches!(
            ReqwestBlockingTransport::new(&config),
            Err(Error::Transport(_))
        ));
    }

    #[test]
    fn display_names_the_variant() {
        let client =
            BlockingClient::with_transport("k", ClientConfig::default(), Recorder::replying(200, "{}")).unwrap();
        assert_eq!(client.to_string(), "<BlockingClient: https://plisio.net/api/v1>");
    }
}
