//! Async HTTP client for the Plisio API.

use std::fmt;

use serde_json::Value;

use crate::{
    config::ClientConfig,
    endpoints::{self, Call, ClientCore},
    params::Params,
    query::{FeeEstimationQuery, InvoiceRequest, PlisioFeeQuery, TransactionsQuery, WithdrawRequest},
    response::handle_response,
    transport::{ReqwestTransport, Transport},
    types::{Currency, HttpMethod},
    Error,
};

/// Async client for the Plisio API.
///
/// Every method issues exactly one GET request with its arguments in the query
/// string and the API key appended, then returns the response JSON unchanged.
/// Failed calls surface immediately; nothing is retried.
pub struct Client<T = ReqwestTransport> {
    core: ClientCore,
    transport: T,
}

impl Client {
    /// Creates a client for the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(&config)?;
        Client::with_transport(api_key, config, transport)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self, Error> {
        Self::with_config(api_key, ClientConfig::default().with_base_url(base_url))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends through `transport`.
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

    /// Issues a call to any endpoint, including ones this client does not wrap.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
        force_query: bool,
    ) -> Result<Value, Error> {
        self.execute(Call::new(method, path, params, force_query))
            .await
    }

    async fn execute(&self, call: Call) -> Result<Value, Error> {
        let request = self.core.prepare(call)?;
        let response = self.transport.send(request).await?;
        handle_response(&response)
    }

    /// Creates an invoice.
    ///
    /// See <https://plisio.net/documentation/endpoints/create-an-invoice>.
    pub async fn invoice(&self, request: &InvoiceRequest) -> Result<Value, Error> {
        self.execute(endpoints::invoice(request)).await
    }

    /// Lists operations matching the query.
    pub async fn transactions(&self, query: &TransactionsQuery) -> Result<Value, Error> {
        self.execute(endpoints::transactions(query)).await
    }

    /// Fetches a single operation by its id.
    pub async fn transaction_details(&self, id: &str) -> Result<Value, Error> {
        self.execute(endpoints::transaction_details(id)).await
    }

    /// Withdraws to one or several addresses.
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<Value, Error> {
        self.execute(endpoints::withdraw(request)).await
    }

    /// Fetches wallet balances, optionally for a single currency.
    pub async fn balance(&self, psys_cid: Option<Currency>) -> Result<Value, Error> {
        self.execute(endpoints::balance(psys_cid)).await
    }

    /// Fetches the fee plans available for a currency.
    pub async fn fee_plans(&self, psys_cid: Currency) -> Result<Value, Error> {
        self.execute(endpoints::fee_plans(psys_cid)).await
    }

    /// Estimates the network fee of a prospective withdrawal.
    pub async fn fee_estimation(&self, query: &FeeEstimationQuery) -> Result<Value, Error> {
        self.execute(endpoints::fee_estimation(query)).await
    }

    /// Fetches the commission Plisio would charge.
    pub async fn plisio_fee(&self, query: &PlisioFeeQuery) -> Result<Value, Error> {
        self.execute(endpoints::plisio_fee(query)).await
    }

    /// Lists the cryptocurrencies enabled for the shop.
    pub async fn crypto_coins(&self) -> Result<Value, Error> {
        self.execute(endpoints::crypto_coins()).await
    }
}

impl<T> fmt::Display for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Client: {}>", self.core.root())
    }
}

impl<T: fmt::Debug> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("core", &self.core)
            .field("transport", &self.transport)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{testing::Recorder, types::TransactionStatus, Query};

    use super::*;

    fn client(recorder: Recorder) -> Client<Recorder> {
        Client::with_transport("secret", ClientConfig::default(), recorder).unwrap()
    }

    #[tokio::test]
    async fn returns_body_unchanged() {
        let client = client(Recorder::replying(200, r#"{"status":"success","data":{"psys_cid":"BTC"}}"#));
        let value = client.balance(Some(Currency::Btc)).await.unwrap();
        assert_eq!(value["data"]["psys_cid"], "BTC");

        let sent = client.transport().last().unwrap();
        assert_eq!(sent.url.as_str(), "https://plisio.net/api/v1/balance");
        assert_eq!(sent.query.as_deref(), Some("psys_cid=BTC&api_key=secret"));
    }

    #[tokio::test]
    async fn invoice_with_required_fields() {
        let client = client(Recorder::replying(200, r#"{"status":"success","data":{}}"#));
        let request = InvoiceRequest::new("Order", Currency::Btc, Decimal::new(5, 1));
        let order_number = request.order_number.clone();
        client.invoice(&request).await.unwrap();

        let sent = client.transport().last().unwrap();
        let url = sent.full_url();
        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(
            keys,
            vec!["order_name", "currency", "amount", "order_number", "language", "api_key"]
        );
        assert!(url.query_pairs().all(|(_, v)| !v.is_empty() && v != "null"));
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "order_number" && v == order_number));
    }

    #[tokio::test]
    async fn api_errors_surface() {
        let client = client(Recorder::replying(
            422,
            r#"{"status":"error","data":{"code":105,"name":"invalid_params","message":"Invalid currency"}}"#,
        ));
        let err = client
            .transactions(&TransactionsQuery::default().with_status(TransactionStatus::Completed))
            .await
            .unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!((api.status, api.code), (422, 105));
        assert_eq!(client.transport().count(), 1);
    }

    #[tokio::test]
    async fn per_call_timeout_reaches_transport() {
        let client = client(Recorder::replying(200, "{}"));
        let query = TransactionsQuery::default().with_timeout(std::time::Duration::from_secs(2));
        client.transactions(&query).await.unwrap();
        let sent = client.transport().last().unwrap();
        assert_eq!(sent.timeout, std::time::Duration::from_secs(2));
        assert_eq!(sent.query.as_deref(), Some("api_key=secret"));
    }

    #[tokio::test]
    async fn raw_post_request_sends_body() {
        let client = client(Recorder::replying(200, "{}"));
        client
            .request(HttpMethod::Post, "/custom/", Params::new().with("a", 1), false)
            .await
            .unwrap();
        let sent = client.transport().last().unwrap();
        assert_eq!(sent.url.path(), "/api/v1/custom");
        assert_eq!(sent.body, Some(serde_json::json!({"a": 1, "api_key": "secret"})));
    }

    #[test]
    fn display_names_the_endpoint_root() {
        let client = client(Recorder::replying(200, "{}"));
        assert_eq!(client.to_string(), "<Client: https://plisio.net/api/v1>");
    }
}
