//! The suspending "send a request, get a response" capability.

use std::future::Future;

use crate::{
    config::{ClientConfig, USER_AGENT},
    request::HttpRequest,
    response::HttpResponse,
    Error,
};

/// Sends one prepared request and reads the whole response.
///
/// Implementations only move bytes; status handling and JSON parsing stay in
/// the client so every transport behaves the same.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, Error>> + Send;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
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
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
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

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to reach Plisio: {}", e);
            Error::Transport(e)
        })?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_proxy_is_a_transport_error() {
        let config = ClientConfig::default().with_proxy("http://[::1");
        assert!(matches!(ReqwestTransport::new(&config), Err(Error::Transport(_))));
    }

    #[test]
    fn builds_with_a_valid_proxy() {
        let config = ClientConfig::default().with_proxy("http://127.0.0.1:8080");
        assert!(ReqwestTransport::new(&config).is_ok());
    }
}
