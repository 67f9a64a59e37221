//! Construction-time client settings.

use std::time::Duration;

use crate::request::RequestOverrides;

/// Production API root.
pub const BASE_URL: &str = "https://plisio.net/api";

/// The only API version Plisio serves.
pub const API_VERSION_V1: &str = "v1";

/// Sent as `User-Agent` on every request.
pub const USER_AGENT: &str = concat!("plisio_api/", env!("CARGO_PKG_VERSION"));

/// Settings shared by [`Client`](crate::Client) and `BlockingClient`.
///
/// Proxy and TLS settings configure the underlying HTTP client; `overrides`
/// are layered onto every request the client sends.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API root, without the version segment. Defaults to [`BASE_URL`].
    pub base_url: String,
    /// Version segment inserted between the root and endpoint paths.
    pub api_version: String,
    /// Proxy URL for all traffic, e.g. `http://127.0.0.1:8080`.
    pub proxy: Option<String>,
    /// Skip TLS certificate verification. Only for local testing.
    pub accept_invalid_certs: bool,
    /// Headers and timeout applied to every call.
    pub overrides: RequestOverrides,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_version: API_VERSION_V1.to_string(),
            proxy: None,
            accept_invalid_certs: false,
            overrides: RequestOverrides::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    pub fn with_proxy(mut self, proxy: &str) -> Self {
        self.proxy = Some(proxy.to_string());
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Replaces the per-request timeout for every call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.overrides.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.overrides = self.overrides.with_header(name, value);
        self
    }

    pub fn with_overrides(mut self, overrides: RequestOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://plisio.net/api");
        assert_eq!(config.api_version, "v1");
        assert!(config.overrides.is_empty());
        assert!(USER_AGENT.starts_with("plisio_api/"));
    }

    #[test]
    fn builder_sets_overrides() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(3))
            .with_header("X-Shop", "42")
            .with_proxy("http://127.0.0.1:8080");
        assert_eq!(config.overrides.timeout, Some(Duration::from_secs(3)));
        assert_eq!(
            config.overrides.headers,
            vec![("X-Shop".to_string(), "42".to_string())]
        );
        assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:8080"));
    }
}
