//! Request building shared by the async and blocking clients.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{params::Params, types::HttpMethod};

/// Per-request timeout applied before any override.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Field the credential is sent under.
pub const API_KEY_FIELD: &str = "api_key";

/// Headers sent with every request.
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// Transport options layered over the defaults, either for every call of a
/// client or for a single call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOverrides {
    /// Extra headers. A header named here replaces one of the same name.
    pub headers: Vec<(String, String)>,
    /// Replaces the request timeout.
    pub timeout: Option<Duration>,
}

impl RequestOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.timeout.is_none()
    }

    /// Layers `other` on top of `self`; values in `other` win.
    pub fn merge(&mut self, other: &RequestOverrides) {
        for (name, value) in &other.headers {
            set_header(&mut self.headers, name.clone(), value.clone());
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
    {
        Some(entry) => *entry = (name, value),
        None => headers.push((name, value)),
    }
}

/// A fully prepared request, independent of the transport that sends it.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Target URL without the query string.
    pub url: Url,
    /// Rendered query string, set for reads and forced-query calls.
    pub query: Option<String>,
    /// JSON object body, set for writes.
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl HttpRequest {
    /// The target URL with the query string attached.
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if let Some(query) = &self.query {
            url.set_query(Some(query));
        }
        url
    }
}

/// Merges arguments, credential and overrides into a request descriptor.
///
/// Construction-time `defaults` are layered over the fixed timeout and JSON
/// headers; per-call overrides carried by `params` are layered last and never
/// reach the wire as data. The credential is always injected. GET requests
/// and `force_query` calls send their data as a query string, everything else
/// as a JSON body.
pub fn build_request(
    method: HttpMethod,
    url: Url,
    mut params: Params,
    force_query: bool,
    api_key: &str,
    defaults: &RequestOverrides,
) -> HttpRequest {
    let mut options = RequestOverrides {
        headers: DEFAULT_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        timeout: Some(REQUEST_TIMEOUT),
    };
    options.merge(defaults);

    params.insert(API_KEY_FIELD, api_key);

    if let Some(per_call) = params.take_overrides() {
        options.merge(&per_call);
    }

    let (query, body) = if method.is_read() || force_query {
        (Some(params.to_query_string()), None)
    } else {
        (None, Some(params.to_json()))
    };

    HttpRequest {
        method,
        url,
        query,
        body,
        headers: options.headers,
        timeout: options.timeout.unwrap_or(REQUEST_TIMEOUT),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn url() -> Url {
        Url::parse("https://plisio.net/api/v1/operations").unwrap()
    }

    #[test]
    fn get_moves_data_into_query() {
        let params = Params::new().with("currency", "BTC");
        let req = build_request(
            HttpMethod::Get,
            url(),
            params,
            false,
            "secret",
            &RequestOverrides::default(),
        );
        assert_eq!(req.query.as_deref(), Some("currency=BTC&api_key=secret"));
        assert!(req.body.is_none());
        assert_eq!(req.timeout, REQUEST_TIMEOUT);
        assert_eq!(
            req.full_url().as_str(),
            "https://plisio.net/api/v1/operations?currency=BTC&api_key=secret"
        );
    }

    #[test]
    fn post_keeps_body_unless_forced() {
        let params = Params::new().with("to", json!(["a", "b"]));
        let req = build_request(
            HttpMethod::Post,
            url(),
            params.clone(),
            false,
            "k",
            &RequestOverrides::default(),
        );
        assert!(req.query.is_none());
        assert_eq!(req.body, Some(json!({"to": ["a", "b"], "api_key": "k"})));

        let forced = build_request(
            HttpMethod::Post,
            url(),
            params,
            true,
            "k",
            &RequestOverrides::default(),
        );
        assert_eq!(forced.query.as_deref(), Some("to=a,b&api_key=k"));
        assert!(forced.body.is_none());
    }

    #[test]
    fn credential_is_injected_into_empty_data() {
        let req = build_request(
            HttpMethod::Get,
            url(),
            Params::new(),
            false,
            "k",
            &RequestOverrides::default(),
        );
        assert_eq!(req.query.as_deref(), Some("api_key=k"));
    }

    #[test]
    fn caller_cannot_replace_the_credential() {
        let params = Params::new().with(API_KEY_FIELD, "spoofed");
        let req = build_request(
            HttpMethod::Get,
            url(),
            params,
            false,
            "real",
            &RequestOverrides::default(),
        );
        assert_eq!(req.query.as_deref(), Some("api_key=real"));
    }

    #[test]
    fn overrides_layer_in_order() {
        let defaults = RequestOverrides::new()
            .with_header("X-Trace", "client")
            .with_timeout(Duration::from_secs(30));
        let per_call = RequestOverrides::new()
            .with_header("x-trace", "call")
            .with_timeout(Duration::from_secs(5));
        let params = Params::new().with("id", "abc").with_overrides(per_call);

        let req = build_request(HttpMethod::Get, url(), params, true, "k", &defaults);

        assert_eq!(req.timeout, Duration::from_secs(5));
        assert!(req
            .headers
            .contains(&("x-trace".to_string(), "call".to_string())));
        assert_eq!(
            req.headers
                .iter()
                .filter(|(n, _)| n.eq_ignore_ascii_case("x-trace"))
                .count(),
            1
        );
        assert!(req
            .headers
            .contains(&("Accept".to_string(), "application/json".to_string())));
        assert_eq!(req.query.as_deref(), Some("id=abc&api_key=k"));
    }

    #[test]
    fn construction_defaults_apply_without_per_call() {
        let defaults = RequestOverrides::new().with_timeout(Duration::from_secs(30));
        let req = build_request(HttpMethod::Get, url(), Params::new(), false, "k", &defaults);
        assert_eq!(req.timeout, Duration::from_secs(30));
        assert_eq!(req.headers.len(), DEFAULT_HEADERS.len());
    }
}
