//! Error types for the API client.

use serde_json::Value;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The service answered with a status outside `200..300`.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A success status arrived with a body that is not JSON.
    #[error("Request failed: {message}")]
    Request { message: String },
    /// The HTTP transport failed before a response was read (connect, TLS, timeout).
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The client settings cannot address an endpoint.
    #[error("Invalid client configuration: {message}")]
    Config { message: String },
}

impl Error {
    /// True for failures where no well-formed JSON response was obtained.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Error::Request { .. } | Error::Transport(_))
    }

    /// The structured API error, if the service reported one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Error reported by Plisio with a non-2xx status.
///
/// Plisio describes failures as `{"status": "error", "data": {"code", "name", "message"}}`.
/// When the body is not JSON, `code` is `0`, `name` is empty and `message`
/// quotes the raw body.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("APIError(code={code}, name={name}): {message}")]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: u16,
    /// Plisio error code from `data.code`.
    pub code: i64,
    /// Short error name from `data.name`.
    pub name: String,
    /// Human-readable message from `data.message`.
    pub message: String,
    /// Raw response text.
    pub body: String,
}

impl ApiError {
    /// Extracts the error fields from a failed response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let Ok(json) = serde_json::from_str::<Value>(body) else {
            return Self {
                status,
                code: 0,
                name: String::new(),
                message: format!("Invalid JSON error message from Plisio: {}", body),
                body: body.to_string(),
            };
        };

        let data = &json["data"];
        // Some endpoints send the code as a string.
        let code = match &data["code"] {
            Value::Number(n) => n.as_i64().unwrap_or(0),
            Value::String(s) => s.parse().unwrap_or(0),
            _ => 0,
        };
        Self {
            status,
            code,
            name: data["name"].as_str().unwrap_or_default().to_string(),
            message: data["message"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string()),
            body: body.to_string(),
        }
    }
}
