//! Response normalization shared by both clients.

use serde_json::Value;

use crate::{errors::ApiError, Error};

/// A completed HTTP exchange as seen by the response normalizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Checks the status, parses the body and returns the JSON unchanged.
pub fn handle_response(response: &HttpResponse) -> Result<Value, Error> {
    let HttpResponse { status, body } = response;

    if !(200..300).contains(status) {
        tracing::error!(
            "Plisio request failed with status {}: {}",
            status,
            truncate_body(body)
        );
        return Err(ApiError::from_response(*status, body).into());
    }

    serde_json::from_str::<Value>(body).map_err(|e| {
        tracing::error!("Failed to parse Plisio response: {} | body: {}", e, truncate_body(body));
        Error::Request {
            message: format!("Invalid JSON response: {}", body),
        }
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_body_is_returned_unchanged() {
        let body = r#"{"status":"success","data":{"id":"abc"}}"#;
        let value = handle_response(&HttpResponse::new(201, body)).unwrap();
        assert_eq!(value, json!({"status": "success", "data": {"id": "abc"}}));
    }

    #[test]
    fn error_status_yields_api_error() {
        let body = r#"{"status":"error","data":{"code":400,"name":"bad_request","message":"invalid currency"}}"#;
        let err = handle_response(&HttpResponse::new(400, body)).unwrap_err();
        let api = err.api_error().expect("api error");
        assert_eq!(api.code, 400);
        assert_eq!(api.name, "bad_request");
        assert_eq!(api.message, "invalid currency");
        assert_eq!(api.status, 400);
    }

    #[test]
    fn non_json_success_yields_request_error() {
        let err = handle_response(&HttpResponse::new(200, "not json")).unwrap_err();
        assert!(err.is_request_error());
        assert!(err.to_string().contains("not json"));
    }

    #[test]
    fn status_boundaries() {
        assert!(handle_response(&HttpResponse::new(299, "{}")).is_ok());
        assert!(handle_response(&HttpResponse::new(300, "{}")).is_err());
        assert!(handle_response(&HttpResponse::new(199, "{}")).is_err());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(1500);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("...[truncated]"));
        assert_eq!(truncate_body("short"), "short");
    }
}
