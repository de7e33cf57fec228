//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and for the uniform error
//! path every resource wrapper shares.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Optional compile-time override of the backend base URL, e.g.
/// `ADMIN_API_BASE=https://admin.example.com cargo build`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("ADMIN_API_BASE");

/// Get the base URL for API requests
///
/// Uses the compile-time override when present; otherwise constructs the
/// URL from the current window location, with port 5000 for the backend.
///
/// # Returns
/// - API base URL like "http://localhost:5000" or "https://example.com:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Build a full API URL from a path, e.g.
/// `api_url("/api/products")` -> `"http://localhost:5000/api/products"`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build the error message surfaced to the UI from a failed response.
///
/// Preference order: `message` field of a JSON error body, then the raw
/// body text, then the HTTP status line.
pub fn compose_error_message(status: u16, status_text: &str, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!("HTTP {} {}", status, status_text)
}

/// Read a failed response body and compose the error string.
pub async fn response_error(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    compose_error_message(status, &status_text, &body)
}

/// Parse a JSON success body, or fail with the composed error message.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(response_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Check a bodiless success response, or fail with the composed error.
pub async fn read_ok(response: Response) -> Result<(), String> {
    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_json_message_field() {
        let message = compose_error_message(400, "Bad Request", r#"{"message":"X"}"#);
        assert_eq!(message, "X");
    }

    #[test]
    fn falls_back_to_raw_text() {
        let message = compose_error_message(500, "Internal Server Error", "database exploded");
        assert_eq!(message, "database exploded");
    }

    #[test]
    fn json_without_message_falls_back_to_raw_body() {
        let body = r#"{"error":"nope"}"#;
        let message = compose_error_message(422, "Unprocessable Entity", body);
        assert_eq!(message, body);
    }

    #[test]
    fn empty_body_yields_status_line() {
        let message = compose_error_message(500, "Internal Server Error", "");
        assert_eq!(message, "HTTP 500 Internal Server Error");
    }

    #[test]
    fn blank_json_message_is_ignored() {
        let message = compose_error_message(500, "Internal Server Error", r#"{"message":"  "}"#);
        assert_eq!(message, r#"{"message":"  "}"#);
    }
}
