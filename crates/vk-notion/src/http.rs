//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and Notion error-body classification so the
//! store methods stay focused on request construction and response mapping.

use serde::de::DeserializeOwned;
use vk_core::StoreError;

/// Error object returned by the Notion API on failure.
#[derive(Debug, Default, serde::Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`StoreError::RateLimited`] with
///   `Retry-After` parsing (falls back to 60 s).
/// - **Non-success status** → classified from the status and the Notion
///   error `code`, see [`classify`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(StoreError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(classify(status, &body));
    }
    Ok(resp)
}

/// Read the body of a successful response and decode it as `T`.
///
/// A body that does not fit `T` is a schema mismatch, not a transport error.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, StoreError> {
    let body = resp.text().await.map_err(StoreError::network)?;
    serde_json::from_str(&body)
        .map_err(|error| StoreError::SchemaMismatch(format!("unexpected response shape: {error}")))
}

/// Map a failed response onto a [`StoreError`].
fn classify(status: u16, body: &str) -> StoreError {
    let parsed = serde_json::from_str::<NotionErrorBody>(body).unwrap_or_default();
    let message = if parsed.message.is_empty() {
        body.to_string()
    } else {
        parsed.message
    };

    match (status, parsed.code.as_str()) {
        (401, _) | (_, "unauthorized" | "restricted_resource") => StoreError::Auth(message),
        (404, _) | (_, "object_not_found") => StoreError::NotFound(message),
        (_, "validation_error") => StoreError::SchemaMismatch(message),
        _ => StoreError::Api { status, message },
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
