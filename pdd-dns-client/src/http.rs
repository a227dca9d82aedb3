//! 通用 HTTP 处理流程
//!
//! Request execution and response validation shared by every API method.
//! The PDD API wraps each payload in a `success`/`error` envelope; the
//! validation order is HTTP status, JSON well-formedness, envelope status,
//! then payload shape.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{PddError, Result};

/// Status/error envelope present on every PDD response.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    success: String,
    #[serde(default)]
    error: Option<String>,
}

/// Maximum number of response-body bytes echoed into debug logs.
const BODY_LOG_LIMIT: usize = 512;

/// Sends a prepared request and returns `(status, body)`.
///
/// Send failures and timeouts map to [`PddError::Transport`]. There is no
/// retry layer: one call is one HTTP exchange.
pub(crate) async fn execute_request(
    request: RequestBuilder,
    method: &str,
) -> Result<(u16, String)> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            PddError::transport(format!("request timed out: {e}"))
        } else {
            PddError::transport(e)
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("[pdd] {method}: HTTP {status}");

    let body = response
        .text()
        .await
        .map_err(|e| PddError::transport(format!("failed to read response body: {e}")))?;

    log::debug!("[pdd] {method} response: {}", body_for_log(&body));

    Ok((status, body))
}

/// Validates a PDD response and deserializes the operation payload.
///
/// * non-200 status → [`PddError::Transport`]
/// * body not JSON → [`PddError::Parse`]
/// * `success == "error"` → [`PddError::Api`] carrying the vendor message
/// * `success` neither `"ok"` nor `"error"` → [`PddError::Api`]
/// * payload does not deserialize as `T` → [`PddError::Parse`]
pub(crate) fn parse_response<T>(status: u16, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    if status != 200 {
        return Err(PddError::transport(format!(
            "request failed with status code {status}"
        )));
    }

    let envelope: ApiEnvelope = serde_json::from_str(body).map_err(PddError::parse)?;

    match envelope.success.as_str() {
        "ok" => {}
        "error" => {
            let message = envelope
                .error
                .unwrap_or_else(|| "no error detail supplied".to_string());
            return Err(PddError::api(message));
        }
        other => {
            return Err(PddError::api(format!("unknown request status: {other}")));
        }
    }

    serde_json::from_str(body).map_err(PddError::parse)
}

/// Clips a response body for logging, keeping char boundaries intact.
fn body_for_log(body: &str) -> String {
    if body.len() <= BODY_LOG_LIMIT {
        return body.to_string();
    }
    let mut end = BODY_LOG_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{} …({} bytes)", &body[..end], body.len())
}
