use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all PDD API operations.
///
/// Variants are serializable for structured error reporting
/// (`#[serde(tag = "code")]` — the variant name lands in a `code` field).
///
/// None of these are retried: each operation is a single HTTP exchange and
/// every failure is surfaced to the immediate caller.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum PddError {
    /// The HTTP exchange failed: the request could not be sent, timed out,
    /// or came back with a non-200 status.
    #[error("transport error: {detail}")]
    Transport {
        /// Error details.
        detail: String,
    },

    /// The response body is not valid JSON, or its shape does not match
    /// the operation payload.
    #[error("malformed api response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The vendor reported a failure (`success == "error"`), or an
    /// unrecognized request status.
    #[error("api request failed: {message}")]
    Api {
        /// Vendor-supplied error message.
        message: String,
    },

    /// No usable access token could be resolved at setup time.
    ///
    /// Raised before any request is attempted.
    #[error("configuration error: {detail}")]
    Configuration {
        /// What is missing.
        detail: String,
    },
}

impl PddError {
    pub(crate) fn transport(detail: impl ToString) -> Self {
        Self::Transport {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn parse(detail: impl ToString) -> Self {
        Self::Parse {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn api(message: impl ToString) -> Self {
        Self::Api {
            message: message.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, PddError>`.
pub type Result<T> = std::result::Result<T, PddError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_transport() {
        let e = PddError::transport("connection refused");
        assert_eq!(e.to_string(), "transport error: connection refused");
    }

    #[test]
    fn display_parse() {
        let e = PddError::parse("expected value at line 1 column 1");
        assert_eq!(
            e.to_string(),
            "malformed api response: expected value at line 1 column 1"
        );
    }

    #[test]
    fn display_api() {
        let e = PddError::api("no_auth");
        assert_eq!(e.to_string(), "api request failed: no_auth");
    }

    #[test]
    fn display_configuration() {
        let e = PddError::Configuration {
            detail: "no access token".to_string(),
        };
        assert_eq!(e.to_string(), "configuration error: no access token");
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = PddError::api("record_not_found");
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Api\""));
        assert!(json.contains("\"message\":\"record_not_found\""));
    }

    #[test]
    fn deserialize_round_trip() {
        let variants = vec![
            PddError::transport("d"),
            PddError::parse("d"),
            PddError::api("m"),
            PddError::Configuration {
                detail: "d".to_string(),
            },
        ];
        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: PddError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
