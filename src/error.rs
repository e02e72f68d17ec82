//! Error handling for the Autocare Rust client

use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Unified error type for the Autocare Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Non-2xx response from the backend, with the parsed error envelope
    #[error("API error: {} (Status: {status})", body.human_message(*status))]
    Api { status: StatusCode, body: ApiErrorBody },

    /// Client-local validation failure, reported before any network call
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// The HTTP status of the failing response, if this is an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Whether the backend denied the operation for the current user
    pub fn is_permission(&self) -> bool {
        self.status() == Some(StatusCode::FORBIDDEN)
    }

    /// Whether the backend rejected the operation as a duplicate
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT)
    }

    /// A user-presentable message for this error
    pub fn human_message(&self) -> String {
        match self {
            Error::Api { status, body } => body.human_message(*status),
            other => other.to_string(),
        }
    }
}

/// A `message` field that the backend sends as either one string or a list
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// An entry of the backend's `errors` array, either structured or bare
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ErrorEntry {
    Structured { message: String },
    Plain(String),
}

impl ErrorEntry {
    fn message(&self) -> &str {
        match self {
            ErrorEntry::Structured { message } => message,
            ErrorEntry::Plain(message) => message,
        }
    }
}

/// Error envelope sent by the backend on non-2xx responses.
///
/// The fields are all optional and overlapping; `human_message` applies the
/// backend's precedence order to pick one user-facing string.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApiErrorBody {
    pub message: Option<OneOrMany>,
    pub error: Option<Vec<String>>,
    pub errors: Option<Vec<ErrorEntry>>,
    /// Raw body text kept when the envelope could not be parsed
    #[serde(skip)]
    pub raw: Option<String>,
}

impl ApiErrorBody {
    /// Wrap an unparseable response body so its text is not lost
    pub fn from_raw(text: String) -> Self {
        ApiErrorBody {
            raw: Some(text),
            ..ApiErrorBody::default()
        }
    }

    /// Extract a human-readable message, in the backend's precedence order:
    /// `message` array joined with ", ", then `message` string, then the
    /// `error` array, then the `errors` array, then a fallback keyed on the
    /// HTTP status, then the raw body text.
    pub fn human_message(&self, status: StatusCode) -> String {
        match &self.message {
            Some(OneOrMany::Many(msgs)) if !msgs.is_empty() => return msgs.join(", "),
            Some(OneOrMany::One(msg)) if !msg.is_empty() => return msg.clone(),
            _ => {}
        }
        if let Some(errs) = &self.error {
            if !errs.is_empty() {
                return errs.join(", ");
            }
        }
        if let Some(errs) = &self.errors {
            if !errs.is_empty() {
                return errs
                    .iter()
                    .map(|e| e.message().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
            }
        }
        match status {
            StatusCode::CONFLICT => "A record with these details already exists".to_string(),
            StatusCode::BAD_REQUEST => "Invalid data submitted".to_string(),
            _ => self
                .raw
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> ApiErrorBody {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn message_array_joins_with_comma() {
        let body = parse(json!({ "message": ["name is required", "phone is invalid"] }));
        assert_eq!(
            body.human_message(StatusCode::BAD_REQUEST),
            "name is required, phone is invalid"
        );
    }

    #[test]
    fn message_string_used_verbatim() {
        let body = parse(json!({ "message": "vehicle not found" }));
        assert_eq!(body.human_message(StatusCode::NOT_FOUND), "vehicle not found");
    }

    #[test]
    fn error_array_is_next_fallback() {
        let body = parse(json!({ "error": ["something broke"] }));
        assert_eq!(
            body.human_message(StatusCode::INTERNAL_SERVER_ERROR),
            "something broke"
        );
    }

    #[test]
    fn errors_array_handles_both_entry_shapes() {
        let body = parse(json!({ "errors": [{ "message": "bad code" }, "bad name"] }));
        assert_eq!(body.human_message(StatusCode::BAD_REQUEST), "bad code, bad name");
    }

    #[test]
    fn status_fallbacks_for_conflict_and_bad_request() {
        let body = ApiErrorBody::default();
        assert_eq!(
            body.human_message(StatusCode::CONFLICT),
            "A record with these details already exists"
        );
        assert_eq!(body.human_message(StatusCode::BAD_REQUEST), "Invalid data submitted");
    }

    #[test]
    fn raw_text_preserved_when_envelope_unparseable() {
        let body = ApiErrorBody::from_raw("upstream exploded".to_string());
        assert_eq!(body.human_message(StatusCode::BAD_GATEWAY), "upstream exploded");
    }

    #[test]
    fn classification_helpers() {
        let err = Error::Api {
            status: StatusCode::FORBIDDEN,
            body: ApiErrorBody::default(),
        };
        assert!(err.is_permission());
        assert!(!err.is_not_found());
        assert!(!err.is_conflict());
    }
}
