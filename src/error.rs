//! Errors raised while talking to the HRM backend.
//!
//! The backend reports rejections as JSON in a few shapes: a `detail`
//! string, per-field arrays of messages, a `non_field_errors` array, or
//! a bare `error`/`message` string. [`ErrorBody`] reads all of them and
//! [`ApiError::describe`] picks the most specific one for display.

use serde_json::{Map, Value};

pub const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Rejected { status: u16, body: ErrorBody },

    #[error("invalid endpoint url: {0}")]
    Url(String),
}

/// Parsed error payload. Non-JSON or non-object bodies parse to an empty map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBody(Map<String, Value>);

impl ErrorBody {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        self.text("detail")
    }

    /// First message listed under `name`. A plain string is accepted too.
    pub fn field(&self, name: &str) -> Option<&str> {
        let msg = match self.0.get(name)? {
            Value::Array(items) => items.iter().find_map(|v| v.as_str()),
            Value::String(s) => Some(s.as_str()),
            _ => None,
        };
        msg.filter(|s| !s.trim().is_empty())
    }

    pub fn non_field(&self) -> Option<&str> {
        self.field(NON_FIELD_ERRORS)
    }

    /// `{"error": ..}` / `{"message": ..}` as sent for missing resources.
    pub fn plain(&self) -> Option<&str> {
        self.text("error").or_else(|| self.text("message"))
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Url(_) => None,
        }
    }

    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Most specific human message for a toast.
    ///
    /// For rejections: `detail`, then the first message of each name in
    /// `fields` (in order), then `non_field_errors`, then `error`/`message`,
    /// then `fallback`. Transport failures describe themselves.
    pub fn describe(&self, fields: &[&str], fallback: &str) -> String {
        let body = match self {
            ApiError::Rejected { body, .. } => body,
            other => {
                let msg = other.to_string();
                return if msg.trim().is_empty() {
                    fallback.to_string()
                } else {
                    msg
                };
            }
        };

        body.detail()
            .or_else(|| fields.iter().find_map(|f| body.field(f)))
            .or_else(|| body.non_field())
            .or_else(|| body.plain())
            .unwrap_or(fallback)
            .to_string()
    }
}
