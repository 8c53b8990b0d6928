// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::api::TransportError;

/// A request payload or argument was rejected before anything was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Pre-flight validation failed; no request was made.
    Validation,
    /// No response was received (connect failure, timeout).
    Transport,
    /// 5xx response.
    Server,
    /// 4xx response.
    Client,
    Unexpected,
}

/// What actually went wrong underneath an [`ApplicationError`].
#[derive(Debug, Error)]
pub enum ErrorCause {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The one failure shape handed to stores and the CLI.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApplicationError {
    message: String,
    kind: ErrorKind,
    status_code: Option<u16>,
    #[source]
    original: Option<ErrorCause>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiErrorReport {
    pub message: String,
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(rename = "originalError", skip_serializing_if = "Option::is_none")]
    pub original_error: Option<String>,
    pub timestamp: String,
}

impl ApplicationError {
    fn build(
        message: String,
        kind: ErrorKind,
        status_code: Option<u16>,
        original: Option<ErrorCause>,
    ) -> Self {
        Self {
            message,
            kind,
            status_code,
            original,
            timestamp: Utc::now(),
        }
    }

    pub fn validation(error: ValidationError) -> Self {
        Self::build(
            error.message().to_string(),
            ErrorKind::Validation,
            None,
            Some(error.into()),
        )
    }

    pub fn transport(error: TransportError) -> Self {
        Self::build(
            error.to_string(),
            ErrorKind::Transport,
            None,
            Some(error.into()),
        )
    }

    /// Non-2xx response. The body text becomes the message when present.
    pub fn status(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            format!("request failed with status {status}")
        } else {
            body.trim().to_string()
        };
        let kind = if (500..600).contains(&status) {
            ErrorKind::Server
        } else if (400..500).contains(&status) {
            ErrorKind::Client
        } else {
            ErrorKind::Unexpected
        };
        Self::build(
            message,
            kind,
            Some(status),
            Some(ErrorCause::Status { status, body }),
        )
    }

    pub fn decode(status: u16, error: serde_json::Error) -> Self {
        Self::build(
            format!("invalid response body: {error}"),
            ErrorKind::Unexpected,
            Some(status),
            Some(error.into()),
        )
    }

    pub fn unexpected(error: anyhow::Error) -> Self {
        Self::build(
            format!("unexpected error: {error}"),
            ErrorKind::Unexpected,
            None,
            Some(error.into()),
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn original_error(&self) -> Option<&ErrorCause> {
        self.original.as_ref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn to_report(&self) -> ApiErrorReport {
        ApiErrorReport {
            message: self.message.clone(),
            status_code: self.status_code,
            original_error: self.original.as_ref().map(|e| e.to_string()),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(error: ValidationError) -> Self {
        Self::validation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_prefer_body_text() {
        let e = ApplicationError::status(400, r#"{"error":"name is required"}"#.into());
        assert_eq!(e.message(), r#"{"error":"name is required"}"#);
        assert_eq!(e.status_code(), Some(400));
        assert_eq!(e.kind(), ErrorKind::Client);

        let e = ApplicationError::status(502, String::new());
        assert_eq!(e.message(), "request failed with status 502");
        assert_eq!(e.kind(), ErrorKind::Server);
    }

    #[test]
    fn validation_errors_have_no_status() {
        let e = ApplicationError::from(ValidationError::new("amount must be greater than 0"));
        assert!(e.is_validation());
        assert_eq!(e.status_code(), None);
        let report = e.to_report();
        assert_eq!(report.message, "amount must be greater than 0");
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("statusCode").is_none());
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}
