// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! A single toast slot. Create one at startup and share it; a second
//! notification replaces the first.

use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationOptions {
    pub message: String,
    pub severity: Option<Severity>,
    /// `None` or zero means [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
}

impl NotificationOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    #[serde(rename = "timeout_ms", serialize_with = "as_millis")]
    pub timeout: Duration,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            visible: false,
            message: String::new(),
            severity: Severity::Info,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Default)]
pub struct Notifier {
    state: Mutex<NotificationState>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_notification(&self, options: NotificationOptions) {
        let timeout = options
            .timeout
            .filter(|t| !t.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = NotificationState {
            visible: true,
            message: options.message,
            severity: options.severity.unwrap_or_default(),
            timeout,
        };
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show_notification(NotificationOptions::new(message).severity(Severity::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show_notification(NotificationOptions::new(message).severity(Severity::Error));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show_notification(NotificationOptions::new(message).severity(Severity::Warning));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show_notification(NotificationOptions::new(message).severity(Severity::Info));
    }

    pub fn dismiss(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .visible = false;
    }

    pub fn snapshot(&self) -> NotificationState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
