// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The HTTP seam. Everything above this module speaks `ApiRequest` /
//! `ApiResponse`; only `ReqwestTransport` knows about reqwest.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

const UA: &str = concat!("kakeibo/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// Whether a request may be re-issued after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Retryable,
    NonRetryable,
}

impl RequestKind {
    pub fn is_retryable(self) -> bool {
        matches!(self, RequestKind::Retryable)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the `/api` prefix, e.g. `/transactions/3`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub kind: RequestKind,
}

impl ApiRequest {
    /// A retryable GET.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
            kind: RequestKind::Retryable,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::mutation(Method::Post, path.into(), Some(body))
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::mutation(Method::Put, path.into(), Some(body))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::mutation(Method::Delete, path.into(), None)
    }

    fn mutation(method: Method, path: String, body: Option<Value>) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body,
            kind: RequestKind::NonRetryable,
        }
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    timed_out: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.timed_out
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one attempt. Any HTTP status counts as a response; only a
    /// missing response is an `Err`.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: Client,
    api_root: Url,
}

impl ReqwestTransport {
    /// `base_url` is the server origin; requests go to `{base_url}/api{path}`.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).user_agent(UA).build()?;
        Ok(Self {
            client,
            api_root: api_root(base_url),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_root.as_str().trim_end_matches('/'), path)
    }
}

fn api_root(base_url: &Url) -> Url {
    let mut root = base_url.clone();
    let path = format!("{}/api", base_url.path().trim_end_matches('/'));
    root.set_path(&path);
    root.set_query(None);
    root.set_fragment(None);
    root
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path);
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        let mut builder = builder.query(&request.query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;
        Ok(ApiResponse { status, body })
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else {
        TransportError::new(error.to_string())
    }
}
