// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client for the household-finance REST backend.
//!
//! Every call goes validate → send → retry (reads only) → normalize, so
//! callers only ever see [`ApplicationError`].

mod resources;
mod retry;
mod transport;
pub mod validate;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ApplicationError;

pub use resources::{BudgetApi, CategoryApi, SummaryApi, TransactionApi};
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};
pub use transport::{
    ApiRequest, ApiResponse, Method, ReqwestTransport, RequestKind, Transport, TransportError,
};

pub struct ApiClient {
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, retry: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper: Arc::new(TokioSleeper),
            retry,
        }
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Build a client that talks HTTP to `config.api_url`.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let transport = ReqwestTransport::new(&config.api_url, config.timeout)?;
        Ok(Self::new(Arc::new(transport), config.retry))
    }

    pub fn transactions(&self) -> TransactionApi<'_> {
        TransactionApi::new(self)
    }

    pub fn categories(&self) -> CategoryApi<'_> {
        CategoryApi::new(self)
    }

    pub fn budgets(&self) -> BudgetApi<'_> {
        BudgetApi::new(self)
    }

    pub fn summary(&self) -> SummaryApi<'_> {
        SummaryApi::new(self)
    }

    /// Send and decode a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ApplicationError> {
        let response = self.dispatch(&request).await?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApplicationError::decode(response.status, e))
    }

    /// Send, ignoring whatever body comes back.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<(), ApplicationError> {
        self.dispatch(&request).await.map(|_| ())
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, ApplicationError> {
        let mut retries = 0;
        loop {
            debug!(method = %request.method, path = %request.path, retries, "dispatching request");
            let outcome = self.transport.send(request).await;
            if matches!(&outcome, Ok(response) if response.is_success()) {
                return outcome.map_err(ApplicationError::transport);
            }
            if request.kind.is_retryable() && self.retry.should_retry(retries, &outcome) {
                retries += 1;
                let delay = self.retry.delay_for(retries);
                warn!(
                    method = %request.method,
                    path = %request.path,
                    retry = retries,
                    delay_ms = delay.as_millis() as u64,
                    reason = %failure_reason(&outcome),
                    "request failed, retrying"
                );
                self.sleeper.sleep(delay).await;
                continue;
            }
            return Err(match outcome {
                Ok(response) => ApplicationError::status(response.status, response.body),
                Err(e) => ApplicationError::transport(e),
            });
        }
    }
}

fn failure_reason(outcome: &Result<ApiResponse, TransportError>) -> String {
    match outcome {
        Ok(response) => format!("status {}", response.status),
        Err(e) if e.is_timeout() => format!("timed out: {e}"),
        Err(e) => e.to_string(),
    }
}
