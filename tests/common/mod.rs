// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kakeibo::api::{
    ApiClient, ApiRequest, ApiResponse, RetryPolicy, Sleeper, Transport, TransportError,
};
use kakeibo::models::{Category, CreateTransactionRequest, EntryType, Transaction};
use serde_json::json;
use tokio::sync::Notify;

/// Replays queued outcomes in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
    gate: Option<Arc<Notify>>,
    hold_first_only: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send waits for the gate to be opened before replying.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    /// Only the first send waits for the gate; later sends reply at once.
    pub fn hold_first(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            hold_first_only: true,
            ..Self::default()
        }
    }

    pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.push(Ok(ApiResponse::new(status, body.to_string())))
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(ApiResponse::new(status, body)))
    }

    pub fn fail(self, message: &str) -> Self {
        self.push(Err(TransportError::new(message)))
    }

    fn push(self, outcome: Result<ApiResponse, TransportError>) -> Self {
        self.replies.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        // Replies are bound in arrival order, not release order.
        let seen = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };
        let outcome = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted reply left")));
        if let Some(gate) = &self.gate {
            if !self.hold_first_only || seen == 1 {
                gate.notified().await;
            }
        }
        outcome
    }
}

/// Records requested delays instead of sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub sleeper: Arc<RecordingSleeper>,
    pub api: Arc<ApiClient>,
}

pub fn harness(transport: ScriptedTransport) -> Harness {
    let transport = Arc::new(transport);
    let sleeper = Arc::new(RecordingSleeper::default());
    let api = ApiClient::new(transport.clone(), RetryPolicy::default())
        .with_sleeper(sleeper.clone());
    Harness {
        transport,
        sleeper,
        api: Arc::new(api),
    }
}

pub fn salary_category() -> Category {
    Category {
        id: 1,
        name: "給与".into(),
        r#type: EntryType::Income,
        color: "#4CAF50".into(),
        created_at: Some("2024-01-15T00:00:00Z".into()),
        updated_at: Some("2024-01-15T00:00:00Z".into()),
    }
}

pub fn food_category() -> Category {
    Category {
        id: 2,
        name: "食費".into(),
        r#type: EntryType::Expense,
        color: "#F44336".into(),
        created_at: None,
        updated_at: None,
    }
}

pub fn salary(id: i64) -> Transaction {
    Transaction {
        id,
        r#type: EntryType::Income,
        amount: 50000,
        category_id: 1,
        category: Some(salary_category()),
        transaction_date: "2024-01-15".into(),
        memo: "給与".into(),
        created_at: "2024-01-15T00:00:00Z".into(),
        updated_at: "2024-01-15T00:00:00Z".into(),
    }
}

pub fn lunch(id: i64) -> Transaction {
    Transaction {
        id,
        r#type: EntryType::Expense,
        amount: 1200,
        category_id: 2,
        category: Some(food_category()),
        transaction_date: "2024-02-16T12:00:00Z".into(),
        memo: "ランチ".into(),
        created_at: "2024-02-16T12:00:00Z".into(),
        updated_at: "2024-02-16T12:00:00Z".into(),
    }
}

pub fn salary_request() -> CreateTransactionRequest {
    CreateTransactionRequest {
        r#type: EntryType::Income,
        amount: 50000,
        category_id: 1,
        transaction_date: "2024-01-15".into(),
        memo: Some("給与".into()),
    }
}

pub fn to_json<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

pub fn server_error() -> serde_json::Value {
    json!({"error": "database unavailable"})
}
