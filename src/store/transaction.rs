// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use chrono::Datelike;

use super::{StoreCore, StoreState};
use crate::api::ApiClient;
use crate::error::ApplicationError;
use crate::models::{CreateTransactionRequest, Transaction};
use crate::utils::calendar_date;

pub struct TransactionStore {
    api: Arc<ApiClient>,
    core: StoreCore<Transaction>,
}

impl TransactionStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            core: StoreCore::new("transaction"),
        }
    }

    pub fn state(&self) -> StoreState<Transaction> {
        self.core.snapshot()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.core.items()
    }

    pub fn is_loading(&self) -> bool {
        self.core.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.core.error()
    }

    /// Seed the cache without a round-trip.
    pub fn set_transactions(&self, items: Vec<Transaction>) {
        self.core.set_items(items);
    }

    /// Reload from the server. Failures only land in `error`; the cached
    /// list is left as it was.
    pub async fn fetch_transactions(&self) {
        let (_loading, seq) = self.core.begin_fetch();
        match self.api.transactions().get_all().await {
            Ok(items) => {
                self.core.apply_fetch(seq, items);
            }
            Err(e) => {
                self.core.apply_fetch_error(seq, "Failed to fetch transactions", &e);
            }
        }
    }

    pub async fn create_transaction(
        &self,
        data: &CreateTransactionRequest,
    ) -> Result<Transaction, ApplicationError> {
        let _loading = self.core.begin();
        match self.api.transactions().create(data).await {
            Ok(created) => {
                self.core.prepend(created.clone());
                Ok(created)
            }
            Err(e) => {
                self.core.record_error("Failed to create transaction", &e);
                Err(e)
            }
        }
    }

    pub async fn update_transaction(
        &self,
        id: i64,
        data: &CreateTransactionRequest,
    ) -> Result<Transaction, ApplicationError> {
        let _loading = self.core.begin();
        match self.api.transactions().update(id, data).await {
            Ok(updated) => {
                self.core.replace(id, updated.clone());
                Ok(updated)
            }
            Err(e) => {
                self.core.record_error("Failed to update transaction", &e);
                Err(e)
            }
        }
    }

    pub async fn delete_transaction(&self, id: i64) -> Result<(), ApplicationError> {
        let _loading = self.core.begin();
        match self.api.transactions().delete(id).await {
            Ok(()) => {
                self.core.remove(id);
                Ok(())
            }
            Err(e) => {
                self.core.record_error("Failed to delete transaction", &e);
                Err(e)
            }
        }
    }

    /// Cached transactions dated in the given calendar month.
    pub fn transactions_for_month(&self, year: i32, month: u32) -> Vec<Transaction> {
        self.core
            .items()
            .into_iter()
            .filter(|t| {
                calendar_date(&t.transaction_date)
                    .is_some_and(|d| d.year() == year && d.month() == month)
            })
            .collect()
    }
}
