// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory caches of server collections with loading/error flags.
//!
//! Stores take `&self` so their state can be read while an action is
//! pending. The mutex is only held for short synchronous sections, never
//! across an await.

mod category;
mod transaction;

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::ApplicationError;
use crate::models::{Category, Transaction};

pub use category::CategoryStore;
pub use transaction::TransactionStore;

pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

struct Inner<T> {
    state: StoreState<T>,
    // Bumped on every fetch; a fetch only applies its result if it is
    // still the latest one.
    fetch_seq: u64,
}

pub(crate) struct StoreCore<T> {
    name: &'static str,
    inner: Mutex<Inner<T>>,
}

/// Resets `loading` when dropped, whichever way the action ends.
pub(crate) struct LoadingGuard<'a, T> {
    core: &'a StoreCore<T>,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.core.lock().state.loading = false;
    }
}

impl<T> StoreCore<T> {
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Identified + Clone> StoreCore<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Mutex::new(Inner {
                state: StoreState::default(),
                fetch_seq: 0,
            }),
        }
    }

    pub(crate) fn snapshot(&self) -> StoreState<T> {
        self.lock().state.clone()
    }

    pub(crate) fn items(&self) -> Vec<T> {
        self.lock().state.items.clone()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.lock().state.loading
    }

    pub(crate) fn error(&self) -> Option<String> {
        self.lock().state.error.clone()
    }

    pub(crate) fn set_items(&self, items: Vec<T>) {
        self.lock().state.items = items;
    }

    /// Mark an action as started: loading on, previous error cleared.
    pub(crate) fn begin(&self) -> LoadingGuard<'_, T> {
        let mut inner = self.lock();
        inner.state.loading = true;
        inner.state.error = None;
        LoadingGuard { core: self }
    }

    pub(crate) fn begin_fetch(&self) -> (LoadingGuard<'_, T>, u64) {
        let guard = self.begin();
        let mut inner = self.lock();
        inner.fetch_seq += 1;
        (guard, inner.fetch_seq)
    }

    pub(crate) fn record_error(&self, prefix: &str, error: &ApplicationError) {
        self.lock().state.error = Some(format!("{prefix}: {error}"));
    }

    /// Replace the collection with a fetch result unless a newer fetch began.
    pub(crate) fn apply_fetch(&self, seq: u64, items: Vec<T>) -> bool {
        let mut inner = self.lock();
        if inner.fetch_seq != seq {
            debug!(
                store = self.name,
                seq,
                latest = inner.fetch_seq,
                "discarding stale fetch response"
            );
            return false;
        }
        inner.state.items = items;
        true
    }

    /// Record a fetch failure unless a newer fetch began.
    pub(crate) fn apply_fetch_error(
        &self,
        seq: u64,
        prefix: &str,
        error: &ApplicationError,
    ) -> bool {
        let mut inner = self.lock();
        if inner.fetch_seq != seq {
            debug!(
                store = self.name,
                seq,
                latest = inner.fetch_seq,
                %error,
                "discarding stale fetch error"
            );
            return false;
        }
        inner.state.error = Some(format!("{prefix}: {error}"));
        true
    }

    pub(crate) fn prepend(&self, item: T) {
        self.lock().state.items.insert(0, item);
    }

    /// Swap the entry with `id` for `item`. Unknown ids leave the cache as is.
    pub(crate) fn replace(&self, id: i64, item: T) -> bool {
        let mut inner = self.lock();
        match inner.state.items.iter().position(|e| e.id() == id) {
            Some(index) => {
                inner.state.items[index] = item;
                true
            }
            None => {
                debug!(store = self.name, id, "updated entity not cached, skipping");
                false
            }
        }
    }

    pub(crate) fn remove(&self, id: i64) -> bool {
        let mut inner = self.lock();
        let before = inner.state.items.len();
        inner.state.items.retain(|e| e.id() != id);
        let removed = inner.state.items.len() != before;
        if !removed {
            debug!(store = self.name, id, "deleted entity not cached, skipping");
        }
        removed
    }
}
