// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod categories;
pub mod summary;
pub mod transactions;

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

use crate::api::ApiClient;
use crate::error::ApplicationError;
use crate::models::Category;
use crate::notify::{Notifier, Severity};
use crate::store::{CategoryStore, TransactionStore};

/// Everything a command handler may touch, built once in `main`.
pub struct App {
    pub api: Arc<ApiClient>,
    pub transactions: TransactionStore,
    pub categories: CategoryStore,
    pub notifier: Arc<Notifier>,
}

impl App {
    pub fn new(api: Arc<ApiClient>, notifier: Arc<Notifier>) -> Self {
        Self {
            transactions: TransactionStore::new(Arc::clone(&api)),
            categories: CategoryStore::new(Arc::clone(&api)),
            api,
            notifier,
        }
    }
}

pub(crate) fn arg<'a, T>(m: &'a ArgMatches, name: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    m.get_one::<T>(name)
        .with_context(|| format!("Missing required argument '{}'", name))
}

/// Prefer the message the store recorded, which names the failed action.
pub(crate) fn store_failure(e: ApplicationError, recorded: Option<String>) -> anyhow::Error {
    match recorded {
        Some(msg) => anyhow!(msg),
        None => e.into(),
    }
}

pub(crate) fn category_label(category: Option<&Category>, category_id: i64) -> String {
    category
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("#{}", category_id))
}

/// Print the notification slot to stderr if something is showing.
pub fn render_notification(notifier: &Notifier) {
    let n = notifier.snapshot();
    if !n.visible {
        return;
    }
    let marker = match n.severity {
        Severity::Success => "✔",
        Severity::Error => "✖",
        Severity::Warning => "!",
        Severity::Info => "i",
    };
    eprintln!("{} {}", marker, n.message);
    notifier.dismiss();
}
