// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use super::{StoreCore, StoreState};
use crate::api::ApiClient;
use crate::error::ApplicationError;
use crate::models::{Category, CreateCategoryRequest, EntryType};

pub struct CategoryStore {
    api: Arc<ApiClient>,
    core: StoreCore<Category>,
}

impl CategoryStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            core: StoreCore::new("category"),
        }
    }

    pub fn state(&self) -> StoreState<Category> {
        self.core.snapshot()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.core.items()
    }

    pub fn is_loading(&self) -> bool {
        self.core.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.core.error()
    }

    pub fn set_categories(&self, items: Vec<Category>) {
        self.core.set_items(items);
    }

    pub async fn fetch_categories(&self) {
        let (_loading, seq) = self.core.begin_fetch();
        match self.api.categories().get_all().await {
            Ok(items) => {
                self.core.apply_fetch(seq, items);
            }
            Err(e) => {
                self.core.apply_fetch_error(seq, "Failed to fetch categories", &e);
            }
        }
    }

    /// One-off filtered read. The cached list is not touched; on failure the
    /// error is recorded and an empty list comes back.
    pub async fn fetch_categories_by_type(&self, kind: EntryType) -> Vec<Category> {
        let _loading = self.core.begin();
        match self.api.categories().get_by_type(kind).await {
            Ok(items) => items,
            Err(e) => {
                self.core.record_error("Failed to fetch categories", &e);
                Vec::new()
            }
        }
    }

    pub async fn create_category(
        &self,
        data: &CreateCategoryRequest,
    ) -> Result<Category, ApplicationError> {
        let _loading = self.core.begin();
        match self.api.categories().create(data).await {
            Ok(created) => {
                self.core.prepend(created.clone());
                Ok(created)
            }
            Err(e) => {
                self.core.record_error("Failed to create category", &e);
                Err(e)
            }
        }
    }

    pub async fn update_category(
        &self,
        id: i64,
        data: &CreateCategoryRequest,
    ) -> Result<Category, ApplicationError> {
        let _loading = self.core.begin();
        match self.api.categories().update(id, data).await {
            Ok(updated) => {
                self.core.replace(id, updated.clone());
                Ok(updated)
            }
            Err(e) => {
                self.core.record_error("Failed to update category", &e);
                Err(e)
            }
        }
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApplicationError> {
        let _loading = self.core.begin();
        match self.api.categories().delete(id).await {
            Ok(()) => {
                self.core.remove(id);
                Ok(())
            }
            Err(e) => {
                self.core.record_error("Failed to delete category", &e);
                Err(e)
            }
        }
    }

    pub fn income_categories(&self) -> Vec<Category> {
        self.by_type(EntryType::Income)
    }

    pub fn expense_categories(&self) -> Vec<Category> {
        self.by_type(EntryType::Expense)
    }

    fn by_type(&self, kind: EntryType) -> Vec<Category> {
        self.core
            .items()
            .into_iter()
            .filter(|c| c.r#type == kind)
            .collect()
    }
}
