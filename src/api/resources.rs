// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use serde_json::Value;

use super::transport::ApiRequest;
use super::validate::{
    validate_budget, validate_category, validate_id, validate_period, validate_transaction,
};
use super::ApiClient;
use crate::error::ApplicationError;
use crate::models::{
    Budget, Category, CreateBudgetRequest, CreateCategoryRequest, CreateTransactionRequest,
    EntryType, MonthlySummary, Transaction,
};

fn to_body<T: Serialize>(payload: &T) -> Result<Value, ApplicationError> {
    serde_json::to_value(payload).map_err(|e| ApplicationError::unexpected(e.into()))
}

pub struct TransactionApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TransactionApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Transaction>, ApplicationError> {
        self.client.fetch(ApiRequest::get("/transactions")).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Transaction, ApplicationError> {
        validate_id(id)?;
        self.client
            .fetch(ApiRequest::get(format!("/transactions/{id}")))
            .await
    }

    pub async fn create(
        &self,
        data: &CreateTransactionRequest,
    ) -> Result<Transaction, ApplicationError> {
        validate_transaction(data)?;
        self.client
            .fetch(ApiRequest::post("/transactions", to_body(data)?))
            .await
    }

    pub async fn update(
        &self,
        id: i64,
        data: &CreateTransactionRequest,
    ) -> Result<Transaction, ApplicationError> {
        validate_id(id)?;
        validate_transaction(data)?;
        self.client
            .fetch(ApiRequest::put(format!("/transactions/{id}"), to_body(data)?))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApplicationError> {
        validate_id(id)?;
        self.client
            .execute(ApiRequest::delete(format!("/transactions/{id}")))
            .await
    }
}

pub struct CategoryApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoryApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, ApplicationError> {
        self.client.fetch(ApiRequest::get("/categories")).await
    }

    pub async fn get_by_type(&self, kind: EntryType) -> Result<Vec<Category>, ApplicationError> {
        self.client
            .fetch(ApiRequest::get("/categories").with_query("type", kind))
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Category, ApplicationError> {
        validate_id(id)?;
        self.client
            .fetch(ApiRequest::get(format!("/categories/{id}")))
            .await
    }

    pub async fn create(&self, data: &CreateCategoryRequest) -> Result<Category, ApplicationError> {
        validate_category(data)?;
        self.client
            .fetch(ApiRequest::post("/categories", to_body(data)?))
            .await
    }

    pub async fn update(
        &self,
        id: i64,
        data: &CreateCategoryRequest,
    ) -> Result<Category, ApplicationError> {
        validate_id(id)?;
        validate_category(data)?;
        self.client
            .fetch(ApiRequest::put(format!("/categories/{id}"), to_body(data)?))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApplicationError> {
        validate_id(id)?;
        self.client
            .execute(ApiRequest::delete(format!("/categories/{id}")))
            .await
    }
}

pub struct BudgetApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BudgetApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Budget>, ApplicationError> {
        self.client.fetch(ApiRequest::get("/budgets")).await
    }

    pub async fn get_by_month(&self, year: i32, month: u32) -> Result<Vec<Budget>, ApplicationError> {
        validate_period(year, month)?;
        let request = ApiRequest::get("/budgets")
            .with_query("year", year)
            .with_query("month", month);
        self.client.fetch(request).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Budget, ApplicationError> {
        validate_id(id)?;
        self.client
            .fetch(ApiRequest::get(format!("/budgets/{id}")))
            .await
    }

    pub async fn create(&self, data: &CreateBudgetRequest) -> Result<Budget, ApplicationError> {
        validate_budget(data)?;
        self.client
            .fetch(ApiRequest::post("/budgets", to_body(data)?))
            .await
    }

    pub async fn update(
        &self,
        id: i64,
        data: &CreateBudgetRequest,
    ) -> Result<Budget, ApplicationError> {
        validate_id(id)?;
        validate_budget(data)?;
        self.client
            .fetch(ApiRequest::put(format!("/budgets/{id}"), to_body(data)?))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApplicationError> {
        validate_id(id)?;
        self.client
            .execute(ApiRequest::delete(format!("/budgets/{id}")))
            .await
    }
}

pub struct SummaryApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SummaryApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_monthly(&self, year: i32, month: u32) -> Result<MonthlySummary, ApplicationError> {
        validate_period(year, month)?;
        self.client
            .fetch(ApiRequest::get(format!("/summary/{year}/{month}")))
            .await
    }
}
