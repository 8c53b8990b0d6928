// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pre-flight checks. A failure here means no request is sent.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::models::{CreateBudgetRequest, CreateCategoryRequest, CreateTransactionRequest};
use crate::utils::parse_date;

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;
pub const MAX_CATEGORY_NAME_CHARS: usize = 50;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

pub fn validate_id(id: i64) -> Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::new(format!(
            "id must be a positive integer, got {id}"
        )));
    }
    Ok(())
}

pub fn validate_period(year: i32, month: u32) -> Result<(), ValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValidationError::new(format!(
            "year must be between {MIN_YEAR} and {MAX_YEAR}"
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(ValidationError::new("month must be between 1 and 12"));
    }
    Ok(())
}

pub fn validate_transaction(req: &CreateTransactionRequest) -> Result<(), ValidationError> {
    let date = req.transaction_date.trim();
    if date.is_empty() {
        return Err(ValidationError::new("transaction_date is required"));
    }
    if parse_date(date).is_err() {
        return Err(ValidationError::new(format!(
            "transaction_date '{date}' must be YYYY-MM-DD"
        )));
    }
    if req.amount <= 0 {
        return Err(ValidationError::new("amount must be greater than 0"));
    }
    if req.category_id <= 0 {
        return Err(ValidationError::new(
            "category_id must be a positive integer",
        ));
    }
    Ok(())
}

pub fn validate_category(req: &CreateCategoryRequest) -> Result<(), ValidationError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name is required"));
    }
    if name.chars().count() > MAX_CATEGORY_NAME_CHARS {
        return Err(ValidationError::new(format!(
            "name must be {MAX_CATEGORY_NAME_CHARS} characters or less"
        )));
    }
    // A blank color means the server default.
    if let Some(color) = req.color.as_deref().filter(|c| !c.trim().is_empty()) {
        if !HEX_COLOR.is_match(color) {
            return Err(ValidationError::new(format!(
                "color '{color}' must be a hex color code like #007BFF"
            )));
        }
    }
    Ok(())
}

pub fn validate_budget(req: &CreateBudgetRequest) -> Result<(), ValidationError> {
    if req.category_id <= 0 {
        return Err(ValidationError::new(
            "category_id must be a positive integer",
        ));
    }
    if req.amount <= 0 {
        return Err(ValidationError::new("amount must be greater than 0"));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&req.target_year) {
        return Err(ValidationError::new(format!(
            "target_year must be between {MIN_YEAR} and {MAX_YEAR}"
        )));
    }
    if !(1..=12).contains(&req.target_month) {
        return Err(ValidationError::new(
            "target_month must be between 1 and 12",
        ));
    }
    Ok(())
}
