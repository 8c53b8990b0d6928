// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const COLOR_PRESETS: [&str; 10] = [
    "#007BFF", "#28a745", "#dc3545", "#ffc107", "#17a2b8", "#6610f2", "#e83e8c", "#fd7e14",
    "#20c997", "#6c757d",
];

pub const DEFAULT_COLOR: &str = COLOR_PRESETS[0];

/// Whether money flows in or out. Amounts are always positive; the sign
/// shown to the user is derived from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "income" => Ok(EntryType::Income),
            "expense" => Ok(EntryType::Expense),
            _ => Err(ValidationError::new("type must be 'income' or 'expense'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub r#type: EntryType,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub r#type: EntryType,
    pub amount: i64,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub transaction_date: String, // YYYY-MM-DD or RFC 3339
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub amount: i64,
    pub target_year: i32,
    pub target_month: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub category_type: String,
    pub total: i64,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub percentage: f64,
}

impl CategorySummary {
    /// Share of the budget consumed, in percent. `None` when no budget is set.
    pub fn usage_percentage(&self) -> Option<f64> {
        if self.budget > 0 {
            Some(self.total as f64 / self.budget as f64 * 100.0)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_income: i64,
    pub total_expense: i64,
    pub balance: i64,
    #[serde(default)]
    pub category_summary: BTreeMap<i64, CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub r#type: EntryType,
    pub amount: i64,
    pub category_id: i64,
    pub transaction_date: String, // YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub r#type: EntryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetRequest {
    pub category_id: i64,
    pub amount: i64,
    pub target_year: i32,
    pub target_month: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_keys_decode_from_json_object() {
        let raw = r##"{
            "year": 2024, "month": 1,
            "total_income": 50000, "total_expense": 1200, "balance": 48800,
            "category_summary": {
                "2": {"category_id": 2, "category_name": "食費", "category_type": "expense",
                      "total": 1200, "budget": 3000, "percentage": 40}
            }
        }"##;
        let s: MonthlySummary = serde_json::from_str(raw).unwrap();
        assert_eq!(s.balance, s.total_income - s.total_expense);
        let food = &s.category_summary[&2];
        assert_eq!(food.usage_percentage(), Some(40.0));
    }

    #[test]
    fn category_color_defaults_to_first_preset() {
        let c: Category =
            serde_json::from_str(r#"{"id": 1, "name": "給与", "type": "income"}"#).unwrap();
        assert_eq!(c.color, "#007BFF");
        assert_eq!(c.r#type, EntryType::Income);
    }

    #[test]
    fn entry_type_rejects_unknown_values() {
        assert!("transfer".parse::<EntryType>().is_err());
        assert_eq!(" expense ".parse::<EntryType>().unwrap(), EntryType::Expense);
    }
}
