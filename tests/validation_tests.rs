// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kakeibo::api::validate::{
    validate_budget, validate_category, validate_id, validate_period, validate_transaction,
};
use kakeibo::models::{
    CreateBudgetRequest, CreateCategoryRequest, CreateTransactionRequest, EntryType,
};
use rstest::rstest;

fn transaction() -> CreateTransactionRequest {
    CreateTransactionRequest {
        r#type: EntryType::Expense,
        amount: 1200,
        category_id: 2,
        transaction_date: "2024-01-16".into(),
        memo: None,
    }
}

fn budget() -> CreateBudgetRequest {
    CreateBudgetRequest {
        category_id: 2,
        amount: 30000,
        target_year: 2024,
        target_month: 1,
    }
}

#[test]
fn valid_payloads_pass() {
    assert!(validate_transaction(&transaction()).is_ok());
    assert!(validate_budget(&budget()).is_ok());
    assert!(validate_category(&CreateCategoryRequest {
        name: "食費".into(),
        r#type: EntryType::Expense,
        color: Some("#dc3545".into()),
    })
    .is_ok());
}

#[rstest]
#[case::missing_date("", 1200, 2, "transaction_date is required")]
#[case::blank_date("   ", 1200, 2, "transaction_date is required")]
#[case::zero_amount("2024-01-16", 0, 2, "amount must be greater than 0")]
#[case::negative_amount("2024-01-16", -5, 2, "amount must be greater than 0")]
#[case::zero_category("2024-01-16", 1200, 0, "category_id must be a positive integer")]
fn transaction_rules(
    #[case] date: &str,
    #[case] amount: i64,
    #[case] category_id: i64,
    #[case] expected: &str,
) {
    let req = CreateTransactionRequest {
        transaction_date: date.into(),
        amount,
        category_id,
        ..transaction()
    };
    let err = validate_transaction(&req).unwrap_err();
    assert_eq!(err.message(), expected);
}

#[test]
fn transaction_date_must_be_a_calendar_date() {
    let req = CreateTransactionRequest {
        transaction_date: "2024-02-30".into(),
        ..transaction()
    };
    assert!(validate_transaction(&req).is_err());
}

#[rstest]
#[case::empty("", None)]
#[case::whitespace("   ", None)]
#[case::too_long(&"あ".repeat(51), None)]
#[case::bad_color("食費", Some("red"))]
#[case::short_color("食費", Some("#fff"))]
fn category_rules(#[case] name: &str, #[case] color: Option<&str>) {
    let req = CreateCategoryRequest {
        name: name.into(),
        r#type: EntryType::Expense,
        color: color.map(str::to_string),
    };
    assert!(validate_category(&req).is_err());
}

#[test]
fn category_name_of_fifty_chars_is_fine() {
    let req = CreateCategoryRequest {
        name: "あ".repeat(50),
        r#type: EntryType::Income,
        color: None,
    };
    assert!(validate_category(&req).is_ok());
}

#[rstest]
#[case::zero_category(CreateBudgetRequest { category_id: 0, ..budget() })]
#[case::zero_amount(CreateBudgetRequest { amount: 0, ..budget() })]
#[case::year_too_early(CreateBudgetRequest { target_year: 1999, ..budget() })]
#[case::year_too_late(CreateBudgetRequest { target_year: 2101, ..budget() })]
#[case::month_zero(CreateBudgetRequest { target_month: 0, ..budget() })]
#[case::month_thirteen(CreateBudgetRequest { target_month: 13, ..budget() })]
fn budget_rules(#[case] req: CreateBudgetRequest) {
    assert!(validate_budget(&req).is_err());
}

#[rstest]
#[case(2000, 1)]
#[case(2100, 12)]
fn budget_bounds_are_inclusive(#[case] year: i32, #[case] month: u32) {
    let req = CreateBudgetRequest {
        target_year: year,
        target_month: month,
        ..budget()
    };
    assert!(validate_budget(&req).is_ok());
    assert!(validate_period(year, month).is_ok());
}

#[test]
fn ids_must_be_positive() {
    assert!(validate_id(1).is_ok());
    assert!(validate_id(0).is_err());
    assert!(validate_id(-1).is_err());
}

#[test]
fn every_preset_color_is_accepted() {
    for color in kakeibo::models::COLOR_PRESETS {
        let req = CreateCategoryRequest {
            name: "食費".into(),
            r#type: EntryType::Expense,
            color: Some(color.to_string()),
        };
        assert!(validate_category(&req).is_ok(), "{color}");
    }
}

#[rstest]
#[case::empty("")]
#[case::blank("  ")]
fn blank_color_means_server_default(#[case] color: &str) {
    let req = CreateCategoryRequest {
        name: "食費".into(),
        r#type: EntryType::Expense,
        color: Some(color.into()),
    };
    assert!(validate_category(&req).is_ok());
}
