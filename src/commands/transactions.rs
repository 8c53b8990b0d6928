// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use clap::ArgMatches;

use super::{arg, category_label, store_failure, App};
use crate::models::{CreateTransactionRequest, EntryType, Transaction};
use crate::utils::{
    format_currency, format_date, format_transaction_type, maybe_print_json, parse_month,
    pretty_table,
};

pub async fn handle(app: &App, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub).await?,
        Some(("show", sub)) => show(app, sub).await?,
        Some(("add", sub)) => add(app, sub).await?,
        Some(("update", sub)) => update(app, sub).await?,
        Some(("rm", sub)) => remove(app, sub).await?,
        _ => {}
    }
    Ok(())
}

/// Build a request payload from `add`/`update` flags. Checks beyond the
/// type name happen in the API client.
pub fn request_from_args(sub: &ArgMatches) -> Result<CreateTransactionRequest> {
    let kind: EntryType = arg::<String>(sub, "type")?.parse()?;
    Ok(CreateTransactionRequest {
        r#type: kind,
        amount: *arg::<i64>(sub, "amount")?,
        category_id: *arg::<i64>(sub, "category-id")?,
        transaction_date: arg::<String>(sub, "date")?.trim().to_string(),
        memo: sub.get_one::<String>("memo").cloned(),
    })
}

pub fn transaction_rows(items: &[Transaction]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                format_date(&t.transaction_date),
                format_transaction_type(t.r#type).to_string(),
                category_label(t.category.as_ref(), t.category_id),
                format_currency(t.amount, t.r#type),
                t.memo.clone(),
            ]
        })
        .collect()
}

fn print_table(items: &[Transaction]) {
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Type", "Category", "Amount", "Memo"],
            transaction_rows(items),
        )
    );
}

async fn list(app: &App, sub: &ArgMatches) -> Result<()> {
    let store = &app.transactions;
    store.fetch_transactions().await;
    if let Some(err) = store.error() {
        return Err(anyhow!(err));
    }
    let items = match sub.get_one::<String>("month") {
        Some(month) => {
            let (year, month) = parse_month(month)?;
            store.transactions_for_month(year, month)
        }
        None => store.transactions(),
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        print_table(&items);
    }
    Ok(())
}

async fn show(app: &App, sub: &ArgMatches) -> Result<()> {
    let id = *arg::<i64>(sub, "id")?;
    let t = app.api.transactions().get_by_id(id).await?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        print_table(std::slice::from_ref(&t));
    }
    Ok(())
}

async fn add(app: &App, sub: &ArgMatches) -> Result<()> {
    let req = request_from_args(sub)?;
    let created = app
        .transactions
        .create_transaction(&req)
        .await
        .map_err(|e| store_failure(e, app.transactions.error()))?;
    app.notifier.success(format!(
        "Recorded {} on {} (#{})",
        format_currency(created.amount, created.r#type),
        format_date(&created.transaction_date),
        created.id
    ));
    print_table(std::slice::from_ref(&created));
    Ok(())
}

async fn update(app: &App, sub: &ArgMatches) -> Result<()> {
    let id = *arg::<i64>(sub, "id")?;
    let req = request_from_args(sub)?;
    let updated = app
        .transactions
        .update_transaction(id, &req)
        .await
        .map_err(|e| store_failure(e, app.transactions.error()))?;
    app.notifier
        .success(format!("Updated transaction #{}", updated.id));
    print_table(std::slice::from_ref(&updated));
    Ok(())
}

async fn remove(app: &App, sub: &ArgMatches) -> Result<()> {
    let id = *arg::<i64>(sub, "id")?;
    app.transactions
        .delete_transaction(id)
        .await
        .map_err(|e| store_failure(e, app.transactions.error()))?;
    app.notifier.success(format!("Deleted transaction #{}", id));
    Ok(())
}
