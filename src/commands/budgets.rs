// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::{arg, category_label, App};
use crate::models::{Budget, CreateBudgetRequest};
use crate::utils::{format_number, maybe_print_json, pretty_table};

pub async fn handle(app: &App, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub).await?,
        Some(("show", sub)) => {
            let id = *arg::<i64>(sub, "id")?;
            let b = app.api.budgets().get_by_id(id).await?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &b)? {
                print_table(std::slice::from_ref(&b));
            }
        }
        Some(("set", sub)) => {
            let req = request_from_args(sub)?;
            let b = app.api.budgets().create(&req).await?;
            app.notifier.success(format!(
                "Budget set for {}/{} = ¥{}",
                b.target_year,
                b.target_month,
                format_number(b.amount)
            ));
        }
        Some(("update", sub)) => {
            let id = *arg::<i64>(sub, "id")?;
            let req = request_from_args(sub)?;
            let b = app.api.budgets().update(id, &req).await?;
            app.notifier.success(format!("Updated budget #{}", b.id));
        }
        Some(("rm", sub)) => {
            let id = *arg::<i64>(sub, "id")?;
            app.api.budgets().delete(id).await?;
            app.notifier.success(format!("Removed budget #{}", id));
        }
        _ => {}
    }
    Ok(())
}

pub fn request_from_args(sub: &ArgMatches) -> Result<CreateBudgetRequest> {
    Ok(CreateBudgetRequest {
        category_id: *arg::<i64>(sub, "category-id")?,
        amount: *arg::<i64>(sub, "amount")?,
        target_year: *arg::<i32>(sub, "year")?,
        target_month: *arg::<u32>(sub, "month")?,
    })
}

fn print_table(items: &[Budget]) {
    let rows = items
        .iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                format!("{}/{}", b.target_year, b.target_month),
                category_label(b.category.as_ref(), b.category_id),
                format!("¥{}", format_number(b.amount)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Month", "Category", "Budget"], rows)
    );
}

async fn list(app: &App, sub: &ArgMatches) -> Result<()> {
    let budgets = match (sub.get_one::<i32>("year"), sub.get_one::<u32>("month")) {
        (Some(year), Some(month)) => app.api.budgets().get_by_month(*year, *month).await?,
        _ => app.api.budgets().get_all().await?,
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &budgets)? {
        print_table(&budgets);
    }
    Ok(())
}
