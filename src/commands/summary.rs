// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::{arg, App};
use crate::models::MonthlySummary;
use crate::utils::{format_number, maybe_print_json, pretty_table};

pub async fn handle(app: &App, m: &ArgMatches) -> Result<()> {
    let year = *arg::<i32>(m, "year")?;
    let month = *arg::<u32>(m, "month")?;
    let summary = app.api.summary().get_monthly(year, month).await?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        println!("{}", pretty_table(&["", "Amount"], totals_rows(&summary)));
        println!(
            "{}",
            pretty_table(
                &["Category", "Type", "Total", "Budget", "Used"],
                category_rows(&summary),
            )
        );
    }
    Ok(())
}

pub fn totals_rows(s: &MonthlySummary) -> Vec<Vec<String>> {
    vec![
        vec!["Income".into(), format!("¥{}", format_number(s.total_income))],
        vec!["Expense".into(), format!("¥{}", format_number(s.total_expense))],
        vec!["Balance".into(), format!("¥{}", format_number(s.balance))],
    ]
}

/// Budgeted categories first, by usage descending; the rest by total.
pub fn category_rows(s: &MonthlySummary) -> Vec<Vec<String>> {
    let mut cats: Vec<_> = s.category_summary.values().collect();
    cats.sort_by(|a, b| {
        let ua = a.usage_percentage().unwrap_or(-1.0);
        let ub = b.usage_percentage().unwrap_or(-1.0);
        ub.total_cmp(&ua).then(b.total.cmp(&a.total))
    });
    cats.into_iter()
        .map(|c| {
            let name = if c.category_name.is_empty() {
                format!("#{}", c.category_id)
            } else {
                c.category_name.clone()
            };
            vec![
                name,
                c.category_type.clone(),
                format!("¥{}", format_number(c.total)),
                if c.budget > 0 {
                    format!("¥{}", format_number(c.budget))
                } else {
                    "-".into()
                },
                c.usage_percentage()
                    .map(|p| format!("{:.1}%", p))
                    .unwrap_or_else(|| "-".into()),
            ]
        })
        .collect()
}
