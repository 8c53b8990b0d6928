// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use clap::ArgMatches;

use super::{arg, store_failure, App};
use crate::models::{Category, CreateCategoryRequest, EntryType};
use crate::utils::{format_transaction_type, maybe_print_json, pretty_table};

pub async fn handle(app: &App, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub).await?,
        Some(("add", sub)) => {
            let req = request_from_args(sub)?;
            let created = app
                .categories
                .create_category(&req)
                .await
                .map_err(|e| store_failure(e, app.categories.error()))?;
            app.notifier
                .success(format!("Added category '{}' (#{})", created.name, created.id));
        }
        Some(("update", sub)) => {
            let id = *arg::<i64>(sub, "id")?;
            let req = request_from_args(sub)?;
            let updated = app
                .categories
                .update_category(id, &req)
                .await
                .map_err(|e| store_failure(e, app.categories.error()))?;
            app.notifier
                .success(format!("Updated category '{}'", updated.name));
        }
        Some(("rm", sub)) => {
            let id = *arg::<i64>(sub, "id")?;
            app.categories
                .delete_category(id)
                .await
                .map_err(|e| store_failure(e, app.categories.error()))?;
            app.notifier.success(format!("Removed category #{}", id));
        }
        _ => {}
    }
    Ok(())
}

pub fn request_from_args(sub: &ArgMatches) -> Result<CreateCategoryRequest> {
    let kind: EntryType = arg::<String>(sub, "type")?.parse()?;
    Ok(CreateCategoryRequest {
        name: arg::<String>(sub, "name")?.trim().to_string(),
        r#type: kind,
        color: sub
            .get_one::<String>("color")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    })
}

async fn list(app: &App, sub: &ArgMatches) -> Result<()> {
    let store = &app.categories;
    let items: Vec<Category> = match sub.get_one::<String>("type") {
        Some(kind) => {
            let kind: EntryType = kind.parse()?;
            store.fetch_categories_by_type(kind).await
        }
        None => {
            store.fetch_categories().await;
            store.categories()
        }
    };
    if let Some(err) = store.error() {
        return Err(anyhow!(err));
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        let rows = items
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.name.clone(),
                    format_transaction_type(c.r#type).to_string(),
                    c.color.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Name", "Type", "Color"], rows));
    }
    Ok(())
}
