// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use kakeibo::api::ApiClient;
use kakeibo::cli;
use kakeibo::commands::{self, App};
use kakeibo::config::Config;
use kakeibo::notify::Notifier;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let notifier = Arc::new(Notifier::new());
    let outcome = run(Arc::clone(&notifier)).await;
    if let Err(e) = &outcome {
        notifier.error(format!("{:#}", e));
    }
    commands::render_notification(&notifier);
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

async fn run(notifier: Arc<Notifier>) -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let mut config = match matches.get_one::<String>("api-url") {
        Some(url) => Config::new(url)?,
        None => Config::from_env()?,
    };
    if let Some(secs) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(*secs));
    }
    debug!(api_url = %config.api_url, timeout_secs = config.timeout.as_secs(), "configured");

    let api = ApiClient::from_config(&config).context("Failed to build HTTP client")?;
    let app = App::new(Arc::new(api), notifier);

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&app, sub).await?,
        Some(("category", sub)) => commands::categories::handle(&app, sub).await?,
        Some(("budget", sub)) => commands::budgets::handle(&app, sub).await?,
        Some(("summary", sub)) => commands::summary::handle(&app, sub).await?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
