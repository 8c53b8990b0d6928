// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

use crate::config::API_URL_ENV;
use crate::models::COLOR_PRESETS;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
}

fn transaction_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
        .arg(
            Arg::new("type")
                .long("type")
                .required(true)
                .help("income or expense"),
        )
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(true)
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("category-id")
                .long("category-id")
                .required(true)
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(Arg::new("memo").long("memo"))
}

fn category_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("name").long("name").required(true))
        .arg(
            Arg::new("type")
                .long("type")
                .required(true)
                .help("income or expense"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help(format!("Hex color, presets: {}", COLOR_PRESETS.join(" "))),
        )
}

fn budget_fields(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("category-id")
            .long("category-id")
            .required(true)
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true),
    )
    .arg(
        Arg::new("year")
            .long("year")
            .required(true)
            .value_parser(value_parser!(i32)),
    )
    .arg(
        Arg::new("month")
            .long("month")
            .required(true)
            .value_parser(value_parser!(u32)),
    )
}

pub fn build_cli() -> Command {
    Command::new("kakeibo")
        .version(clap::crate_version!())
        .about("Household income/expense tracking client")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .env(API_URL_ENV)
                .help("Backend origin (default http://localhost:8080)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Per-request timeout in seconds (default 10)"),
        )
        .subcommand(
            Command::new("tx")
                .about("Income and expense transactions")
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("month").long("month").help("YYYY-MM")),
                ))
                .subcommand(json_flags(Command::new("show").arg(id_arg())))
                .subcommand(transaction_fields(Command::new("add")))
                .subcommand(transaction_fields(Command::new("update").arg(id_arg())))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("category")
                .about("Transaction categories")
                .subcommand(json_flags(
                    Command::new("list").arg(Arg::new("type").long("type")),
                ))
                .subcommand(category_fields(Command::new("add")))
                .subcommand(category_fields(Command::new("update").arg(id_arg())))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly per-category budgets")
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32))
                                .requires("month"),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32))
                                .requires("year"),
                        ),
                ))
                .subcommand(json_flags(Command::new("show").arg(id_arg())))
                .subcommand(budget_fields(Command::new("set")))
                .subcommand(budget_fields(Command::new("update").arg(id_arg())))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Monthly income, expense and budget usage")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .required(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                ),
        ))
}
