// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
}

fn amount_arg() -> Arg {
    Arg::new("amount").long("amount").required(true)
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("YYYY-MM-DD, defaults to today")
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .default_value("csv")
        .help("csv|json")
}

fn out_arg() -> Arg {
    Arg::new("out").long("out").required(true)
}

pub fn build_cli() -> Command {
    Command::new("hisab")
        .version(clap::crate_version!())
        .about("Personal finance tracker: transactions, debts, savings")
        .arg(
            Arg::new("lang")
                .long("lang")
                .global(true)
                .help("Display language for this run (en|bn)"),
        )
        .subcommand(Command::new("init").about("Create the database if missing"))
        .subcommand(
            Command::new("tx")
                .about("Income and expense entries")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .ignore_case(true)
                                .value_parser(PossibleValuesParser::new(["income", "expense"])),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(amount_arg())
                        .arg(date_arg())
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive match on category or note"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .ignore_case(true)
                                .value_parser(PossibleValuesParser::new([
                                    "all", "income", "expense",
                                ])),
                        )
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .default_value("date")
                                .value_parser(PossibleValuesParser::new(["date", "amount"])),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(
            Command::new("debt")
                .about("Money lent and borrowed")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .ignore_case(true)
                                .value_parser(PossibleValuesParser::new(["lend", "borrow"])),
                        )
                        .arg(Arg::new("person").long("person").required(true))
                        .arg(amount_arg())
                        .arg(date_arg())
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list").arg(
                        Arg::new("status")
                            .long("status")
                            .ignore_case(true)
                            .value_parser(PossibleValuesParser::new(["pending", "settled"])),
                    ),
                ))
                .subcommand(Command::new("settle").arg(id_arg()))
                .subcommand(
                    Command::new("rm").arg(id_arg()).arg(
                        Arg::new("force")
                            .long("force")
                            .action(ArgAction::SetTrue)
                            .help("Allow deleting a debt that is still pending"),
                    ),
                ),
        )
        .subcommand(
            Command::new("savings")
                .about("Capital deposits")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("source").long("source").required(true))
                        .arg(amount_arg())
                        .arg(date_arg()),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(id_arg())),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Summary metrics")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Scope income and expense to YYYY-MM"),
                ),
        ))
        .subcommand(
            Command::new("export")
                .about("Write records to a file")
                .subcommand(Command::new("transactions").arg(format_arg()).arg(out_arg()))
                .subcommand(Command::new("debts").arg(format_arg()).arg(out_arg()))
                .subcommand(Command::new("savings").arg(format_arg()).arg(out_arg()))
                .subcommand(
                    Command::new("backup")
                        .about("Full JSON backup of every ledger")
                        .arg(out_arg()),
                ),
        )
        .subcommand(
            Command::new("restore")
                .about("Load a JSON backup produced by `export backup`")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("lang")
                .about("Show or set the display language")
                .arg(
                    Arg::new("code")
                        .index(1)
                        .value_parser(PossibleValuesParser::new(["en", "bn"])),
                ),
        )
        .subcommand(Command::new("about").about("Developer info"))
}
