// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pockettrack")
        .about("PocketTrack: record remaining-balance snapshots, get monthly spending stats")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            Command::new("snapshot")
                .about("Record and manage balance snapshots")
                .subcommand(
                    Command::new("add")
                        .about("Record a remaining-balance reading")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .required(true)
                                .allow_negative_numbers(true)
                                .help("Remaining balance, non-negative"),
                        )
                        .arg(Arg::new("note").long("note"))
                        .arg(
                            Arg::new("replace")
                                .long("replace")
                                .action(ArgAction::SetTrue)
                                .help("Overwrite an existing snapshot on the same date"),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a snapshot by id")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD"))
                        .arg(Arg::new("balance").long("balance").allow_negative_numbers(true))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm").about("Delete a snapshot by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List snapshots, oldest first")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM")),
                )),
        )
        .subcommand(json_flags(
            Command::new("report")
                .about("Monthly spending statistics, newest month first")
                .arg(Arg::new("month").long("month").help("Only report YYYY-MM")),
        ))
        .subcommand(
            Command::new("export")
                .about("Export all snapshots as CSV with a cumulative spend average")
                .arg(Arg::new("out").long("out").required(true).help("Output file path")),
        )
        .subcommand(Command::new("demo").about("Append two months of sample snapshots"))
        .subcommand(
            Command::new("clear").about("Delete all snapshots").arg(
                Arg::new("yes")
                    .long("yes")
                    .action(ArgAction::SetTrue)
                    .help("Confirm deletion"),
            ),
        )
}
