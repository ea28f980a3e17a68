// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store::{self, EditSession, OnDuplicateDate};
use crate::utils::{maybe_print_json, parse_balance, parse_date, parse_month, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let balance = parse_balance(sub.get_one::<String>("balance").unwrap())?;
    let note = sub.get_one::<String>("note").map(|s| s.as_str());
    let policy = if sub.get_flag("replace") {
        OnDuplicateDate::Replace
    } else {
        OnDuplicateDate::Reject
    };
    let id = store::add(conn, date, balance, note, policy)?;
    println!("Recorded balance {:.2} on {} (id {})", balance, date, id);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let balance = match sub.get_one::<String>("balance") {
        Some(s) => Some(parse_balance(s)?),
        None => None,
    };
    let note = sub.get_one::<String>("note").cloned();
    if date.is_none() && balance.is_none() && note.is_none() {
        anyhow::bail!("Nothing to edit: pass --date, --balance or --note");
    }
    let edit = EditSession {
        id,
        date,
        balance,
        note,
    };
    store::update(conn, &edit)?;
    println!("Updated snapshot {}", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store::remove(conn, id)?;
    println!("Deleted snapshot {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snaps = if let Some(month) = sub.get_one::<String>("month") {
        store::snapshots_for_month(conn, &parse_month(month)?)?
    } else {
        store::all_snapshots(conn)?
    };
    if !maybe_print_json(json_flag, jsonl_flag, &snaps)? {
        let rows: Vec<Vec<String>> = snaps
            .iter()
            .map(|s| {
                vec![
                    s.id.to_string(),
                    s.date.to_string(),
                    format!("{:.2}", s.balance),
                    s.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Date", "Balance", "Note"], rows));
    }
    Ok(())
}

pub fn clear(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        anyhow::bail!("This deletes all saved snapshots; pass --yes to confirm");
    }
    let n = store::clear(conn)?;
    println!("Deleted {} snapshot(s)", n);
    Ok(())
}
