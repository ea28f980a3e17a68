// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::engine::{group, stats};
use crate::models::{EntryDelta, MonthStats};
use crate::store;
use crate::utils::{maybe_print_json, month_title, parse_month, pretty_table};

#[derive(Serialize)]
struct MonthReport {
    month: String,
    stats: MonthStats,
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let snaps = if let Some(month) = m.get_one::<String>("month") {
        store::snapshots_for_month(conn, &parse_month(month)?)?
    } else {
        store::all_snapshots(conn)?
    };

    let groups = group::by_month(&snaps);
    if groups.is_empty() {
        println!("No snapshots yet. Add a date and remaining balance to start tracking.");
        return Ok(());
    }

    let mut reports = Vec::with_capacity(groups.len());
    for (key, bucket) in groups.iter_desc() {
        // Buckets are non-empty by construction.
        if let Some(s) = stats::compute(bucket) {
            reports.push(MonthReport {
                month: key.to_string(),
                stats: s,
            });
        }
    }

    if maybe_print_json(json_flag, jsonl_flag, &reports)? {
        return Ok(());
    }

    for report in &reports {
        let s = &report.stats;
        println!(
            "{}  ({} to {}, {} day(s) tracked)",
            month_title(&report.month)?,
            s.first_date,
            s.last_date,
            s.days_covered
        );
        println!(
            "Start {:.2}  Current {:.2}  Spent {:.2}  Gain {:.2}  Avg/day {:.2}",
            s.start_balance, s.end_balance, s.total_spent, s.total_gain, s.avg_spent_per_day
        );
        let rows: Vec<Vec<String>> = s
            .per_entry
            .iter()
            .rev() // newest reading first
            .map(entry_row)
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Balance", "Spent since prev", "Note"], rows)
        );
        println!();
    }
    Ok(())
}

fn entry_row(e: &EntryDelta) -> Vec<String> {
    let spent_cell = match &e.change {
        None => "first snapshot".to_string(),
        Some(c) if !c.spent.is_zero() => format!("{:.2}", c.spent),
        Some(c) if !c.gain.is_zero() => format!("+{:.2} gain", c.gain),
        Some(_) => "no change".to_string(),
    };
    vec![
        e.snapshot.date.to_string(),
        format!("{:.2}", e.snapshot.balance),
        spent_cell,
        e.snapshot.note.clone().unwrap_or_default(),
    ]
}
