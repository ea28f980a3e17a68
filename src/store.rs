// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::models::Snapshot;

/// Policy for `add` when a snapshot already exists on the requested date.
/// One reading per date is the normal shape of the data, so the default is
/// to reject and let the user opt into replacing. Duplicate dates are still
/// legal downstream; the engine orders them by insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDuplicateDate {
    Reject,
    Replace,
}

/// An explicit edit request for one snapshot. `None` fields keep the stored
/// value. Built by the CLI and handed to `update`; nothing in the store or
/// engine tracks an ambient "currently editing" state.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub id: i64,
    pub date: Option<NaiveDate>,
    pub balance: Option<Decimal>,
    pub note: Option<String>,
}

/// All snapshots ordered by date, then id. The id tie-break gives the engine
/// its insertion-order guarantee for duplicate dates.
pub fn all_snapshots(conn: &Connection) -> Result<Vec<Snapshot>> {
    let mut stmt =
        conn.prepare("SELECT id, date, balance, note FROM snapshots ORDER BY date, id")?;
    collect_snapshots(stmt.query([])?)
}

pub fn snapshots_for_month(conn: &Connection, month: &str) -> Result<Vec<Snapshot>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, balance, note FROM snapshots WHERE substr(date,1,7)=?1 ORDER BY date, id",
    )?;
    collect_snapshots(stmt.query(params![month])?)
}

fn collect_snapshots(mut rows: rusqlite::Rows<'_>) -> Result<Vec<Snapshot>> {
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date_s: String = r.get(1)?;
        let balance_s: String = r.get(2)?;
        let note: Option<String> = r.get(3)?;
        let date = NaiveDate::parse_from_str(&date_s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' for snapshot {}", date_s, id))?;
        let balance = balance_s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid balance '{}' for snapshot {}", balance_s, id))?;
        out.push(Snapshot {
            id,
            date,
            balance,
            note,
        });
    }
    Ok(out)
}

/// Insert a snapshot, or update the existing one for that date when the
/// policy allows it. Returns the id of the affected row.
pub fn add(
    conn: &Connection,
    date: NaiveDate,
    balance: Decimal,
    note: Option<&str>,
    policy: OnDuplicateDate,
) -> Result<i64> {
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM snapshots WHERE date=?1 ORDER BY id LIMIT 1",
            params![date.to_string()],
            |r| r.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        match policy {
            OnDuplicateDate::Reject => anyhow::bail!(
                "A snapshot already exists for {} (id {}); pass --replace to overwrite it",
                date,
                id
            ),
            OnDuplicateDate::Replace => {
                conn.execute(
                    "UPDATE snapshots SET balance=?1, note=?2 WHERE id=?3",
                    params![balance.to_string(), note, id],
                )?;
                return Ok(id);
            }
        }
    }

    conn.execute(
        "INSERT INTO snapshots(date, balance, note) VALUES (?1, ?2, ?3)",
        params![date.to_string(), balance.to_string(), note],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update(conn: &Connection, edit: &EditSession) -> Result<()> {
    let current: Option<(String, String, Option<String>)> = conn
        .query_row(
            "SELECT date, balance, note FROM snapshots WHERE id=?1",
            params![edit.id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .optional()?;
    let (date_s, balance_s, note) =
        current.with_context(|| format!("Snapshot {} not found", edit.id))?;

    let date = match edit.date {
        Some(d) => d.to_string(),
        None => date_s,
    };
    let balance = match edit.balance {
        Some(b) => b.to_string(),
        None => balance_s,
    };
    let note = edit.note.clone().or(note);

    conn.execute(
        "UPDATE snapshots SET date=?1, balance=?2, note=?3 WHERE id=?4",
        params![date, balance, note, edit.id],
    )?;
    Ok(())
}

pub fn remove(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM snapshots WHERE id=?1", params![id])?;
    if n == 0 {
        anyhow::bail!("Snapshot {} not found", id);
    }
    Ok(())
}

pub fn clear(conn: &Connection) -> Result<usize> {
    let n = conn.execute("DELETE FROM snapshots", [])?;
    Ok(n)
}
