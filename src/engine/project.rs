// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use rust_decimal::Decimal;

use crate::engine::EngineError;
use crate::models::{ExportRow, Snapshot};
use crate::utils::round2;

pub const CSV_HEADER: [&str; 4] = ["date", "balance", "spent_since_prev", "cumulative_avg_spent"];

/// Build the export series: one continuous ascending-date sequence over the
/// whole snapshot set, never reset at month boundaries.
///
/// The first row is the baseline and carries no derived fields. Every later
/// row reports `spent = max(prev - cur, 0)`: balance increases and unchanged
/// balances both count as a spend of exactly zero. This intentionally
/// diverges from `stats::compute`, which tracks gains separately; the two
/// views are independent outputs and must stay that way.
pub fn rows(snapshots: &[Snapshot]) -> Result<Vec<ExportRow>, EngineError> {
    if snapshots.is_empty() {
        return Err(EngineError::NoData);
    }
    let mut ordered: Vec<&Snapshot> = snapshots.iter().collect();
    ordered.sort_by_key(|s| s.date); // stable: ties keep input order

    let mut out = Vec::with_capacity(ordered.len());
    let mut running_sum = Decimal::ZERO;
    let mut running_count: i64 = 0;

    for (i, cur) in ordered.iter().enumerate() {
        if i == 0 {
            out.push(ExportRow {
                date: cur.date,
                balance: round2(cur.balance),
                spent_since_prev: None,
                cumulative_avg_spent: None,
            });
            continue;
        }
        let prev = ordered[i - 1];
        let delta = prev.balance - cur.balance;
        let spent = if delta > Decimal::ZERO {
            round2(delta)
        } else {
            Decimal::ZERO
        };
        // Zero is a valid contributing value; it still advances the count.
        running_sum += spent;
        running_count += 1;
        let cumulative_avg = round2(running_sum / Decimal::from(running_count));
        out.push(ExportRow {
            date: cur.date,
            balance: round2(cur.balance),
            spent_since_prev: Some(spent),
            cumulative_avg_spent: Some(cumulative_avg),
        });
    }
    Ok(out)
}

/// Serialize rows as CSV: fixed four-column header, every field
/// double-quoted, numbers at 2 fractional digits, empty strings for the
/// first row's absent fields.
pub fn write_csv<W: Write>(w: W, rows: &[ExportRow]) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new().quote_style(QuoteStyle::Always).from_writer(w);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", row.balance),
            row.spent_since_prev
                .map(|d| format!("{:.2}", d))
                .unwrap_or_default(),
            row.cumulative_avg_spent
                .map(|d| format!("{:.2}", d))
                .unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
