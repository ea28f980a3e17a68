// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single remaining-balance reading. Dates carry no time component and are
/// treated as local midnight for ordering and day arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: i64,
    pub date: NaiveDate,
    pub balance: Decimal, // non-negative, 2 fractional digits
    pub note: Option<String>,
}

/// Transition from the previous snapshot in a sequence. For a non-zero delta
/// exactly one of `spent`/`gain` is non-zero; both are zero when the balance
/// did not move.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceChange {
    pub delta: Decimal, // previous minus current
    pub spent: Decimal,
    pub gain: Decimal,
}

/// A snapshot annotated with its transition. The first snapshot of a sequence
/// has no previous reading to compare against, so `change` is `None` there.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDelta {
    pub snapshot: Snapshot,
    pub change: Option<BalanceChange>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthStats {
    pub start_balance: Decimal,
    pub end_balance: Decimal,
    pub total_spent: Decimal,
    pub total_gain: Decimal,
    pub per_entry: Vec<EntryDelta>,
    pub days_covered: i64,
    pub avg_spent_per_day: Decimal,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// One line of the CSV projection. The derived fields are `None` only on the
/// first row of the series ("no baseline yet"), which serializes as an empty
/// field rather than `0.00`.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub balance: Decimal,
    pub spent_since_prev: Option<Decimal>,
    pub cumulative_avg_spent: Option<Decimal>,
}
