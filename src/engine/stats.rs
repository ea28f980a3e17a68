// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{BalanceChange, EntryDelta, MonthStats, Snapshot};
use crate::utils::round2;

/// Derive statistics for one month's snapshots.
///
/// The input must already be sorted ascending by date; `group::by_month`
/// produces buckets in that order. Returns `None` for an empty slice, which
/// is the defined "no data" result rather than an error.
///
/// Deltas, totals and the daily average are each rounded half-up to 2 digits
/// when computed, and the totals accumulate the rounded per-entry values.
/// Rounding error can therefore compound slightly over long sequences; that
/// matches the observable output this tracker has always produced and is
/// kept as-is.
pub fn compute(ascending: &[Snapshot]) -> Option<MonthStats> {
    let first = ascending.first()?;
    let last = ascending.last()?;

    let mut per_entry = Vec::with_capacity(ascending.len());
    let mut total_spent = Decimal::ZERO;
    let mut total_gain = Decimal::ZERO;

    for (i, cur) in ascending.iter().enumerate() {
        if i == 0 {
            // No previous reading to compare against.
            per_entry.push(EntryDelta {
                snapshot: cur.clone(),
                change: None,
            });
            continue;
        }
        let prev = &ascending[i - 1];
        let delta = round2(prev.balance - cur.balance);
        let (spent, gain) = if delta > Decimal::ZERO {
            (delta, Decimal::ZERO)
        } else if delta < Decimal::ZERO {
            (Decimal::ZERO, -delta)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };
        // Independent accumulators: gains never offset the spend total.
        total_spent += spent;
        total_gain += gain;
        per_entry.push(EntryDelta {
            snapshot: cur.clone(),
            change: Some(BalanceChange { delta, spent, gain }),
        });
    }

    let days_covered = (last.date - first.date).num_days() + 1;
    let total_spent = round2(total_spent);
    let avg_spent_per_day = if days_covered > 0 {
        round2(total_spent / Decimal::from(days_covered))
    } else {
        Decimal::ZERO
    };

    Some(MonthStats {
        start_balance: round2(first.balance),
        end_balance: round2(last.balance),
        total_spent,
        total_gain: round2(total_gain),
        per_entry,
        days_covered,
        avg_spent_per_day,
        first_date: first.date,
        last_date: last.date,
    })
}
