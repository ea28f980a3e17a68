// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pockettrack::engine::{group, project, stats, EngineError};
use pockettrack::models::Snapshot;
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn snap(id: i64, date: &str, balance: &str) -> Snapshot {
    Snapshot {
        id,
        date: d(date),
        balance: dec(balance),
        note: None,
    }
}

#[test]
fn group_partitions_input_exactly() {
    let snaps = vec![
        snap(1, "2025-10-01", "30000"),
        snap(2, "2025-11-02", "25000"),
        snap(3, "2025-10-20", "24000"),
        snap(4, "2025-09-15", "31000"),
    ];
    let groups = group::by_month(&snaps);
    assert_eq!(groups.len(), 3);
    let total: usize = groups
        .ordered_keys()
        .iter()
        .map(|k| groups.bucket(k).unwrap().len())
        .sum();
    assert_eq!(total, snaps.len());
    // Every snapshot lands in the bucket of its own month.
    for key in groups.ordered_keys() {
        for s in groups.bucket(&key).unwrap() {
            assert_eq!(s.date.format("%Y-%m").to_string(), key);
        }
    }
}

#[test]
fn group_orders_keys_newest_first() {
    let snaps = vec![
        snap(1, "2025-10-01", "30000"),
        snap(2, "2025-11-02", "25000"),
    ];
    let groups = group::by_month(&snaps);
    assert_eq!(groups.ordered_keys(), vec!["2025-11", "2025-10"]);
}

#[test]
fn group_sorts_buckets_ascending_and_keeps_tie_order() {
    let snaps = vec![
        snap(1, "2025-10-10", "27000"),
        snap(2, "2025-10-05", "28500"),
        snap(3, "2025-10-05", "28400"), // same date as id 2, inserted after
        snap(4, "2025-10-01", "30000"),
    ];
    let groups = group::by_month(&snaps);
    let bucket = groups.bucket("2025-10").unwrap();
    let ids: Vec<i64> = bucket.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![4, 2, 3, 1]);
    for w in bucket.windows(2) {
        assert!(w[0].date <= w[1].date);
    }
}

#[test]
fn group_of_nothing_is_empty() {
    let groups = group::by_month(&[]);
    assert!(groups.is_empty());
    assert!(groups.ordered_keys().is_empty());
}

#[test]
fn stats_demo_month_scenario() {
    let snaps = vec![
        snap(1, "2025-10-01", "30000"),
        snap(2, "2025-10-05", "28500"),
        snap(3, "2025-10-10", "27000"),
    ];
    let s = stats::compute(&snaps).unwrap();
    assert_eq!(format!("{:.2}", s.start_balance), "30000.00");
    assert_eq!(format!("{:.2}", s.end_balance), "27000.00");
    assert_eq!(format!("{:.2}", s.total_spent), "3000.00");
    assert_eq!(format!("{:.2}", s.total_gain), "0.00");
    assert_eq!(s.days_covered, 10);
    assert_eq!(format!("{:.2}", s.avg_spent_per_day), "300.00");
    // First entry has no transition, the rest do.
    assert!(s.per_entry[0].change.is_none());
    assert!(s.per_entry[1..].iter().all(|e| e.change.is_some()));
}

#[test]
fn stats_tracks_gains_separately_from_spend() {
    let snaps = vec![
        snap(1, "2025-10-01", "100"),
        snap(2, "2025-10-02", "150"),
        snap(3, "2025-10-03", "120"),
    ];
    let s = stats::compute(&snaps).unwrap();
    let up = s.per_entry[1].change.as_ref().unwrap();
    assert_eq!(format!("{:.2}", up.spent), "0.00");
    assert_eq!(format!("{:.2}", up.gain), "50.00");
    let down = s.per_entry[2].change.as_ref().unwrap();
    assert_eq!(format!("{:.2}", down.spent), "30.00");
    assert_eq!(format!("{:.2}", down.gain), "0.00");
    // Gains never offset the spend total.
    assert_eq!(format!("{:.2}", s.total_spent), "30.00");
    assert_eq!(format!("{:.2}", s.total_gain), "50.00");
}

#[test]
fn stats_conservation_of_balance() {
    let snaps = vec![
        snap(1, "2025-10-01", "1000.00"),
        snap(2, "2025-10-03", "800.25"),
        snap(3, "2025-10-07", "900.10"),
        snap(4, "2025-10-12", "650.75"),
        snap(5, "2025-10-20", "650.75"),
    ];
    let s = stats::compute(&snaps).unwrap();
    assert_eq!(s.total_spent - s.total_gain, s.start_balance - s.end_balance);
}

#[test]
fn stats_single_entry_month() {
    let snaps = vec![snap(1, "2025-10-15", "5000")];
    let s = stats::compute(&snaps).unwrap();
    assert_eq!(s.days_covered, 1);
    assert!(s.total_spent.is_zero());
    assert!(s.total_gain.is_zero());
    assert!(s.avg_spent_per_day.is_zero());
    assert_eq!(s.start_balance, s.end_balance);
}

#[test]
fn stats_empty_is_no_data_not_an_error() {
    assert!(stats::compute(&[]).is_none());
}

#[test]
fn stats_no_change_transition_is_all_zero() {
    let snaps = vec![snap(1, "2025-10-01", "500"), snap(2, "2025-10-02", "500")];
    let s = stats::compute(&snaps).unwrap();
    let c = s.per_entry[1].change.as_ref().unwrap();
    assert!(c.delta.is_zero());
    assert!(c.spent.is_zero());
    assert!(c.gain.is_zero());
}

#[test]
fn project_first_row_has_absent_fields_then_numbers() {
    let snaps = vec![
        snap(1, "2025-10-01", "30000"),
        snap(2, "2025-10-05", "28500"),
        snap(3, "2025-10-10", "28500"),
    ];
    let rows = project::rows(&snaps).unwrap();
    assert!(rows[0].spent_since_prev.is_none());
    assert!(rows[0].cumulative_avg_spent.is_none());
    for r in &rows[1..] {
        assert!(r.spent_since_prev.is_some());
        assert!(r.cumulative_avg_spent.is_some());
    }
    // Zero spend is a real value, not an absent field.
    assert_eq!(format!("{:.2}", rows[2].spent_since_prev.unwrap()), "0.00");
}

#[test]
fn project_is_one_series_across_months() {
    // Month rollover with a gain: 22000 -> 25000. The export clamps it to a
    // spend of zero while stats would report it as a gain; both views hold.
    let snaps = vec![
        snap(1, "2025-10-28", "22000"),
        snap(2, "2025-11-02", "25000"),
        snap(3, "2025-11-09", "23000"),
    ];
    let rows = project::rows(&snaps).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(format!("{:.2}", rows[1].spent_since_prev.unwrap()), "0.00");
    assert_eq!(format!("{:.2}", rows[2].spent_since_prev.unwrap()), "2000.00");
    // avg over [0, 2000] = 1000
    assert_eq!(
        format!("{:.2}", rows[2].cumulative_avg_spent.unwrap()),
        "1000.00"
    );
}

#[test]
fn project_cumulative_average_recomputes_per_row() {
    let snaps = vec![
        snap(1, "2025-10-01", "1000"),
        snap(2, "2025-10-02", "900"),
        snap(3, "2025-10-03", "850"),
        snap(4, "2025-10-04", "850"),
    ];
    let rows = project::rows(&snaps).unwrap();
    let mut sum = Decimal::ZERO;
    for (count, r) in rows[1..].iter().enumerate() {
        sum += r.spent_since_prev.unwrap();
        let expect = pockettrack::utils::round2(sum / Decimal::from(count as i64 + 1));
        assert_eq!(r.cumulative_avg_spent.unwrap(), expect);
    }
}

#[test]
fn project_resorts_unordered_input() {
    let snaps = vec![
        snap(1, "2025-10-10", "27000"),
        snap(2, "2025-10-01", "30000"),
        snap(3, "2025-10-05", "28500"),
    ];
    let rows = project::rows(&snaps).unwrap();
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![d("2025-10-01"), d("2025-10-05"), d("2025-10-10")]);
}

#[test]
fn project_empty_input_is_an_error() {
    match project::rows(&[]) {
        Err(EngineError::NoData) => {}
        other => panic!("expected NoData, got {:?}", other),
    }
}
