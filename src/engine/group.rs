// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use crate::models::Snapshot;

/// Snapshots partitioned by calendar month. Keys are `YYYY-MM`, so their
/// lexicographic order is chronological order.
#[derive(Debug, Default)]
pub struct MonthGroups {
    buckets: BTreeMap<String, Vec<Snapshot>>,
}

impl MonthGroups {
    /// Bucket keys newest month first. Presentation order only; statistics
    /// always run over the ascending contents of each bucket.
    pub fn ordered_keys(&self) -> Vec<String> {
        self.buckets.keys().rev().cloned().collect()
    }

    pub fn bucket(&self, key: &str) -> Option<&[Snapshot]> {
        self.buckets.get(key).map(|v| v.as_slice())
    }

    /// Iterate buckets newest month first.
    pub fn iter_desc(&self) -> impl Iterator<Item = (&str, &[Snapshot])> {
        self.buckets
            .iter()
            .rev()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}

pub fn month_key(s: &Snapshot) -> String {
    s.date.format("%Y-%m").to_string()
}

/// Partition snapshots into month buckets, each sorted ascending by date.
/// The sort is stable, so snapshots sharing a date keep their input order.
pub fn by_month(snapshots: &[Snapshot]) -> MonthGroups {
    let mut buckets: BTreeMap<String, Vec<Snapshot>> = BTreeMap::new();
    for s in snapshots {
        buckets.entry(month_key(s)).or_default().push(s.clone());
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by_key(|s| s.date);
    }
    MonthGroups { buckets }
}
