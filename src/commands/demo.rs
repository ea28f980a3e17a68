// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection};

// Two months of sample readings showing spend, a month rollover and a gain.
const DEMO: [(&str, &str); 8] = [
    ("2025-10-01", "30000"),
    ("2025-10-05", "28500"),
    ("2025-10-10", "27000"),
    ("2025-10-20", "24000"),
    ("2025-10-28", "22000"),
    ("2025-11-02", "25000"),
    ("2025-11-09", "23000"),
    ("2025-11-16", "21500"),
];

pub fn handle(conn: &Connection) -> Result<()> {
    for (date, balance) in DEMO {
        conn.execute(
            "INSERT INTO snapshots(date, balance) VALUES (?1, ?2)",
            params![date, balance],
        )?;
    }
    println!("Appended {} demo snapshots; run 'pockettrack report' to see them", DEMO.len());
    Ok(())
}
