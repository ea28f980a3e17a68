// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs::File;

use crate::engine::project;
use crate::store;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let out = m.get_one::<String>("out").unwrap();

    let snaps = store::all_snapshots(conn)?;
    // An empty export is a user-facing failure; bail before touching the file.
    let rows = project::rows(&snaps)?;

    let file = File::create(out).with_context(|| format!("Create export file {}", out))?;
    project::write_csv(file, &rows)?;
    println!("Exported {} snapshot row(s) to {}", rows.len(), out);
    Ok(())
}
