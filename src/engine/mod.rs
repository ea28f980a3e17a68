// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivation engine: month grouping, per-month statistics and the
//! cumulative-average export projection. Nothing in here touches the store
//! or mutates its input; every function recomputes from the snapshot list
//! it is handed.

pub mod group;
pub mod project;
pub mod stats;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// An empty snapshot set has nothing to project. This is surfaced to the
    /// user instead of writing an empty export file.
    #[error("no data to export")]
    NoData,
}
