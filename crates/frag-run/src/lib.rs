#![deny(missing_docs)]

//! Run orchestration for the fragplot engine: configuration, the subrun
//! state machine, histogram booking, and table/manifest export.

/// Histogram booking and per-subrun finalization.
pub mod book;
/// YAML configuration schema and defaults.
pub mod config;
/// Run controller state machine and the public `run` entry point.
pub mod controller;
/// Subrun artifact export: tables and the manifest.
pub mod export;
/// Stable content hashing for configurations.
pub mod hash;
/// Subrun manifest serialization helpers.
pub mod manifest;

pub use book::{FinalizedHistograms, FinalizedTable, SubrunHistograms, RANK_CAP};
pub use config::{AxisConfig, BinningConfig, OutputConfig, RunConfig, SeedPolicy};
pub use controller::{run, RunController, RunPhase, RunReport, SubrunOutcome, SubrunReport};
pub use hash::stable_hash_string;
pub use manifest::{RunManifest, TableAttrs};
