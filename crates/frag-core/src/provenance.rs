//! Provenance and schema descriptors attached to run artifacts.

use serde::{Deserialize, Serialize};

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information written into every subrun manifest.
///
/// Enough to reproduce the subrun bit for bit: the configuration hash, the
/// source that produced the events, and the exact seeds in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Hash of the run configuration used to produce the data.
    pub config_hash: String,
    /// Name of the event source that generated the records.
    pub source: String,
    /// Master deterministic seed for the whole run.
    pub master_seed: u64,
    /// Derived seed handed to the source for this subrun.
    pub subrun_seed: u64,
    /// One-based subrun index within the run.
    pub subrun: usize,
    /// ISO-8601 timestamp recording when the artifact was generated.
    pub created_at: String,
}
