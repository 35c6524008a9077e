use std::fs;
use std::path::{Path, PathBuf};

use frag_core::errors::{ErrorInfo, FragError};
use frag_core::provenance::{RunProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::controller::SubrunOutcome;

/// Attributes of one exported histogram table, as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableAttrs {
    /// Table name as booked.
    pub name: String,
    /// Table file relative to the subrun directory.
    pub file: PathBuf,
    /// Normalization role label.
    pub role: String,
    /// Whether the terminal normalization was applied.
    pub normalized: bool,
    /// Fill calls the table received, including out-of-range fills.
    pub entries: u64,
}

/// Structured manifest describing one completed subrun.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    /// Schema of this manifest payload.
    pub schema_version: SchemaVersion,
    /// Reproducibility record for the subrun.
    pub provenance: RunProvenance,
    /// Event accounting for the subrun.
    pub outcome: SubrunOutcome,
    /// Non-fatal conditions recorded during the subrun.
    pub warnings: Vec<String>,
    /// Exported tables, in booking order.
    pub tables: Vec<TableAttrs>,
}

impl RunManifest {
    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), FragError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                FragError::Serde(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            FragError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            FragError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, FragError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            FragError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            FragError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
