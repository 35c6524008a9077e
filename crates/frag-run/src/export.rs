use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use frag_core::errors::{ErrorInfo, FragError};
use frag_core::provenance::{RunProvenance, SchemaVersion};
use frag_hist::write_table;

use crate::config::RunConfig;
use crate::controller::SubrunReport;
use crate::hash::stable_hash_string;
use crate::manifest::{RunManifest, TableAttrs};

/// Writes one subrun's tables and manifest beneath `out_dir`.
///
/// Creates `out_dir/subrun_NN/`, emits one CSV per finalized table in
/// booking order, then writes the manifest naming every file alongside the
/// provenance needed to reproduce the subrun. Returns the subrun directory.
pub fn write_subrun(
    report: &SubrunReport,
    config: &RunConfig,
    source_name: &str,
    out_dir: &Path,
) -> Result<PathBuf, FragError> {
    let dir = out_dir.join(format!("subrun_{:02}", report.subrun));
    fs::create_dir_all(&dir).map_err(|err| {
        FragError::Export(
            ErrorInfo::new("export-mkdir", err.to_string())
                .with_context("path", dir.display().to_string()),
        )
    })?;

    let mut tables = Vec::with_capacity(report.histograms.tables.len());
    for (name, table) in &report.histograms.tables {
        let file = PathBuf::from(format!("{name}.csv"));
        write_table(&table.histogram, &dir.join(&file))?;
        tables.push(TableAttrs {
            name: name.clone(),
            file,
            role: table.role.as_str().to_string(),
            normalized: table.histogram.is_normalized(),
            entries: table.histogram.entries(),
        });
    }

    let provenance = RunProvenance {
        config_hash: stable_hash_string(config)?,
        source: source_name.to_string(),
        master_seed: config.seed_policy.master_seed,
        subrun_seed: report.seed,
        subrun: report.subrun,
        created_at: Utc::now().to_rfc3339(),
    };
    let manifest = RunManifest {
        schema_version: SchemaVersion::default(),
        provenance,
        outcome: report.outcome,
        warnings: report.warnings.clone(),
        tables,
    };
    manifest.write(&dir.join(&config.output.manifest_file))?;
    Ok(dir)
}
