//! CSV table output for finalized histograms.

use std::path::Path;

use frag_core::errors::{ErrorInfo, FragError};

use crate::histogram::Histogram;

/// Writes one histogram as a two-column CSV table of
/// `(bin_center, value)` rows in bin order.
pub fn write_table(hist: &Histogram, out_path: &Path) -> Result<(), FragError> {
    let mut writer = csv::Writer::from_path(out_path).map_err(|err| {
        FragError::Export(
            ErrorInfo::new("table-write", err.to_string())
                .with_context("name", hist.name())
                .with_context("path", out_path.display().to_string()),
        )
    })?;
    writer
        .write_record(["bin_center", "value"])
        .map_err(|err| table_error(hist, err))?;
    for (center, value) in hist.rows() {
        writer
            .write_record([format!("{center:.6}"), format!("{value:.9}")])
            .map_err(|err| table_error(hist, err))?;
    }
    writer.flush().map_err(|err| {
        FragError::Export(
            ErrorInfo::new("table-write", err.to_string()).with_context("name", hist.name()),
        )
    })
}

fn table_error(hist: &Histogram, err: csv::Error) -> FragError {
    FragError::Export(
        ErrorInfo::new("table-write", err.to_string()).with_context("name", hist.name()),
    )
}
