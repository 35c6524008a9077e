//! Fixed-shape accumulator with under/overflow routing and a one-shot
//! normalization latch.

use frag_core::errors::{ErrorInfo, FragError};
use serde::{Deserialize, Serialize};

/// Terminal normalization applied to a histogram when a subrun finalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationRole {
    /// Divide every bin by `n_events * bin_width` (a differential spectrum).
    Spectrum,
    /// Divide every bin by the in-range sum so bins total one.
    Integral,
}

impl NormalizationRole {
    /// Stable lowercase label used in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationRole::Spectrum => "spectrum",
            NormalizationRole::Integral => "integral",
        }
    }
}

/// Outcome of an integral normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeOutcome {
    /// Bins were rescaled; the histogram is now normalized.
    Normalized,
    /// The in-range sum was exactly zero; bins are untouched and the
    /// histogram stays unnormalized.
    DegenerateUnchanged,
}

/// One-dimensional accumulator over `[low, high)` with equal-width bins.
///
/// Bin `i` covers `[low + i*w, low + (i+1)*w)` for width
/// `w = (high - low) / n_bins`: the low edge lands in the first bin, the
/// high edge in overflow. Fills never fail; out-of-range values are absorbed
/// into the under/overflow counters. A histogram is normalized at most once,
/// after which further normalization attempts error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    name: String,
    n_bins: usize,
    low: f64,
    high: f64,
    bins: Vec<f64>,
    entries: u64,
    underflow: f64,
    overflow: f64,
    weighted: bool,
    normalized: bool,
}

impl Histogram {
    /// Creates an unweighted histogram. Errors if the shape is unusable
    /// (zero bins, non-finite or inverted edges).
    pub fn new(
        name: impl Into<String>,
        n_bins: usize,
        low: f64,
        high: f64,
    ) -> Result<Self, FragError> {
        let name = name.into();
        if n_bins == 0 {
            return Err(FragError::Histogram(
                ErrorInfo::new("hist-shape", "histogram needs at least one bin")
                    .with_context("name", name),
            ));
        }
        if !low.is_finite() || !high.is_finite() || !(low < high) {
            return Err(FragError::Histogram(
                ErrorInfo::new("hist-shape", "histogram range must be finite with low < high")
                    .with_context("name", name)
                    .with_context("low", low.to_string())
                    .with_context("high", high.to_string()),
            ));
        }
        Ok(Self {
            name,
            n_bins,
            low,
            high,
            bins: vec![0.0; n_bins],
            entries: 0,
            underflow: 0.0,
            overflow: 0.0,
            weighted: false,
            normalized: false,
        })
    }

    /// Creates a histogram flagged as weight-carrying. Shape rules match
    /// [`Histogram::new`]; the flag only travels into exported metadata.
    pub fn weighted(
        name: impl Into<String>,
        n_bins: usize,
        low: f64,
        high: f64,
    ) -> Result<Self, FragError> {
        let mut hist = Self::new(name, n_bins, low, high)?;
        hist.weighted = true;
        Ok(hist)
    }

    /// Histogram name as used for table files.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of in-range bins.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Inclusive lower edge of the range.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Exclusive upper edge of the range.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Width shared by every bin.
    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.n_bins as f64
    }

    /// Number of fill calls received, including out-of-range fills.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Accumulated weight below the range.
    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    /// Accumulated weight at or above the upper edge.
    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Whether this histogram accumulates non-unit weights.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Whether a terminal normalization has been applied.
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// In-range bin contents in bin order.
    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// Sum of the in-range bin contents.
    pub fn in_range_sum(&self) -> f64 {
        self.bins.iter().sum()
    }

    /// Center of bin `index`, `low + (index + 0.5) * bin_width`.
    pub fn bin_center(&self, index: usize) -> f64 {
        self.low + (index as f64 + 0.5) * self.bin_width()
    }

    /// Adds a unit-weight sample.
    pub fn fill(&mut self, value: f64) {
        self.fill_weighted(value, 1.0);
    }

    /// Adds a weighted sample. Every call counts one entry, whatever bin or
    /// flow counter the weight lands in. NaN counts as underflow.
    pub fn fill_weighted(&mut self, value: f64, weight: f64) {
        self.entries += 1;
        if value.is_nan() || value < self.low {
            self.underflow += weight;
            return;
        }
        if value >= self.high {
            self.overflow += weight;
            return;
        }
        // Roundoff just below the upper edge can land on n_bins; clamp.
        let index = (((value - self.low) / self.bin_width()) as usize).min(self.n_bins - 1);
        self.bins[index] += weight;
    }

    /// Rescales every in-range bin by `1 / (n_events * bin_width)`, turning
    /// counts into a per-event differential spectrum. Flow counters are left
    /// untouched. Errors on a second normalization or on zero events.
    pub fn normalize_spectrum(&mut self, n_events: u64) -> Result<(), FragError> {
        self.ensure_unnormalized()?;
        if n_events == 0 {
            return Err(FragError::Histogram(
                ErrorInfo::new(
                    "normalize-zero-events",
                    "spectrum normalization needs a positive event count",
                )
                .with_context("name", self.name.clone()),
            ));
        }
        let scale = 1.0 / (n_events as f64 * self.bin_width());
        for bin in &mut self.bins {
            *bin *= scale;
        }
        self.normalized = true;
        Ok(())
    }

    /// Rescales the in-range bins so they sum to one. A histogram whose
    /// in-range sum is exactly zero is left untouched and unnormalized, and
    /// the degenerate outcome is returned for the caller to report.
    pub fn normalize_integral(&mut self) -> Result<NormalizeOutcome, FragError> {
        self.ensure_unnormalized()?;
        let sum = self.in_range_sum();
        if sum == 0.0 {
            return Ok(NormalizeOutcome::DegenerateUnchanged);
        }
        for bin in &mut self.bins {
            *bin /= sum;
        }
        self.normalized = true;
        Ok(NormalizeOutcome::Normalized)
    }

    /// `(bin_center, bin_value)` pairs in bin order, the export layout.
    pub fn rows(&self) -> Vec<(f64, f64)> {
        self.bins
            .iter()
            .enumerate()
            .map(|(index, value)| (self.bin_center(index), *value))
            .collect()
    }

    fn ensure_unnormalized(&self) -> Result<(), FragError> {
        if self.normalized {
            return Err(FragError::Histogram(
                ErrorInfo::new("hist-normalized", "histogram was already normalized")
                    .with_context("name", self.name.clone()),
            ));
        }
        Ok(())
    }
}
