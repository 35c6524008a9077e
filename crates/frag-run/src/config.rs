use std::fs;
use std::path::{Path, PathBuf};

use frag_analysis::LastRankRule;
use frag_core::derive_substream_seed;
use frag_core::errors::{ErrorInfo, FragError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of events requested per subrun.
    pub events: u64,
    /// Number of independent subruns, each with fresh histograms and seed.
    #[serde(default = "default_subruns")]
    pub subruns: usize,
    /// Invariant mass of the fragmenting string (GeV).
    #[serde(default = "default_string_mass")]
    pub string_mass: f64,
    /// Flavour code of the endpoint quark pair.
    #[serde(default = "default_quark_id")]
    pub quark_id: i32,
    /// Whether the endpoint quarks are treated as massless.
    #[serde(default)]
    pub massless_endpoints: bool,
    /// Lookahead rule for last-in-chain detection.
    #[serde(default)]
    pub last_rank_rule: LastRankRule,
    /// Histogram axis layout.
    #[serde(default)]
    pub binning: BinningConfig,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Output directory configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_subruns() -> usize {
    1
}

fn default_string_mass() -> f64 {
    500.0
}

fn default_quark_id() -> i32 {
    2
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            events: 1000,
            subruns: default_subruns(),
            string_mass: default_string_mass(),
            quark_id: default_quark_id(),
            massless_endpoints: false,
            last_rank_rule: LastRankRule::default(),
            binning: BinningConfig::default(),
            seed_policy: SeedPolicy::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    /// Loads and parses a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, FragError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            FragError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_yaml::from_str(&contents).map_err(|err| {
            FragError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Validates the configuration before a run starts.
    ///
    /// Zero `events` is allowed (the run produces all-zero tables); zero
    /// `subruns` is not.
    pub fn validate(&self) -> Result<(), FragError> {
        if self.subruns == 0 {
            return Err(FragError::Config(ErrorInfo::new(
                "config-subruns",
                "at least one subrun is required",
            )));
        }
        if !self.string_mass.is_finite() || self.string_mass <= 0.0 {
            return Err(FragError::Config(
                ErrorInfo::new("config-mass", "string mass must be positive and finite")
                    .with_context("string_mass", self.string_mass.to_string()),
            ));
        }
        if self.quark_id == 0 {
            return Err(FragError::Config(ErrorInfo::new(
                "config-quark",
                "endpoint quark id must be nonzero",
            )));
        }
        self.binning.validate()
    }
}

/// Axis layout shared by one histogram family.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Number of equal-width bins.
    pub bins: usize,
    /// Inclusive lower edge.
    pub low: f64,
    /// Exclusive upper edge.
    pub high: f64,
}

impl AxisConfig {
    /// Creates an axis descriptor.
    pub const fn new(bins: usize, low: f64, high: f64) -> Self {
        Self { bins, low, high }
    }

    fn validate(&self, axis: &str) -> Result<(), FragError> {
        if self.bins == 0 || !self.low.is_finite() || !self.high.is_finite() || self.low >= self.high
        {
            return Err(FragError::Config(
                ErrorInfo::new("config-axis", "axis needs positive bins and low < high")
                    .with_context("axis", axis)
                    .with_context("bins", self.bins.to_string())
                    .with_context("low", self.low.to_string())
                    .with_context("high", self.high.to_string()),
            ));
        }
        Ok(())
    }
}

/// Axis layout for every histogram family booked by a subrun.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BinningConfig {
    /// Rapidity axis, shared by the density and pT-weighted density tables.
    #[serde(default = "default_rapidity_axis")]
    pub rapidity: AxisConfig,
    /// Momentum-fraction axis for the rank-stratified z tables.
    #[serde(default = "default_z_axis")]
    pub z: AxisConfig,
    /// Rapidity-gap axis for the spacing tables.
    #[serde(default = "default_delta_y_axis")]
    pub delta_y: AxisConfig,
    /// Invariant-mass axis for the primary-hadron mass table.
    #[serde(default = "default_mass_axis")]
    pub mass: AxisConfig,
}

fn default_rapidity_axis() -> AxisConfig {
    AxisConfig::new(100, -10.0, 10.0)
}

fn default_z_axis() -> AxisConfig {
    AxisConfig::new(100, 0.0, 1.0)
}

fn default_delta_y_axis() -> AxisConfig {
    AxisConfig::new(100, -5.0, 5.0)
}

fn default_mass_axis() -> AxisConfig {
    AxisConfig::new(100, 0.0, 2.5)
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            rapidity: default_rapidity_axis(),
            z: default_z_axis(),
            delta_y: default_delta_y_axis(),
            mass: default_mass_axis(),
        }
    }
}

impl BinningConfig {
    fn validate(&self) -> Result<(), FragError> {
        self.rapidity.validate("rapidity")?;
        self.z.validate("z")?;
        self.delta_y.validate("delta_y")?;
        self.mass.validate("mass")
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label used when deriving substream seeds (documented in manifests).
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

impl SeedPolicy {
    /// Derives the seed handed to the event source for a subrun.
    pub fn subrun_seed(&self, subrun: usize) -> u64 {
        derive_substream_seed(self.master_seed, subrun as u64)
    }
}

/// Output directory layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for run artefacts. Created if it does not exist.
    #[serde(default)]
    pub run_directory: Option<PathBuf>,
    /// Manifest filename relative to each subrun directory.
    #[serde(default = "default_manifest_filename")]
    pub manifest_file: PathBuf,
}

fn default_manifest_filename() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            run_directory: None,
            manifest_file: default_manifest_filename(),
        }
    }
}
