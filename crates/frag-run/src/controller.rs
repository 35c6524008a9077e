use std::path::PathBuf;

use frag_analysis::{rank_scan, select_primaries, spacing_scan};
use frag_core::errors::{ErrorInfo, FragError};
use frag_core::{Event, EventSource, SourceInit};
use serde::{Deserialize, Serialize};

use crate::book::{FinalizedHistograms, SubrunHistograms};
use crate::config::RunConfig;
use crate::export;

/// Lifecycle phase of a [`RunController`]. Transitions are strictly forward:
/// `Configuring -> Initialized -> Running -> Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Constructed, source not yet initialized.
    Configuring,
    /// Source initialized and histograms booked.
    Initialized,
    /// Event loop in flight.
    Running,
    /// Histograms finalized; the controller is spent.
    Finalized,
}

impl RunPhase {
    /// Stable lowercase label for diagnostics and manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Configuring => "configuring",
            RunPhase::Initialized => "initialized",
            RunPhase::Running => "running",
            RunPhase::Finalized => "finalized",
        }
    }
}

/// Event-count accounting for one subrun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubrunOutcome {
    /// Events the configuration asked for.
    pub requested: u64,
    /// Generation attempts made, including the failed one on truncation.
    pub attempted: u64,
    /// Events generated and accumulated.
    pub completed: u64,
    /// Whether the loop stopped on a generation failure.
    pub truncated: bool,
}

/// Everything one subrun produced: accounting, warnings, and the finalized
/// histogram set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubrunReport {
    /// One-based subrun index.
    pub subrun: usize,
    /// Substream seed the subrun ran with.
    pub seed: u64,
    /// Event accounting.
    pub outcome: SubrunOutcome,
    /// Non-fatal conditions encountered, in occurrence order.
    pub warnings: Vec<String>,
    /// Finalized histogram tables.
    pub histograms: FinalizedHistograms,
}

/// Report for a whole run: one subrun report per configured subrun, plus the
/// directories written when file output is enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Per-subrun reports, in subrun order.
    pub subruns: Vec<SubrunReport>,
    /// Subrun output directories, empty when no run directory is configured.
    pub artifacts: Vec<PathBuf>,
}

/// Drives one subrun through its lifecycle against an [`EventSource`].
///
/// The controller owns the histogram roster and the warning list; the source
/// is borrowed for each phase so callers can reuse one generator across
/// subruns with fresh seeds.
#[derive(Debug)]
pub struct RunController {
    config: RunConfig,
    subrun: usize,
    seed: u64,
    phase: RunPhase,
    histograms: Option<SubrunHistograms>,
    warnings: Vec<String>,
}

impl RunController {
    /// Creates a controller for one subrun of a validated configuration.
    pub fn new(config: &RunConfig, subrun: usize) -> Result<Self, FragError> {
        config.validate()?;
        if subrun == 0 || subrun > config.subruns {
            return Err(FragError::Config(
                ErrorInfo::new(
                    "config-subrun-index",
                    "subrun index outside the configured range",
                )
                .with_context("subrun", subrun.to_string())
                .with_context("subruns", config.subruns.to_string()),
            ));
        }
        let seed = config.seed_policy.subrun_seed(subrun);
        Ok(Self {
            config: config.clone(),
            subrun,
            seed,
            phase: RunPhase::Configuring,
            histograms: None,
            warnings: Vec::new(),
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Substream seed this subrun runs with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Initializes the source with this subrun's seed and books the
    /// histogram roster.
    pub fn initialize(&mut self, source: &mut dyn EventSource) -> Result<(), FragError> {
        if self.phase != RunPhase::Configuring {
            return Err(self.phase_error("initialize"));
        }
        let init = SourceInit {
            string_mass: self.config.string_mass,
            quark_id: self.config.quark_id,
            massless_endpoints: self.config.massless_endpoints,
            seed: self.seed,
        };
        source.initialize(&init)?;
        self.histograms = Some(SubrunHistograms::book(&self.config.binning)?);
        self.phase = RunPhase::Initialized;
        Ok(())
    }

    /// Runs the event loop to the requested count, accumulates every
    /// generated event, and finalizes the histograms.
    ///
    /// A generation failure does not abort the subrun: the loop stops, the
    /// failure is recorded as a warning, the outcome is flagged truncated,
    /// and the histograms accumulated so far are finalized as usual.
    pub fn execute(&mut self, source: &mut dyn EventSource) -> Result<SubrunReport, FragError> {
        if self.phase != RunPhase::Initialized {
            return Err(self.phase_error("execute"));
        }
        let mut histograms = self.histograms.take().ok_or_else(|| {
            FragError::Config(
                ErrorInfo::new("controller-phase", "histograms missing after initialization")
                    .with_context("subrun", self.subrun.to_string()),
            )
        })?;
        self.phase = RunPhase::Running;

        let requested = self.config.events;
        let mut attempted = 0_u64;
        let mut completed = 0_u64;
        let mut truncated = false;
        while attempted < requested {
            attempted += 1;
            match source.generate() {
                Ok(event) => {
                    self.accumulate(&event, &mut histograms);
                    completed += 1;
                }
                Err(err) => {
                    self.warnings.push(format!(
                        "subrun {} truncated at event {}: {}",
                        self.subrun, attempted, err
                    ));
                    truncated = true;
                    break;
                }
            }
        }

        let histograms = histograms.finalize(requested, &mut self.warnings)?;
        self.phase = RunPhase::Finalized;
        Ok(SubrunReport {
            subrun: self.subrun,
            seed: self.seed,
            outcome: SubrunOutcome {
                requested,
                attempted,
                completed,
                truncated,
            },
            warnings: std::mem::take(&mut self.warnings),
            histograms,
        })
    }

    /// Runs the three analysis passes over one event and books the results.
    fn accumulate(&self, event: &Event, histograms: &mut SubrunHistograms) {
        let primaries = select_primaries(event);
        for hadron in &primaries {
            histograms.record_primary(hadron.rapidity(), hadron.p_t(), hadron.mass());
        }
        let ranked = rank_scan(
            event,
            &primaries,
            self.config.string_mass,
            self.config.last_rank_rule,
        );
        for hadron in &ranked {
            histograms.record_ranked(hadron);
        }
        for sample in spacing_scan(&primaries) {
            histograms.record_spacing(&sample);
        }
    }

    fn phase_error(&self, operation: &str) -> FragError {
        FragError::Config(
            ErrorInfo::new("controller-phase", "operation not valid in the current phase")
                .with_context("operation", operation)
                .with_context("phase", self.phase.as_str()),
        )
    }
}

/// Runs every configured subrun against `source` and, when a run directory
/// is configured, exports each subrun's tables and manifest beneath it.
pub fn run(config: &RunConfig, source: &mut dyn EventSource) -> Result<RunReport, FragError> {
    config.validate()?;
    let mut subruns = Vec::with_capacity(config.subruns);
    let mut artifacts = Vec::new();
    for subrun in 1..=config.subruns {
        let mut controller = RunController::new(config, subrun)?;
        controller.initialize(source)?;
        let report = controller.execute(source)?;
        if let Some(run_dir) = &config.output.run_directory {
            artifacts.push(export::write_subrun(&report, config, source.name(), run_dir)?);
        }
        subruns.push(report);
    }
    Ok(RunReport { subruns, artifacts })
}
