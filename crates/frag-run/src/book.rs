use frag_analysis::{RankedHadron, SpacingBucket, SpacingSample};
use frag_core::errors::FragError;
use frag_hist::{Histogram, NormalizationRole, NormalizeOutcome};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::BinningConfig;

/// Highest production rank with a dedicated z table; higher ranks only
/// contribute to the mid-rank aggregate.
pub const RANK_CAP: u32 = 6;

/// The owned histogram roster for one subrun.
///
/// Booked fresh at subrun start, filled during the event loop, consumed by
/// [`SubrunHistograms::finalize`]. Nothing else mutates the histograms, so
/// the normalization latch can only trip once per table.
#[derive(Debug, Clone)]
pub struct SubrunHistograms {
    dndy: Histogram,
    dptdy: Histogram,
    z_all: Histogram,
    z_rank: Vec<Histogram>,
    z_mid: Histogram,
    z_last: Histogram,
    dy_join: Histogram,
    dy_reg: Histogram,
    mass: Histogram,
}

impl SubrunHistograms {
    /// Books every histogram with the configured axes.
    pub fn book(binning: &BinningConfig) -> Result<Self, FragError> {
        let y = binning.rapidity;
        let z = binning.z;
        let dy = binning.delta_y;
        let m = binning.mass;
        let mut z_rank = Vec::with_capacity(RANK_CAP as usize);
        for rank in 1..=RANK_CAP {
            z_rank.push(Histogram::new(format!("z_{rank}"), z.bins, z.low, z.high)?);
        }
        Ok(Self {
            dndy: Histogram::new("dndy", y.bins, y.low, y.high)?,
            dptdy: Histogram::weighted("dptdy", y.bins, y.low, y.high)?,
            z_all: Histogram::new("z_all", z.bins, z.low, z.high)?,
            z_rank,
            z_mid: Histogram::new("z_mid", z.bins, z.low, z.high)?,
            z_last: Histogram::new("z_last", z.bins, z.low, z.high)?,
            dy_join: Histogram::new("dy_join", dy.bins, dy.low, dy.high)?,
            dy_reg: Histogram::new("dy_reg", dy.bins, dy.low, dy.high)?,
            mass: Histogram::new("mass", m.bins, m.low, m.high)?,
        })
    }

    /// Books one primary hadron: rapidity density, pT-weighted density,
    /// and the invariant-mass table.
    pub fn record_primary(&mut self, rapidity: f64, p_t: f64, mass: f64) {
        self.dndy.fill(rapidity);
        self.dptdy.fill_weighted(rapidity, p_t);
        self.mass.fill(mass);
    }

    /// Routes one ranked hadron's momentum fraction. Every ranked hadron
    /// lands in `z_all`; a chain-closing hadron lands in `z_last` alone,
    /// anything else in its per-rank table (up to the cap) and, beyond rank
    /// one, the mid-rank aggregate.
    pub fn record_ranked(&mut self, ranked: &RankedHadron) {
        self.z_all.fill(ranked.z);
        if ranked.last {
            self.z_last.fill(ranked.z);
            return;
        }
        if ranked.rank > 1 {
            self.z_mid.fill(ranked.z);
        }
        if (1..=RANK_CAP).contains(&ranked.rank) {
            self.z_rank[(ranked.rank - 1) as usize].fill(ranked.z);
        }
    }

    /// Routes one spacing sample. Endpoint-excluded samples are dropped;
    /// they do not represent bulk spacing behavior.
    pub fn record_spacing(&mut self, sample: &SpacingSample) {
        match sample.bucket {
            SpacingBucket::Joining => self.dy_join.fill(sample.delta_y),
            SpacingBucket::Regular => self.dy_reg.fill(sample.delta_y),
            SpacingBucket::Excluded => {}
        }
    }

    /// Applies each table's terminal normalization exactly once and freezes
    /// the roster into an insertion-ordered map.
    ///
    /// Spectrum tables divide by the *requested* event count, matching the
    /// inherited normalization even when a subrun truncates early. A zero
    /// request skips spectrum normalization; a degenerate integral leaves
    /// its table unnormalized. Both conditions append to `warnings` instead
    /// of failing the run.
    pub fn finalize(
        self,
        requested_events: u64,
        warnings: &mut Vec<String>,
    ) -> Result<FinalizedHistograms, FragError> {
        let mut tables = IndexMap::new();
        for (mut hist, role) in self.into_roster() {
            match role {
                NormalizationRole::Spectrum => {
                    if requested_events == 0 {
                        warnings.push(format!(
                            "{}: spectrum normalization skipped, zero events requested",
                            hist.name()
                        ));
                    } else {
                        hist.normalize_spectrum(requested_events)?;
                    }
                }
                NormalizationRole::Integral => {
                    if hist.normalize_integral()? == NormalizeOutcome::DegenerateUnchanged {
                        warnings.push(format!(
                            "{}: integral normalization degenerate, all bins zero",
                            hist.name()
                        ));
                    }
                }
            }
            tables.insert(hist.name().to_string(), FinalizedTable { role, histogram: hist });
        }
        Ok(FinalizedHistograms { tables })
    }

    fn into_roster(self) -> Vec<(Histogram, NormalizationRole)> {
        let mut roster = vec![
            (self.dndy, NormalizationRole::Spectrum),
            (self.dptdy, NormalizationRole::Spectrum),
            (self.z_all, NormalizationRole::Spectrum),
        ];
        for hist in self.z_rank {
            roster.push((hist, NormalizationRole::Spectrum));
        }
        roster.push((self.z_mid, NormalizationRole::Spectrum));
        roster.push((self.z_last, NormalizationRole::Spectrum));
        roster.push((self.dy_join, NormalizationRole::Integral));
        roster.push((self.dy_reg, NormalizationRole::Integral));
        roster.push((self.mass, NormalizationRole::Integral));
        roster
    }
}

/// One finalized histogram with its declared normalization role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizedTable {
    /// Terminal normalization the table was booked with.
    pub role: NormalizationRole,
    /// The frozen histogram.
    pub histogram: Histogram,
}

/// Finalized, read-only histogram set for one subrun, keyed by table name
/// in booking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizedHistograms {
    /// Tables in booking order.
    pub tables: IndexMap<String, FinalizedTable>,
}

impl FinalizedHistograms {
    /// Looks up one finalized table by name.
    pub fn get(&self, name: &str) -> Option<&FinalizedTable> {
        self.tables.get(name)
    }
}
