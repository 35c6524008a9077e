//! Rank and momentum-fraction assignment for joining-step hadrons.

use frag_core::event::Event;
use frag_core::status::{classify, StatusClass};
use serde::{Deserialize, Serialize};

use crate::select::PrimaryHadron;

/// How the scan decides that a ranked hadron closes its chain.
///
/// The two rules disagree whenever a non-primary record sits between two
/// joining-step hadrons. Raw lookahead is the inherited behavior and the
/// default; the filtered rule is kept selectable so the difference stays
/// measurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LastRankRule {
    /// Inspect the next record in the raw event sequence.
    #[default]
    RawLookahead,
    /// Inspect the next entry in the primary-filtered list.
    FilteredLookahead,
}

impl LastRankRule {
    /// Stable lowercase label used in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            LastRankRule::RawLookahead => "raw_lookahead",
            LastRankRule::FilteredLookahead => "filtered_lookahead",
        }
    }
}

/// A joining-step hadron with its production rank and momentum fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedHadron {
    /// Position of the hadron in the raw event sequence.
    pub index: usize,
    /// 1-based production rank among joining-step hadrons.
    pub rank: u32,
    /// Forward light-cone momentum over the string's remaining budget at
    /// the time this hadron was produced.
    pub z: f64,
    /// Whether the lookahead rule marks this hadron as closing its chain.
    pub last: bool,
}

/// Walks the primary list in order, ranking joining-step hadrons.
///
/// `remaining` starts at the full string energy and shrinks by each ranked
/// hadron's forward light-cone momentum; it is never reset within an event,
/// so rank k's z-fraction is taken out of what ranks 1..k-1 left behind.
/// Non-joining primaries receive no rank and do not touch the budget.
/// `primaries` must come from `select_primaries` on the same `event`.
pub fn rank_scan(
    event: &Event,
    primaries: &[PrimaryHadron<'_>],
    string_energy: f64,
    rule: LastRankRule,
) -> Vec<RankedHadron> {
    let mut remaining = string_energy;
    let mut rank = 0u32;
    let mut ranked = Vec::new();
    for (pos, hadron) in primaries.iter().enumerate() {
        if !hadron.is_joining() {
            continue;
        }
        rank += 1;
        let forward = hadron.lightcone_plus();
        let last = match rule {
            LastRankRule::RawLookahead => event
                .records()
                .get(hadron.index() + 1)
                .map(|next| classify(next.status) == StatusClass::Joining)
                .unwrap_or(false),
            LastRankRule::FilteredLookahead => primaries
                .get(pos + 1)
                .map(|next| next.is_joining())
                .unwrap_or(false),
        };
        ranked.push(RankedHadron {
            index: hadron.index(),
            rank,
            z: forward / remaining,
            last,
        });
        remaining -= forward;
    }
    ranked
}
