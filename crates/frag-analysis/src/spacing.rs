//! Rapidity-gap classification for adjacent primary hadrons.

use serde::{Deserialize, Serialize};

use crate::select::PrimaryHadron;

/// Destination bucket for one adjacent-pair rapidity gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingBucket {
    /// Either endpoint of the pair is a joining-step hadron.
    Joining,
    /// Neither endpoint is joining and the pair sits away from both ends.
    Regular,
    /// The pair touches the first or last primary hadron; endpoint
    /// spacings are not representative of bulk behavior and are dropped.
    Excluded,
}

impl SpacingBucket {
    /// Stable lowercase label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpacingBucket::Joining => "joining",
            SpacingBucket::Regular => "regular",
            SpacingBucket::Excluded => "excluded",
        }
    }
}

/// Rapidity gap between two adjacent primary hadrons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingSample {
    /// `y[i] - y[i+1]` for the pair starting at primary position `i`.
    pub delta_y: f64,
    /// Bucket the gap belongs to.
    pub bucket: SpacingBucket,
}

/// Classifies every adjacent pair in the primary list.
///
/// Adjacency is over the filtered list, not the raw record sequence: gaps
/// run between consecutive surviving primaries. The joining rule wins over
/// the endpoint rule when both apply. Lists shorter than two primaries
/// produce no samples.
pub fn spacing_scan(primaries: &[PrimaryHadron<'_>]) -> Vec<SpacingSample> {
    let count = primaries.len();
    if count < 2 {
        return Vec::new();
    }
    let mut samples = Vec::with_capacity(count - 1);
    for (i, pair) in primaries.windows(2).enumerate() {
        let bucket = if pair[0].is_joining() || pair[1].is_joining() {
            SpacingBucket::Joining
        } else if i == 0 || i + 2 == count {
            SpacingBucket::Excluded
        } else {
            SpacingBucket::Regular
        };
        samples.push(SpacingSample {
            delta_y: pair[0].rapidity() - pair[1].rapidity(),
            bucket,
        });
    }
    samples
}
