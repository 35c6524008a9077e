//! Status-code taxonomy for produced particles.

use serde::{Deserialize, Serialize};

/// Status magnitude marking hadrons produced by the string-joining step.
pub const JOINING_STATUS: i32 = 1216;

/// Physics origin of a particle as encoded by its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusClass {
    /// Hadron emitted by the string-joining step (|code| == 1216).
    Joining,
    /// Ordinary fragmentation hadron (80 < |code| < 90, both ends open).
    Regular,
    /// Anything else: partons, decay products, bookkeeping entries.
    Other,
}

impl StatusClass {
    /// Stable lowercase label used in reports and warnings.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Joining => "joining",
            StatusClass::Regular => "regular",
            StatusClass::Other => "other",
        }
    }

    /// Whether records of this class count as primary hadrons.
    pub fn is_primary(&self) -> bool {
        matches!(self, StatusClass::Joining | StatusClass::Regular)
    }
}

/// Classifies a raw status code.
///
/// Only the magnitude matters; the sign carries generator-internal flavour
/// information that the analysis ignores.
pub fn classify(status: i32) -> StatusClass {
    let magnitude = status.abs();
    if magnitude == JOINING_STATUS {
        StatusClass::Joining
    } else if magnitude > 80 && magnitude < 90 {
        StatusClass::Regular
    } else {
        StatusClass::Other
    }
}
