#![deny(missing_docs)]
#![doc = "Per-event reducers for string-fragmentation analysis: primary-hadron selection, rank and momentum-fraction assignment, and rapidity-spacing classification."]

pub mod rank;
pub mod select;
pub mod spacing;

pub use rank::{rank_scan, LastRankRule, RankedHadron};
pub use select::{select_primaries, PrimaryHadron};
pub use spacing::{spacing_scan, SpacingBucket, SpacingSample};
