//! Primary-hadron selection over one event's record sequence.

use frag_core::event::{Event, ParticleRecord};
use frag_core::status::{classify, StatusClass};

/// Borrowed view of one record that survived the primary-hadron filter.
///
/// Keeps the record's position in the raw sequence so downstream passes can
/// reason about raw adjacency where they need to.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryHadron<'a> {
    record: &'a ParticleRecord,
    index: usize,
    joining: bool,
}

impl<'a> PrimaryHadron<'a> {
    /// The underlying particle record.
    pub fn record(&self) -> &'a ParticleRecord {
        self.record
    }

    /// Position of the record in the raw event sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this hadron came from the string-joining step.
    pub fn is_joining(&self) -> bool {
        self.joining
    }

    /// Rapidity of the underlying record.
    pub fn rapidity(&self) -> f64 {
        self.record.rapidity()
    }

    /// Transverse momentum of the underlying record.
    pub fn p_t(&self) -> f64 {
        self.record.p_t()
    }

    /// Forward light-cone momentum of the underlying record.
    pub fn lightcone_plus(&self) -> f64 {
        self.record.lightcone_plus()
    }

    /// Invariant mass of the underlying record.
    pub fn mass(&self) -> f64 {
        self.record.mass
    }
}

/// Filters an event down to its primary hadrons, preserving order.
///
/// A record survives when its status class is primary: joining-step or
/// regular fragmentation. The scan is a single left-to-right pass and never
/// reorders. Events with zero or one primary produce an empty or singleton
/// list, which downstream reducers accept.
pub fn select_primaries(event: &Event) -> Vec<PrimaryHadron<'_>> {
    event
        .records()
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match classify(record.status) {
            StatusClass::Joining => Some(PrimaryHadron {
                record,
                index,
                joining: true,
            }),
            StatusClass::Regular => Some(PrimaryHadron {
                record,
                index,
                joining: false,
            }),
            StatusClass::Other => None,
        })
        .collect()
}
