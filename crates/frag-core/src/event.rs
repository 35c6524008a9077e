//! Particle records and the per-event record sequence.

use serde::{Deserialize, Serialize};

/// Floor applied to light-cone components so rapidity stays finite for
/// records moving exactly along the string axis.
const RAPIDITY_FLOOR: f64 = 1e-20;

/// One produced particle inside an event.
///
/// The status code carries the physics origin of the record; its magnitude
/// is what the taxonomy in [`crate::status`] classifies on. Momenta and
/// energy are in GeV with `pz` along the string axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    /// Generator status code, sign included.
    pub status: i32,
    /// Transverse momentum component x.
    pub px: f64,
    /// Transverse momentum component y.
    pub py: f64,
    /// Longitudinal momentum along the string axis.
    pub pz: f64,
    /// Energy.
    pub energy: f64,
    /// Invariant mass.
    pub mass: f64,
}

impl ParticleRecord {
    /// Creates a record from a status code and four-momentum components.
    pub fn new(status: i32, px: f64, py: f64, pz: f64, energy: f64, mass: f64) -> Self {
        Self {
            status,
            px,
            py,
            pz,
            energy,
            mass,
        }
    }

    /// Rapidity along the string axis, `0.5 * ln((E + pz) / (E - pz))`.
    ///
    /// Both light-cone components are floored at a small positive value, so
    /// massless records moving exactly along the axis map to a large finite
    /// rapidity instead of an infinity.
    pub fn rapidity(&self) -> f64 {
        let plus = (self.energy + self.pz).max(RAPIDITY_FLOOR);
        let minus = (self.energy - self.pz).max(RAPIDITY_FLOOR);
        0.5 * (plus / minus).ln()
    }

    /// Transverse momentum magnitude.
    pub fn p_t(&self) -> f64 {
        self.px.hypot(self.py)
    }

    /// Forward light-cone momentum `E + pz`.
    pub fn lightcone_plus(&self) -> f64 {
        self.energy + self.pz
    }
}

/// Ordered particle-record sequence for one generated event.
///
/// Order is meaningful: rank assignment and spacing classification both walk
/// the sequence as produced by the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    records: Vec<ParticleRecord>,
}

impl Event {
    /// Creates an empty event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an event from an already ordered record sequence.
    pub fn from_records(records: Vec<ParticleRecord>) -> Self {
        Self { records }
    }

    /// Appends a record to the end of the sequence.
    pub fn push(&mut self, record: ParticleRecord) {
        self.records.push(record);
    }

    /// Returns the record sequence in production order.
    pub fn records(&self) -> &[ParticleRecord] {
        &self.records
    }

    /// Number of records in the event.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the event holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
