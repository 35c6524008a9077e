#![deny(missing_docs)]
#![doc = "Core types and traits for the fragplot analysis engine: event records, the status-code taxonomy, structured errors, deterministic seeding, and the event-source contract."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod event;
pub mod provenance;
pub mod rng;
pub mod status;

pub use errors::{ErrorInfo, FragError};
pub use event::{Event, ParticleRecord};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use status::{classify, StatusClass, JOINING_STATUS};

/// Initialization payload handed to an [`EventSource`] at subrun start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInit {
    /// Invariant mass of the fragmenting string, in GeV.
    pub string_mass: f64,
    /// Flavour code of the endpoint quark pair.
    pub quark_id: i32,
    /// Whether endpoint quarks are treated as massless.
    pub massless_endpoints: bool,
    /// Deterministic seed for the source's internal randomness.
    pub seed: u64,
}

/// Contract for event generators feeding the analysis engine.
///
/// The engine never inspects generator internals; it sees only the record
/// sequences produced here. Initialization failure is fatal for the run.
/// Generation failure is recoverable: the caller stops taking events from
/// the source and finalizes with whatever it has accumulated.
pub trait EventSource {
    /// Prepares the source for a subrun. Must be called before the first
    /// [`EventSource::generate`] and again between subruns.
    fn initialize(&mut self, init: &SourceInit) -> Result<(), FragError>;

    /// Produces the next event as an ordered particle-record sequence.
    fn generate(&mut self) -> Result<Event, FragError>;

    /// Stable name recorded in run provenance.
    fn name(&self) -> &str;
}
