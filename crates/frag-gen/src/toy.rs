//! Deterministic toy string splitter.
//!
//! Peels hadrons off both light-cone ends of a q-qbar string until the
//! remaining invariant mass drops below a joining threshold, then emits the
//! two joining-step hadrons that absorb the leftover budget. The record
//! sequence carries the status taxonomy the analysis expects (23 for the
//! initial partons, 83/84 for the two chains, ±1216 for the joining pair)
//! and conserves light-cone momentum exactly. No attempt is made at
//! physical fragmentation functions.

use frag_core::errors::{ErrorInfo, FragError};
use frag_core::event::{Event, ParticleRecord};
use frag_core::rng::RngHandle;
use frag_core::status::JOINING_STATUS;
use frag_core::{EventSource, SourceInit};
use rand::RngCore;

/// Pion mass shared by every chain hadron (GeV).
const HADRON_MASS: f64 = 0.13957;
/// Width of the Gaussian transverse kick per splitting (GeV).
const PT_SIGMA: f64 = 0.35;
/// Remaining invariant mass below which the two chains join (GeV).
const JOIN_MASS: f64 = 2.0;
/// Cap on splittings per event; keeps the loop bounded whatever the input.
const MAX_SPLITS: usize = 4096;

const STATUS_PARTON: i32 = 23;
const STATUS_PLUS_CHAIN: i32 = 83;
const STATUS_MINUS_CHAIN: i32 = 84;

/// Toy event source producing fragmentation-shaped record sequences.
#[derive(Debug, Clone)]
pub struct ToyStringSource {
    init: Option<SourceInit>,
    rng: RngHandle,
}

impl ToyStringSource {
    /// Creates a source that must be initialized before generating.
    pub fn new() -> Self {
        Self {
            init: None,
            rng: RngHandle::from_seed(0),
        }
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.next_u64() as f64 / u64::MAX as f64
    }

    fn transverse_kick(&mut self, sigma: f64) -> (f64, f64) {
        let u = self.next_unit().max(f64::MIN_POSITIVE);
        let v = self.next_unit();
        let radius = sigma * (-2.0 * u.ln()).sqrt();
        let angle = std::f64::consts::TAU * v;
        (radius * angle.cos(), radius * angle.sin())
    }
}

impl Default for ToyStringSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for ToyStringSource {
    fn initialize(&mut self, init: &SourceInit) -> Result<(), FragError> {
        if !init.string_mass.is_finite() || init.string_mass <= JOIN_MASS {
            return Err(FragError::Init(
                ErrorInfo::new(
                    "source-init",
                    "string mass must exceed the joining threshold",
                )
                .with_context("string_mass", init.string_mass.to_string())
                .with_context("join_mass", JOIN_MASS.to_string()),
            ));
        }
        if init.quark_id == 0 {
            return Err(FragError::Init(
                ErrorInfo::new("source-init", "endpoint quark id must be nonzero")
                    .with_context("quark_id", init.quark_id.to_string()),
            ));
        }
        self.rng = RngHandle::from_seed(init.seed);
        self.init = Some(init.clone());
        Ok(())
    }

    fn generate(&mut self) -> Result<Event, FragError> {
        let init = self.init.clone().ok_or_else(|| {
            FragError::Generation(ErrorInfo::new(
                "source-order",
                "generate called before initialize",
            ))
        })?;

        let w = init.string_mass;
        let end_mass = if init.massless_endpoints {
            0.0
        } else {
            endpoint_mass(init.quark_id)
        };
        let half = w / 2.0;
        let momentum = (half * half - end_mass * end_mass).max(0.0).sqrt();

        let mut records = vec![
            ParticleRecord::new(STATUS_PARTON, 0.0, 0.0, momentum, half, end_mass),
            ParticleRecord::new(STATUS_PARTON, 0.0, 0.0, -momentum, half, end_mass),
        ];

        // Light-cone budgets: the string starts with p+ = p- = W in total.
        let mut w_plus = w;
        let mut w_minus = w;
        let mut plus_chain = Vec::new();
        let mut minus_chain = Vec::new();

        for _ in 0..MAX_SPLITS {
            if w_plus * w_minus <= JOIN_MASS * JOIN_MASS {
                break;
            }
            let from_plus = self.next_unit() < 0.5;
            let z = 0.15 + 0.7 * self.next_unit();
            let (kx, ky) = self.transverse_kick(PT_SIGMA);
            let mt2 = HADRON_MASS * HADRON_MASS + kx * kx + ky * ky;
            if from_plus {
                let p_plus = z * w_plus;
                let p_minus = mt2 / p_plus;
                if p_minus >= w_minus {
                    break;
                }
                plus_chain.push(chain_hadron(STATUS_PLUS_CHAIN, kx, ky, p_plus, p_minus));
                w_plus -= p_plus;
                w_minus -= p_minus;
            } else {
                let p_minus = z * w_minus;
                let p_plus = mt2 / p_minus;
                if p_plus >= w_plus {
                    break;
                }
                minus_chain.push(chain_hadron(STATUS_MINUS_CHAIN, kx, ky, p_plus, p_minus));
                w_plus -= p_plus;
                w_minus -= p_minus;
            }
        }

        // Joining step: the two closing hadrons share the leftover budget
        // crosswise, so the event's total p+ and p- land back at W exactly.
        let share = 0.3 + 0.4 * self.next_unit();
        let (jx, jy) = self.transverse_kick(PT_SIGMA * 0.5);
        let first = joining_hadron(JOINING_STATUS, jx, jy, share * w_plus, (1.0 - share) * w_minus);
        let second = joining_hadron(
            -JOINING_STATUS,
            -jx,
            -jy,
            (1.0 - share) * w_plus,
            share * w_minus,
        );

        records.extend(plus_chain);
        records.push(first);
        records.push(second);
        minus_chain.reverse();
        records.extend(minus_chain);

        Ok(Event::from_records(records))
    }

    fn name(&self) -> &str {
        "toy-string"
    }
}

fn chain_hadron(status: i32, px: f64, py: f64, p_plus: f64, p_minus: f64) -> ParticleRecord {
    ParticleRecord::new(
        status,
        px,
        py,
        0.5 * (p_plus - p_minus),
        0.5 * (p_plus + p_minus),
        HADRON_MASS,
    )
}

fn joining_hadron(status: i32, px: f64, py: f64, p_plus: f64, p_minus: f64) -> ParticleRecord {
    let mass_sq = p_plus * p_minus - (px * px + py * py);
    ParticleRecord::new(
        status,
        px,
        py,
        0.5 * (p_plus - p_minus),
        0.5 * (p_plus + p_minus),
        mass_sq.max(0.0).sqrt(),
    )
}

fn endpoint_mass(quark_id: i32) -> f64 {
    match quark_id.abs() {
        1 | 2 => 0.33,
        3 => 0.5,
        4 => 1.5,
        5 => 4.8,
        _ => 0.33,
    }
}
