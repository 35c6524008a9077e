use std::error::Error;

use clap::Args;
use frag_core::EventSource;
use frag_gen::ToyStringSource;
use frag_run::{RunConfig, SubrunOutcome};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Number of toy events to generate.
    #[arg(long, default_value_t = 200)]
    pub events: u64,
    /// Master deterministic seed.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,
    /// Invariant mass of the fragmenting string (GeV).
    #[arg(long, default_value_t = 500.0)]
    pub string_mass: f64,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    provenance: DemoProvenance,
    outcome: SubrunOutcome,
    warnings: Vec<String>,
    tables: Vec<TableSummary>,
}

#[derive(Debug, Serialize)]
struct DemoProvenance {
    source: String,
    events: u64,
    seed: u64,
    string_mass: f64,
}

#[derive(Debug, Serialize)]
struct TableSummary {
    name: String,
    role: String,
    entries: u64,
    normalized: bool,
    in_range_sum: f64,
}

pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let report = build_demo_report(args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_demo_report(args: &DemoArgs) -> Result<DemoReport, Box<dyn Error>> {
    let mut config = RunConfig {
        events: args.events,
        subruns: 1,
        string_mass: args.string_mass,
        ..RunConfig::default()
    };
    config.seed_policy.master_seed = args.seed;
    config.validate()?;

    let mut source = ToyStringSource::default();
    let source_name = source.name().to_string();
    let report = frag_run::run(&config, &mut source)?;
    let subrun = report
        .subruns
        .into_iter()
        .next()
        .ok_or("run produced no subrun report")?;

    let tables = subrun
        .histograms
        .tables
        .iter()
        .map(|(name, table)| TableSummary {
            name: name.clone(),
            role: table.role.as_str().to_string(),
            entries: table.histogram.entries(),
            normalized: table.histogram.is_normalized(),
            in_range_sum: table.histogram.in_range_sum(),
        })
        .collect();

    Ok(DemoReport {
        provenance: DemoProvenance {
            source: source_name,
            events: args.events,
            seed: args.seed,
            string_mass: args.string_mass,
        },
        outcome: subrun.outcome,
        warnings: subrun.warnings,
        tables,
    })
}
