use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use commands::demo::{self, DemoArgs};
use frag_gen::ToyStringSource;
use frag_run::{run, RunConfig, RunReport};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "frag-sim", about = "String-fragmentation hadron analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute an analysis run from a YAML configuration.
    Run(RunArgs),
    /// Run a small toy analysis and print its report as JSON.
    Demo(DemoArgs),
}

#[derive(ClapArgs, Debug)]
struct RunArgs {
    /// YAML configuration describing the analysis run.
    #[arg(long)]
    config: PathBuf,
    /// Output directory for run artefacts.
    #[arg(long)]
    out: PathBuf,
    /// Override the configured master seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run_analysis(args),
        Command::Demo(args) => demo::run(&args),
    }
}

fn run_analysis(args: RunArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let config = load_config(&args.config, &args.out, args.seed)?;
    let mut source = ToyStringSource::default();
    let report = run(&config, &mut source)?;

    for subrun in &report.subruns {
        for warning in &subrun.warnings {
            eprintln!("warning: {warning}");
        }
    }
    print_summary(&report);
    write_json(args.out.join("summary.json"), &report)?;

    // Persist the run configuration for reproducibility.
    fs::copy(&args.config, args.out.join("config.yaml")).ok();

    Ok(())
}

fn load_config(
    path: &Path,
    out_dir: &Path,
    seed: Option<u64>,
) -> Result<RunConfig, Box<dyn Error>> {
    let mut config = RunConfig::load(path)?;
    config.output.run_directory = Some(out_dir.to_path_buf());
    if let Some(master_seed) = seed {
        config.seed_policy.master_seed = master_seed;
    }
    config.validate()?;
    Ok(config)
}

fn print_summary(report: &RunReport) {
    for subrun in &report.subruns {
        let outcome = &subrun.outcome;
        println!(
            "subrun {:02}: {}/{} events{}",
            subrun.subrun,
            outcome.completed,
            outcome.requested,
            if outcome.truncated { " (truncated)" } else { "" }
        );
    }
    for artifact in &report.artifacts {
        println!("wrote {}", artifact.display());
    }
}

fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
