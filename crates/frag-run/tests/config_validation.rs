use std::fs;
use std::path::PathBuf;

use frag_analysis::LastRankRule;
use frag_core::FragError;
use frag_run::{AxisConfig, RunConfig};
use tempfile::tempdir;

fn config_code(err: FragError) -> String {
    match err {
        FragError::Config(info) => info.code,
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn minimal_yaml_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    fs::write(&path, "events: 250\n").unwrap();

    let config = RunConfig::load(&path).unwrap();
    assert_eq!(config.events, 250);
    assert_eq!(config.subruns, 1);
    assert_eq!(config.string_mass, 500.0);
    assert_eq!(config.quark_id, 2);
    assert!(!config.massless_endpoints);
    assert_eq!(config.last_rank_rule, LastRankRule::RawLookahead);
    assert_eq!(config.seed_policy.master_seed, 0x05EE_D5EE_DD15_5EED_u64);
    assert_eq!(config.binning.rapidity.bins, 100);
    assert_eq!(config.binning.rapidity.low, -10.0);
    assert_eq!(config.binning.rapidity.high, 10.0);
    assert!(config.output.run_directory.is_none());
    assert_eq!(config.output.manifest_file, PathBuf::from("manifest.json"));
    config.validate().unwrap();
}

#[test]
fn full_yaml_overrides_everything() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    fs::write(
        &path,
        r#"
events: 12
subruns: 3
string_mass: 250.0
quark_id: 3
massless_endpoints: true
last_rank_rule: filtered_lookahead
binning:
  rapidity: { bins: 50, low: -8.0, high: 8.0 }
  z: { bins: 20, low: 0.0, high: 1.0 }
  delta_y: { bins: 40, low: -4.0, high: 4.0 }
  mass: { bins: 25, low: 0.0, high: 5.0 }
seed_policy:
  master_seed: 99
  label: bench
output:
  run_directory: out/bench
  manifest_file: run.json
"#,
    )
    .unwrap();

    let config = RunConfig::load(&path).unwrap();
    assert_eq!(config.events, 12);
    assert_eq!(config.subruns, 3);
    assert_eq!(config.string_mass, 250.0);
    assert_eq!(config.quark_id, 3);
    assert!(config.massless_endpoints);
    assert_eq!(config.last_rank_rule, LastRankRule::FilteredLookahead);
    assert_eq!(config.binning.rapidity.bins, 50);
    assert_eq!(config.binning.mass.high, 5.0);
    assert_eq!(config.seed_policy.master_seed, 99);
    assert_eq!(config.seed_policy.label.as_deref(), Some("bench"));
    assert_eq!(config.output.run_directory, Some(PathBuf::from("out/bench")));
    assert_eq!(config.output.manifest_file, PathBuf::from("run.json"));
    config.validate().unwrap();
}

#[test]
fn missing_events_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    fs::write(&path, "subruns: 2\n").unwrap();
    assert_eq!(config_code(RunConfig::load(&path).unwrap_err()), "config-parse");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert_eq!(config_code(RunConfig::load(&path).unwrap_err()), "config-read");
}

#[test]
fn validation_rejects_bad_shapes() {
    let mut no_subruns = RunConfig::default();
    no_subruns.subruns = 0;
    assert_eq!(config_code(no_subruns.validate().unwrap_err()), "config-subruns");

    let mut bad_mass = RunConfig::default();
    bad_mass.string_mass = -1.0;
    assert_eq!(config_code(bad_mass.validate().unwrap_err()), "config-mass");

    let mut bad_quark = RunConfig::default();
    bad_quark.quark_id = 0;
    assert_eq!(config_code(bad_quark.validate().unwrap_err()), "config-quark");

    let mut empty_axis = RunConfig::default();
    empty_axis.binning.rapidity = AxisConfig::new(0, -10.0, 10.0);
    assert_eq!(config_code(empty_axis.validate().unwrap_err()), "config-axis");

    let mut inverted_axis = RunConfig::default();
    inverted_axis.binning.z = AxisConfig::new(10, 1.0, 0.0);
    assert_eq!(config_code(inverted_axis.validate().unwrap_err()), "config-axis");
}
