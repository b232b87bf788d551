//! Integration tests running the example YAML configurations end to end

use clap::Parser;
use ising_mc::app::{build_sampler, run_simulation};
use ising_mc::config::{load_config, Args, Settings};
use ising_mc::Algorithm;
use std::path::PathBuf;

/// Helper function to get the path to example files
fn example_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join(filename)
}

fn settings_for(filename: &str, overrides: &[&str]) -> Settings {
    let config = load_config(example_path(filename)).unwrap();
    let args = Args::parse_from(std::iter::once("ising").chain(overrides.iter().copied()));
    Settings::resolve(&args, &config).unwrap()
}

fn run_to_string(settings: &Settings) -> String {
    let mut sampler = build_sampler(settings).unwrap();
    let mut buffer = Vec::new();
    run_simulation(sampler.as_mut(), settings, &mut buffer).unwrap();
    assert_eq!(sampler.steps(), settings.steps);
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_examples_parse() {
    let expected = [
        ("wolff.yaml", Algorithm::Wolff),
        ("swendsen_wang.yaml", Algorithm::SwendsenWang),
        ("metropolis.yaml", Algorithm::Metropolis),
        ("antiferromagnet.yaml", Algorithm::Metropolis),
    ];
    for (file, algorithm) in expected {
        let settings = settings_for(file, &[]);
        assert_eq!(settings.algorithm, algorithm, "{}", file);
        assert!(settings.temperature > 0.0);
    }

    let settings = settings_for("antiferromagnet.yaml", &[]);
    assert_eq!(settings.coupling, -1.0);
    assert_eq!(settings.seed, None);
    assert_eq!(settings.render_every, 0);
}

#[test]
fn test_rendered_frames() {
    let settings = settings_for("wolff.yaml", &["--steps", "30", "--render-every", "10"]);
    let output = run_to_string(&settings);

    // 3 frames of 64 rows plus a blank separator each
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3 * 65);
    for frame in lines.chunks(65) {
        assert!(frame[..64].iter().all(|row| row.chars().count() == 64));
        assert!(frame[64].is_empty());
    }
    assert!(output.chars().all(|c| c == '↑' || c == '↓' || c == '\n'));
}

#[test]
fn test_every_example_runs() {
    for file in [
        "wolff.yaml",
        "swendsen_wang.yaml",
        "metropolis.yaml",
        "antiferromagnet.yaml",
    ] {
        let settings = settings_for(file, &["--steps", "20", "--render-every", "0"]);
        let output = run_to_string(&settings);
        assert!(output.is_empty(), "{} rendered with rendering disabled", file);
    }
}

#[test]
fn test_seeded_example_is_reproducible() {
    let overrides = ["--steps", "50", "--render-every", "25", "--nx", "16", "--ny", "12"];
    let first = run_to_string(&settings_for("swendsen_wang.yaml", &overrides));
    let second = run_to_string(&settings_for("swendsen_wang.yaml", &overrides));
    assert_eq!(first, second);

    let mut reseeded = overrides.to_vec();
    reseeded.extend(["--seed", "8"]);
    let other_seed = run_to_string(&settings_for("swendsen_wang.yaml", &reseeded));
    assert_ne!(first, other_seed);
}

#[test]
fn test_invalid_temperature_is_rejected() {
    let settings = settings_for("wolff.yaml", &["--temperature", "0"]);
    assert!(build_sampler(&settings).is_err());
}
