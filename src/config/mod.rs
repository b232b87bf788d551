//! Configuration management for Ising simulations
//!
//! This module handles the YAML configuration structures, their defaults, and
//! the merge with command-line overrides into one resolved set of settings.

mod args;

pub use args::Args;

use crate::ising::Algorithm;
use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure for a simulation run
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub lattice: LatticeParams,
    pub coupling: Option<f64>,
    pub temperature: Option<f64>,
    pub algorithm: Option<Algorithm>,
    #[serde(default)]
    pub run: RunParams,
}

/// Lattice shape
#[derive(Debug, Deserialize, Serialize)]
pub struct LatticeParams {
    pub nx: Option<usize>,
    pub ny: Option<usize>,
}

impl Default for LatticeParams {
    fn default() -> Self {
        LatticeParams {
            nx: Some(64),
            ny: Some(64),
        }
    }
}

impl LatticeParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.nx.is_none() {
            self.nx = defaults.nx;
        }
        if self.ny.is_none() {
            self.ny = defaults.ny;
        }
        self
    }
}

/// Run loop parameters
#[derive(Debug, Deserialize, Serialize)]
pub struct RunParams {
    pub steps: Option<u64>,
    pub seed: Option<u64>,
    pub render_every: Option<u64>,
}

impl Default for RunParams {
    fn default() -> Self {
        RunParams {
            steps: Some(1000),
            seed: None,
            render_every: Some(100),
        }
    }
}

impl RunParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.steps.is_none() {
            self.steps = defaults.steps;
        }
        if self.render_every.is_none() {
            self.render_every = defaults.render_every;
        }
        self
    }
}

impl Config {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        self.lattice = self.lattice.with_defaults();
        self.run = self.run.with_defaults();
        if self.coupling.is_none() {
            self.coupling = Some(1.0);
        }
        if self.temperature.is_none() {
            self.temperature = Some(2.0);
        }
        if self.algorithm.is_none() {
            self.algorithm = Some(Algorithm::Wolff);
        }
        self
    }
}

/// Read and parse a YAML configuration file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path.display()))?;

    parse_config(&config_content)
}

/// Parse a YAML configuration string and fill in defaults
pub fn parse_config(content: &str) -> Result<Config> {
    let config = serde_yml::from_str::<Config>(content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}

/// Fully resolved simulation settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub nx: usize,
    pub ny: usize,
    pub coupling: f64,
    pub temperature: f64,
    /// 0 means no limit
    pub steps: u64,
    pub seed: Option<u64>,
    /// 0 disables rendering
    pub render_every: u64,
}

impl Settings {
    /// Merge command-line overrides on top of a defaulted configuration
    pub fn resolve(args: &Args, config: &Config) -> Result<Self> {
        let algorithm = match &args.algorithm {
            Some(name) => name.parse()?,
            None => config.algorithm.unwrap_or(Algorithm::Wolff),
        };

        Ok(Settings {
            algorithm,
            nx: args.nx.or(config.lattice.nx).unwrap_or(64),
            ny: args.ny.or(config.lattice.ny).unwrap_or(64),
            coupling: args.coupling.or(config.coupling).unwrap_or(1.0),
            temperature: args.temperature.or(config.temperature).unwrap_or(2.0),
            steps: args.steps.or(config.run.steps).unwrap_or(1000),
            seed: args.seed.or(config.run.seed),
            render_every: args.render_every.or(config.run.render_every).unwrap_or(100),
        })
    }
}
