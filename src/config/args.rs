//! Command-line argument parsing for Ising simulations

use clap::Parser;

/// 2D Ising model Monte Carlo with YAML configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Sampling algorithm: metropolis, swendsen-wang (sw) or wolff
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Override lattice width
    #[arg(long)]
    pub nx: Option<usize>,

    /// Override lattice height
    #[arg(long)]
    pub ny: Option<usize>,

    /// Override coupling constant J (negative for antiferromagnetic)
    #[arg(long, allow_negative_numbers = true)]
    pub coupling: Option<f64>,

    /// Override temperature T
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Number of Monte Carlo steps (0 runs until interrupted)
    #[arg(short, long)]
    pub steps: Option<u64>,

    /// Seed for the random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the lattice every N steps (0 disables rendering)
    #[arg(long)]
    pub render_every: Option<u64>,

    /// Override log output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}
