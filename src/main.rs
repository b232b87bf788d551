//! Ising Monte Carlo Command-Line Interface
//!
//! Runs one sampler on a periodic 2D lattice and prints the spin grid as it evolves.

use color_eyre::eyre::Result;
use ising_mc::app::IsingApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    IsingApplication::from_cli()?.run()
}
