pub mod analysis;
pub mod lattice;
pub mod metropolis;
pub mod swendsen_wang;
pub mod union_find;
pub mod wolff;

pub use lattice::Lattice;
pub use metropolis::Metropolis;
pub use swendsen_wang::SwendsenWang;
pub use union_find::UnionFind;
pub use wolff::Wolff;

use color_eyre::eyre::{eyre, Result, WrapErr};
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand_distr::Bernoulli;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Markov chain over Ising configurations that preserves the Boltzmann
/// distribution at the lattice temperature
pub trait Sampler {
    /// Advance the chain by one Monte Carlo step
    fn mcstep(&mut self);

    fn lattice(&self) -> &Lattice;

    fn set_temperature(&mut self, temperature: f64) -> Result<()>;

    /// Number of completed `mcstep` calls
    fn steps(&self) -> u64;

    fn name(&self) -> &'static str;

    /// Current spin grid, `nx` rows by `ny` columns
    fn spins(&self) -> &DMatrix<i8> {
        self.lattice().spins()
    }
}

/// Probability of activating a bond between two equal neighbouring spins,
/// `1 - exp(-2J/T)`
///
/// Clamped at 0: for J < 0 the raw expression is negative and no bond is
/// ever activated.
pub fn add_probability(coupling: f64, temperature: f64) -> f64 {
    (-(-2.0 * coupling / temperature).exp_m1()).max(0.0)
}

pub(crate) fn bond_distribution(lattice: &Lattice) -> Result<Bernoulli> {
    let p_add = add_probability(lattice.coupling(), lattice.temperature());
    Bernoulli::new(p_add)
        .wrap_err_with(|| format!("Invalid bond activation probability: {}", p_add))
}

/// Sampling algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Metropolis,
    #[serde(alias = "sw")]
    SwendsenWang,
    Wolff,
}

impl FromStr for Algorithm {
    type Err = color_eyre::eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metropolis" => Ok(Self::Metropolis),
            "swendsen-wang" | "swendsen_wang" | "sw" => Ok(Self::SwendsenWang),
            "wolff" => Ok(Self::Wolff),
            _ => Err(eyre!("Unknown sampling algorithm: {}", s)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Metropolis => "metropolis",
            Self::SwendsenWang => "swendsen-wang",
            Self::Wolff => "wolff",
        };
        write!(f, "{}", name)
    }
}

impl Algorithm {
    /// Construct the selected sampler on a randomly initialised lattice
    pub fn build(
        self,
        nx: usize,
        ny: usize,
        coupling: f64,
        temperature: f64,
        rng: StdRng,
    ) -> Result<Box<dyn Sampler>> {
        let sampler: Box<dyn Sampler> = match self {
            Self::Metropolis => Box::new(Metropolis::new(nx, ny, coupling, temperature, rng)?),
            Self::SwendsenWang => {
                Box::new(SwendsenWang::new(nx, ny, coupling, temperature, rng)?)
            }
            Self::Wolff => Box::new(Wolff::new(nx, ny, coupling, temperature, rng)?),
        };
        Ok(sampler)
    }
}
