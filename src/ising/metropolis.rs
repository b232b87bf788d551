use super::{Lattice, Sampler};
use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use rand::Rng;

/// Single-spin-flip Metropolis sampler
///
/// One Monte Carlo step proposes flipping a single, uniformly chosen spin.
#[derive(Debug, Clone)]
pub struct Metropolis {
    lattice: Lattice,
    /// Total energy of the current configuration, updated on acceptance
    energy: f64,
    rng: StdRng,
    step: u64,
}

impl Metropolis {
    /// Create a sampler on a randomly initialised lattice
    pub fn new(
        nx: usize,
        ny: usize,
        coupling: f64,
        temperature: f64,
        mut rng: StdRng,
    ) -> Result<Self> {
        let lattice = Lattice::new(nx, ny, coupling, temperature, &mut rng)?;
        Ok(Self::from_lattice(lattice, rng))
    }

    /// Create a sampler starting from an existing configuration
    pub fn from_lattice(lattice: Lattice, rng: StdRng) -> Self {
        let energy = lattice.energy();
        Self {
            lattice,
            energy,
            rng,
            step: 0,
        }
    }

    /// Cached total energy
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Propose one spin flip and accept it with probability min(1, exp(-ΔE/T)).
    /// Returns whether the flip was kept.
    pub fn metropolis(&mut self) -> bool {
        let x = self.rng.gen_range(0..self.lattice.nx());
        let y = self.rng.gen_range(0..self.lattice.ny());

        let delta_e = self.lattice.delta_energy(x, y);

        // delta_e >= 0 past the first test, so the exponent never overflows
        let accept = delta_e < 0.0
            || self.rng.gen::<f64>() < (-delta_e / self.lattice.temperature()).exp();

        if accept {
            self.lattice.flip(x, y);
            self.energy += delta_e;
        }
        accept
    }

    /// Propose `nx * ny` flips; returns the number accepted
    pub fn sweep(&mut self) -> usize {
        (0..self.lattice.number_sites())
            .filter(|_| self.metropolis())
            .count()
    }
}

impl Sampler for Metropolis {
    fn mcstep(&mut self) {
        self.metropolis();
        self.step += 1;
    }

    fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        self.lattice.set_temperature(temperature)
    }

    fn steps(&self) -> u64 {
        self.step
    }

    fn name(&self) -> &'static str {
        "Metropolis"
    }
}
