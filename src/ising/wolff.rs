use super::{bond_distribution, Lattice, Sampler};
use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

/// Wolff single-cluster sampler
#[derive(Debug, Clone)]
pub struct Wolff {
    lattice: Lattice,
    bond: Bernoulli,
    rng: StdRng,
    step: u64,
}

impl Wolff {
    pub fn new(
        nx: usize,
        ny: usize,
        coupling: f64,
        temperature: f64,
        mut rng: StdRng,
    ) -> Result<Self> {
        let lattice = Lattice::new(nx, ny, coupling, temperature, &mut rng)?;
        Self::from_lattice(lattice, rng)
    }

    pub fn from_lattice(lattice: Lattice, rng: StdRng) -> Result<Self> {
        let bond = bond_distribution(&lattice)?;
        Ok(Self {
            lattice,
            bond,
            rng,
            step: 0,
        })
    }

    /// Grow one cluster from a random seed site without touching the spins
    ///
    /// Each site enters the cluster at most once. Every incident edge of a
    /// cluster site is tried, hence the full four-neighbour enumeration.
    pub fn grow_cluster(&mut self) -> Vec<(usize, usize)> {
        let seed = (
            self.rng.gen_range(0..self.lattice.nx()),
            self.rng.gen_range(0..self.lattice.ny()),
        );
        let seed_spin = self.lattice.spin(seed.0, seed.1);

        let mut in_cluster = vec![false; self.lattice.number_sites()];
        in_cluster[self.lattice.index(seed.0, seed.1)] = true;

        let mut frontier = vec![seed];
        let mut cluster = vec![seed];

        while let Some((x, y)) = frontier.pop() {
            for (xn, yn) in self.lattice.neighbours(x, y) {
                let site = self.lattice.index(xn, yn);
                if self.lattice.spin(xn, yn) == seed_spin
                    && !in_cluster[site]
                    && self.bond.sample(&mut self.rng)
                {
                    in_cluster[site] = true;
                    frontier.push((xn, yn));
                    cluster.push((xn, yn));
                }
            }
        }

        cluster
    }

    /// Grow one cluster and give all of it a random orientation; returns its size
    pub fn wolff(&mut self) -> usize {
        let cluster = self.grow_cluster();

        let spin = if self.rng.gen_bool(0.5) { 1 } else { -1 };
        for &(x, y) in &cluster {
            self.lattice.set_spin(x, y, spin);
        }

        cluster.len()
    }
}

impl Sampler for Wolff {
    fn mcstep(&mut self) {
        self.wolff();
        self.step += 1;
    }

    fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        self.lattice.set_temperature(temperature)?;
        self.bond = bond_distribution(&self.lattice)?;
        Ok(())
    }

    fn steps(&self) -> u64 {
        self.step
    }

    fn name(&self) -> &'static str {
        "Wolff"
    }
}
