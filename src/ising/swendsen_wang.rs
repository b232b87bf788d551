use super::{bond_distribution, Lattice, Sampler, UnionFind};
use color_eyre::eyre::Result;
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

/// Swendsen-Wang global cluster sampler
///
/// Every step activates bonds between equal neighbouring spins with
/// probability `1 - exp(-2J/T)`, then assigns each resulting cluster a fresh
/// random orientation.
#[derive(Debug, Clone)]
pub struct SwendsenWang {
    lattice: Lattice,
    bond: Bernoulli,
    rng: StdRng,
    step: u64,
}

impl SwendsenWang {
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

    /// Percolate the current configuration into a fresh union-find over all sites
    pub fn build_clusters(&mut self) -> UnionFind {
        let mut clusters = UnionFind::new(self.lattice.number_sites());

        for (x, y) in iproduct!(0..self.lattice.nx(), 0..self.lattice.ny()) {
            let spin = self.lattice.spin(x, y);
            for (xn, yn) in self.lattice.half_neighbours(x, y) {
                if spin == self.lattice.spin(xn, yn) && self.bond.sample(&mut self.rng) {
                    clusters.union(self.lattice.index(x, y), self.lattice.index(xn, yn));
                }
            }
        }

        clusters
    }

    /// One full bond sweep plus cluster reassignment; returns the number of clusters
    pub fn swendsen_wang(&mut self) -> usize {
        let mut clusters = self.build_clusters();

        // 0 marks a root that has not drawn its orientation yet
        let mut cluster_spin = vec![0i8; clusters.len()];
        let mut n_clusters = 0;

        for site in 0..clusters.len() {
            let root = clusters.find(site);
            if cluster_spin[root] == 0 {
                cluster_spin[root] = if self.rng.gen_bool(0.5) { 1 } else { -1 };
                n_clusters += 1;
            }
            let (x, y) = self.lattice.coords(site);
            self.lattice.set_spin(x, y, cluster_spin[root]);
        }

        n_clusters
    }
}

impl Sampler for SwendsenWang {
    fn mcstep(&mut self) {
        self.swendsen_wang();
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
        "Swendsen-Wang"
    }
}
