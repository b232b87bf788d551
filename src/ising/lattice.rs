use color_eyre::eyre::{ensure, Result};
use itertools::iproduct;
use nalgebra::DMatrix;
use rand::Rng;

/// Periodic `nx × ny` square lattice of Ising spins
///
/// Spins live in an `nx`-row by `ny`-column matrix indexed by `(x, y)`. Every
/// cell holds exactly `+1` or `-1`. Both directions wrap around, so the
/// lattice is a torus.
#[derive(Debug, Clone)]
pub struct Lattice {
    nx: usize,
    ny: usize,
    /// Coupling constant J (J > 0 ferromagnetic, J < 0 antiferromagnetic)
    coupling: f64,
    /// Temperature in units of J/k_B
    temperature: f64,
    spins: DMatrix<i8>,
}

impl Lattice {
    /// Create a lattice with every spin drawn independently as +1 or -1
    pub fn new<R: Rng + ?Sized>(
        nx: usize,
        ny: usize,
        coupling: f64,
        temperature: f64,
        rng: &mut R,
    ) -> Result<Self> {
        validate_shape(nx, ny)?;
        validate_coupling(coupling)?;
        validate_temperature(temperature)?;

        let spins = DMatrix::from_fn(nx, ny, |_, _| if rng.gen_bool(0.5) { 1 } else { -1 });

        Ok(Self {
            nx,
            ny,
            coupling,
            temperature,
            spins,
        })
    }

    /// Create a lattice from an explicit spin configuration
    pub fn from_spins(spins: DMatrix<i8>, coupling: f64, temperature: f64) -> Result<Self> {
        let (nx, ny) = spins.shape();
        validate_shape(nx, ny)?;
        validate_coupling(coupling)?;
        validate_temperature(temperature)?;
        ensure!(
            spins.iter().all(|&s| s == 1 || s == -1),
            "spin configuration may only contain +1 and -1"
        );

        Ok(Self {
            nx,
            ny,
            coupling,
            temperature,
            spins,
        })
    }

    /// Create a lattice with all spins up (ground state for J > 0)
    pub fn ordered(nx: usize, ny: usize, coupling: f64, temperature: f64) -> Result<Self> {
        Self::from_spins(DMatrix::from_element(nx, ny, 1), coupling, temperature)
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn number_sites(&self) -> usize {
        self.nx * self.ny
    }

    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Change the temperature, e.g. for annealing
    pub fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        validate_temperature(temperature)?;
        self.temperature = temperature;
        Ok(())
    }

    /// Read-only view of the spin configuration
    pub fn spins(&self) -> &DMatrix<i8> {
        &self.spins
    }

    pub fn spin(&self, x: usize, y: usize) -> i8 {
        self.spins[(x, y)]
    }

    pub(crate) fn set_spin(&mut self, x: usize, y: usize, spin: i8) {
        debug_assert!(spin == 1 || spin == -1);
        self.spins[(x, y)] = spin;
    }

    pub(crate) fn flip(&mut self, x: usize, y: usize) {
        self.spins[(x, y)] *= -1;
    }

    /// Flattened site index `y * nx + x`
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.nx + x
    }

    /// Inverse of [`Lattice::index`]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.nx, index / self.nx)
    }

    /// Top and right neighbours. Visiting these from every site covers each
    /// bond of the torus exactly once.
    pub fn half_neighbours(&self, x: usize, y: usize) -> [(usize, usize); 2] {
        [(x, (y + 1) % self.ny), ((x + 1) % self.nx, y)]
    }

    /// Left, top, right and bottom neighbours
    pub fn neighbours(&self, x: usize, y: usize) -> [(usize, usize); 4] {
        [
            ((x + self.nx - 1) % self.nx, y),
            (x, (y + 1) % self.ny),
            ((x + 1) % self.nx, y),
            (x, (y + self.ny - 1) % self.ny),
        ]
    }

    /// Total bond energy `-J Σ s_i s_j`
    pub fn energy(&self) -> f64 {
        iproduct!(0..self.nx, 0..self.ny)
            .map(|(x, y)| {
                let spin = self.spin(x, y);
                self.half_neighbours(x, y)
                    .iter()
                    .map(|&(xn, yn)| -self.coupling * f64::from(spin * self.spin(xn, yn)))
                    .sum::<f64>()
            })
            .sum()
    }

    /// Energy change caused by flipping the spin at `(x, y)`
    ///
    /// When a dimension is 1 the site is its own top/bottom (or left/right)
    /// neighbour. That bond contributes `-J s²` before and after the flip, so
    /// it is skipped here.
    pub fn delta_energy(&self, x: usize, y: usize) -> f64 {
        let spin = f64::from(self.spin(x, y));
        let neighbours_sum: f64 = self
            .neighbours(x, y)
            .iter()
            .filter(|&&site| site != (x, y))
            .map(|&(xn, yn)| f64::from(self.spin(xn, yn)))
            .sum();

        2.0 * self.coupling * spin * neighbours_sum
    }
}

fn validate_shape(nx: usize, ny: usize) -> Result<()> {
    ensure!(
        nx > 0 && ny > 0,
        "lattice dimensions must be positive, got {}x{}",
        nx,
        ny
    );
    Ok(())
}

fn validate_coupling(coupling: f64) -> Result<()> {
    ensure!(
        coupling.is_finite(),
        "coupling constant must be finite, got {}",
        coupling
    );
    Ok(())
}

fn validate_temperature(temperature: f64) -> Result<()> {
    ensure!(
        temperature.is_finite() && temperature > 0.0,
        "temperature must be positive and finite, got {}",
        temperature
    );
    Ok(())
}
