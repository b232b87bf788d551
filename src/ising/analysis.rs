/// Utility functions for putting simulation parameters in context

/// Critical temperature for the 2D square-lattice Ising model (exact result)
/// T_c = 2J / (k_B * ln(1 + √2)) ≈ 2.269 J/k_B
pub fn critical_temperature_2d() -> f64 {
    2.0 / (1.0 + 2.0_f64.sqrt()).ln()
}

/// Temperature in units of the critical temperature for coupling `coupling`
///
/// T_c scales linearly with |J|; the antiferromagnet on a square lattice has
/// the same critical point as the ferromagnet.
pub fn reduced_temperature(temperature: f64, coupling: f64) -> f64 {
    temperature / (critical_temperature_2d() * coupling.abs())
}
