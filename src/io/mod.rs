//! Input/Output operations for Ising simulations

mod output;

pub use output::{render_spins, setup_output};
