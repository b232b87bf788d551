//! Markov-chain Monte Carlo sampling of the 2D Ising model on a periodic lattice.

pub mod app;
pub mod config;
pub mod io;
pub mod ising;

pub use ising::{
    add_probability, Algorithm, Lattice, Metropolis, Sampler, SwendsenWang, UnionFind, Wolff,
};
