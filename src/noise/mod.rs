//! Noise generation module for terrain synthesis.
//!
//! Deterministic lattice hashing, cubic interpolation and octave layering.
//! Nothing here holds random-number-generator state.

mod fractal;
mod hash;
mod interp;

use thiserror::Error;

pub use fractal::{
    sample_lattice_noise, sample_octave, LatticeNoiseConfig, OctaveParams, MAX_OCTAVES,
    MIN_PERIOD,
};
pub use hash::lattice_hash;
pub use interp::interp;

/// Errors raised by noise configuration checks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error("Invalid noise configuration: {0}")]
    InvalidConfig(String),
}
