//! Heightmap generation using layered lattice noise.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use super::field::{FieldError, HeightField};
use crate::noise::{sample_octave, LatticeNoiseConfig, NoiseError};

/// Errors that can occur while initializing a height field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error("Invalid value range: [{min}, {max})")]
    InvalidRange { min: f32, max: f32 },
}

/// Adds every configured octave of lattice noise onto `field`.
///
/// Octave `i` samples a lattice of period `base_period / 2^i` and is scaled
/// by `base_amplitude / 2^i`. Contributions accumulate on top of whatever the
/// field already holds; nothing is averaged or normalized.
///
/// # Errors
/// `TerrainError::Noise` if the configuration is rejected; the field is left
/// untouched in that case.
pub fn generate_heightmap(
    field: &mut HeightField,
    config: &LatticeNoiseConfig,
) -> Result<(), TerrainError> {
    config.validate()?;

    for octave in 0..config.octaves {
        let params = config.octave(octave);
        debug!(
            "octave {}: period {} amplitude {}",
            octave, params.period, params.amplitude
        );
        add_octave(field, config, octave, params.amplitude);
    }

    Ok(())
}

/// Adds a single amplitude-scaled octave onto `field`.
pub fn add_octave(field: &mut HeightField, config: &LatticeNoiseConfig, octave: u32, amplitude: f32) {
    let width = field.width() as usize;
    for (i, height) in field.heights_mut().iter_mut().enumerate() {
        let x = (i % width) as u32;
        let y = (i / width) as u32;
        *height += sample_octave(config, octave, x, y) * amplitude;
    }
}

/// Overwrites every cell with an independent uniform draw from `[min, max)`.
///
/// Bypasses the noise synthesizer entirely; useful as a baseline.
pub fn assign_uniform_random<R: Rng>(
    field: &mut HeightField,
    min: f32,
    max: f32,
    rng: &mut R,
) -> Result<(), TerrainError> {
    if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
        return Err(TerrainError::InvalidRange { min, max });
    }
    for height in field.heights_mut() {
        *height = rng.random_range(min..max);
    }
    Ok(())
}

/// `assign_uniform_random` driven by a ChaCha8 stream seeded from `seed`.
pub fn assign_uniform_random_seeded(
    field: &mut HeightField,
    min: f32,
    max: f32,
    seed: u64,
) -> Result<(), TerrainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    assign_uniform_random(field, min, max, &mut rng)
}
