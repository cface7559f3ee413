//! Multi-octave lattice value noise with cubic blending.

use serde::{Deserialize, Serialize};

use super::hash::lattice_hash;
use super::interp::interp;
use super::NoiseError;

/// Largest accepted octave count. Past this the per-octave period collapses
/// below any useful lattice spacing.
pub const MAX_OCTAVES: u32 = 32;

/// Smallest accepted octave period (2^-30). Grid coordinates are `u32`, so
/// lattice coordinates stay below 2^62 and fit an `i64`.
pub const MIN_PERIOD: f32 = 9.313_225_746_154_785e-10;

/// Configuration for layered lattice noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeNoiseConfig {
    /// Random seed for reproducible generation.
    pub seed: u64,
    /// Number of octaves to accumulate.
    pub octaves: u32,
    /// Lattice spacing of octave 0, in grid cells. Halves every octave.
    pub base_period: f32,
    /// Amplitude of octave 0. Halves every octave.
    pub base_amplitude: f32,
}

impl Default for LatticeNoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            base_period: 32.0,
            base_amplitude: 1.0,
        }
    }
}

/// Period and amplitude of a single octave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveParams {
    pub period: f32,
    pub amplitude: f32,
}

impl LatticeNoiseConfig {
    /// Creates a new noise configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Broad features with plenty of fine detail on top.
    pub fn rugged(seed: u64) -> Self {
        Self {
            seed,
            octaves: 6,
            base_period: 64.0,
            base_amplitude: 1.0,
        }
    }

    /// Low, rolling terrain.
    pub fn gentle(seed: u64) -> Self {
        Self {
            seed,
            octaves: 3,
            base_period: 48.0,
            base_amplitude: 0.5,
        }
    }

    /// Returns period `base_period / 2^i` and amplitude `base_amplitude / 2^i`.
    pub fn octave(&self, index: u32) -> OctaveParams {
        let scale = 2.0f32.powi(index as i32);
        OctaveParams {
            period: self.base_period / scale,
            amplitude: self.base_amplitude / scale,
        }
    }

    /// Checks that every octave has a finite, positive period.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(NoiseError::InvalidConfig(format!(
                "octaves must be in 1..={}, got {}",
                MAX_OCTAVES, self.octaves
            )));
        }
        if !self.base_period.is_finite() || self.base_period <= 0.0 {
            return Err(NoiseError::InvalidConfig(format!(
                "base period must be finite and positive, got {}",
                self.base_period
            )));
        }
        if !self.base_amplitude.is_finite() {
            return Err(NoiseError::InvalidConfig(format!(
                "base amplitude must be finite, got {}",
                self.base_amplitude
            )));
        }
        let finest = self.octave(self.octaves - 1).period;
        if finest < MIN_PERIOD {
            return Err(NoiseError::InvalidConfig(format!(
                "period of octave {} is {}, below the minimum {}",
                self.octaves - 1,
                finest,
                MIN_PERIOD
            )));
        }
        Ok(())
    }
}

/// Unscaled contribution of one octave at grid cell `(x, y)`.
///
/// Four rows of four lattice hashes around the cell's lattice square are
/// blended along x, then the row results are blended along y.
pub fn sample_octave(config: &LatticeNoiseConfig, octave: u32, x: u32, y: u32) -> f32 {
    let period = config.octave(octave).period;
    let xp = x as f32 / period;
    let yp = y as f32 / period;
    let xf = xp.floor();
    let yf = yp.floor();
    let xt = xp - xf;
    let yt = yp - yf;
    let x0 = xf as i64;
    let y0 = yf as i64;

    let seed = config.seed;
    let mut rows = [0.0f32; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        let iy = y0.wrapping_sub(1).wrapping_add(r as i64);
        *row = interp(
            lattice_hash(seed, octave, x0.wrapping_sub(1), iy),
            lattice_hash(seed, octave, x0, iy),
            lattice_hash(seed, octave, x0.wrapping_add(1), iy),
            lattice_hash(seed, octave, x0.wrapping_add(2), iy),
            xt,
        );
    }
    interp(rows[0], rows[1], rows[2], rows[3], yt)
}

/// Sum of all amplitude-scaled octaves at grid cell `(x, y)`, accumulated in
/// octave order starting from zero.
pub fn sample_lattice_noise(config: &LatticeNoiseConfig, x: u32, y: u32) -> f32 {
    let mut total = 0.0f32;
    for octave in 0..config.octaves {
        total += sample_octave(config, octave, x, y) * config.octave(octave).amplitude;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LatticeNoiseConfig::default();
        assert_eq!(config.octaves, 4);
        assert_eq!(config.base_period, 32.0);
        assert_eq!(config.base_amplitude, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_octave_halving() {
        let config = LatticeNoiseConfig::default();
        assert_eq!(config.octave(0), OctaveParams { period: 32.0, amplitude: 1.0 });
        assert_eq!(config.octave(1), OctaveParams { period: 16.0, amplitude: 0.5 });
        assert_eq!(config.octave(3), OctaveParams { period: 4.0, amplitude: 0.125 });
    }

    #[test]
    fn test_noise_reproducibility() {
        let config = LatticeNoiseConfig::with_seed(12345);
        let a = sample_lattice_noise(&config, 17, 40);
        let b = sample_lattice_noise(&config, 17, 40);
        assert_eq!(a, b, "Same seed and position should produce same result");
    }

    #[test]
    fn test_different_seeds_produce_different_results() {
        let a = sample_lattice_noise(&LatticeNoiseConfig::with_seed(1), 5, 9);
        let b = sample_lattice_noise(&LatticeNoiseConfig::with_seed(2), 5, 9);
        assert_ne!(a, b, "Different seeds should produce different results");
    }

    #[test]
    fn test_octave_hits_lattice_value_on_lattice_points() {
        // On a lattice point xt = yt = 0, so both blends return their `b`
        // sample: the hash of the lattice point itself.
        let config = LatticeNoiseConfig::with_seed(77);
        let period = config.octave(0).period as u32;
        for (lx, ly) in [(0u32, 0u32), (1, 0), (2, 3)] {
            let v = sample_octave(&config, 0, lx * period, ly * period);
            assert_eq!(v, lattice_hash(77, 0, lx as i64, ly as i64));
        }
    }

    #[test]
    fn test_lattice_noise_is_sum_of_scaled_octaves() {
        let config = LatticeNoiseConfig::rugged(5);
        let mut expected = 0.0f32;
        for octave in 0..config.octaves {
            expected += sample_octave(&config, octave, 33, 71) * config.octave(octave).amplitude;
        }
        assert_eq!(sample_lattice_noise(&config, 33, 71), expected);
    }

    #[test]
    fn test_neighbouring_cells_are_smooth() {
        // Coarse octave varies slowly between adjacent cells.
        let config = LatticeNoiseConfig {
            octaves: 1,
            ..LatticeNoiseConfig::with_seed(8)
        };
        for x in 0..127 {
            let a = sample_octave(&config, 0, x, 10);
            let b = sample_octave(&config, 0, x + 1, 10);
            assert!((a - b).abs() < 0.25, "jump {} -> {} at x={}", a, b, x);
        }
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let bad = [
            LatticeNoiseConfig { octaves: 0, ..Default::default() },
            LatticeNoiseConfig { octaves: MAX_OCTAVES + 1, ..Default::default() },
            LatticeNoiseConfig { base_period: 0.0, ..Default::default() },
            LatticeNoiseConfig { base_period: -4.0, ..Default::default() },
            LatticeNoiseConfig { base_period: f32::NAN, ..Default::default() },
            LatticeNoiseConfig { base_amplitude: f32::INFINITY, ..Default::default() },
            LatticeNoiseConfig { octaves: 1, base_period: 1e-20, ..Default::default() },
            LatticeNoiseConfig { octaves: 1, base_period: MIN_PERIOD / 2.0, ..Default::default() },
            LatticeNoiseConfig { octaves: MAX_OCTAVES, base_period: 1.0, ..Default::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn test_smallest_accepted_period_samples_whole_grid() {
        let config = LatticeNoiseConfig {
            octaves: 1,
            base_period: MIN_PERIOD,
            ..LatticeNoiseConfig::with_seed(4)
        };
        assert!(config.validate().is_ok());
        for (x, y) in [(0, 0), (3, 0), (u32::MAX, 0), (u32::MAX, u32::MAX)] {
            let v = sample_octave(&config, 0, x, y);
            assert!(v.is_finite(), "({}, {}) -> {}", x, y, v);
        }
    }

    #[test]
    fn test_max_octaves_accepted_with_default_period() {
        let config = LatticeNoiseConfig { octaves: MAX_OCTAVES, ..Default::default() };
        assert!(config.validate().is_ok());
        assert!(sample_lattice_noise(&config, u32::MAX, 9).is_finite());
    }

    #[test]
    fn test_presets_validate() {
        assert!(LatticeNoiseConfig::rugged(1).validate().is_ok());
        assert!(LatticeNoiseConfig::gentle(1).validate().is_ok());
    }
}
