//! Layered lattice-noise height field generator.
//!
//! This crate synthesizes a 2-D height field from deterministic multi-octave
//! lattice noise, answers continuous height and slope queries over it, and
//! exports it as a normalized 8-bit grayscale raster.

pub mod config;
pub mod export;
pub mod noise;
pub mod pipeline;
pub mod sampling;
pub mod terrain;

pub use config::{ConfigError, GeneratorConfig};
pub use export::{normalize_to_raster, ExportError, RasterBuffer};
pub use noise::{lattice_hash, LatticeNoiseConfig};
pub use pipeline::{GenerationStage, HeightmapStage, Pipeline, StageConfig, UniformRandomStage};
pub use sampling::{ContinuousSampler, SampleError};
pub use terrain::{FieldError, HeightField, TerrainError};
