//! Terrain generation module.
//!
//! Provides the `HeightField` grid and the initializers that fill it.

mod field;
mod heightmap;

pub use field::{FieldError, HeightField};
pub use heightmap::{
    add_octave, assign_uniform_random, assign_uniform_random_seeded, generate_heightmap,
    TerrainError,
};
