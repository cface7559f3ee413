//! Pipeline module for orchestrating height field generation stages.
//!
//! Provides a trait-based architecture so that downstream passes (erosion,
//! for example) can be composed after noise synthesis.

mod stage;

pub use stage::{
    GenerationStage, HeightmapStage, Pipeline, PipelineError, StageConfig, StageId,
    UniformRandomStage,
};
