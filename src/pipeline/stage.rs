//! Generation stage trait and pipeline orchestration.

use log::debug;
use thiserror::Error;

use crate::noise::LatticeNoiseConfig;
use crate::terrain::{assign_uniform_random_seeded, generate_heightmap, HeightField};

/// Unique identifier for generation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Layered lattice noise.
    Heightmap,
    /// Uniform random baseline.
    UniformRandom,
    /// A stage provided outside this crate, such as an erosion pass.
    Custom(&'static str),
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Heightmap => "heightmap",
            StageId::UniformRandom => "uniform-random",
            StageId::Custom(name) => *name,
        }
    }
}

/// Configuration passed to each generation stage.
#[derive(Debug, Clone, Default)]
pub struct StageConfig {
    /// Noise configuration for terrain generation.
    pub noise: LatticeNoiseConfig,
}

impl StageConfig {
    /// Creates a new configuration with the given noise settings.
    pub fn with_noise(noise: LatticeNoiseConfig) -> Self {
        Self { noise }
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage '{0}' failed: {1}")]
    StageFailed(String, String),
    #[error("Missing dependency: stage '{0}' requires '{1}'")]
    MissingDependency(String, String),
}

/// A step that mutates a height field in place.
///
/// Stages run one at a time and each holds the only mutable borrow of the
/// field while it executes. Downstream consumers (erosion, for instance)
/// implement this trait and declare `StageId::Heightmap` as a dependency.
pub trait GenerationStage: Send + Sync {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Returns the stage IDs that must be executed before this stage.
    fn dependencies(&self) -> &[StageId] {
        &[]
    }

    /// Executes the generation stage, modifying the field in place.
    fn execute(&self, field: &mut HeightField, config: &StageConfig) -> Result<(), PipelineError>;
}

/// Runs generation stages in insertion order.
pub struct Pipeline {
    stages: Vec<Box<dyn GenerationStage>>,
    config: StageConfig,
}

impl Pipeline {
    /// Creates a new empty pipeline with the given configuration.
    pub fn new(config: StageConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// Adds a stage to the pipeline.
    pub fn add_stage<S: GenerationStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Executes all stages in order on the given field.
    pub fn run(&self, field: &mut HeightField) -> Result<(), PipelineError> {
        self.run_with_callbacks(field, |_, _, _| {}, |_, _, _| {})
    }

    /// Executes all stages, reporting each start and finish.
    ///
    /// Dependencies are checked before a stage runs; a missing dependency
    /// stops the pipeline with the field holding the output of the stages
    /// that already completed.
    pub fn run_with_callbacks<F1, F2>(
        &self,
        field: &mut HeightField,
        mut on_stage_start: F1,
        mut on_stage_complete: F2,
    ) -> Result<(), PipelineError>
    where
        F1: FnMut(&str, usize, usize),
        F2: FnMut(&str, usize, usize),
    {
        let total = self.stages.len();
        let mut completed: Vec<StageId> = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }

            on_stage_start(stage.name(), i, total);
            debug!("stage {}/{}: {}", i + 1, total, stage.name());

            stage.execute(field, &self.config)?;
            completed.push(stage.id());

            on_stage_complete(stage.name(), i, total);
        }

        Ok(())
    }
}

/// Heightmap generation stage using layered lattice noise.
pub struct HeightmapStage;

impl GenerationStage for HeightmapStage {
    fn id(&self) -> StageId {
        StageId::Heightmap
    }

    fn name(&self) -> &str {
        "Heightmap Generation"
    }

    fn execute(&self, field: &mut HeightField, config: &StageConfig) -> Result<(), PipelineError> {
        generate_heightmap(field, &config.noise)
            .map_err(|e| PipelineError::StageFailed(self.name().to_string(), e.to_string()))
    }
}

/// Fills the field with independent uniform draws from `[min, max)`.
///
/// Stages that depend on `StageId::Heightmap` do not accept this one in its
/// place.
pub struct UniformRandomStage {
    pub min: f32,
    pub max: f32,
    pub seed: u64,
}

impl UniformRandomStage {
    pub fn new(min: f32, max: f32, seed: u64) -> Self {
        Self { min, max, seed }
    }
}

impl GenerationStage for UniformRandomStage {
    fn id(&self) -> StageId {
        StageId::UniformRandom
    }

    fn name(&self) -> &str {
        "Uniform Random Baseline"
    }

    fn execute(&self, field: &mut HeightField, _config: &StageConfig) -> Result<(), PipelineError> {
        assign_uniform_random_seeded(field, self.min, self.max, self.seed)
            .map_err(|e| PipelineError::StageFailed(self.name().to_string(), e.to_string()))
    }
}
