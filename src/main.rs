//! mountainmap CLI - layered lattice-noise height field generator.
//!
//! Generate a height field, write it as a grayscale raster, or query it at
//! off-grid points.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use mountainmap::export::{export_field_png, export_raw, PngExportOptions, RawFormat};
use mountainmap::pipeline::{HeightmapStage, Pipeline, StageConfig, UniformRandomStage};
use mountainmap::sampling::ContinuousSampler;
use mountainmap::terrain::HeightField;
use mountainmap::GeneratorConfig;

/// Layered lattice-noise height field generator.
#[derive(Parser)]
#[command(name = "mountainmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a height field and write it to disk.
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Output file path.
        #[arg(short, long, default_value = "terrain.png")]
        output: PathBuf,

        /// Export format.
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,
    },

    /// Generate in memory and report height and slope at a point.
    Sample {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Query x coordinate (0 <= x < width - 1).
        #[arg(long)]
        x: f32,

        /// Query y coordinate (0 <= y < height - 1).
        #[arg(long)]
        y: f32,
    },
}

#[derive(Args)]
struct GenerationArgs {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u32>,

    /// Random seed for reproducible generation.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of noise octaves.
    #[arg(long)]
    octaves: Option<u32>,

    /// Lattice period of the first octave, in cells.
    #[arg(long)]
    period: Option<f32>,

    /// Amplitude of the first octave.
    #[arg(long)]
    amplitude: Option<f32>,

    /// Fill with uniform random values from [MIN, MAX) instead of noise.
    #[arg(long, value_name = "MIN,MAX", value_parser = parse_range, allow_hyphen_values = true)]
    uniform: Option<(f32, f32)>,
}

fn parse_range(s: &str) -> Result<(f32, f32), String> {
    let (min, max) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{}'", s))?;
    let min: f32 = min.trim().parse().map_err(|e| format!("bad MIN '{}': {}", min, e))?;
    let max: f32 = max.trim().parse().map_err(|e| format!("bad MAX '{}': {}", max, e))?;
    Ok((min, max))
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// 8-bit grayscale PNG.
    Png,
    /// 8-bit normalized RAW.
    Raw,
    /// 32-bit float RAW (unnormalized).
    RawFloat,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { generation, output, format } => run_generate(&generation, output, format),
        Commands::Sample { generation, x, y } => run_sample(&generation, x, y),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_config(args: &GenerationArgs) -> Result<GeneratorConfig, Box<dyn Error>> {
    // Seed from the clock if nothing pins it.
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file_or_seed(path, clock_seed)?,
        None => {
            let mut config = GeneratorConfig::default();
            config.noise.seed = clock_seed();
            config
        }
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = args.seed {
        config.noise.seed = seed;
    }
    if let Some(octaves) = args.octaves {
        config.noise.octaves = octaves;
    }
    if let Some(period) = args.period {
        config.noise.base_period = period;
    }
    if let Some(amplitude) = args.amplitude {
        config.noise.base_amplitude = amplitude;
    }

    config.validate()?;
    Ok(config)
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn build_field(args: &GenerationArgs) -> Result<HeightField, Box<dyn Error>> {
    let config = resolve_config(args)?;

    println!("Size: {}x{}", config.width, config.height);
    println!("Seed: {}", config.noise.seed);

    let mut field = HeightField::new(config.width, config.height)?;
    let seed = config.noise.seed;
    let mut pipeline = Pipeline::new(StageConfig::with_noise(config.noise));
    if let Some((min, max)) = args.uniform {
        println!("Initializer: uniform random [{}, {})", min, max);
        pipeline.add_stage(UniformRandomStage::new(min, max, seed));
    } else {
        let noise = &pipeline.config().noise;
        println!(
            "Initializer: lattice noise, {} octaves, period {}, amplitude {}",
            noise.octaves, noise.base_period, noise.base_amplitude
        );
        pipeline.add_stage(HeightmapStage);
    }

    pipeline.run_with_callbacks(
        &mut field,
        |name, i, total| println!("  [{}/{}] {}...", i + 1, total, name),
        |_, _, _| {},
    )?;

    Ok(field)
}

fn run_generate(
    args: &GenerationArgs,
    output: PathBuf,
    format: ExportFormat,
) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let field = build_field(args)?;

    let (min, max) = field.height_range();
    println!("Height range: [{:.4}, {:.4}]", min, max);

    match format {
        ExportFormat::Png => export_field_png(&field, &output, &PngExportOptions::default())?,
        ExportFormat::Raw => export_raw(&field, &output, RawFormat::R8)?,
        ExportFormat::RawFloat => export_raw(&field, &output, RawFormat::R32Float)?,
    }

    println!("Wrote {} in {:.2?}", output.display(), start.elapsed());
    Ok(())
}

fn run_sample(args: &GenerationArgs, x: f32, y: f32) -> Result<(), Box<dyn Error>> {
    let field = build_field(args)?;
    let sampler = ContinuousSampler::new(&field);

    let height = sampler.height_at_fractional(x, y)?;
    let gradient = sampler.gradient_at_fractional(x, y)?;
    let descent = sampler.steepest_descent(x, y)?;

    println!("Height at ({}, {}): {:.6}", x, y, height);
    println!("Gradient: ({:.6}, {:.6})", gradient.x, gradient.y);
    println!("Steepest descent: ({:.4}, {:.4})", descent.x, descent.y);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation_args(argv: &[&str]) -> GenerationArgs {
        match Cli::try_parse_from(argv.iter().copied()).unwrap().command {
            Commands::Generate { generation, .. } | Commands::Sample { generation, .. } => generation,
        }
    }

    #[test]
    fn test_uniform_takes_min_max_pair() {
        let args = generation_args(&["mountainmap", "generate", "--uniform", "-2.5,3"]);
        assert_eq!(args.uniform, Some((-2.5, 3.0)));

        let args = generation_args(&["mountainmap", "generate", "--uniform=0, 1"]);
        assert_eq!(args.uniform, Some((0.0, 1.0)));

        let args = generation_args(&["mountainmap", "generate"]);
        assert_eq!(args.uniform, None);
    }

    #[test]
    fn test_uniform_rejects_malformed_range() {
        assert!(Cli::try_parse_from(["mountainmap", "generate", "--uniform", "1"]).is_err());
        assert!(Cli::try_parse_from(["mountainmap", "generate", "--uniform", "a,2"]).is_err());
    }

    #[test]
    fn test_uniform_builds_field_in_range() {
        let args = generation_args(&[
            "mountainmap", "sample", "--width", "8", "--height", "8", "--seed", "3",
            "--uniform", "-1,1", "--x", "0", "--y", "0",
        ]);
        let field = build_field(&args).unwrap();
        assert!(field.heights().iter().all(|&h| (-1.0..1.0).contains(&h)));
    }

    #[test]
    fn test_config_file_without_seed_is_not_pinned_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noseed.json");
        std::fs::write(&path, r#"{ "width": 8, "height": 8 }"#).unwrap();
        let path = path.to_str().unwrap().to_string();

        let config = resolve_config(&generation_args(&["mountainmap", "generate", "--config", &path])).unwrap();
        assert_eq!(config.width, 8);
        assert_ne!(config.noise.seed, 0);

        let config = resolve_config(&generation_args(&[
            "mountainmap", "generate", "--config", &path, "--seed", "0",
        ]))
        .unwrap();
        assert_eq!(config.noise.seed, 0);
    }
}
