//! PNG export for normalized heightmaps.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use log::info;

use super::normalize::{normalize_to_raster, RasterBuffer};
use super::ExportError;
use crate::terrain::HeightField;

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Writes an 8-bit grayscale PNG.
///
/// # Errors
/// `ExportError::BufferSize` if the pixel count does not match the raster
/// dimensions; `Io`/`Image` if writing fails.
pub fn export_png(
    raster: &RasterBuffer,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    let expected = raster.width as usize * raster.height as usize;
    if raster.pixels.len() != expected {
        return Err(ExportError::BufferSize {
            expected,
            actual: raster.pixels.len(),
        });
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(
        &raster.pixels,
        raster.width,
        raster.height,
        ExtendedColorType::L8,
    )?;

    info!(
        "wrote {}x{} grayscale PNG to {}",
        raster.width,
        raster.height,
        path.display()
    );
    Ok(())
}

/// Normalizes `field` and writes it as an 8-bit grayscale PNG.
pub fn export_field_png(
    field: &HeightField,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    export_png(&normalize_to_raster(field), path, options)
}
