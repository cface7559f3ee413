//! RAW format export for game engine compatibility.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use super::normalize::normalize_to_raster;
use super::ExportError;
use crate::terrain::HeightField;

/// RAW export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawFormat {
    /// Normalized 8-bit samples, one byte per cell.
    #[default]
    R8,
    /// Unnormalized 32-bit float, little-endian.
    R32Float,
}

/// Writes the field as headerless row-major RAW data.
pub fn export_raw(field: &HeightField, path: &Path, format: RawFormat) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        RawFormat::R8 => {
            writer.write_all(&normalize_to_raster(field).pixels)?;
        }
        RawFormat::R32Float => {
            for &height in field.heights() {
                writer.write_all(&height.to_le_bytes())?;
            }
        }
    }

    writer.flush()?;
    info!(
        "wrote {}x{} {:?} RAW to {}",
        field.width(),
        field.height(),
        format,
        path.display()
    );
    Ok(())
}

/// Returns the expected file size for a RAW export.
pub fn expected_file_size(width: u32, height: u32, format: RawFormat) -> u64 {
    let cells = u64::from(width) * u64::from(height);
    match format {
        RawFormat::R8 => cells,
        RawFormat::R32Float => cells * 4,
    }
}
