//! Export module for handing finished height fields to raster sinks.
//!
//! Normalization to 8-bit samples happens on a transient buffer; the
//! source field is only ever borrowed.

mod normalize;
mod png;
mod raw;

use thiserror::Error;

pub use normalize::{normalize_to_raster, RasterBuffer, DEGENERATE_MID_VALUE};
pub use png::{export_field_png, export_png, PngExportOptions};
pub use raw::{expected_file_size, export_raw, RawFormat};

/// Errors that can occur while writing a raster.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Raster length {actual} != expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
