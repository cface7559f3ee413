//! Row-major height field storage.

use thiserror::Error;

/// Errors raised by grid construction and raw-index access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Invalid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Index ({x}, {y}) out of range for {width}x{height} field")]
    IndexOutOfRange { x: u32, y: u32, width: u32, height: u32 },
    #[error("Height data length {actual} != expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// A 2-D grid of scalar elevation values.
///
/// The value at grid point `(x, y)` is stored at index `y * width + x`.
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    width: u32,
    height: u32,
    heights: Vec<f32>,
}

impl HeightField {
    /// Creates a zero-filled field.
    ///
    /// # Errors
    /// `FieldError::InvalidDimensions` if either dimension is zero or the
    /// cell count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            heights: vec![0.0; len],
        })
    }

    /// Wraps existing row-major height data.
    pub fn from_heights(width: u32, height: u32, heights: Vec<f32>) -> Result<Self, FieldError> {
        let expected = cell_count(width, height)?;
        if heights.len() != expected {
            return Err(FieldError::LengthMismatch {
                expected,
                actual: heights.len(),
            });
        }
        Ok(Self { width, height, heights })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Always false; a field has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Returns the row-major storage index of `(x, y)`.
    ///
    /// # Errors
    /// `FieldError::IndexOutOfRange` if the point lies outside the grid.
    pub fn index_of(&self, x: u32, y: u32) -> Result<usize, FieldError> {
        if x >= self.width || y >= self.height {
            return Err(FieldError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Returns the height stored at `(x, y)`.
    pub fn height_at(&self, x: u32, y: u32) -> Result<f32, FieldError> {
        let i = self.index_of(x, y)?;
        Ok(self.heights[i])
    }

    /// Overwrites the height stored at `(x, y)`.
    pub fn set_height_at(&mut self, x: u32, y: u32, value: f32) -> Result<(), FieldError> {
        let i = self.index_of(x, y)?;
        self.heights[i] = value;
        Ok(())
    }

    /// Adds `delta` to the height stored at `(x, y)`.
    pub fn add_height_at(&mut self, x: u32, y: u32, delta: f32) -> Result<(), FieldError> {
        let i = self.index_of(x, y)?;
        self.heights[i] += delta;
        Ok(())
    }

    /// Row-major view of all heights.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Mutable row-major view. The slice length is fixed, so the layout
    /// cannot change through it.
    pub fn heights_mut(&mut self) -> &mut [f32] {
        &mut self.heights
    }

    /// Returns the global (min, max) height.
    pub fn height_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &h in &self.heights {
            min = min.min(h);
            max = max.max(h);
        }
        (min, max)
    }

    /// Iterates over all (x, y) coordinates in storage order.
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

fn cell_count(width: u32, height: u32) -> Result<usize, FieldError> {
    if width == 0 || height == 0 {
        return Err(FieldError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(FieldError::InvalidDimensions { width, height })
}
