//! Bilinear height and forward-difference gradient reconstruction.

use glam::Vec2;
use thiserror::Error;

use crate::terrain::{FieldError, HeightField};

/// Errors raised by continuous queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("Sample point ({x}, {y}) outside domain [0, {max_x}) x [0, {max_y})")]
    OutOfDomain { x: f32, y: f32, max_x: f32, max_y: f32 },
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// The four grid corners around a query point plus the offsets into the cell.
struct Cell {
    h00: f32,
    h10: f32,
    h01: f32,
    h11: f32,
    xt: f32,
    yt: f32,
}

/// Answers height and slope queries at real-valued coordinates.
///
/// Valid queries satisfy `0 <= x < width - 1` and `0 <= y < height - 1`, so
/// the far corner `(x0 + 1, y0 + 1)` is always on the grid.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousSampler<'a> {
    field: &'a HeightField,
}

impl<'a> ContinuousSampler<'a> {
    pub fn new(field: &'a HeightField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &'a HeightField {
        self.field
    }

    /// Exclusive upper bounds `(width - 1, height - 1)` of the query domain.
    pub fn domain(&self) -> (f32, f32) {
        (
            (self.field.width() - 1) as f32,
            (self.field.height() - 1) as f32,
        )
    }

    /// True if `(x, y)` may be queried. NaN coordinates never are.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (max_x, max_y) = self.domain();
        x >= 0.0 && x < max_x && y >= 0.0 && y < max_y
    }

    fn cell(&self, x: f32, y: f32) -> Result<Cell, SampleError> {
        if !self.contains(x, y) {
            let (max_x, max_y) = self.domain();
            return Err(SampleError::OutOfDomain { x, y, max_x, max_y });
        }

        let xf = x.floor();
        let yf = y.floor();
        let x0 = xf as u32;
        let y0 = yf as u32;
        let (x1, y1) = (x0 + 1, y0 + 1);

        Ok(Cell {
            h00: self.field.height_at(x0, y0)?,
            h10: self.field.height_at(x1, y0)?,
            h01: self.field.height_at(x0, y1)?,
            h11: self.field.height_at(x1, y1)?,
            xt: x - xf,
            yt: y - yf,
        })
    }

    /// Bilinear height at `(x, y)`. Integer coordinates return the stored
    /// grid value exactly.
    pub fn height_at_fractional(&self, x: f32, y: f32) -> Result<f32, SampleError> {
        let c = self.cell(x, y)?;

        // top and bottom edges
        let a = c.h00 * (1.0 - c.xt) + c.h10 * c.xt;
        let b = c.h01 * (1.0 - c.xt) + c.h11 * c.xt;

        Ok(a * (1.0 - c.yt) + b * c.yt)
    }

    /// Forward-difference slope `(gx, gy)` across the cell containing `(x, y)`.
    ///
    /// `gx` is the difference between the right and left cell edges, each
    /// blended at `yt`; `gy` likewise between bottom and top edges at `xt`.
    /// The result is a slope estimate, not normalized.
    pub fn gradient_at_fractional(&self, x: f32, y: f32) -> Result<Vec2, SampleError> {
        let c = self.cell(x, y)?;

        let xa = c.h00 * (1.0 - c.yt) + c.h01 * c.yt;
        let xb = c.h10 * (1.0 - c.yt) + c.h11 * c.yt;

        let ya = c.h00 * (1.0 - c.xt) + c.h10 * c.xt;
        let yb = c.h01 * (1.0 - c.xt) + c.h11 * c.xt;

        Ok(Vec2::new(xb - xa, yb - ya))
    }

    /// Unit direction of steepest descent at `(x, y)`; zero on flat ground.
    pub fn steepest_descent(&self, x: f32, y: f32) -> Result<Vec2, SampleError> {
        Ok((-self.gradient_at_fractional(x, y)?).normalize_or_zero())
    }
}
