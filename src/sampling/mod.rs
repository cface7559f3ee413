//! Continuous (off-grid) sampling over a height field.

mod bilinear;

pub use bilinear::{ContinuousSampler, SampleError};
