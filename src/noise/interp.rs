//! Four-sample cubic interpolation.

/// Cubic blend of four ordered samples at relative positions -1, 0, 1, 2.
///
/// Evaluates `x^3 (-a + b - c + d) + x^2 (2a - 2b + c - d) + x (-a + c) + b`.
/// It is written as a linear blend of `b` and `c` plus a correction term
/// carrying an `x (1 - x)` factor, so the weights are exactly 0 and 1 at the
/// ends. That returns exactly `b` at `x = 0` and exactly `c` at `x = 1`,
/// which the expanded cubic does not guarantee in `f32`. The outer samples
/// set the tangents at `b` and `c`, so adjacent lattice cells join with a
/// continuous first derivative.
#[inline]
pub fn interp(a: f32, b: f32, c: f32, d: f32, x: f32) -> f32 {
    let s = 1.0 - x;
    s * b + x * c + x * s * ((b - a) + x * (a - b + c - d))
}
