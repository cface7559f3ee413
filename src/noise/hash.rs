//! Stateless lattice hashing.

/// Scale that maps a 24-bit integer onto [0, 1).
const UNIT_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

#[inline]
fn mix64(mut z: u64) -> u64 {
    // splitmix64 finalizer
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Maps `(seed, octave, ix, iy)` to a pseudo-random scalar in `[0, 1)`.
///
/// Pure function of its inputs: identical arguments give identical results
/// on every call, thread and platform. Each input is folded into a 64-bit
/// accumulator through a multiply-xor-shift avalanche, and the top 24 bits of
/// the final state are scaled into the unit interval (exact in `f32`, so the
/// result never rounds up to 1.0).
#[inline]
pub fn lattice_hash(seed: u64, octave: u32, ix: i64, iy: i64) -> f32 {
    let mut h = mix64(seed ^ 0x9E37_79B9_7F4A_7C15);
    h = mix64(h ^ u64::from(octave).wrapping_mul(0x1656_67B1_9E37_79F9));
    h = mix64(h ^ (ix as u64).wrapping_mul(0x27D4_EB2F_1656_67C5));
    h = mix64(h ^ (iy as u64).wrapping_mul(0x85EB_CA77_C2B2_AE63));
    (h >> 40) as f32 * UNIT_SCALE
}
