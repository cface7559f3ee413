//! Range normalization and 8-bit quantization.

use crate::terrain::HeightField;

/// Sample value used for every pixel of a zero-variance field.
pub const DEGENERATE_MID_VALUE: u8 = 128;

/// A row-major single-channel 8-bit raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RasterBuffer {
    /// Returns the sample at `(x, y)`, or `None` off the raster.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Maps the field's global `[min, max]` range onto `0..=255`.
///
/// The cell holding the minimum becomes 0 and the cell holding the maximum
/// becomes 255. A field whose cells are all equal maps every pixel to
/// `DEGENERATE_MID_VALUE`, as does one with a non-finite extreme. The span is
/// taken in `f64`, so finite fields wider than `f32::MAX` still normalize.
/// The field itself is not modified.
pub fn normalize_to_raster(field: &HeightField) -> RasterBuffer {
    let (min, max) = field.height_range();

    let pixels = if min.is_finite() && max.is_finite() && min < max {
        let min = f64::from(min);
        let range = f64::from(max) - min;
        field
            .heights()
            .iter()
            .map(|&h| quantize((f64::from(h) - min) / range))
            .collect()
    } else {
        vec![DEGENERATE_MID_VALUE; field.len()]
    };

    RasterBuffer {
        width: field.width(),
        height: field.height(),
        pixels,
    }
}

#[inline]
fn quantize(normalized: f64) -> u8 {
    (normalized * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::LatticeNoiseConfig;
    use crate::terrain::{assign_uniform_random_seeded, generate_heightmap};

    #[test]
    fn test_extremes_map_to_full_range() {
        let mut field = HeightField::new(32, 32).unwrap();
        generate_heightmap(&mut field, &LatticeNoiseConfig::with_seed(11)).unwrap();

        let raster = normalize_to_raster(&field);
        assert_eq!(raster.pixels.len(), 32 * 32);
        assert_eq!(raster.pixels.iter().copied().min(), Some(0));
        assert_eq!(raster.pixels.iter().copied().max(), Some(255));
    }

    #[test]
    fn test_min_and_max_cells_land_on_0_and_255() {
        let mut field = HeightField::new(8, 8).unwrap();
        assign_uniform_random_seeded(&mut field, -5.0, 5.0, 1).unwrap();
        field.set_height_at(2, 3, -100.0).unwrap();
        field.set_height_at(7, 0, 250.0).unwrap();

        let raster = normalize_to_raster(&field);
        assert_eq!(raster.get(2, 3), Some(0));
        assert_eq!(raster.get(7, 0), Some(255));
    }

    #[test]
    fn test_known_values() {
        let field = HeightField::from_heights(2, 2, vec![0.0, 10.0, 20.0, 30.0]).unwrap();
        let raster = normalize_to_raster(&field);
        // 10/30 * 255 = 85, 20/30 * 255 = 170
        assert_eq!(raster.pixels, vec![0, 85, 170, 255]);
    }

    #[test]
    fn test_degenerate_field_is_mid_gray() {
        let field = HeightField::from_heights(3, 2, vec![4.25; 6]).unwrap();
        let raster = normalize_to_raster(&field);
        assert!(raster.pixels.iter().all(|&p| p == DEGENERATE_MID_VALUE));

        let zeros = HeightField::new(5, 5).unwrap();
        assert!(normalize_to_raster(&zeros).pixels.iter().all(|&p| p == 128));
    }

    #[test]
    fn test_span_wider_than_f32_max() {
        let field = HeightField::from_heights(2, 1, vec![-3e38, 3e38]).unwrap();
        assert_eq!(normalize_to_raster(&field).pixels, vec![0, 255]);

        let field = HeightField::from_heights(3, 1, vec![f32::MAX, 0.0, -f32::MAX]).unwrap();
        assert_eq!(normalize_to_raster(&field).pixels, vec![255, 128, 0]);
    }

    #[test]
    fn test_non_finite_extremes_are_mid_gray() {
        let field = HeightField::from_heights(2, 1, vec![0.0, f32::INFINITY]).unwrap();
        assert!(normalize_to_raster(&field).pixels.iter().all(|&p| p == DEGENERATE_MID_VALUE));
    }

    #[test]
    fn test_source_field_unchanged() {
        let mut field = HeightField::new(16, 16).unwrap();
        generate_heightmap(&mut field, &LatticeNoiseConfig::with_seed(2)).unwrap();
        let before = field.clone();
        let _ = normalize_to_raster(&field);
        assert_eq!(field, before);
    }

    #[test]
    fn test_raster_dimensions_and_bounds() {
        let field = HeightField::new(7, 3).unwrap();
        let raster = normalize_to_raster(&field);
        assert_eq!((raster.width, raster.height), (7, 3));
        assert_eq!(raster.get(6, 2), Some(128));
        assert_eq!(raster.get(7, 0), None);
    }
}
