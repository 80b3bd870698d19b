//! Pseudo-sort of pixels by gradient magnitude.
//!
//! Pixels are distributed into `levels` equal-width magnitude bins relative
//! to the strongest response. Bins are stored strongest first; inside a bin,
//! pixels keep raster order. This is a linear-time stand-in for a full sort:
//! consumers walk bins front to back and only need "stronger bins first".
use super::GradientField;
use crate::geometry::Pixel;

/// Pixels grouped into magnitude bins, strongest bin first.
#[derive(Clone, Debug, Default)]
pub struct MagnitudeBuckets {
    bins: Vec<Vec<Pixel>>,
}

impl MagnitudeBuckets {
    /// Quantise every pixel of `field` into one of `levels` bins.
    pub fn from_field(field: &GradientField, levels: usize) -> Self {
        let max_mag = field.mag.data.iter().copied().fold(0.0f32, f32::max);
        if levels == 0 || !max_mag.is_finite() || max_mag <= 0.0 {
            return Self::default();
        }

        let top = (levels - 1) as f32;
        let mut ascending: Vec<Vec<Pixel>> = vec![Vec::new(); levels];
        let w = field.width();
        for (idx, &mag) in field.mag.data.iter().enumerate() {
            let level = ((mag / max_mag) * top).floor().clamp(0.0, top) as usize;
            ascending[level].push(Pixel::new((idx % w) as i32, (idx / w) as i32));
        }
        ascending.reverse();
        Self { bins: ascending }
    }

    /// Bins, strongest first.
    pub fn iter(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        self.bins.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn pixel_count(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strongest_pixels_come_first() {
        let gx = vec![0.0, 50.0, 200.0, 10.0, 200.0, 100.0];
        let field = GradientField::from_components(3, 2, gx, vec![0.0; 6]).unwrap();
        let buckets = MagnitudeBuckets::from_field(&field, 256);
        assert_eq!(buckets.len(), 256);
        assert_eq!(buckets.pixel_count(), 6);
        let order: Vec<Pixel> = buckets.iter().flatten().copied().collect();
        assert_eq!(order[0], Pixel::new(2, 0));
        assert_eq!(order[1], Pixel::new(1, 1));
        assert_eq!(order[2], Pixel::new(2, 1));
        assert_eq!(order[5], Pixel::new(0, 0));
    }

    #[test]
    fn flat_field_has_no_buckets() {
        let field = GradientField::from_components(4, 4, vec![0.0; 16], vec![0.0; 16]).unwrap();
        assert!(MagnitudeBuckets::from_field(&field, 16).is_empty());
    }
}
