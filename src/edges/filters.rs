//! Separable smoothing applied before gradient computation.
use crate::image::{ImageF32, ImageView};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order).
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap binomial filter `[1, 4, 6, 4, 1] / 16` (σ ≈ 1).
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Convolve rows then columns with `filter`, replicating borders.
pub fn gaussian_blur<F: SeparableFilter>(src: &ImageF32, filter: &F) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let taps = filter.taps();
    if w == 0 || h == 0 || taps.is_empty() {
        return src.clone();
    }
    let radius = (taps.len() / 2) as isize;

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, w);
                acc += src_row[sx] * t;
            }
            *dst = acc;
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius, h);
                acc += horiz.get(x, sy) * t;
            }
            out.set(x, y, acc);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_preserves_constant_image() {
        let img = ImageF32::filled(7, 5, 42.0);
        let out = gaussian_blur(&img, &GAUSSIAN_5TAP);
        assert!(out.data.iter().all(|&v| (v - 42.0).abs() < 1e-4));
    }

    #[test]
    fn blur_spreads_an_impulse_symmetrically() {
        let mut img = ImageF32::new(9, 9);
        img.set(4, 4, 256.0);
        let out = gaussian_blur(&img, &GAUSSIAN_5TAP);
        assert!((out.get(4, 4) - 256.0 * 0.375 * 0.375).abs() < 1e-3);
        assert!((out.get(3, 4) - out.get(5, 4)).abs() < 1e-5);
        assert!((out.get(4, 2) - out.get(2, 4)).abs() < 1e-5);
        let total: f32 = out.data.iter().sum();
        assert!((total - 256.0).abs() < 1e-2);
    }
}
