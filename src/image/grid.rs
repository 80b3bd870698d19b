//! Owned single-channel raster in row-major layout (stride == width).
//!
//! The same container backs float images (`ImageF32`), the integer label
//! map and boolean visit masks. Signed accessors (`get_i`, `contains`) make
//! neighbourhood walks free of manual bounds juggling.

/// Row-major `w × h` buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid<T> {
    /// Width in pixels
    pub w: usize,
    /// Height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

/// Float image used for intensities and gradient components.
pub type ImageF32 = Grid<f32>;

impl<T: Copy> Grid<T> {
    /// Construct a buffer of size `w × h` filled with `value`.
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            data: vec![value; w * h],
        }
    }

    /// Wrap existing row-major data. Returns `None` on a size mismatch.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == w * h).then_some(Self { w, h, data })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// True when the signed coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h
    }

    /// Value at a signed coordinate, `None` outside the grid.
    #[inline]
    pub fn get_i(&self, x: i32, y: i32) -> Option<T> {
        self.contains(x, y).then(|| self.get(x as usize, y as usize))
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}

impl<T: Copy + Default> Grid<T> {
    /// Construct a default-initialised buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }
}

impl<T: Copy> crate::image::traits::ImageView for Grid<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageF32 {
    /// Convert an 8-bit grey view into float intensities on the 0..255 scale.
    pub fn from_gray_u8(gray: &crate::image::ImageU8<'_>) -> Self {
        use crate::image::traits::ImageView;
        let mut out = ImageF32::new(gray.w, gray.h);
        for y in 0..gray.h {
            let src = gray.row(y);
            for (dst, &v) in out.row_mut(y).iter_mut().zip(src) {
                *dst = v as f32;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageU8, ImageView};

    #[test]
    fn signed_access_respects_bounds() {
        let mut g = Grid::filled(3, 2, 0i32);
        g.set(2, 1, 7);
        assert_eq!(g.get_i(2, 1), Some(7));
        assert_eq!(g.get_i(-1, 0), None);
        assert_eq!(g.get_i(3, 0), None);
        assert_eq!(g.get_i(0, 2), None);
        assert!(g.contains(0, 0));
    }

    #[test]
    fn from_vec_rejects_size_mismatch() {
        assert!(Grid::from_vec(2, 2, vec![0.0f32; 3]).is_none());
        assert!(Grid::from_vec(2, 2, vec![0.0f32; 4]).is_some());
    }

    #[test]
    fn gray_conversion_keeps_intensity_scale() {
        let data = [0u8, 10, 20, 99, 200, 255, 1, 2];
        let view = ImageU8 {
            w: 3,
            h: 2,
            stride: 4,
            data: &data,
        };
        let img = ImageF32::from_gray_u8(&view);
        assert_eq!(img.row(0), &[0.0, 10.0, 20.0]);
        assert_eq!(img.row(1), &[200.0, 255.0, 1.0]);
    }
}
