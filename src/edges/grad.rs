//! Image gradients (Sobel/Scharr) with magnitude and orientation.
//!
//! - Convolves a 3×3 kernel pair (`X` and `Y`) with border clamping.
//! - Outputs per-pixel `gx`, `gy`, `mag = sqrt(gx^2+gy^2)` and the gradient
//!   orientation in degrees folded into `[0, 180)`. The level line at a pixel
//!   runs at `ori - 90°`.
//!
//! Complexity: O(W·H) per pass; memory: four float buffers.
use crate::angle::orientation_deg;
use crate::geometry::Pixel;
use crate::image::{ImageF32, ImageView};
use serde::{Deserialize, Serialize};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SCHARR_KERNEL_X: Kernel3 = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];
const SCHARR_KERNEL_Y: Kernel3 = [[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]];

/// Derivative kernel used for the gradient field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKernel {
    #[default]
    Sobel,
    Scharr,
}

/// Per-pixel gradient buffers sharing one `w × h` grid. Read-only to the
/// line grower.
#[derive(Clone, Debug, Default)]
pub struct GradientField {
    /// Horizontal derivative
    pub gx: ImageF32,
    /// Vertical derivative (y grows downwards)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel
    pub mag: ImageF32,
    /// Gradient orientation in degrees, `[0, 180)`
    pub ori: ImageF32,
}

impl GradientField {
    /// Build a field from raw derivative buffers, deriving magnitude and
    /// orientation. `None` when a buffer does not hold `w * h` values.
    pub fn from_components(w: usize, h: usize, gx: Vec<f32>, gy: Vec<f32>) -> Option<Self> {
        let gx = ImageF32::from_vec(w, h, gx)?;
        let gy = ImageF32::from_vec(w, h, gy)?;
        let mut mag = ImageF32::new(w, h);
        let mut ori = ImageF32::new(w, h);
        for (i, (&dx, &dy)) in gx.data.iter().zip(&gy.data).enumerate() {
            mag.data[i] = (dx * dx + dy * dy).sqrt();
            ori.data[i] = orientation_deg(dy, dx);
        }
        Some(Self { gx, gy, mag, ori })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.mag.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.mag.h
    }

    #[inline]
    pub fn contains(&self, px: Pixel) -> bool {
        self.mag.contains(px.x, px.y)
    }

    /// Gradient magnitude at `px`, `None` outside the grid.
    #[inline]
    pub fn magnitude(&self, px: Pixel) -> Option<f32> {
        self.mag.get_i(px.x, px.y)
    }

    /// Gradient orientation at `px` in degrees, `None` outside the grid.
    #[inline]
    pub fn orientation(&self, px: Pixel) -> Option<f32> {
        self.ori.get_i(px.x, px.y)
    }
}

fn gradients_with_kernels(l: &ImageF32, kernel_x: &Kernel3, kernel_y: &Kernel3) -> GradientField {
    let w = l.w;
    let h = l.h;
    let mut field = GradientField {
        gx: ImageF32::new(w, h),
        gy: ImageF32::new(w, h),
        mag: ImageF32::new(w, h),
        ori: ImageF32::new(w, h),
    };

    if w == 0 || h == 0 {
        return field;
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &kernel_x[ky];
                let ky_row = &kernel_y[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }

            let idx = y * w + x;
            field.gx.data[idx] = sum_x;
            field.gy.data[idx] = sum_y;
            field.mag.data[idx] = (sum_x * sum_x + sum_y * sum_y).sqrt();
            field.ori.data[idx] = orientation_deg(sum_y, sum_x);
        }
    }

    field
}

/// Compute the gradient field of a single-channel float image.
pub fn image_gradients(l: &ImageF32, kernel: GradientKernel) -> GradientField {
    match kernel {
        GradientKernel::Sobel => gradients_with_kernels(l, &SOBEL_KERNEL_X, &SOBEL_KERNEL_Y),
        GradientKernel::Scharr => gradients_with_kernels(l, &SCHARR_KERNEL_X, &SCHARR_KERNEL_Y),
    }
}
