//! Planar primitives used by the line grower.
//!
//! - [`Pixel`]: integer raster coordinate.
//! - [`Line`]: infinite line in point/unit-direction form, with the
//!   axis-snapping helpers the walker needs.
//! - [`LineFit`]: online least-squares (orthogonal regression) accumulator.
//! - [`LineSegment`]: finite segment with length, angle and projection helpers.
//! - [`rasterize`]: Bresenham trace between two float endpoints.
mod line;
mod pixel;
mod raster;
mod segment;

pub use line::{Line, LineFit};
pub use pixel::Pixel;
pub use raster::rasterize;
pub use segment::LineSegment;
