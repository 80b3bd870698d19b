//! Raster containers shared by every stage of the detector.
//!
//! - [`Grid`] is an owned, row-major buffer used for float images, gradient
//!   components, label maps and per-pixel flags.
//! - [`ImageU8`] borrows an 8-bit grey buffer with an arbitrary stride.
//! - [`io`] loads images and writes JSON / text exports for the tools.
pub mod grid;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::grid::{Grid, ImageF32};
pub use self::traits::ImageView;
pub use self::u8::ImageU8;
