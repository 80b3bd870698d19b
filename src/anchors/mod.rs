//! Aligned-anchor extraction.
//!
//! Pixels are visited strongest first (see [`crate::edges::MagnitudeBuckets`]).
//! A pixel becomes the middle of an aligned-anchor group when
//!
//! - its magnitude strictly exceeds the six neighbours straddling it along
//!   the quantized gradient direction, with a clear margin on at least one
//!   side, and
//! - its strongest level-line neighbour on either side has a gradient
//!   orientation within tolerance of its own.
//!
//! The emitted triplet is `(first side, pixel, second side)`. All three
//! pixels are consumed and cannot seed or join another group. Each group
//! also carries an initial [`Line`] estimate from its orientations, later
//! refined by least squares while segments grow.

mod extractor;
mod groups;
mod options;

pub use extractor::extract_aligned_anchors;
pub use groups::AlignedAnchors;
pub use options::AnchorParams;

#[cfg(test)]
mod tests;
