//! Edge front-end: everything the line grower consumes.
//!
//! - [`filters`]: separable Gaussian pre-blur.
//! - [`grad`]: Sobel/Scharr gradients with magnitude and orientation in
//!   degrees (`[0, 180)`), bundled as a [`GradientField`].
//! - [`buckets`]: pseudo-sort of pixels into descending magnitude buckets.
//! - [`nms`]: plain non-maximum suppression producing ED anchors.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).

pub mod buckets;
pub mod filters;
pub mod grad;
pub mod nms;

pub use buckets::MagnitudeBuckets;
pub use filters::{gaussian_blur, SeparableFilter, StaticSeparableFilter, GAUSSIAN_5TAP};
pub use grad::{image_gradients, GradientField, GradientKernel};
pub use nms::detect_ed_anchors;
