//! Detector orchestrating the aligned-anchor line pipeline.
//!
//! Overview
//! - Optional 5-tap Gaussian blur, then Sobel/Scharr gradients.
//! - Pixels are bucketed by magnitude and scanned strongest first to
//!   extract aligned-anchor triplets; a plain NMS pass supplies ED anchors.
//! - Every group, in ascending id order, seeds a bidirectional growth. Strong
//!   results are merged into the accepted list, weak ones are kept as
//!   candidates.
//! - Candidates go through the kurtosis/skewness validator and can be
//!   promoted to the accepted list.
//!
//! Modules
//! - [`params`]: configuration types used by the detector and CLI.
//! - `detect`: the core routing from field and anchors to segments.
//! - `pipeline`: the [`LineDetector`] running all stages with timings.
//!
//! One image's pass owns all its mutable state (labels, link flags,
//! visited map), so images can be processed in parallel.

mod detect;
pub mod params;
mod pipeline;

pub use detect::{detect, DetectionResult};
pub use params::DetectorParams;
pub use pipeline::LineDetector;
