#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod geometry;
pub mod image;

// Stage modules: public for tools and tests, considered internals.
pub mod anchors;
pub mod angle;
pub mod edges;
pub mod linking;
pub mod merge;
pub mod octant;
pub mod validate;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect, DetectionResult, DetectorParams, LineDetector};
pub use crate::geometry::{Line, LineSegment, Pixel};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use aligned_lsd::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 48usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let det = LineDetector::new(DetectorParams::default());
/// let report = det.process(img);
/// println!("segments={} latency_ms={:.3}", report.segments.len(), report.timing.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{DetectionReport, DetectorParams, LineDetector, LineSegment};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::anchors::{extract_aligned_anchors, AlignedAnchors, AnchorParams};
    pub use crate::edges::{
        detect_ed_anchors, gaussian_blur, image_gradients, GradientField, GradientKernel,
        MagnitudeBuckets,
    };
    pub use crate::linking::{Label, LabelGrid, LinkContext, LinkParams};
    pub use crate::merge::{merge_line_segments, MergeParams};
    pub use crate::validate::{
        aligned_density, anchor_density, validate_candidates, ValidationParams,
    };
}
