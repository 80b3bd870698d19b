//! Diagnostics data model returned by the detector.
//!
//! [`DetectionReport`] bundles the detected segments with counts of the
//! intermediate products and a [`TimingBreakdown`] of the stages.

pub mod report;
pub mod timing;

pub use report::DetectionReport;
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
