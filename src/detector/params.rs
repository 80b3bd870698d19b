//! Parameter types configuring the detector stages.
//!
//! Magnitudes are in Sobel units of an 8-bit intensity image (`0..=255`).
//! Every struct deserializes with defaults for missing fields, so a JSON
//! config only needs the knobs it changes.

use crate::anchors::AnchorParams;
use crate::edges::GradientKernel;
use crate::linking::LinkParams;
use crate::merge::MergeParams;
use crate::validate::ValidationParams;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Apply the 5-tap Gaussian before differentiation.
    pub blur: bool,
    pub gradient_kernel: GradientKernel,
    /// Number of magnitude buckets for the strongest-first scan.
    pub bucket_levels: usize,
    /// Pixels weaker than this never become anchors.
    pub min_gradient: f32,
    /// Append validated candidates to the accepted segments.
    pub promote_candidates: bool,
    pub anchors: AnchorParams,
    pub linking: LinkParams,
    pub merging: MergeParams,
    pub validation: ValidationParams,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            blur: true,
            gradient_kernel: GradientKernel::Sobel,
            bucket_levels: 256,
            min_gradient: 24.0,
            promote_candidates: false,
            anchors: AnchorParams::default(),
            linking: LinkParams::default(),
            merging: MergeParams::default(),
            validation: ValidationParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: DetectorParams =
            serde_json::from_str(r#"{ "min_gradient": 30.0, "linking": { "remain_steps": 5 } }"#)
                .unwrap();
        assert_eq!(params.min_gradient, 30.0);
        assert_eq!(params.linking.remain_steps, 5);
        assert_eq!(params.linking.min_anchor_density, 0.55);
        assert_eq!(params.merging, MergeParams::default());
        assert_eq!(params.bucket_levels, 256);
        assert_eq!(params.validation.rect_margin_px, 2);
    }

    #[test]
    fn kernel_names_are_snake_case() {
        let params: DetectorParams = serde_json::from_str(r#"{ "gradient_kernel": "scharr" }"#).unwrap();
        assert_eq!(params.gradient_kernel, GradientKernel::Scharr);
    }
}
