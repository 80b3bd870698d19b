//! End-to-end detector: image in, segments and diagnostics out.
//!
//! Typical usage:
//! ```no_run
//! use aligned_lsd::{DetectorParams, LineDetector};
//! use aligned_lsd::image::ImageU8;
//!
//! # fn example(gray: ImageU8) {
//! let detector = LineDetector::new(DetectorParams::default());
//! let report = detector.process(gray);
//! println!("{} segments", report.segments.len());
//! # }
//! ```
use super::detect::detect;
use super::params::DetectorParams;
use crate::anchors::extract_aligned_anchors;
use crate::diagnostics::{elapsed_ms, DetectionReport, TimingBreakdown};
use crate::edges::{
    detect_ed_anchors, gaussian_blur, image_gradients, GradientField, MagnitudeBuckets,
    GAUSSIAN_5TAP,
};
use crate::image::{ImageF32, ImageU8};
use crate::validate::validate_candidates;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Line segment detector. Holds only parameters, so one instance can serve
/// many images concurrently.
#[derive(Clone, Debug, Default)]
pub struct LineDetector {
    params: DetectorParams,
}

impl LineDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Run the detector on an 8-bit grayscale image.
    pub fn process(&self, gray: ImageU8) -> DetectionReport {
        self.process_f32(&ImageF32::from_gray_u8(&gray))
    }

    /// Run the detector on a float intensity image (`0..=255` scale).
    pub fn process_f32(&self, l: &ImageF32) -> DetectionReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let field = if self.params.blur {
            let blurred = timing.measure("blur", || gaussian_blur(l, &GAUSSIAN_5TAP));
            timing.measure("gradient", || {
                image_gradients(&blurred, self.params.gradient_kernel)
            })
        } else {
            timing.measure("gradient", || image_gradients(l, self.params.gradient_kernel))
        };

        let mut report = self.run_from_field(&field, timing);
        report.timing.total_ms = elapsed_ms(total_start);
        report
    }

    /// Run every stage after gradient computation on a prepared field.
    pub fn detect_in_field(&self, field: &GradientField) -> DetectionReport {
        let total_start = Instant::now();
        let mut report = self.run_from_field(field, TimingBreakdown::default());
        report.timing.total_ms = elapsed_ms(total_start);
        report
    }

    /// Process independent images in parallel. Reports come back in input
    /// order.
    pub fn process_batch(&self, images: &[ImageF32]) -> Vec<DetectionReport> {
        images.par_iter().map(|l| self.process_f32(l)).collect()
    }

    fn run_from_field(&self, field: &GradientField, mut timing: TimingBreakdown) -> DetectionReport {
        let params = &self.params;
        debug!(
            "LineDetector start w={} h={} min_gradient={:.1}",
            field.width(),
            field.height(),
            params.min_gradient
        );

        let buckets = timing.measure("sort", || {
            MagnitudeBuckets::from_field(field, params.bucket_levels)
        });
        let aligned = timing.measure("anchors", || {
            extract_aligned_anchors(field, &buckets, params.min_gradient, &params.anchors)
        });
        let ed_anchors = timing.measure("nms", || detect_ed_anchors(field, params.min_gradient));
        let result = timing.measure("linking", || detect(field, &aligned, &ed_anchors, params));
        let validated = timing.measure("validation", || {
            validate_candidates(field, &result.candidates, &params.validation)
        });

        let mut segments = result.segments;
        if params.promote_candidates {
            segments.extend_from_slice(&validated);
        }
        debug!(
            "LineDetector done: {} segments, {}/{} candidates validated",
            segments.len(),
            validated.len(),
            result.candidates.len()
        );

        DetectionReport {
            width: field.width(),
            height: field.height(),
            aligned_groups: aligned.group_count(),
            ed_anchors: ed_anchors.len(),
            segments,
            candidates: validated,
            raw_candidates: result.candidates.len(),
            timing,
        }
    }
}
