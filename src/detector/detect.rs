//! Core routing from a gradient field and anchors to segments.
use super::params::DetectorParams;
use crate::anchors::AlignedAnchors;
use crate::edges::GradientField;
use crate::geometry::{LineSegment, Pixel};
use crate::linking::{LabelGrid, LinkContext};
use crate::merge::merge_line_segments;
use log::debug;
use serde::{Deserialize, Serialize};

/// Accepted segments plus the weak candidates left for validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub segments: Vec<LineSegment>,
    pub candidates: Vec<LineSegment>,
}

/// Links every aligned-anchor group in ascending id order.
///
/// ED anchors are labelled first and group pixels overwrite them. An
/// accepted segment replaces every already accepted segment it merges
/// with; otherwise it is appended.
pub fn detect(
    field: &GradientField,
    aligned: &AlignedAnchors,
    ed_anchors: &[Pixel],
    params: &DetectorParams,
) -> DetectionResult {
    let labels = LabelGrid::build(field.width(), field.height(), ed_anchors, aligned);
    let lines = aligned.initial_lines(field);
    let mut ctx = LinkContext::new(field, aligned, &labels, &lines, params.linking);

    let mut segments: Vec<LineSegment> = Vec::new();
    let mut merges = 0usize;
    for seed in 0..aligned.group_count() {
        let Some(segment) = ctx.link_group(seed) else {
            continue;
        };
        let mut merged = false;
        for existing in segments.iter_mut() {
            if let Some(joined) = merge_line_segments(existing, &segment, &params.merging) {
                *existing = joined;
                merged = true;
                merges += 1;
            }
        }
        if !merged {
            segments.push(segment);
        }
    }

    let candidates = ctx.into_candidates();
    debug!(
        "detect: {} groups, {} ED anchors -> {} segments ({} merges), {} candidates",
        aligned.group_count(),
        ed_anchors.len(),
        segments.len(),
        merges,
        candidates.len()
    );
    DetectionResult {
        segments,
        candidates,
    }
}
