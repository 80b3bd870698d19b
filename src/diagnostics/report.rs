use super::TimingBreakdown;
use crate::geometry::LineSegment;
use serde::{Deserialize, Serialize};

/// Outcome of one full detector run on an image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub width: usize,
    pub height: usize,
    pub aligned_groups: usize,
    pub ed_anchors: usize,
    /// Accepted segments (with promoted candidates appended when enabled).
    pub segments: Vec<LineSegment>,
    /// Weak candidates that passed statistical validation.
    pub candidates: Vec<LineSegment>,
    /// Weak candidates before validation.
    pub raw_candidates: usize,
    pub timing: TimingBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let report = DetectionReport {
            width: 4,
            height: 3,
            aligned_groups: 2,
            segments: vec![LineSegment::new([0.0, 0.0], [3.0, 0.0])],
            ..DetectionReport::default()
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["alignedGroups"], 2);
        assert_eq!(json["rawCandidates"], 0);
        assert_eq!(json["segments"][0]["end"][0], 3.0);
        assert!(json["timing"]["stages"].as_array().unwrap().is_empty());
    }
}
