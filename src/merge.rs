//! Folding of near-collinear, adjacent segments.
use crate::angle::angle_diff_deg;
use crate::geometry::{rasterize, LineFit, LineSegment};
use serde::{Deserialize, Serialize};

/// Gates of the segment merger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeParams {
    /// Maximum angle between the two segments, degrees.
    pub angle_tolerance_deg: f32,
    /// Maximum distance from either midpoint to the other segment's line.
    pub center_distance_px: f32,
    /// Non-overlapping segments still merge when two endpoints are closer
    /// than this.
    pub endpoint_distance_px: f32,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            angle_tolerance_deg: 8.0,
            center_distance_px: 1.5,
            endpoint_distance_px: 12.0,
        }
    }
}

fn dot(a: [f32; 2], b: [f32; 2]) -> f32 {
    a[0] * b[0] + a[1] * b[1]
}

fn sub(a: [f32; 2], b: [f32; 2]) -> [f32; 2] {
    [a[0] - b[0], a[1] - b[1]]
}

/// `p` projected onto `seg`'s line falls between its endpoints.
fn within(seg: &LineSegment, p: [f32; 2]) -> bool {
    let q = seg.project(p);
    dot(sub(q, seg.beg), sub(q, seg.end)) <= 0.0
}

fn overlap(a: &LineSegment, b: &LineSegment) -> bool {
    within(a, b.beg) || within(a, b.end) || within(b, a.beg) || within(b, a.end)
}

fn endpoints_close(a: &LineSegment, b: &LineSegment, max_dist: f32) -> bool {
    let limit = max_dist * max_dist;
    a.endpoints().iter().any(|&p| {
        b.endpoints().iter().any(|&q| {
            let d = sub(p, q);
            dot(d, d) < limit
        })
    })
}

/// Merges `a` and `b` into one segment when they are near-collinear and
/// overlap or nearly touch.
///
/// The merged segment lies on the least-squares line through both
/// rasterized segments and spans the two mutually farthest of the four
/// original endpoints.
pub fn merge_line_segments(
    a: &LineSegment,
    b: &LineSegment,
    params: &MergeParams,
) -> Option<LineSegment> {
    if angle_diff_deg(a.angle_deg(), b.angle_deg()) > params.angle_tolerance_deg {
        return None;
    }
    if a.center_distance_to(b) > params.center_distance_px
        || b.center_distance_to(a) > params.center_distance_px
    {
        return None;
    }
    if !overlap(a, b) && !endpoints_close(a, b, params.endpoint_distance_px) {
        return None;
    }

    let mut fit = LineFit::new();
    for px in rasterize(a.beg, a.end).into_iter().chain(rasterize(b.beg, b.end)) {
        fit.push(px);
    }
    let line = fit.fit()?;

    let points = [a.beg, a.end, b.beg, b.end];
    let (mut p, mut q) = (points[0], points[1]);
    let mut best = -1.0f32;
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let d = sub(points[i], points[j]);
            let dist = dot(d, d);
            if dist > best {
                best = dist;
                p = points[i];
                q = points[j];
            }
        }
    }
    Some(LineSegment::from_line_span(&line, p, q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: [f32; 2], q: [f32; 2]) -> bool {
        (p[0] - q[0]).abs() < 1e-3 && (p[1] - q[1]).abs() < 1e-3
    }

    #[test]
    fn collinear_gap_merges() {
        let a = LineSegment::new([0.0, 10.0], [20.0, 10.0]);
        let b = LineSegment::new([23.0, 10.0], [43.0, 10.0]);
        let merged = merge_line_segments(&a, &b, &MergeParams::default()).unwrap();
        assert!(close(merged.beg, [0.0, 10.0]), "{:?}", merged);
        assert!(close(merged.end, [43.0, 10.0]), "{:?}", merged);
    }

    #[test]
    fn merge_is_symmetric_up_to_endpoint_order() {
        let a = LineSegment::new([2.0, 3.0], [30.0, 17.0]);
        let b = LineSegment::new([25.0, 15.0], [50.0, 27.0]);
        let params = MergeParams::default();
        let ab = merge_line_segments(&a, &b, &params).unwrap();
        let ba = merge_line_segments(&b, &a, &params).unwrap();
        let same = close(ab.beg, ba.beg) && close(ab.end, ba.end);
        let swapped = close(ab.beg, ba.end) && close(ab.end, ba.beg);
        assert!(same || swapped, "{ab:?} vs {ba:?}");
        assert!(angle_diff_deg(ab.angle_deg(), ba.angle_deg()) < 1e-3);
    }

    #[test]
    fn overlapping_parallel_segments_merge_without_close_endpoints() {
        let a = LineSegment::new([0.0, 5.0], [60.0, 5.0]);
        let b = LineSegment::new([20.0, 6.0], [40.0, 6.0]);
        let merged = merge_line_segments(&a, &b, &MergeParams::default()).unwrap();
        assert!((merged.length() - 60.0).abs() < 0.5, "{:?}", merged);
    }

    #[test]
    fn gates_reject() {
        let params = MergeParams::default();
        let a = LineSegment::new([0.0, 10.0], [20.0, 10.0]);
        // Too far along the line.
        let far = LineSegment::new([40.0, 10.0], [60.0, 10.0]);
        assert!(merge_line_segments(&a, &far, &params).is_none());
        // Parallel but offset.
        let offset = LineSegment::new([5.0, 14.0], [25.0, 14.0]);
        assert!(merge_line_segments(&a, &offset, &params).is_none());
        // Crossing at a steep angle.
        let steep = LineSegment::new([10.0, 0.0], [12.0, 20.0]);
        assert!(merge_line_segments(&a, &steep, &params).is_none());
    }
}
