//! Kurtosis/skewness test for weak segments.
//!
//! A genuine edge has its magnitudes bunched near the top (negative skew,
//! sharp peak) while the surrounding box is dominated by weak background
//! with a few strong pixels (positive skew). Background texture shows no
//! such contrast.
use super::stats::Moments;
use super::ValidationParams;
use crate::edges::GradientField;
use crate::geometry::{rasterize, LineSegment, Pixel};
use log::debug;

/// Magnitudes inside the segment's bounding box grown by `margin` pixels on
/// every side, clipped to the grid. The margin keeps axis-aligned segments
/// from collapsing the box onto their own row or column.
fn box_magnitudes(field: &GradientField, segment: &LineSegment, margin: usize) -> Vec<f32> {
    let p0 = Pixel::round(segment.beg);
    let p1 = Pixel::round(segment.end);
    let m = i32::try_from(margin).unwrap_or(i32::MAX);
    let w = field.width() as i32;
    let h = field.height() as i32;
    let x0 = p0.x.min(p1.x).saturating_sub(m).max(0);
    let x1 = p0.x.max(p1.x).saturating_add(m).min(w - 1);
    let y0 = p0.y.min(p1.y).saturating_sub(m).max(0);
    let y1 = p0.y.max(p1.y).saturating_add(m).min(h - 1);
    if x0 > x1 || y0 > y1 {
        return Vec::new();
    }
    let mut values = Vec::with_capacity(((x1 - x0 + 1) * (y1 - y0 + 1)) as usize);
    for y in y0..=y1 {
        for x in x0..=x1 {
            values.push(field.mag.get(x as usize, y as usize));
        }
    }
    values
}

/// Whether a weak segment stands out from its local background.
pub fn is_valid_candidate(field: &GradientField, segment: &LineSegment, params: &ValidationParams) -> bool {
    let on_segment: Vec<f32> = rasterize(segment.beg, segment.end)
        .into_iter()
        .filter_map(|px| field.magnitude(px))
        .collect();
    let in_box = box_magnitudes(field, segment, params.rect_margin_px);
    if on_segment.len() < params.min_samples || in_box.len() < params.min_samples {
        return false;
    }
    let (Some(seg), Some(rect)) = (Moments::of(&on_segment), Moments::of(&in_box)) else {
        return false;
    };
    seg.kurtosis > rect.kurtosis && seg.skewness < 0.0 && rect.skewness > 0.0
}

/// Keeps the candidates passing [`is_valid_candidate`], in input order.
pub fn validate_candidates(
    field: &GradientField,
    candidates: &[LineSegment],
    params: &ValidationParams,
) -> Vec<LineSegment> {
    if !params.enabled {
        return Vec::new();
    }
    let kept: Vec<LineSegment> = candidates
        .iter()
        .filter(|seg| is_valid_candidate(field, seg, params))
        .copied()
        .collect();
    debug!(
        "validate_candidates: {} of {} candidates kept",
        kept.len(),
        candidates.len()
    );
    kept
}
