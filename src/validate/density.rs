use crate::angle::angle_diff_deg;
use crate::edges::GradientField;
use crate::geometry::{rasterize, LineSegment, Pixel};
use crate::linking::LabelGrid;

fn fraction(pixels: impl Iterator<Item = Pixel>, mut hit: impl FnMut(Pixel) -> Option<bool>) -> f32 {
    let (mut total, mut hits) = (0usize, 0usize);
    for px in pixels {
        if let Some(is_hit) = hit(px) {
            total += 1;
            hits += is_hit as usize;
        }
    }
    if total == 0 {
        0.0
    } else {
        hits as f32 / total as f32
    }
}

/// Fraction of the segment's in-grid pixels carrying an ED-anchor or group
/// label.
pub fn anchor_density(labels: &LabelGrid, segment: &LineSegment) -> f32 {
    fraction(rasterize(segment.beg, segment.end).into_iter(), |px| {
        labels.contains(px).then(|| !labels.get(px).is_background())
    })
}

/// Fraction of the segment's in-grid pixels whose gradient is normal to the
/// segment within `tolerance_deg`.
pub fn aligned_density(field: &GradientField, segment: &LineSegment, tolerance_deg: f32) -> f32 {
    let normal = segment.angle_deg() + 90.0;
    fraction(rasterize(segment.beg, segment.end).into_iter(), |px| {
        field
            .orientation(px)
            .map(|ori| angle_diff_deg(ori, normal) <= tolerance_deg)
    })
}
