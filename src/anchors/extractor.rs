use super::{AlignedAnchors, AnchorParams};
use crate::angle::angle_diff_deg;
use crate::edges::{GradientField, MagnitudeBuckets};
use crate::geometry::Pixel;
use crate::image::Grid;
use crate::octant::{Octant, Offset};

/// Strongest in-grid neighbour among `offsets`, ties going to the first.
fn strongest(field: &GradientField, px: Pixel, offsets: &[Offset]) -> Option<(Pixel, f32)> {
    let mut best: Option<(Pixel, f32)> = None;
    for &(dx, dy) in offsets {
        let q = px.offset(dx, dy);
        let Some(mag) = field.magnitude(q) else {
            continue;
        };
        if best.map_or(true, |(_, m)| mag > m) {
            best = Some((q, mag));
        }
    }
    best
}

struct AnchorScan<'a> {
    field: &'a GradientField,
    params: &'a AnchorParams,
    used: Grid<bool>,
    anchors: AlignedAnchors,
}

impl<'a> AnchorScan<'a> {
    fn is_used(&self, px: Pixel) -> bool {
        self.used.get_i(px.x, px.y).unwrap_or(true)
    }

    fn mark_used(&mut self, px: Pixel) {
        self.used.set(px.x as usize, px.y as usize, true);
    }

    /// Strict local maximum across the gradient direction. Both sides need
    /// at least one in-grid neighbour and one side must trail by the
    /// anchor threshold.
    fn is_local_max(&self, px: Pixel, mag: f32, octant: Octant) -> bool {
        let fans = octant.fans();
        for &(dx, dy) in fans.iter() {
            if let Some(m) = self.field.magnitude(px.offset(dx, dy)) {
                if m >= mag {
                    return false;
                }
            }
        }
        let (Some((_, first)), Some((_, second))) = (
            strongest(self.field, px, &fans[..3]),
            strongest(self.field, px, &fans[3..]),
        ) else {
            return false;
        };
        let threshold = self.params.threshold;
        mag - first >= threshold || mag - second >= threshold
    }

    fn visit(&mut self, px: Pixel, mag: f32, ori: f32) {
        let octant = Octant::from_orientation(ori);
        if !self.is_local_max(px, mag, octant) {
            return;
        }
        let fans = octant.rotated().fans();
        let (Some((before, _)), Some((after, _))) = (
            strongest(self.field, px, &fans[..3]),
            strongest(self.field, px, &fans[3..]),
        ) else {
            return;
        };
        if self.is_used(before) || self.is_used(after) {
            return;
        }
        let tol = self.params.angle_tolerance_deg;
        let agrees = |q: Pixel| {
            self.field
                .orientation(q)
                .is_some_and(|o| angle_diff_deg(ori, o) <= tol)
        };
        if !(agrees(before) || agrees(after)) {
            return;
        }
        for q in [before, px, after] {
            self.mark_used(q);
        }
        self.anchors.push([before, px, after]);
    }
}

/// Scan `buckets` strongest first and collect aligned-anchor triplets.
///
/// Pixels weaker than `min_gradient` are never considered: a bucket whose
/// first pixel is below it is skipped and the scan of a bucket stops at the
/// first such pixel.
pub fn extract_aligned_anchors(
    field: &GradientField,
    buckets: &MagnitudeBuckets,
    min_gradient: f32,
    params: &AnchorParams,
) -> AlignedAnchors {
    let mut scan = AnchorScan {
        field,
        params,
        used: Grid::filled(field.width(), field.height(), false),
        anchors: AlignedAnchors::new(),
    };

    for bucket in buckets.iter() {
        let Some(&head) = bucket.first() else {
            continue;
        };
        if field.magnitude(head).map_or(true, |m| m < min_gradient) {
            continue;
        }
        for &px in bucket {
            let (Some(mag), Some(ori)) = (field.magnitude(px), field.orientation(px)) else {
                continue;
            };
            if mag < min_gradient {
                break;
            }
            if scan.is_used(px) {
                continue;
            }
            scan.visit(px, mag, ori);
        }
    }

    log::debug!(
        "extract_aligned_anchors: {} buckets -> {} groups",
        buckets.len(),
        scan.anchors.group_count()
    );
    scan.anchors
}
