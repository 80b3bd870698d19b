//! Plain non-maximum suppression producing ED anchors.
//!
//! A pixel survives when its magnitude reaches `min_gradient` and is strictly
//! greater than both neighbours along its quantized gradient direction. The
//! outermost 1-pixel frame is skipped so neighbour lookups never leave the
//! grid.
use crate::edges::grad::GradientField;
use crate::geometry::Pixel;
use crate::image::ImageView;
use crate::octant::Octant;

/// Collect NMS survivors in raster order.
pub fn detect_ed_anchors(field: &GradientField, min_gradient: f32) -> Vec<Pixel> {
    let w = field.width();
    let h = field.height();
    if w < 3 || h < 3 {
        return Vec::new();
    }

    let inner_pixels = (w - 2) * (h - 2);
    let mut anchors = Vec::with_capacity(inner_pixels / 8 + 1);
    for y in 1..h - 1 {
        let mag_row = field.mag.row(y);
        let ori_row = field.ori.row(y);
        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < min_gradient {
                continue;
            }
            let (dx, dy) = Octant::from_orientation(ori_row[x]).step();
            let ahead = field.mag.get((x as i32 + dx) as usize, (y as i32 + dy) as usize);
            let behind = field.mag.get((x as i32 - dx) as usize, (y as i32 - dy) as usize);
            if mag <= ahead || mag <= behind {
                continue;
            }
            anchors.push(Pixel::new(x as i32, y as i32));
        }
    }

    log::debug!(
        "detect_ed_anchors: {}x{} min_gradient={:.1} -> {} anchors",
        w,
        h,
        min_gradient,
        anchors.len()
    );
    anchors
}
