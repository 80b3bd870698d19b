//! Gradient-guided single step along a fitted line.
use crate::edges::GradientField;
use crate::geometry::{Line, Pixel};
use crate::octant::{walk_offsets, Octant};

/// Latches `reverse` once the fitted line jumps between the near-vertical
/// band `[-90, -67.5)` and the steep anti-diagonal band `[-67.5, -22.5)`
/// in either direction. The flag is never cleared.
pub fn update_reverse(prev_deg: f32, curr_deg: f32, reverse: bool) -> bool {
    let steep = |a: f32| (-90.0..-67.5).contains(&a);
    let anti = |a: f32| (-67.5..-22.5).contains(&a);
    reverse || (steep(prev_deg) && anti(curr_deg)) || (anti(prev_deg) && steep(curr_deg))
}

/// Next pixel ahead of `from` along `line` in the requested sense: the
/// strongest of three candidates picked from the line's octant. `None` when
/// every candidate is outside the grid.
pub fn walk(
    field: &GradientField,
    prev: &Line,
    line: &Line,
    from: Pixel,
    forward: bool,
    reverse: &mut bool,
) -> Option<Pixel> {
    let curr_deg = line.angle_deg();
    *reverse = update_reverse(prev.angle_deg(), curr_deg, *reverse);
    let offsets = walk_offsets(Octant::from_line_angle(curr_deg), forward, *reverse);

    let mut best: Option<(Pixel, f32)> = None;
    for &(dx, dy) in offsets {
        let q = from.offset(dx, dy);
        if let Some(mag) = field.magnitude(q) {
            if best.map_or(true, |(_, m)| mag > m) {
                best = Some((q, mag));
            }
        }
    }
    best.map(|(q, _)| q)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_at(deg: f32) -> Line {
        let r = deg.to_radians();
        Line::new([r.cos(), r.sin()], [0.0, 0.0]).unwrap()
    }

    fn ramp_field(w: usize, h: usize) -> GradientField {
        // Magnitude grows with x + y so the diagonal candidate always wins.
        let gx: Vec<f32> = (0..w * h).map(|i| ((i % w) + (i / w)) as f32).collect();
        GradientField::from_components(w, h, gx, vec![0.0; w * h]).unwrap()
    }

    #[test]
    fn reverse_latches_on_band_crossing() {
        assert!(update_reverse(-80.0, -50.0, false));
        assert!(update_reverse(-50.0, -80.0, false));
        assert!(!update_reverse(-50.0, -40.0, false));
        assert!(!update_reverse(10.0, 80.0, false));
        assert!(update_reverse(10.0, 20.0, true));
    }

    #[test]
    fn walks_along_diagonal() {
        let field = ramp_field(6, 6);
        let line = line_at(45.0);
        let mut reverse = false;
        let next = walk(&field, &line, &line, Pixel::new(2, 2), true, &mut reverse);
        assert_eq!(next, Some(Pixel::new(3, 3)));
        let back = walk(&field, &line, &line, Pixel::new(2, 2), false, &mut reverse);
        assert_eq!(back, Some(Pixel::new(2, 1)));
    }

    #[test]
    fn stops_at_border() {
        let field = ramp_field(4, 4);
        let line = line_at(0.0);
        let mut reverse = false;
        assert_eq!(walk(&field, &line, &line, Pixel::new(3, 1), true, &mut reverse), None);
        assert_eq!(
            walk(&field, &line, &line, Pixel::new(3, 3), false, &mut reverse),
            Some(Pixel::new(2, 3))
        );
    }

    #[test]
    fn reverse_flips_vertical_sense() {
        let field = ramp_field(5, 5);
        let prev = line_at(-80.0);
        let line = line_at(-50.0);
        let mut reverse = false;
        let next = walk(&field, &prev, &line, Pixel::new(2, 2), true, &mut reverse);
        assert!(reverse);
        // Anti-diagonal forward is up-right; reversed it heads down-left.
        let next = next.unwrap();
        assert!(next.x <= 2 && next.y >= 2 && next != Pixel::new(2, 2));
    }
}
