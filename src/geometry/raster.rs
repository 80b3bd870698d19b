use super::Pixel;

/// Pixels on the Bresenham trace between two float endpoints (rounded),
/// both ends included, in order from `beg` to `end`.
pub fn rasterize(beg: [f32; 2], end: [f32; 2]) -> Vec<Pixel> {
    let p0 = Pixel::round(beg);
    let p1 = Pixel::round(end);
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx - dy;
    let mut x = p0.x;
    let mut y = p0.y;

    let mut out = Vec::with_capacity(dx.max(dy) as usize + 1);
    loop {
        out.push(Pixel::new(x, y));
        if x == p1.x && y == p1.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_trace_is_the_diagonal() {
        let px = rasterize([0.0, 0.0], [4.0, 4.0]);
        let expected: Vec<Pixel> = (0..=4).map(|i| Pixel::new(i, i)).collect();
        assert_eq!(px, expected);
    }

    #[test]
    fn trace_is_connected_and_ordered() {
        let px = rasterize([7.2, 1.0], [-2.0, 5.6]);
        assert_eq!(px.first(), Some(&Pixel::new(7, 1)));
        assert_eq!(px.last(), Some(&Pixel::new(-2, 6)));
        for w in px.windows(2) {
            assert!((w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1);
        }
        assert_eq!(px.len(), 10);
    }

    #[test]
    fn degenerate_trace_is_single_pixel() {
        assert_eq!(rasterize([3.4, 3.4], [2.6, 3.0]), vec![Pixel::new(3, 3)]);
    }
}
