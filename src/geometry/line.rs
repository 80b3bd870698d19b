use super::Pixel;
use crate::angle::direction_angle_deg;
use nalgebra::{Matrix2, SymmetricEigen};

/// Infinite line through `point` with unit direction `dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub dir: [f32; 2],
    pub point: [f32; 2],
}

impl Line {
    /// Normalises `dir`; `None` for a (near) zero direction.
    pub fn new(dir: [f32; 2], point: [f32; 2]) -> Option<Self> {
        let norm = (dir[0] * dir[0] + dir[1] * dir[1]).sqrt();
        if !norm.is_finite() || norm < 1e-9 {
            return None;
        }
        Some(Self {
            dir: [dir[0] / norm, dir[1] / norm],
            point,
        })
    }

    pub fn through(p0: [f32; 2], p1: [f32; 2]) -> Option<Self> {
        Self::new([p1[0] - p0[0], p1[1] - p0[1]], p0)
    }

    /// Direction angle folded into `[-90, 90]` degrees.
    #[inline]
    pub fn angle_deg(&self) -> f32 {
        direction_angle_deg(self.dir[0], self.dir[1])
    }

    /// True when the line is closer to vertical than to horizontal.
    #[inline]
    pub fn is_steep(&self) -> bool {
        self.dir[1].abs() > self.dir[0].abs()
    }

    /// Perpendicular distance from `p` to the line.
    #[inline]
    pub fn distance(&self, p: [f32; 2]) -> f32 {
        let dx = p[0] - self.point[0];
        let dy = p[1] - self.point[1];
        (dx * self.dir[1] - dy * self.dir[0]).abs()
    }

    /// Orthogonal projection of `p` onto the line.
    #[inline]
    pub fn project(&self, p: [f32; 2]) -> [f32; 2] {
        let t = (p[0] - self.point[0]) * self.dir[0] + (p[1] - self.point[1]) * self.dir[1];
        [self.point[0] + t * self.dir[0], self.point[1] + t * self.dir[1]]
    }

    /// X on the line at row `y`. Only meaningful when `dir[1] != 0`.
    #[inline]
    pub fn x_at(&self, y: f32) -> f32 {
        self.point[0] + (y - self.point[1]) * self.dir[0] / self.dir[1]
    }

    /// Y on the line at column `x`. Only meaningful when `dir[0] != 0`.
    #[inline]
    pub fn y_at(&self, x: f32) -> f32 {
        self.point[1] + (x - self.point[0]) * self.dir[1] / self.dir[0]
    }

    /// Moves `p` onto the line along the minor axis: keeps `y` for steep
    /// lines and `x` otherwise, so the division is always by the larger
    /// direction component.
    #[inline]
    pub fn snap(&self, p: [f32; 2]) -> [f32; 2] {
        if self.is_steep() {
            [self.x_at(p[1]), p[1]]
        } else {
            [p[0], self.y_at(p[0])]
        }
    }
}

/// Online least-squares line fit (orthogonal regression).
///
/// Keeps first and second moments of the pushed points so a refit after
/// absorbing a few pixels costs O(1). The direction is the principal
/// eigenvector of the 2×2 scatter matrix, the anchor point is the centroid.
#[derive(Clone, Debug, Default)]
pub struct LineFit {
    count: usize,
    sum_x: f64,
    sum_y: f64,
    sum_xx: f64,
    sum_yy: f64,
    sum_xy: f64,
}

impl LineFit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_point(&mut self, p: [f32; 2]) {
        let x = p[0] as f64;
        let y = p[1] as f64;
        self.count += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xx += x * x;
        self.sum_yy += y * y;
        self.sum_xy += x * y;
    }

    #[inline]
    pub fn push(&mut self, px: Pixel) {
        self.push_point(px.point());
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Fitted line, `None` with fewer than two distinct points.
    pub fn fit(&self) -> Option<Line> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as f64;
        let cx = self.sum_x / n;
        let cy = self.sum_y / n;
        let cxx = self.sum_xx / n - cx * cx;
        let cyy = self.sum_yy / n - cy * cy;
        let cxy = self.sum_xy / n - cx * cy;
        if !(cxx + cyy).is_finite() || cxx + cyy <= 1e-12 {
            return None;
        }
        let eig = SymmetricEigen::new(Matrix2::new(cxx, cxy, cxy, cyy));
        let major = if eig.eigenvalues[0] >= eig.eigenvalues[1] {
            eig.eigenvectors.column(0)
        } else {
            eig.eigenvectors.column(1)
        };
        Line::new([major[0] as f32, major[1] as f32], [cx as f32, cy as f32])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_recovers_diagonal() {
        let mut fit = LineFit::new();
        for i in 0..10 {
            fit.push(Pixel::new(i, i));
        }
        let line = fit.fit().expect("diagonal fit");
        assert!((line.angle_deg() - 45.0).abs() < 1e-3, "{}", line.angle_deg());
        assert!(line.distance([20.0, 20.0]) < 1e-4);
        assert!((line.distance([0.0, 1.0]) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4);
    }

    #[test]
    fn fit_handles_vertical_points() {
        let mut fit = LineFit::new();
        for y in 3..9 {
            fit.push(Pixel::new(5, y));
        }
        let line = fit.fit().unwrap();
        assert!(line.is_steep());
        assert!((line.x_at(100.0) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_fits_are_rejected() {
        let mut fit = LineFit::new();
        assert!(fit.fit().is_none());
        fit.push(Pixel::new(2, 2));
        fit.push(Pixel::new(2, 2));
        assert!(fit.fit().is_none());
    }

    #[test]
    fn snap_then_project_lands_on_line() {
        let line = Line::new([1.0, 0.5], [0.0, 0.0]).unwrap();
        let p = line.snap([4.0, 7.0]);
        assert!(line.distance(p) < 1e-5);
        let q = line.project([4.0, 7.0]);
        assert!(line.distance(q) < 1e-5);
    }
}
