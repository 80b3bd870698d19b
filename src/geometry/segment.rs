use super::Line;
use crate::angle::direction_angle_deg;
use serde::{Deserialize, Serialize};

/// Finite line segment between `beg` and `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub beg: [f32; 2],
    pub end: [f32; 2],
}

impl LineSegment {
    pub fn new(beg: [f32; 2], end: [f32; 2]) -> Self {
        Self { beg, end }
    }

    /// Segment on `line` spanned by two (possibly off-line) points.
    ///
    /// Each point is first carried onto the line along the minor axis and the
    /// resulting pair then projected orthogonally, which yields the foot of
    /// the perpendicular from each original point.
    pub fn from_line_span(line: &Line, p0: [f32; 2], p1: [f32; 2]) -> Self {
        let support = Self::new(line.snap(p0), line.snap(p1));
        match support.line() {
            Some(on_line) => Self::new(on_line.project(p0), on_line.project(p1)),
            None => Self::new(line.project(p0), line.project(p1)),
        }
    }

    pub fn midpoint(&self) -> [f32; 2] {
        [
            (self.beg[0] + self.end[0]) * 0.5,
            (self.beg[1] + self.end[1]) * 0.5,
        ]
    }

    pub fn length_sq(&self) -> f32 {
        let dx = self.end[0] - self.beg[0];
        let dy = self.end[1] - self.beg[1];
        dx * dx + dy * dy
    }

    pub fn length(&self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Direction angle folded into `[-90, 90]` degrees.
    pub fn angle_deg(&self) -> f32 {
        direction_angle_deg(self.end[0] - self.beg[0], self.end[1] - self.beg[1])
    }

    /// Supporting line, `None` for a zero-length segment.
    pub fn line(&self) -> Option<Line> {
        Line::through(self.beg, self.end)
    }

    /// Perpendicular distance from `p` to the supporting line. Falls back to
    /// the point distance for a zero-length segment.
    pub fn line_distance(&self, p: [f32; 2]) -> f32 {
        match self.line() {
            Some(line) => line.distance(p),
            None => {
                let dx = p[0] - self.beg[0];
                let dy = p[1] - self.beg[1];
                (dx * dx + dy * dy).sqrt()
            }
        }
    }

    /// Orthogonal projection of `p` onto the supporting line.
    pub fn project(&self, p: [f32; 2]) -> [f32; 2] {
        self.line().map_or(self.beg, |line| line.project(p))
    }

    /// Distance from this segment's midpoint to `other`'s supporting line.
    pub fn center_distance_to(&self, other: &LineSegment) -> f32 {
        other.line_distance(self.midpoint())
    }

    pub fn endpoints(&self) -> [[f32; 2]; 2] {
        [self.beg, self.end]
    }
}
