use super::{LabelGrid, LinkParams};
use crate::anchors::AlignedAnchors;
use crate::edges::GradientField;
use crate::geometry::{Line, LineFit, LineSegment, Pixel};

/// Visited flags scoped to one growth attempt.
///
/// Clearing is O(1): every attempt bumps an epoch and a pixel counts as
/// visited only when its stamp equals the current epoch.
#[derive(Clone, Debug)]
pub(crate) struct VisitMap {
    w: usize,
    h: usize,
    stamps: Vec<u32>,
    epoch: u32,
}

impl VisitMap {
    pub(crate) fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stamps: vec![0; w * h],
            epoch: 0,
        }
    }

    pub(crate) fn begin(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            self.stamps.fill(0);
            self.epoch = 1;
        }
    }

    fn index(&self, px: Pixel) -> Option<usize> {
        if px.x < 0 || px.y < 0 || px.x as usize >= self.w || px.y as usize >= self.h {
            return None;
        }
        Some(px.y as usize * self.w + px.x as usize)
    }

    /// Pixels outside the grid read as visited.
    pub(crate) fn is_visited(&self, px: Pixel) -> bool {
        self.index(px).map_or(true, |i| self.stamps[i] == self.epoch)
    }

    pub(crate) fn visit(&mut self, px: Pixel) {
        if let Some(i) = self.index(px) {
            self.stamps[i] = self.epoch;
        }
    }
}

/// State of one growth attempt from a seed group.
#[derive(Clone, Debug)]
pub(crate) struct Growth {
    pub(crate) seed: usize,
    pub(crate) fit: LineFit,
    pub(crate) line: Line,
    pub(crate) prev_line: Line,
    pub(crate) reverse: bool,
    /// Groups linked during this attempt, released again if the result
    /// ends up weak.
    pub(crate) absorbed: Vec<usize>,
}

impl Growth {
    pub(crate) fn new(seed: usize, pixels: &[Pixel; 3], line: Line) -> Self {
        let mut fit = LineFit::new();
        for &px in pixels {
            fit.push(px);
        }
        Self {
            seed,
            fit,
            line,
            prev_line: line,
            reverse: false,
            absorbed: Vec::new(),
        }
    }

    /// Adds `pixels` to the point set and refits. A degenerate fit keeps the
    /// current line.
    pub(crate) fn push(&mut self, pixels: &[Pixel]) {
        for &px in pixels {
            self.fit.push(px);
        }
        self.prev_line = self.line;
        if let Some(line) = self.fit.fit() {
            self.line = line;
        }
    }

    pub(crate) fn absorbed_groups(&self) -> usize {
        self.absorbed.len()
    }
}

/// Mutable state of one image's linking pass.
///
/// Labels, group lines and the gradient field are shared read-only; the
/// `linked` flags persist for the whole pass while the visited map is
/// reset for every seed.
pub struct LinkContext<'a> {
    pub(crate) field: &'a GradientField,
    pub(crate) anchors: &'a AlignedAnchors,
    pub(crate) labels: &'a LabelGrid,
    pub(crate) lines: &'a [Line],
    pub(crate) params: LinkParams,
    pub(crate) linked: Vec<bool>,
    pub(crate) visited: VisitMap,
    pub(crate) candidates: Vec<LineSegment>,
}

impl<'a> LinkContext<'a> {
    pub fn new(
        field: &'a GradientField,
        anchors: &'a AlignedAnchors,
        labels: &'a LabelGrid,
        lines: &'a [Line],
        params: LinkParams,
    ) -> Self {
        debug_assert_eq!(lines.len(), anchors.group_count());
        debug_assert_eq!(labels.width(), field.width());
        debug_assert_eq!(labels.height(), field.height());
        Self {
            field,
            anchors,
            labels,
            lines,
            params,
            linked: vec![false; anchors.group_count()],
            visited: VisitMap::new(field.width(), field.height()),
            candidates: Vec::new(),
        }
    }

    #[inline]
    pub fn is_linked(&self, group: usize) -> bool {
        self.linked.get(group).copied().unwrap_or(true)
    }

    pub fn linked_flags(&self) -> &[bool] {
        &self.linked
    }

    /// Weak segments collected so far.
    pub fn candidates(&self) -> &[LineSegment] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<LineSegment> {
        self.candidates
    }

    pub(crate) fn link(&mut self, group: usize) {
        if let Some(flag) = self.linked.get_mut(group) {
            *flag = true;
        }
    }

    pub(crate) fn unlink(&mut self, group: usize) {
        if let Some(flag) = self.linked.get_mut(group) {
            *flag = false;
        }
    }

    /// Links `group` into the growth: seed and group are flagged, its
    /// pixels are visited and added to the fit.
    pub(crate) fn absorb_group(&mut self, growth: &mut Growth, group: usize) {
        self.link(growth.seed);
        self.link(group);
        growth.absorbed.push(group);
        let pixels = self.anchors.group(group);
        for &px in &pixels {
            self.visited.visit(px);
        }
        growth.push(&pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_map_resets_per_epoch() {
        let mut visited = VisitMap::new(3, 2);
        visited.begin();
        let px = Pixel::new(1, 1);
        assert!(!visited.is_visited(px));
        visited.visit(px);
        assert!(visited.is_visited(px));
        visited.begin();
        assert!(!visited.is_visited(px));
        assert!(visited.is_visited(Pixel::new(3, 0)));
    }

    #[test]
    fn growth_refit_tracks_previous_line() {
        let pixels = [Pixel::new(0, 0), Pixel::new(1, 0), Pixel::new(2, 0)];
        let start = Line::new([1.0, 0.0], [1.0, 0.0]).unwrap();
        let mut growth = Growth::new(0, &pixels, start);
        growth.push(&[Pixel::new(3, 1), Pixel::new(4, 1)]);
        assert_eq!(growth.prev_line, start);
        assert!(growth.line.angle_deg() > 0.0);
        assert_eq!(growth.fit.len(), 5);
    }
}
