use crate::anchors::AlignedAnchors;
use crate::geometry::Pixel;
use crate::image::Grid;

/// Raw label of a pixel outside every anchor.
pub const BACKGROUND: i32 = -1;
/// Raw label of a plain NMS anchor.
pub const ED_ANCHOR: i32 = -2;

/// Decoded pixel label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Background,
    EdAnchor,
    /// Aligned-anchor group id.
    Group(usize),
}

impl Label {
    #[inline]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            ED_ANCHOR => Label::EdAnchor,
            id if id >= 0 => Label::Group(id as usize),
            _ => Label::Background,
        }
    }

    #[inline]
    pub fn is_background(self) -> bool {
        self == Label::Background
    }

    #[inline]
    pub fn group(self) -> Option<usize> {
        match self {
            Label::Group(id) => Some(id),
            _ => None,
        }
    }
}

/// Per-pixel labels built once per image.
#[derive(Clone, Debug)]
pub struct LabelGrid {
    raw: Grid<i32>,
}

impl LabelGrid {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            raw: Grid::filled(w, h, BACKGROUND),
        }
    }

    /// ED anchors are written first and aligned groups overwrite them, so a
    /// pixel that is both carries its group id. Pixels outside the grid are
    /// ignored.
    pub fn build(w: usize, h: usize, ed_anchors: &[Pixel], aligned: &AlignedAnchors) -> Self {
        let mut labels = Self::new(w, h);
        for &px in ed_anchors {
            labels.set(px, ED_ANCHOR);
        }
        for (id, group) in aligned.groups().enumerate() {
            for px in group {
                labels.set(px, id as i32);
            }
        }
        labels
    }

    fn set(&mut self, px: Pixel, raw: i32) {
        if self.raw.contains(px.x, px.y) {
            self.raw.set(px.x as usize, px.y as usize, raw);
        }
    }

    /// Label at `px`; background outside the grid.
    #[inline]
    pub fn get(&self, px: Pixel) -> Label {
        Label::from_raw(self.raw.get_i(px.x, px.y).unwrap_or(BACKGROUND))
    }

    #[inline]
    pub fn contains(&self, px: Pixel) -> bool {
        self.raw.contains(px.x, px.y)
    }

    pub fn width(&self) -> usize {
        self.raw.w
    }

    pub fn height(&self) -> usize {
        self.raw.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_decode() {
        assert_eq!(Label::from_raw(BACKGROUND), Label::Background);
        assert_eq!(Label::from_raw(ED_ANCHOR), Label::EdAnchor);
        assert_eq!(Label::from_raw(7), Label::Group(7));
        assert_eq!(Label::from_raw(-9), Label::Background);
    }

    #[test]
    fn groups_overwrite_ed_anchors() {
        let mut aligned = AlignedAnchors::new();
        aligned.push([Pixel::new(1, 1), Pixel::new(2, 2), Pixel::new(3, 3)]);
        let ed = [Pixel::new(2, 2), Pixel::new(4, 4), Pixel::new(9, 9)];
        let labels = LabelGrid::build(5, 5, &ed, &aligned);
        assert_eq!(labels.get(Pixel::new(2, 2)), Label::Group(0));
        assert_eq!(labels.get(Pixel::new(4, 4)), Label::EdAnchor);
        assert_eq!(labels.get(Pixel::new(0, 4)), Label::Background);
        assert_eq!(labels.get(Pixel::new(-1, 0)), Label::Background);
    }
}
