//! 45°-wide direction classes and the neighbour-offset tables keyed by them.
//!
//! Gradient orientations (`[0, 180)`) and line angles (`[-90, 90]`) are both
//! reduced to one of four [`Octant`]s. The tables below are the only place
//! where pixel offsets are spelled out; the anchor extractor, the NMS pass
//! and the pixel walker all index into them.
//!
//! Coordinates are raster coordinates: `x` to the right, `y` downwards, so a
//! 45° direction points to the lower right.

/// Direction class of a gradient or a line, modulo 180°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Octant {
    /// Around 0° (also covers the wrap near 180°).
    Horizontal,
    /// Around 45°: towards `(+1, +1)`.
    Diagonal,
    /// Around 90°.
    Vertical,
    /// Around 135° (equivalently -45°): towards `(-1, +1)`.
    AntiDiagonal,
}

/// Pixel offset `(dx, dy)`.
pub type Offset = (i32, i32);

impl Octant {
    /// Class of a gradient orientation in `[0, 180)` degrees.
    pub fn from_orientation(deg: f32) -> Self {
        if (22.5..67.5).contains(&deg) {
            Octant::Diagonal
        } else if (67.5..112.5).contains(&deg) {
            Octant::Vertical
        } else if (112.5..157.5).contains(&deg) {
            Octant::AntiDiagonal
        } else {
            Octant::Horizontal
        }
    }

    /// Class of a line angle folded into `[-90, 90]` degrees.
    pub fn from_line_angle(deg: f32) -> Self {
        if (-67.5..-22.5).contains(&deg) {
            Octant::AntiDiagonal
        } else if (-22.5..22.5).contains(&deg) {
            Octant::Horizontal
        } else if (22.5..67.5).contains(&deg) {
            Octant::Diagonal
        } else {
            Octant::Vertical
        }
    }

    /// The class perpendicular to this one (gradient ↔ level line).
    pub fn rotated(self) -> Self {
        match self {
            Octant::Horizontal => Octant::Vertical,
            Octant::Diagonal => Octant::AntiDiagonal,
            Octant::Vertical => Octant::Horizontal,
            Octant::AntiDiagonal => Octant::Diagonal,
        }
    }

    /// Unit step along the direction.
    pub fn step(self) -> Offset {
        match self {
            Octant::Horizontal => (1, 0),
            Octant::Diagonal => (1, 1),
            Octant::Vertical => (0, 1),
            Octant::AntiDiagonal => (-1, 1),
        }
    }

    /// Six neighbours forming two opposite three-pixel fans along this
    /// direction. Entries `0..3` are the first side, `3..6` the second.
    pub fn fans(self) -> &'static [Offset; 6] {
        match self {
            Octant::Diagonal => &DIAGONAL_FANS,
            Octant::Vertical => &VERTICAL_FANS,
            Octant::AntiDiagonal => &ANTI_DIAGONAL_FANS,
            Octant::Horizontal => &HORIZONTAL_FANS,
        }
    }
}

const DIAGONAL_FANS: [Offset; 6] = [(0, -1), (-1, -1), (-1, 0), (0, 1), (1, 1), (1, 0)];
const VERTICAL_FANS: [Offset; 6] = [(1, -1), (0, -1), (-1, -1), (-1, 1), (0, 1), (1, 1)];
const ANTI_DIAGONAL_FANS: [Offset; 6] = [(-1, 0), (-1, 1), (0, 1), (1, 0), (1, -1), (0, -1)];
const HORIZONTAL_FANS: [Offset; 6] = [(-1, -1), (-1, 0), (-1, 1), (1, 1), (1, 0), (1, -1)];

/// Candidate "ahead" pixels for the walker, keyed by the line class, the
/// travel direction and the reverse flag. Only the two classes whose
/// forward sense flips when a fitted line wraps through -67.5° honour the
/// reverse flag.
pub fn walk_offsets(line: Octant, forward: bool, reverse: bool) -> &'static [Offset; 3] {
    const UP_RIGHT: [Offset; 3] = [(1, 0), (1, -1), (0, -1)];
    const DOWN_LEFT: [Offset; 3] = [(-1, 0), (-1, 1), (0, 1)];
    const RIGHT: [Offset; 3] = [(1, -1), (1, 0), (1, 1)];
    const LEFT: [Offset; 3] = [(-1, -1), (-1, 0), (-1, 1)];
    const DOWN_RIGHT: [Offset; 3] = [(0, 1), (1, 1), (1, 0)];
    const UP_LEFT: [Offset; 3] = [(0, -1), (-1, -1), (-1, 0)];
    const DOWN: [Offset; 3] = [(-1, 1), (0, 1), (1, 1)];
    const UP: [Offset; 3] = [(-1, -1), (0, -1), (1, -1)];

    match line {
        Octant::AntiDiagonal => {
            if forward != reverse {
                &UP_RIGHT
            } else {
                &DOWN_LEFT
            }
        }
        Octant::Horizontal => {
            if forward {
                &RIGHT
            } else {
                &LEFT
            }
        }
        Octant::Diagonal => {
            if forward {
                &DOWN_RIGHT
            } else {
                &UP_LEFT
            }
        }
        Octant::Vertical => {
            if forward != reverse {
                &DOWN
            } else {
                &UP
            }
        }
    }
}
