use crate::angle::fold_line_angle_deg;
use crate::edges::GradientField;
use crate::geometry::{Line, Pixel};

/// Flat list of aligned-anchor triplets. Group `i` owns
/// `pixels[3 * i..3 * i + 3]`, middle pixel in the centre.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlignedAnchors {
    pub pixels: Vec<Pixel>,
}

impl AlignedAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from a flat pixel list; `None` unless the length is a multiple
    /// of three.
    pub fn from_pixels(pixels: Vec<Pixel>) -> Option<Self> {
        (pixels.len() % 3 == 0).then_some(Self { pixels })
    }

    pub fn push(&mut self, group: [Pixel; 3]) {
        self.pixels.extend_from_slice(&group);
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.pixels.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn group(&self, id: usize) -> [Pixel; 3] {
        let base = 3 * id;
        [self.pixels[base], self.pixels[base + 1], self.pixels[base + 2]]
    }

    #[inline]
    pub fn middle(&self, id: usize) -> Pixel {
        self.pixels[3 * id + 1]
    }

    pub fn groups(&self) -> impl Iterator<Item = [Pixel; 3]> + '_ {
        self.pixels.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Initial line of every group: the axial mean of the three level-line
    /// angles (`ori - 90°`, averaged on doubled angles so that 179° and 1°
    /// agree), anchored at the middle pixel.
    pub fn initial_lines(&self, field: &GradientField) -> Vec<Line> {
        self.groups().map(|group| group_line(field, &group)).collect()
    }
}

fn group_line(field: &GradientField, group: &[Pixel; 3]) -> Line {
    let middle = group[1];
    let mut sum_cos = 0.0f32;
    let mut sum_sin = 0.0f32;
    for &px in group {
        let level = (field.orientation(px).unwrap_or(0.0) - 90.0).to_radians();
        sum_cos += (2.0 * level).cos();
        sum_sin += (2.0 * level).sin();
    }
    let angle = if sum_cos.hypot(sum_sin) > 1e-6 {
        0.5 * sum_sin.atan2(sum_cos)
    } else {
        // Orientations cancel out; fall back to the middle pixel alone.
        (field.orientation(middle).unwrap_or(0.0) - 90.0).to_radians()
    };
    let angle = fold_line_angle_deg(angle.to_degrees()).to_radians();
    Line {
        dir: [angle.cos(), angle.sin()],
        point: middle.point(),
    }
}
