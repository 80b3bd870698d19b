use serde::{Deserialize, Serialize};

/// Integer raster coordinate. Equality is coordinate equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Nearest pixel to a float point (half away from zero).
    #[inline]
    pub fn round(p: [f32; 2]) -> Self {
        Self::new(p[0].round() as i32, p[1].round() as i32)
    }

    #[inline]
    pub fn point(self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}
