use serde::{Deserialize, Serialize};

/// Knobs of the group linker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkParams {
    /// Plain steps allowed in a row before a direction stops growing. An ED
    /// anchor resets the budget to `remain_steps + 2`, an absorbed group to
    /// `remain_steps + 4`.
    pub remain_steps: usize,
    /// Maximum line-angle difference for absorbing another group, degrees.
    pub angle_tolerance_deg: f32,
    /// Maximum distance of a walked pixel from the current fitted line.
    pub distance_tolerance_px: f32,
    /// Shorter grown segments are discarded.
    pub min_length_px: f32,
    /// Minimum fraction of labelled pixels along a grown segment.
    pub min_anchor_density: f32,
    /// Fraction of pixels whose gradient is normal to the segment required
    /// for a strong segment.
    pub min_aligned_density: f32,
    /// Absorbed groups required for a strong segment.
    pub min_strong_groups: usize,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            remain_steps: 7,
            angle_tolerance_deg: 22.5,
            distance_tolerance_px: 2.0,
            min_length_px: 5.0,
            min_anchor_density: 0.55,
            min_aligned_density: 0.5,
            min_strong_groups: 3,
        }
    }
}
