use serde::{Deserialize, Serialize};

/// Knobs of the aligned-anchor extractor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorParams {
    /// Margin by which a local maximum must beat its strongest neighbour on
    /// at least one side (magnitude units).
    pub threshold: f32,
    /// Orientation agreement required between the middle pixel and one of
    /// its level-line neighbours, in degrees.
    pub angle_tolerance_deg: f32,
}

impl Default for AnchorParams {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            angle_tolerance_deg: 22.5,
        }
    }
}
