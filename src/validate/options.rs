use serde::{Deserialize, Serialize};

/// Knobs of the candidate validator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationParams {
    /// Run the kurtosis/skewness test on weak candidates. When disabled no
    /// candidate is validated.
    pub enabled: bool,
    /// Populations with fewer samples are rejected outright.
    pub min_samples: usize,
    /// Pixels added on every side of the segment's bounding box when
    /// sampling its background.
    pub rect_margin_px: usize,
}

impl Default for ValidationParams {
    fn default() -> Self {
        Self {
            enabled: true,
            min_samples: 3,
            rect_margin_px: 2,
        }
    }
}
