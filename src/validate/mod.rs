//! Segment validators.
//!
//! - [`density`]: label and orientation densities along a segment, used by
//!   the linker's acceptance policy.
//! - [`candidates`]: statistical second chance for weak segments, comparing
//!   the magnitude distribution on the segment with its bounding box.

pub mod candidates;
pub mod density;
mod options;
pub mod stats;

pub use candidates::{is_valid_candidate, validate_candidates};
pub use density::{aligned_density, anchor_density};
pub use options::ValidationParams;
pub use stats::Moments;
