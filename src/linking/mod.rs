//! Segment growth from aligned-anchor groups.
//!
//! A [`LinkContext`] owns the mutable state of one image's pass: which
//! groups are already consumed, the per-attempt visited map and the pool of
//! weak candidates. [`LinkContext::link_group`] grows one seed in both
//! directions by alternating gradient-guided steps ([`walker`]) with
//! absorption of ED anchors and compatible groups, refitting the line by
//! least squares after each absorption. Groups whose line disagrees are
//! bridged by probing along the fitted line instead ([`extender`]).

mod context;
mod extender;
mod labels;
mod linker;
mod options;
pub mod walker;

pub use context::LinkContext;
pub use labels::{Label, LabelGrid, BACKGROUND, ED_ANCHOR};
pub use options::LinkParams;
