//! Bidirectional growth of one aligned-anchor group.
//!
//! Each direction runs a small state machine:
//!
//! ```text
//! Walk ──ED anchor──────────▶ AbsorbEd ──────────────▶ Walk
//!      ──compatible group───▶ AbsorbGroup ───────────▶ Walk | Terminate
//!      ──incompatible group─▶ ExtendProbe ───────────▶ Walk
//!      ──plain pixel──────────────────────(budget-1)─▶ Walk
//!      ──none/visited/far/budget spent──────────────▶ Terminate
//! ```
//!
//! Every absorption consumes a group or a pixel that can never be absorbed
//! again during the same attempt, and plain steps spend the budget, so each
//! direction terminates.
use super::context::{Growth, LinkContext};
use super::labels::Label;
use super::walker::walk;
use crate::angle::angle_diff_deg;
use crate::geometry::{LineSegment, Pixel};
use crate::validate::{aligned_density, anchor_density};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Walk,
    AbsorbEd(Pixel),
    AbsorbGroup(usize),
    ExtendProbe(Pixel),
    Terminate,
}

/// Walk position of one growth direction.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    forward: bool,
    curr: Pixel,
    /// Last pixel that counts as an endpoint of the segment.
    end: Pixel,
    budget: usize,
    last: Label,
}

impl LinkContext<'_> {
    /// Grows a segment from group `seed`.
    ///
    /// Returns `None` when the seed is already linked, when the grown
    /// segment is rejected, or when it is weak. Weak segments release the
    /// groups they absorbed and are kept as candidates.
    pub fn link_group(&mut self, seed: usize) -> Option<LineSegment> {
        if self.is_linked(seed) {
            return None;
        }
        self.visited.begin();
        let pixels = self.anchors.group(seed);
        for &px in &pixels {
            self.visited.visit(px);
        }
        let mut growth = Growth::new(seed, &pixels, self.lines[seed]);
        let middle = pixels[1];

        let mut starts = [None; 2];
        for (slot, forward) in [true, false].into_iter().enumerate() {
            starts[slot] = walk(
                self.field,
                &growth.prev_line,
                &growth.line,
                middle,
                forward,
                &mut growth.reverse,
            );
        }

        let mut ends = [middle; 2];
        for (slot, forward) in [true, false].into_iter().enumerate() {
            if let Some(start) = starts[slot] {
                ends[slot] = self.grow(&mut growth, start, forward);
            }
        }

        let segment = LineSegment::from_line_span(&growth.line, ends[0].point(), ends[1].point());
        self.judge(growth, segment)
    }

    fn grow(&mut self, growth: &mut Growth, start: Pixel, forward: bool) -> Pixel {
        let remain = self.params.remain_steps;
        let mut cursor = Cursor {
            forward,
            curr: start,
            end: start,
            budget: remain,
            last: Label::Group(growth.seed),
        };

        let mut step = Step::Walk;
        loop {
            step = match step {
                Step::Walk => self.walk_step(growth, &mut cursor),
                Step::AbsorbEd(px) => {
                    growth.push(&[px]);
                    cursor.curr = px;
                    cursor.end = px;
                    cursor.budget = remain + 2;
                    cursor.last = Label::EdAnchor;
                    Step::Walk
                }
                Step::AbsorbGroup(group) => {
                    self.absorb_group(growth, group);
                    let middle = self.anchors.middle(group);
                    cursor.end = middle;
                    cursor.budget = remain + 4;
                    cursor.last = Label::Group(group);
                    match walk(
                        self.field,
                        &growth.prev_line,
                        &growth.line,
                        middle,
                        forward,
                        &mut growth.reverse,
                    ) {
                        Some(next) => {
                            cursor.curr = next;
                            Step::Walk
                        }
                        None => Step::Terminate,
                    }
                }
                Step::ExtendProbe(blocked) => {
                    match self.extend_along_line(growth, cursor.curr, blocked, cursor.forward) {
                        Some(next) => {
                            cursor.curr = next;
                            cursor.end = next;
                            cursor.last = self.labels.get(next);
                            cursor.budget = remain + 4;
                        }
                        // The blocking pixel is visited now, so the next walk
                        // from the same spot terminates.
                        None => cursor.budget = cursor.budget.saturating_sub(1),
                    }
                    Step::Walk
                }
                Step::Terminate => return cursor.end,
            };
        }
    }

    fn walk_step(&mut self, growth: &mut Growth, cursor: &mut Cursor) -> Step {
        if cursor.budget == 0 {
            return Step::Terminate;
        }
        let Some(next) = walk(
            self.field,
            &growth.prev_line,
            &growth.line,
            cursor.curr,
            cursor.forward,
            &mut growth.reverse,
        ) else {
            return Step::Terminate;
        };
        if self.visited.is_visited(next) {
            return Step::Terminate;
        }
        self.visited.visit(next);
        if growth.line.distance(next.point()) > self.params.distance_tolerance_px {
            return Step::Terminate;
        }

        let label = self.labels.get(next);
        match label {
            Label::EdAnchor => Step::AbsorbEd(next),
            Label::Group(group) if label != cursor.last && !self.is_linked(group) => {
                let diff = angle_diff_deg(growth.line.angle_deg(), self.lines[group].angle_deg());
                if diff <= self.params.angle_tolerance_deg {
                    Step::AbsorbGroup(group)
                } else {
                    Step::ExtendProbe(next)
                }
            }
            _ => {
                cursor.budget -= 1;
                cursor.curr = next;
                cursor.last = label;
                Step::Walk
            }
        }
    }

    /// Acceptance policy for a grown segment.
    fn judge(&mut self, growth: Growth, segment: LineSegment) -> Option<LineSegment> {
        let params = self.params;
        let groups = growth.absorbed_groups();
        if groups == 0
            || segment.length() < params.min_length_px
            || anchor_density(self.labels, &segment) < params.min_anchor_density
        {
            return None;
        }

        let strong = groups >= params.min_strong_groups
            && aligned_density(self.field, &segment, params.angle_tolerance_deg)
                >= params.min_aligned_density;
        if !strong {
            for &group in &growth.absorbed {
                self.unlink(group);
            }
            debug!(
                "link_group: seed {} weak after {} groups, kept as candidate",
                growth.seed, groups
            );
            self.candidates.push(segment);
            return None;
        }
        Some(segment)
    }
}
