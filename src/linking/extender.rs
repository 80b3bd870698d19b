//! Line-direction probe used when growth runs into a group whose line
//! disagrees with the current fit.
use super::context::{Growth, LinkContext};
use super::walker::walk;
use crate::angle::angle_diff_deg;
use crate::geometry::Pixel;
use crate::octant::{walk_offsets, Octant};

impl LinkContext<'_> {
    /// Steps from `from` along the fitted line itself, one pixel of the
    /// dominant axis at a time, for at most `remain_steps` probes. The first
    /// probe landing on an unlinked group with a compatible line absorbs that
    /// group and yields a fresh walker step from its middle pixel.
    ///
    /// Stops with `None` when a probe leaves the grid or lands on a visited
    /// pixel other than `blocked`, the pixel of the disagreeing group that
    /// triggered the probe.
    pub(crate) fn extend_along_line(
        &mut self,
        growth: &mut Growth,
        from: Pixel,
        blocked: Pixel,
        forward: bool,
    ) -> Option<Pixel> {
        let line = growth.line;
        let horizontal = !line.is_steep();
        // Advance in the same sense as the walker would.
        let offsets = walk_offsets(Octant::from_line_angle(line.angle_deg()), forward, growth.reverse);
        let sense = offsets
            .iter()
            .map(|&(dx, dy)| if horizontal { dx } else { dy })
            .sum::<i32>()
            .signum();
        if sense == 0 {
            return None;
        }

        for k in 1..=self.params.remain_steps as i32 {
            let probe = if horizontal {
                let x = (from.x + sense * k) as f32;
                Pixel::round([x, line.y_at(x)])
            } else {
                let y = (from.y + sense * k) as f32;
                Pixel::round([line.x_at(y), y])
            };
            if !self.field.contains(probe) || (probe != blocked && self.visited.is_visited(probe)) {
                return None;
            }
            let Some(group) = self.labels.get(probe).group() else {
                continue;
            };
            if self.is_linked(group)
                || angle_diff_deg(line.angle_deg(), self.lines[group].angle_deg())
                    > self.params.angle_tolerance_deg
            {
                continue;
            }
            self.absorb_group(growth, group);
            let middle = self.anchors.middle(group);
            return walk(
                self.field,
                &growth.prev_line,
                &growth.line,
                middle,
                forward,
                &mut growth.reverse,
            );
        }
        None
    }
}
