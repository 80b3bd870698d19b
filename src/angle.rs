//! Angle utilities used across the detector pipeline.
//!
//! All angles in this crate are in degrees. Gradient orientations live in
//! `[0, 180)`, line angles are folded into `[-90, 90]`, and comparisons treat
//! directions 180° apart as equal.

/// Gradient orientation of `(gx, gy)` folded into `[0, 180)` degrees.
/// Arguments follow `atan2` order.
#[inline]
pub fn orientation_deg(gy: f32, gx: f32) -> f32 {
    let deg = gy.atan2(gx).to_degrees().rem_euclid(180.0);
    if deg >= 180.0 {
        0.0
    } else {
        deg
    }
}

/// Folds an arbitrary angle in degrees into `[-90, 90]`.
#[inline]
pub fn fold_line_angle_deg(deg: f32) -> f32 {
    let mut a = deg.rem_euclid(180.0);
    if a > 90.0 {
        a -= 180.0;
    }
    a
}

/// Angle of a direction vector folded into `[-90, 90]` degrees.
#[inline]
pub fn direction_angle_deg(dx: f32, dy: f32) -> f32 {
    fold_line_angle_deg(dy.atan2(dx).to_degrees())
}

/// Smallest unsigned difference between two angles in degrees, treating
/// antipodal directions as equal. Returns a value in `[0, 90]`.
#[inline]
pub fn angle_diff_deg(a: f32, b: f32) -> f32 {
    let d = (a - b).abs().rem_euclid(180.0);
    d.min(180.0 - d).max(0.0)
}
