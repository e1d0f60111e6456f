use crate::types::Point;
use std::f64::consts::PI;

/// Linear interpolation between two f64 values
pub fn lerp(start: f64, end: f64, alpha: f64) -> f64 {
    start + (end - start) * alpha
}

/// Linear interpolation between two Point values
pub fn lerp_point(start: Point, end: Point, alpha: f64) -> Point {
    Point {
        x: lerp(start.x, end.x, alpha),
        y: lerp(start.y, end.y, alpha),
    }
}

/// Shortest signed angular difference from `from` to `to`, in (-PI, PI].
/// Interpolating `from + shortest_angle_delta(from, to) * t` never sweeps
/// more than half a revolution.
pub fn shortest_angle_delta(from: f64, to: f64) -> f64 {
    let mut delta = (to - from + PI) % (2.0 * PI) - PI;
    // The % operator keeps the sign of the dividend, so a negative raw
    // difference can land just below -PI.
    if delta <= -PI {
        delta += 2.0 * PI;
    }
    delta
}

/// Wrap an angle into (-PI, PI]. Two-branch correction after a modulo, so
/// repeated turns cannot drift the heading out of range.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut wrapped = angle % (2.0 * PI);
    if wrapped > PI {
        wrapped -= 2.0 * PI;
    } else if wrapped < -PI {
        wrapped += 2.0 * PI;
    }
    wrapped
}

/// Constrain a value between min and max
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
