//! Time-driven interpolators for player movement and rotation.
//!
//! Each animator is an explicit two-state machine, Idle or Animating, and
//! only moves forward when the frame loop calls `advance(now)`. Nothing is
//! self-scheduling; dropping an animator mid-flight simply abandons the
//! interpolation without committing a partial value.

use crate::types::Point;
use crate::utils;

/// One sampled animation step: the interpolated value plus whether this
/// advance completed the animation. `done` is reported exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    pub value: T,
    pub done: bool,
}

/// Interpolates the player position between two tile centers over a fixed
/// duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionAnimator {
    Idle,
    Animating {
        start_time: f64,
        duration: f64,
        from: Point,
        to: Point,
    },
}

impl MotionAnimator {
    pub fn is_animating(&self) -> bool {
        matches!(self, MotionAnimator::Animating { .. })
    }

    /// Begin a move. The caller (the controller) is responsible for having
    /// validated the target; the animator interpolates whatever it is given.
    pub fn start(&mut self, now: f64, duration: f64, from: Point, to: Point) {
        *self = MotionAnimator::Animating {
            start_time: now,
            duration,
            from,
            to,
        };
    }

    /// Sample the animation at `now`. Returns None while idle. At the end
    /// of the duration the exact target is emitted, `done` is set, and the
    /// animator returns to Idle.
    pub fn advance(&mut self, now: f64) -> Option<Sample<Point>> {
        let MotionAnimator::Animating {
            start_time,
            duration,
            from,
            to,
        } = *self
        else {
            return None;
        };

        let t = utils::clamp((now - start_time) / duration, 0.0, 1.0);
        if t < 1.0 {
            return Some(Sample {
                value: utils::lerp_point(from, to, t),
                done: false,
            });
        }

        *self = MotionAnimator::Idle;
        Some(Sample {
            value: to,
            done: true,
        })
    }
}

/// Interpolates the heading between two angles over a fixed duration,
/// always taking the shortest angular path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationAnimator {
    Idle,
    Animating {
        start_time: f64,
        duration: f64,
        from: f64,
        delta: f64,
    },
}

impl RotationAnimator {
    pub fn is_animating(&self) -> bool {
        matches!(self, RotationAnimator::Animating { .. })
    }

    /// Begin a turn toward `to`. The delta is captured up front as the
    /// shortest path, so the sweep never exceeds half a revolution no
    /// matter what target the caller supplies.
    pub fn start(&mut self, now: f64, duration: f64, from: f64, to: f64) {
        *self = RotationAnimator::Animating {
            start_time: now,
            duration,
            from,
            delta: utils::shortest_angle_delta(from, to),
        };
    }

    /// Sample the heading at `now`. Intermediate headings are left
    /// unnormalized; the final heading is wrapped back into (-PI, PI] so
    /// repeated turns cannot drift the angle out of range.
    pub fn advance(&mut self, now: f64) -> Option<Sample<f64>> {
        let RotationAnimator::Animating {
            start_time,
            duration,
            from,
            delta,
        } = *self
        else {
            return None;
        };

        let t = utils::clamp((now - start_time) / duration, 0.0, 1.0);
        if t < 1.0 {
            return Some(Sample {
                value: from + delta * t,
                done: false,
            });
        }

        *self = RotationAnimator::Idle;
        Some(Sample {
            value: utils::normalize_angle(from + delta),
            done: true,
        })
    }
}
