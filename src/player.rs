//! The player controller: owns the pose and both animators, and arbitrates
//! movement intents against the dungeon and the animators' busy state.

use crate::animator::{MotionAnimator, RotationAnimator};
use crate::config;
use crate::dungeon::Dungeon;
use crate::types::{Point, Pose};
use crate::{debug_controller, debug_motion, debug_rotation};

pub struct Player {
    pose: Pose,
    motion: MotionAnimator,
    rotation: RotationAnimator,
}

impl Player {
    /// Player at the center of the given start tile, heading east.
    pub fn new(start_tile: (usize, usize)) -> Self {
        let (col, row) = start_tile;
        Player {
            pose: Pose::new(Point::tile_center(col, row), 0.0),
            motion: MotionAnimator::Idle,
            rotation: RotationAnimator::Idle,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// True while either animator is mid-flight. All new intents are
    /// dropped during this window; nothing is queued.
    pub fn is_busy(&self) -> bool {
        self.motion.is_animating() || self.rotation.is_animating()
    }

    /// Ask to step one tile forward along the current heading. Silently
    /// dropped while busy, and silently dropped when the tile ahead is a
    /// wall or off the map.
    pub fn request_move(&mut self, now: f64, dungeon: &Dungeon) {
        if self.is_busy() {
            debug_controller!("move intent dropped: animator busy");
            return;
        }

        let target = Point::new(
            self.pose.position.x + self.pose.heading.cos(),
            self.pose.position.y + self.pose.heading.sin(),
        );
        if !dungeon.is_walkable(target.x, target.y) {
            debug_controller!(
                "move intent dropped: tile ({}, {}) not walkable",
                target.x.floor(),
                target.y.floor()
            );
            return;
        }

        debug_motion!(
            "moving ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            self.pose.position.x,
            self.pose.position.y,
            target.x,
            target.y
        );
        self.motion
            .start(now, config::MOVE_DURATION_MS, self.pose.position, target);
    }

    pub fn request_turn_left(&mut self, now: f64) {
        self.request_turn(now, -config::TURN_ANGLE);
    }

    pub fn request_turn_right(&mut self, now: f64) {
        self.request_turn(now, config::TURN_ANGLE);
    }

    // Turns need no map validation; they only contend with the busy flag.
    fn request_turn(&mut self, now: f64, angle: f64) {
        if self.is_busy() {
            debug_controller!("turn intent dropped: animator busy");
            return;
        }

        let target = self.pose.heading + angle;
        debug_rotation!(
            "turning {:.3} -> {:.3}",
            self.pose.heading,
            target
        );
        self.rotation
            .start(now, config::TURN_DURATION_MS, self.pose.heading, target);
    }

    /// Advance both animators to `now` and fold their samples into the
    /// pose. Called once per frame before casting.
    pub fn advance(&mut self, now: f64) {
        if let Some(sample) = self.motion.advance(now) {
            self.pose.position = sample.value;
            if sample.done {
                debug_motion!(
                    "arrived at ({:.2}, {:.2})",
                    sample.value.x,
                    sample.value.y
                );
            }
        }
        if let Some(sample) = self.rotation.advance(now) {
            self.pose.heading = sample.value;
            if sample.done {
                debug_rotation!("settled at heading {:.3}", sample.value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::default_dungeon;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::PI;

    // Row 0 all wall; row 1 has two open cells; row 2 all wall.
    fn corridor() -> Dungeon {
        Dungeon::parse("####\n#..#\n####").unwrap()
    }

    #[test]
    fn test_move_into_open_cell() {
        let dungeon = corridor();
        let mut player = Player::new((1, 1));
        player.request_move(0.0, &dungeon);
        assert!(player.is_busy());

        player.advance(250.0);
        assert_approx_eq!(player.pose().position.x, 2.0);
        assert_approx_eq!(player.pose().position.y, 1.5);

        player.advance(500.0);
        assert!(!player.is_busy());
        assert_approx_eq!(player.pose().position.x, 2.5);
        assert_approx_eq!(player.pose().position.y, 1.5);
    }

    #[test]
    fn test_move_into_wall_is_dropped() {
        let dungeon = corridor();
        let mut player = Player::new((2, 1));
        // One step east of (2, 1) is the wall at column 3.
        player.request_move(0.0, &dungeon);
        assert!(!player.is_busy());
        assert_approx_eq!(player.pose().position.x, 2.5);
    }

    #[test]
    fn test_move_off_map_is_dropped() {
        let dungeon = Dungeon::parse("..").unwrap();
        let mut player = Player::new((1, 0));
        player.request_move(0.0, &dungeon);
        assert!(!player.is_busy());
    }

    #[test]
    fn test_second_move_mid_animation_is_dropped() {
        let dungeon = corridor();
        let mut player = Player::new((1, 1));
        player.request_move(0.0, &dungeon);
        player.advance(100.0);
        let mid = player.pose().position;

        // Re-requesting mid-flight neither restarts nor retargets.
        player.request_move(100.0, &dungeon);
        player.advance(100.0);
        assert_eq!(player.pose().position, mid);

        player.advance(500.0);
        assert_approx_eq!(player.pose().position.x, 2.5);
    }

    #[test]
    fn test_turn_rejected_while_moving() {
        let dungeon = corridor();
        let mut player = Player::new((1, 1));
        player.request_move(0.0, &dungeon);
        player.request_turn_left(10.0);
        player.advance(600.0);
        // The turn never started; heading is untouched.
        assert_approx_eq!(player.pose().heading, 0.0);
    }

    #[test]
    fn test_turn_left_then_right_restores_heading() {
        let mut player = Player::new((1, 1));
        player.request_turn_left(0.0);
        player.advance(500.0);
        assert_approx_eq!(player.pose().heading, -PI / 2.0);

        player.request_turn_right(500.0);
        player.advance(1000.0);
        assert_approx_eq!(player.pose().heading, 0.0);
    }

    #[test]
    fn test_four_right_turns_return_east() {
        // Heading stays normalized in (-PI, PI] across a full revolution.
        let mut player = Player::new((1, 1));
        let mut now = 0.0;
        for _ in 0..4 {
            player.request_turn_right(now);
            now += 500.0;
            player.advance(now);
            let h = player.pose().heading;
            assert!(h > -PI - 1e-9 && h <= PI + 1e-9);
        }
        assert_approx_eq!(player.pose().heading, 0.0);
    }

    #[test]
    fn test_start_pose_on_default_dungeon() {
        let dungeon = default_dungeon();
        let player = Player::new(config::START_TILE);
        assert_approx_eq!(player.pose().position.x, 1.5);
        assert_approx_eq!(player.pose().position.y, 0.5);
        assert!(dungeon.is_walkable(
            player.pose().position.x,
            player.pose().position.y
        ));
    }
}
