use crate::caster::{self, RayFan};
use crate::config;
use crate::dungeon::Dungeon;
use crate::player::Player;
use crate::render::Renderer;
use log::{info, warn};
use macroquad::prelude::{KeyCode, get_time, is_key_pressed, next_frame};

/// The Game struct owns the dungeon, the player controller, and the ray fan
/// configuration, and drives them once per display frame.
pub struct Game {
    pub dungeon: Dungeon,
    pub player: Player,
    pub fan: RayFan,
}

impl Game {
    pub fn new(dungeon: Dungeon) -> Self {
        info!(
            "Dungeon loaded: {}x{} grid.",
            dungeon.width(),
            dungeon.height()
        );
        let player = Player::new(config::START_TILE);
        let pose = player.pose();
        if !dungeon.is_walkable(pose.position.x, pose.position.y) {
            warn!(
                "Start tile ({}, {}) is not walkable in this map",
                config::START_TILE.0,
                config::START_TILE.1
            );
        }
        Game {
            player,
            dungeon,
            fan: RayFan::default(),
        }
    }

    /// Advance the player to `now` and cast the frame's distance field.
    /// Split out from the loop so it is testable without a window.
    pub fn step(&mut self, now_ms: f64) -> Vec<f64> {
        self.player.advance(now_ms);
        caster::cast(&self.dungeon, &self.player.pose(), &self.fan)
    }

    /// Run the main frame loop until the window is closed. Dropping out of
    /// this loop abandons any in-flight animation; nothing is persisted.
    pub async fn run(&mut self, renderer: &mut Renderer) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main loop...");

        while !Renderer::window_should_close() {
            let now_ms = get_time() * 1000.0;

            if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
                self.player.request_move(now_ms, &self.dungeon);
            }
            if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
                self.player.request_turn_left(now_ms);
            }
            if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
                self.player.request_turn_right(now_ms);
            }

            let distances = self.step(now_ms);
            renderer.draw_frame(&self.dungeon, &self.player.pose(), &distances);
            next_frame().await;
        }

        info!("Exiting dungeon walker.");
        Ok(())
    }
}
