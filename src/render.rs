// Handles rendering the computed distance field using macroquad: a
// first-person wall-strip view next to a top-down minimap.

use crate::config::{
    MINIMAP_PANEL_WIDTH, MIN_RENDER_DISTANCE, SHADE_FALLOFF_DISTANCE, VIEW_WIDTH,
    WALL_HEIGHT_BASE, WALL_HEIGHT_SCALE, WINDOW_HEIGHT,
};
use crate::dungeon::{Cell, Dungeon};
use crate::types::Pose;
use crate::utils;
use macroquad::prelude::*;

/// Wall darkness for a given perpendicular distance: fully dark at 0,
/// fading to nothing over SHADE_FALLOFF_DISTANCE tiles.
pub fn shade(distance: f64) -> f64 {
    utils::clamp(1.0 - distance / SHADE_FALLOFF_DISTANCE, 0.0, 1.0)
}

/// Strip height in pixels for a given perpendicular distance. The distance
/// is floored at MIN_RENDER_DISTANCE so point-blank walls stay finite.
pub fn wall_height(distance: f64) -> f64 {
    WALL_HEIGHT_SCALE / distance.max(MIN_RENDER_DISTANCE) + WALL_HEIGHT_BASE
}

pub struct Renderer {
    minimap_cell: f32,
}

impl Renderer {
    pub fn new(dungeon: &Dungeon) -> Self {
        let cells_across = dungeon.width().max(dungeon.height()) as f32;
        Renderer {
            minimap_cell: MINIMAP_PANEL_WIDTH as f32 / cells_across,
        }
    }

    pub fn draw_frame(&self, dungeon: &Dungeon, pose: &Pose, distances: &[f64]) {
        clear_background(Color::from_rgba(24, 24, 28, 255));
        self.draw_minimap(dungeon, pose);
        Self::draw_wall_strips(distances);
    }

    // One column per ray, centered vertically, height and darkness driven
    // by the fixed sink mappings.
    fn draw_wall_strips(distances: &[f64]) {
        let view_x = MINIMAP_PANEL_WIDTH as f32;

        // White backdrop for the first-person panel
        draw_rectangle(
            view_x,
            0.0,
            VIEW_WIDTH as f32,
            WINDOW_HEIGHT as f32,
            WHITE,
        );

        let strip_width = VIEW_WIDTH as f32 / distances.len() as f32;
        for (i, &distance) in distances.iter().enumerate() {
            let height = wall_height(distance) as f32;
            let alpha = shade(distance) as f32;
            let x = view_x + i as f32 * strip_width;
            let y = (WINDOW_HEIGHT as f32 - height) / 2.0;
            draw_rectangle(x, y, strip_width, height, Color::new(0.0, 0.0, 0.0, alpha));
        }
    }

    fn draw_minimap(&self, dungeon: &Dungeon, pose: &Pose) {
        let cell = self.minimap_cell;

        for row in 0..dungeon.height() {
            for col in 0..dungeon.width() {
                let color = match dungeon.cell(col as i64, row as i64) {
                    Some(Cell::Wall) => Color::from_rgba(40, 40, 48, 255),
                    _ => Color::from_rgba(210, 210, 214, 255),
                };
                draw_rectangle(col as f32 * cell, row as f32 * cell, cell, cell, color);
            }
        }

        // Player tile highlight
        let col = pose.position.x.floor() as f32;
        let row = pose.position.y.floor() as f32;
        draw_rectangle(col * cell, row * cell, cell, cell, SKYBLUE);

        // Short heading indicator from the continuous position
        let px = pose.position.x as f32 * cell;
        let py = pose.position.y as f32 * cell;
        let len = cell * 0.8;
        draw_line(
            px,
            py,
            px + pose.heading.cos() as f32 * len,
            py + pose.heading.sin() as f32 * len,
            2.0,
            ORANGE,
        );
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_shade_mapping() {
        assert_approx_eq!(shade(0.0), 1.0);
        assert_approx_eq!(shade(2.0), 0.5);
        assert_approx_eq!(shade(4.0), 0.0);
        // Beyond the falloff distance the shade clamps instead of going
        // negative.
        assert_approx_eq!(shade(30.0), 0.0);
    }

    #[test]
    fn test_wall_height_mapping() {
        assert_approx_eq!(wall_height(1.0), 120.0);
        assert_approx_eq!(wall_height(4.0), 90.0);
        // Point-blank distances are floored at 0.1 rather than diverging.
        assert_approx_eq!(wall_height(0.0), 480.0);
        assert_approx_eq!(wall_height(0.05), 480.0);
    }

    #[test]
    fn test_wall_height_monotonically_decreasing() {
        let mut prev = wall_height(MIN_RENDER_DISTANCE);
        let mut d = MIN_RENDER_DISTANCE;
        while d < 30.0 {
            d += 0.5;
            let h = wall_height(d);
            assert!(h < prev);
            prev = h;
        }
    }
}
