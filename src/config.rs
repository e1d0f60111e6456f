//! Configuration constants for the dungeon walker.

use std::f64::consts::PI;

// Ray fan geometry
pub const FOV: f64 = 80.0 * PI / 180.0; // Total horizontal field of view in radians
pub const NUM_RAYS: usize = 32; // Rays cast per frame, one per wall strip
pub const EYE_OFFSET: f64 = -0.5; // Pullback of the eye point from cell center (fraction of a half cell)
pub const MAX_DISTANCE: f64 = 30.0; // March cutoff in tiles; also the saturating out-of-bounds distance
pub const STEP_SIZE: f64 = 0.05; // March increment in tiles

// Animation
pub const MOVE_DURATION_MS: f64 = 500.0; // A one-tile move takes half a second
pub const TURN_DURATION_MS: f64 = 500.0; // As does a quarter turn
pub const TURN_ANGLE: f64 = PI / 2.0; // Turns are fixed 90 degree increments

// Player start (tile coordinates: col, row)
pub const START_TILE: (usize, usize) = (1, 0);

// Rendering configuration
pub const WINDOW_WIDTH: i32 = 1000;
pub const WINDOW_HEIGHT: i32 = 480;
pub const MINIMAP_PANEL_WIDTH: i32 = 320; // Width of the top-down minimap panel
pub const VIEW_WIDTH: i32 = WINDOW_WIDTH - MINIMAP_PANEL_WIDTH; // Width of the wall-strip view

// Wall strip shading and projection (the sink mappings, fixed)
pub const SHADE_FALLOFF_DISTANCE: f64 = 4.0; // Walls fade out fully over this many tiles
pub const MIN_RENDER_DISTANCE: f64 = 0.1; // Floor on distance before height projection
pub const WALL_HEIGHT_SCALE: f64 = 40.0; // Inverse-distance height numerator in pixels
pub const WALL_HEIGHT_BASE: f64 = 80.0; // Height added to every strip in pixels
