// Shared geometry types.

/// A point in continuous map coordinates (tiles). Tile (col, row) has its
/// center at (col + 0.5, row + 0.5).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Center of the given tile.
    pub fn tile_center(col: usize, row: usize) -> Self {
        Point {
            x: col as f64 + 0.5,
            y: row as f64 + 0.5,
        }
    }
}

/// A full viewpoint: continuous position plus heading in radians.
/// Heading 0 points east (+x), positive angles turn toward +y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub heading: f64,
}

impl Pose {
    pub fn new(position: Point, heading: f64) -> Self {
        Pose { position, heading }
    }
}
