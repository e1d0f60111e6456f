// The dungeon grid: an immutable rectangular field of wall and floor cells.

use thiserror::Error;

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Wall,
}

/// Errors raised while constructing or parsing a dungeon grid.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DungeonError {
    #[error("Dungeon grid has no cells")]
    Empty,
    #[error("Dungeon row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unrecognized map character '{ch}' at row {row}, column {col}")]
    BadCharacter { ch: char, row: usize, col: usize },
}

/// A rectangular grid of cells, indexed [row][col] (row = Y, col = X).
/// Immutable once constructed; rectangularity is checked at construction.
#[derive(Debug, Clone)]
pub struct Dungeon {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Dungeon {
    /// Build a dungeon from rows of cells, validating the grid is
    /// rectangular and non-empty.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, DungeonError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(DungeonError::Empty);
        }
        let width = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(DungeonError::RaggedRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Dungeon {
            width,
            height,
            cells,
        })
    }

    /// Parse a text map: one row per line, '#' for wall, '.' for floor.
    /// Blank lines are skipped so trailing newlines are harmless.
    pub fn parse(text: &str) -> Result<Self, DungeonError> {
        let mut rows = Vec::new();
        for (row, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.trim_end().chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Floor,
                    _ => return Err(DungeonError::BadCharacter { ch, row, col }),
                };
                cells.push(cell);
            }
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at integer grid coordinates, or None when out of bounds.
    pub fn cell(&self, col: i64, row: i64) -> Option<Cell> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        Some(self.cells[row as usize * self.width + col as usize])
    }

    /// Cell under a continuous map coordinate. Tile membership is
    /// floor-truncation toward negative infinity, never rounding.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Cell> {
        self.cell(x.floor() as i64, y.floor() as i64)
    }

    /// True when the continuous coordinate lands on a walkable floor cell.
    /// Out of bounds is not walkable.
    pub fn is_walkable(&self, x: f64, y: f64) -> bool {
        self.cell_at(x, y) == Some(Cell::Floor)
    }
}

/// The built-in 16x16 dungeon. Tile (1, 0) on the top row is the open
/// starting cell.
pub fn default_dungeon() -> Dungeon {
    const LAYOUT: [&str; 16] = [
        "#.##############",
        "#..#.#...#..#..#",
        "##.#.#.#.#.###.#",
        "#..#...#.#...#.#",
        "#.##.###.###...#",
        "#.....#..#.###.#",
        "#####.#.##.#...#",
        "#.....#.#....#.#",
        "#.###.###.####.#",
        "#...#.#...#....#",
        "###.#.#.#####.##",
        "#.##....#...#.##",
        "#..##.###.#....#",
        "##..#.#...####.#",
        "###...#.#.#....#",
        "#######.########",
    ];
    // The literal above is checked by tests; parsing cannot fail here.
    Dungeon::parse(&LAYOUT.join("\n")).expect("built-in dungeon literal is valid")
}
