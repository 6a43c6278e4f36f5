use macroquad::math::Vec2;
use std::fs;
use std::path::Path;

/// Built-in 11 x 15 maze, row-major. 0 = empty, anything else = wall.
pub const EXAMPLE_LAYOUT: [[i32; 15]; 11] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

impl Cell {
    pub fn from_value(value: i32) -> Self {
        if value == 0 {
            Cell::Empty
        } else {
            Cell::Wall
        }
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// Static tile maze
///
/// Immutable once built. World coordinates span `[0, width] x [0, height]`
/// where each cell is a `tile_size` square; anything outside that rectangle
/// counts as wall.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tile_size: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from integer rows (0 = empty, non-zero = wall)
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R], tile_size: f32) -> Result<Self, String> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(format!("Tile size must be positive, got {}", tile_size));
        }

        let cols = match rows.first() {
            Some(row) => row.as_ref().len(),
            None => return Err("Maze layout has no rows".to_string()),
        };
        if cols == 0 {
            return Err("Maze layout has an empty first row".to_string());
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(format!(
                    "Maze row {} has {} cells, expected {}",
                    y + 1,
                    row.len(),
                    cols
                ));
            }
            cells.extend(row.iter().map(|&value| Cell::from_value(value)));
        }

        Ok(Grid {
            rows: rows.len(),
            cols,
            tile_size,
            cells,
        })
    }

    /// The built-in 11 x 15 maze
    pub fn example(tile_size: f32) -> Result<Self, String> {
        Self::from_rows(&EXAMPLE_LAYOUT[..], tile_size)
    }

    /// Parse the text layout: one digit per cell, one row per non-blank line
    pub fn parse(text: &str, tile_size: f32) -> Result<Self, String> {
        let mut rows: Vec<Vec<i32>> = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    ch.to_digit(10).map(|d| d as i32).ok_or_else(|| {
                        format!(
                            "Invalid cell '{}' at line {}, column {}",
                            ch,
                            line_no + 1,
                            col + 1
                        )
                    })
                })
                .collect::<Result<Vec<i32>, String>>()?;
            rows.push(row);
        }

        Self::from_rows(&rows, tile_size)
    }

    /// Load a text layout from disk
    pub fn load_from_file(path: impl AsRef<Path>, tile_size: f32) -> Result<Self, String> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read maze file {}: {}", path.display(), e))?;
        Self::parse(&text, tile_size)
            .map_err(|e| format!("Failed to parse maze file {}: {}", path.display(), e))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World-space width, also the viewport width in pixels
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    /// World-space height, also the viewport height in pixels
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Cell at (row, col). Out of range is treated as wall.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return Cell::Wall;
        }
        self.cells[row * self.cols + col]
    }

    /// Whether `point` lies inside the world rectangle, edges included
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width()).contains(&point.x) && (0.0..=self.height()).contains(&point.y)
    }

    /// (row, col) of the cell containing `point`, if any
    ///
    /// Points on the far right or bottom edge belong to no cell.
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        if !self.contains(point) {
            return None;
        }

        let col = (point.x / self.tile_size).floor() as usize;
        let row = (point.y / self.tile_size).floor() as usize;
        if row < self.rows && col < self.cols {
            Some((row, col))
        } else {
            None
        }
    }

    /// Blocked test shared by movement and ray casting
    pub fn has_wall_at(&self, point: Vec2) -> bool {
        match self.cell_at(point) {
            Some((row, col)) => self.cell(row, col).is_wall(),
            None => true,
        }
    }

    /// Whether every perimeter cell is a wall
    pub fn is_enclosed(&self) -> bool {
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        let top_bottom = (0..self.cols)
            .all(|col| self.cell(0, col).is_wall() && self.cell(last_row, col).is_wall());
        let sides = (0..self.rows)
            .all(|row| self.cell(row, 0).is_wall() && self.cell(row, last_col).is_wall());
        top_bottom && sides
    }

    /// Digit layout accepted by [`Grid::parse`]
    pub fn to_layout_string(&self) -> String {
        let mut result = String::with_capacity(self.rows * (self.cols + 1));

        for row in 0..self.rows {
            for col in 0..self.cols {
                result.push(if self.cell(row, col).is_wall() { '1' } else { '0' });
            }
            result.push('\n');
        }

        result
    }
}
