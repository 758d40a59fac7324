//! Canvas — 2D character grid for painting points.

use super::charset::CharSet;
use crate::geometry::Point;

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// The extent of a grid anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

// ─── Canvas ───────────────────────────────────────────────────────────────────

/// A 2D character grid used as a painting surface.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub charset: CharSet,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![vec![charset.empty(); width]; height],
        }
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if row < self.height && col < self.width {
            self.cells[row][col] = ch;
        }
    }

    /// Mark the cell under `point` as filled. Points off the canvas are ignored.
    pub fn plot(&mut self, point: Point) {
        if let (Ok(col), Ok(row)) = (usize::try_from(point.x), usize::try_from(point.y)) {
            self.set(col, row, self.charset.filled());
        }
    }

    /// Render the canvas row by row, every row terminated by a newline.
    ///
    /// Rows keep their trailing empty cells so every line is `width` chars.
    pub fn render_to_string(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in &self.cells {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
