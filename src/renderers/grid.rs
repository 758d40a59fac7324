//! Grid renderer: points to a fixed-size character grid.

use super::Renderer;
use super::canvas::{Canvas, Rect};
use super::charset::CharSet;
use crate::error::{RasterError, RasterResult};
use crate::geometry::Point;
use crate::raster::RasterImage;

/// Largest number of cells (including newlines) a grid may hold.
const MAX_GRID_CELLS: usize = isize::MAX as usize / std::mem::size_of::<char>();

/// The box from the origin to one past the largest `x` and `y`.
///
/// Returns `None` for an empty slice. Any negative coordinate is an error, as
/// is a far corner whose grid cannot be addressed in memory.
pub fn bounding_box(points: &[Point]) -> RasterResult<Option<Rect>> {
    let mut max: Option<(i64, i64)> = None;
    for point in points {
        if point.x < 0 || point.y < 0 {
            return Err(RasterError::NegativeCoordinate { point: *point });
        }
        let (mx, my) = max.unwrap_or((0, 0));
        max = Some((mx.max(point.x), my.max(point.y)));
    }
    let Some((mx, my)) = max else {
        return Ok(None);
    };

    let too_large = || RasterError::GridTooLarge {
        point: Point::new(mx, my),
    };
    let width = mx
        .checked_add(1)
        .and_then(|w| usize::try_from(w).ok())
        .ok_or_else(too_large)?;
    let height = my
        .checked_add(1)
        .and_then(|h| usize::try_from(h).ok())
        .ok_or_else(too_large)?;
    // every row also carries its newline
    match width.checked_add(1).and_then(|row| row.checked_mul(height)) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok(Some(Rect::new(width, height))),
        _ => Err(too_large()),
    }
}

/// Paints every point onto a grid sized to the points' bounding box.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer {
    charset: CharSet,
}

impl GridRenderer {
    pub fn new(charset: CharSet) -> Self {
        Self { charset }
    }
}

impl Renderer for GridRenderer {
    /// One newline-terminated row per `y` from 0 to the largest `y`.
    ///
    /// No points render to the empty string.
    fn render(&self, image: &dyn RasterImage) -> RasterResult<String> {
        let points = image.points();
        let Some(bounds) = bounding_box(points)? else {
            return Ok(String::new());
        };
        let mut canvas = Canvas::new(bounds.width, bounds.height, self.charset);
        for point in points {
            canvas.plot(*point);
        }
        Ok(canvas.render_to_string())
    }
}

/// Render `points` with the ASCII palette.
pub fn render_points(points: &[Point]) -> RasterResult<String> {
    GridRenderer::default().render(&points)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_grid.rs"]
mod tests;
