//! Line rasterizer: one axis-aligned segment to its pixels.

use crate::error::{RasterError, RasterResult};
use crate::geometry::{Line, Point};

fn minmax(a: i64, b: i64) -> (i64, i64) {
    if a < b { (a, b) } else { (b, a) }
}

/// Produce every pixel covered by `line`, in increasing coordinate order.
///
/// Endpoints are normalized first, so a line and its reverse rasterize to the
/// same sequence. A vertical line yields `|dy| + 1` points, a horizontal one
/// `|dx| + 1`, a degenerate one exactly one point. Diagonals fail with
/// [`RasterError::UnsupportedGeometry`].
pub fn rasterize(line: &Line) -> RasterResult<Vec<Point>> {
    let (left, right) = minmax(line.x1, line.x2);
    let (top, bottom) = minmax(line.y1, line.y2);

    if left == right {
        Ok((top..=bottom).map(|y| Point::new(left, y)).collect())
    } else if top == bottom {
        Ok((left..=right).map(|x| Point::new(x, top)).collect())
    } else {
        Err(RasterError::UnsupportedGeometry { line: *line })
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_raster_rasterizer.rs"]
mod tests;
