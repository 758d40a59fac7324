//! Geometry types: Point, Line, VectorImage, GeometryKey.

use std::fmt;

// ─── Point ───────────────────────────────────────────────────────────────────

/// A single pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ─── Line ────────────────────────────────────────────────────────────────────

/// A segment between `(x1, y1)` and `(x2, y2)`.
///
/// Only axis-aligned segments can be rasterized; a diagonal `Line` is
/// representable but rejected by [`crate::raster::rasterize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Line {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    /// Both endpoints coincide: the line covers exactly one pixel.
    pub fn is_degenerate(&self) -> bool {
        self.is_vertical() && self.is_horizontal()
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.is_vertical() || self.is_horizontal()
    }

    /// The cache key for this exact geometry.
    pub fn key(&self) -> GeometryKey {
        GeometryKey::from_line(self)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

// ─── VectorImage ─────────────────────────────────────────────────────────────

/// An ordered collection of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorImage {
    lines: Vec<Line>,
}

impl VectorImage {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// The outline of a `width` x `height` box anchored at the origin.
    ///
    /// Lines come out as top, left, right, bottom. Corner pixels are shared
    /// by two lines each.
    pub fn rectangle(width: i64, height: i64) -> Self {
        let w = width - 1;
        let h = height - 1;
        Self::new(vec![
            Line::new(0, 0, w, 0),
            Line::new(0, 0, 0, h),
            Line::new(w, 0, w, h),
            Line::new(0, h, w, h),
        ])
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<Line>> for VectorImage {
    fn from(lines: Vec<Line>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<Line> for VectorImage {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ─── GeometryKey ─────────────────────────────────────────────────────────────

/// Content address of a [`Line`]: its four fields, big-endian, in field order.
///
/// Endpoint order is part of the key, so `(0,0)-(3,0)` and `(3,0)-(0,0)` are
/// different keys even though they rasterize to the same pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryKey([u8; 32]);

impl GeometryKey {
    pub fn from_line(line: &Line) -> Self {
        let mut bytes = [0u8; 32];
        for (chunk, value) in bytes
            .chunks_exact_mut(8)
            .zip([line.x1, line.y1, line.x2, line.y2])
        {
            chunk.copy_from_slice(&value.to_be_bytes());
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for GeometryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_geometry_types.rs"]
mod tests;
