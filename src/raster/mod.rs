//! Raster side of the pipeline: the point-producing capability and the
//! components that turn vector lines into points.

pub mod adapter;
pub mod cache;
pub mod rasterizer;

pub use adapter::{VectorToRaster, convert, convert_batch};
pub use cache::{CachePolicy, CacheStats, GeometryCache};
pub use rasterizer::rasterize;

use crate::geometry::Point;

/// Anything that can hand out an ordered sequence of pixel coordinates.
///
/// Renderers consume this instead of a concrete source type, so points coming
/// from vector geometry and points built by hand are drawn the same way.
pub trait RasterImage {
    fn points(&self) -> &[Point];
}

impl RasterImage for [Point] {
    fn points(&self) -> &[Point] {
        self
    }
}

impl<T: RasterImage + ?Sized> RasterImage for &T {
    fn points(&self) -> &[Point] {
        (**self).points()
    }
}

impl RasterImage for Vec<Point> {
    fn points(&self) -> &[Point] {
        self
    }
}
