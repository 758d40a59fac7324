//! Raster adapter: presents a [`VectorImage`] as a [`RasterImage`].

use log::debug;
use rayon::prelude::*;

use super::RasterImage;
use super::cache::GeometryCache;
use super::rasterizer::rasterize;
use crate::error::RasterResult;
use crate::geometry::{Point, VectorImage};

/// The points of a vector image, accumulated line by line.
///
/// Points are kept in line order and are not deduplicated: a pixel shared by
/// two lines (a rectangle corner, say) appears once per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorToRaster {
    points: Vec<Point>,
}

impl VectorToRaster {
    /// Convert through the process-wide cache.
    pub fn convert(image: &VectorImage) -> RasterResult<Self> {
        Self::convert_with(image, GeometryCache::global())
    }

    /// Convert through `cache`. The first line that cannot be rasterized
    /// aborts the whole conversion.
    pub fn convert_with(image: &VectorImage, cache: &GeometryCache) -> RasterResult<Self> {
        let mut adapter = Self::default();
        for line in image.lines() {
            let pts = cache.get_or_rasterize(line)?;
            adapter.points.extend(pts);
            debug!("we have {} points", adapter.points.len());
        }
        Ok(adapter)
    }

    /// Convert without touching any cache.
    pub fn uncached(image: &VectorImage) -> RasterResult<Self> {
        let mut adapter = Self::default();
        for line in image.lines() {
            adapter.points.extend(rasterize(line)?);
            debug!("we have {} points", adapter.points.len());
        }
        Ok(adapter)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl RasterImage for VectorToRaster {
    fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Convert `image` through `cache` and return the accumulated points.
pub fn convert(image: &VectorImage, cache: &GeometryCache) -> RasterResult<Vec<Point>> {
    VectorToRaster::convert_with(image, cache).map(VectorToRaster::into_points)
}

/// Convert many images in parallel against one shared cache.
///
/// Results come back in input order; any failing image fails the batch.
pub fn convert_batch(
    images: &[VectorImage],
    cache: &GeometryCache,
) -> RasterResult<Vec<Vec<Point>>> {
    images
        .par_iter()
        .map(|image| convert(image, cache))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_raster_adapter.rs"]
mod tests;
