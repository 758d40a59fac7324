//! vector-raster — axis-aligned vector lines to raster points and text grids.
//!
//! Pipeline: text listing → [`VectorImage`] → [`VectorToRaster`] (one
//! [`GeometryCache`] lookup per line) → [`GridRenderer`] → text.
//!
//! Public API: `render_vectors()`

pub mod config;
pub mod error;
pub mod geometry;
pub mod parsers;
pub mod raster;
pub mod renderers;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::config::RenderConfig;
pub use crate::error::{RasterError, RasterResult};
pub use crate::geometry::{GeometryKey, Line, Point, VectorImage};
pub use crate::raster::{
    CachePolicy, CacheStats, GeometryCache, RasterImage, VectorToRaster, convert, convert_batch,
    rasterize,
};
pub use crate::renderers::{CharSet, GridRenderer, Renderer, render_points};

use crate::parsers::parse;

/// Parse a line listing and render it as a character grid.
///
/// Uses the process-wide cache unless `config.cached` is false.
pub fn render_vectors(src: &str, config: &RenderConfig) -> RasterResult<String> {
    let cache = config.cached.then(GeometryCache::global);
    render_vectors_with_cache(src, config, cache)
}

/// Like [`render_vectors`], with an explicit cache (or none).
///
/// `cache` is ignored when `config.cached` is false.
pub fn render_vectors_with_cache(
    src: &str,
    config: &RenderConfig,
    cache: Option<&GeometryCache>,
) -> RasterResult<String> {
    let image = parse(src)?;
    render_image(&image, config, cache)
}

/// Rasterize and render an already-built vector image.
///
/// Lines go through `cache` only when one is given and `config.cached` is set.
pub fn render_image(
    image: &VectorImage,
    config: &RenderConfig,
    cache: Option<&GeometryCache>,
) -> RasterResult<String> {
    let cache = cache.filter(|_| config.cached);
    let raster = match cache {
        Some(cache) => VectorToRaster::convert_with(image, cache)?,
        None => VectorToRaster::uncached(image)?,
    };
    GridRenderer::new(config.charset).render(&raster)
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
