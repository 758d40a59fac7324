//! Renderer trait and the text grid renderer.

pub mod canvas;
pub mod charset;
pub mod grid;

pub use charset::CharSet;
pub use grid::{GridRenderer, render_points};

use crate::error::RasterResult;
use crate::raster::RasterImage;

/// Trait for point renderers.
pub trait Renderer {
    /// Render any point producer to a string.
    fn render(&self, image: &dyn RasterImage) -> RasterResult<String>;
}
