//! Text front-end: turn a textual line listing into a [`VectorImage`].

pub mod text;

use crate::error::RasterResult;
use crate::geometry::VectorImage;
use text::TextParser;

/// Trait for vector image parsers.
pub trait Parser {
    /// Parse the input source string into a vector image.
    fn parse(&self, src: &str) -> RasterResult<VectorImage>;
}

/// Parse a line listing into a vector image.
pub fn parse(src: &str) -> RasterResult<VectorImage> {
    TextParser.parse(src)
}
