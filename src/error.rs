//! Error taxonomy shared by every stage of the pipeline.

use thiserror::Error;

use crate::geometry::{GeometryKey, Line, Point};

/// Everything that can go wrong between reading a vector image and painting its grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// The segment is neither horizontal nor vertical.
    #[error("unsupported geometry: {line} is neither horizontal nor vertical")]
    UnsupportedGeometry { line: Line },

    /// A key was stored again with a payload different from the one already cached.
    #[error("inconsistent cache entry for key {key}")]
    InconsistentCacheEntry { key: GeometryKey },

    /// The grid renderer only accepts non-negative coordinates.
    #[error("negative coordinate {point} cannot be rendered")]
    NegativeCoordinate { point: Point },

    /// The grid spanning the origin and this far corner is too large to allocate.
    #[error("grid reaching {point} is too large to render")]
    GridTooLarge { point: Point },

    /// The text front-end could not understand a line of input.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Type alias for convenience
pub type RasterResult<T> = Result<T, RasterError>;
