//! Vector-side data model: points, axis-aligned lines and vector images.

pub mod types;

pub use types::{GeometryKey, Line, Point, VectorImage};
