use crate::renderers::CharSet;

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Palette for filled and empty cells.
    pub charset: CharSet,
    /// Route line rasterization through a geometry cache.
    pub cached: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: CharSet::Ascii,
            cached: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
