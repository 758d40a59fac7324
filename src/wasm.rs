//! WASM bindings for vector-raster.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::renderers::CharSet;

/// Render a line listing with the ASCII palette and the shared cache.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_vectors(src, &RenderConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a line listing with full control over options.
///
/// - `unicode`: true for block characters, false for `*`
/// - `cached`: false to bypass the geometry cache
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(src: &str, unicode: bool, cached: bool) -> Result<String, JsError> {
    let config = RenderConfig {
        charset: if unicode { CharSet::Unicode } else { CharSet::Ascii },
        cached,
    };
    crate::render_vectors(src, &config).map_err(|e| JsError::new(&e.to_string()))
}
