//! Line-oriented vector listing.
//!
//! ```text
//! # comments and blank lines are skipped
//! 0 0 5 0        # x1 y1 x2 y2, separated by spaces and/or commas
//! 2,1, 2,3
//! rect 6 4       # the outline of a 6x4 box at the origin
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::Parser;
use crate::error::{RasterError, RasterResult};
use crate::geometry::{Line, VectorImage};

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+)[\s,]+(-?\d+)[\s,]+(-?\d+)[\s,]+(-?\d+)$").unwrap()
});

static RECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:rect(?:angle)?)\s+(\d+)\s*[x,\s]\s*(\d+)$").unwrap());

/// Parser for the line listing format.
pub struct TextParser;

fn parse_int(raw: &str, line_no: usize) -> RasterResult<i64> {
    raw.parse().map_err(|_| RasterError::Parse {
        line: line_no,
        message: format!("integer out of range: {raw}"),
    })
}

impl Parser for TextParser {
    fn parse(&self, src: &str) -> RasterResult<VectorImage> {
        let mut lines = Vec::new();
        for (idx, raw) in src.lines().enumerate() {
            let line_no = idx + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            if let Some(caps) = LINE_RE.captures(content) {
                let x1 = parse_int(&caps[1], line_no)?;
                let y1 = parse_int(&caps[2], line_no)?;
                let x2 = parse_int(&caps[3], line_no)?;
                let y2 = parse_int(&caps[4], line_no)?;
                lines.push(Line::new(x1, y1, x2, y2));
            } else if let Some(caps) = RECT_RE.captures(content) {
                let width = parse_int(&caps[1], line_no)?;
                let height = parse_int(&caps[2], line_no)?;
                if width < 1 || height < 1 {
                    return Err(RasterError::Parse {
                        line: line_no,
                        message: format!("rectangle must be at least 1x1, got {width}x{height}"),
                    });
                }
                lines.extend_from_slice(VectorImage::rectangle(width, height).lines());
            } else {
                return Err(RasterError::Parse {
                    line: line_no,
                    message: format!("expected 'x1 y1 x2 y2' or 'rect W H', got '{content}'"),
                });
            }
        }
        Ok(VectorImage::new(lines))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_text.rs"]
mod tests;
