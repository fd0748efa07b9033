use unicode_width::UnicodeWidthStr;

use crate::types::{FontMetrics, TextPaint};

/// Text measurement capability supplied by the host toolkit.
pub trait TextMeasurer {
    /// Advance width of `text` drawn with `paint`.
    fn text_width(&self, paint: &TextPaint, text: &str) -> f32;

    /// Height of the tight bounding box of `text` drawn with `paint`.
    fn text_bounds_height(&self, paint: &TextPaint, text: &str) -> f32;

    /// Vertical metrics of the font selected by `paint`.
    fn font_metrics(&self, paint: &TextPaint) -> FontMetrics;
}

/// Deterministic fallback measurer for demos and headless use: every cell
/// advances by a fixed ratio of the paint's font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_ratio: f32,
    pub cap_ratio: f32,
    pub ascent_ratio: f32,
    pub descent_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            cap_ratio: 0.7,
            ascent_ratio: 0.8,
            descent_ratio: 0.25,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn text_width(&self, paint: &TextPaint, text: &str) -> f32 {
        text.width() as f32 * paint.size * self.advance_ratio
    }

    fn text_bounds_height(&self, paint: &TextPaint, text: &str) -> f32 {
        if text.is_empty() {
            0.0
        } else {
            paint.size * self.cap_ratio
        }
    }

    fn font_metrics(&self, paint: &TextPaint) -> FontMetrics {
        FontMetrics {
            ascent: -paint.size * self.ascent_ratio,
            descent: paint.size * self.descent_ratio,
        }
    }
}
