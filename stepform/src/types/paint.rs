use super::{Color, TextStyle};

/// Paint for text drawn at a baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    pub size: f32,
    pub style: TextStyle,
}

impl TextPaint {
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            color,
            size,
            style: TextStyle::default(),
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }
}

/// Paint for filled shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillPaint {
    pub color: Color,
}

impl FillPaint {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Paint for stroked lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePaint {
    pub color: Color,
    pub width: f32,
}

impl StrokePaint {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Vertical font metrics for a text paint, in pixels.
/// Ascent is negative (it extends above the baseline), descent positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}
