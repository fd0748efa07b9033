use crate::types::{FillPaint, StrokePaint, TextPaint};

/// Drawing capability supplied by the host toolkit.
///
/// Coordinates are in pixels, relative to the current translation. Text is
/// positioned by its left edge and baseline.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &FillPaint);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &StrokePaint);
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &TextPaint);
}

/// One recorded draw call, in absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        paint: FillPaint,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        paint: StrokePaint,
    },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        paint: TextPaint,
    },
}

/// A canvas that records draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    offset: (f32, f32),
    saved: Vec<(f32, f32)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.saved.push(self.offset);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.saved.pop() {
            self.offset = offset;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &FillPaint) {
        self.ops.push(DrawOp::Circle {
            cx: cx + self.offset.0,
            cy: cy + self.offset.1,
            radius,
            paint: *paint,
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &StrokePaint) {
        self.ops.push(DrawOp::Line {
            x1: x1 + self.offset.0,
            y1: y1 + self.offset.1,
            x2: x2 + self.offset.0,
            y2: y2 + self.offset.1,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &TextPaint) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x: x + self.offset.0,
            baseline: baseline + self.offset.1,
            paint: *paint,
        });
    }
}
