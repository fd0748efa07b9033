use std::fmt;

use crate::layout::{LayoutParams, MeasureSpec, Rect};
use crate::text::TextMeasurer;
use crate::types::{ButtonStyle, Visibility};

/// A host-provided view participating in the stepper's measure and layout
/// passes. The stepper never draws a content view's interior; it only
/// measures it under the constrained-measurement protocol and assigns its
/// final frame.
pub trait View: fmt::Debug {
    fn layout_params(&self) -> LayoutParams;

    fn visibility(&self) -> Visibility;

    fn set_visibility(&mut self, visibility: Visibility);

    /// Measure under the given constraints, caching the measured size.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec);

    fn measured_width(&self) -> f32;

    fn measured_height(&self) -> f32;

    fn set_frame(&mut self, frame: Rect);

    fn frame(&self) -> Rect;
}

/// A plain rectangular view with a fixed desired size. Stands in for real
/// host content in demos and tests.
#[derive(Debug, Clone)]
pub struct Pane {
    params: LayoutParams,
    desired_width: f32,
    desired_height: f32,
    visibility: Visibility,
    measured: (f32, f32),
    frame: Rect,
}

impl Pane {
    pub fn new(desired_width: f32, desired_height: f32) -> Self {
        Self {
            params: LayoutParams::default(),
            desired_width,
            desired_height,
            visibility: Visibility::Visible,
            measured: (0.0, 0.0),
            frame: Rect::default(),
        }
    }

    pub fn params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }
}

impl View for Pane {
    fn layout_params(&self) -> LayoutParams {
        self.params
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) {
        self.measured = (
            width_spec.resolve(self.desired_width),
            height_spec.resolve(self.desired_height),
        );
    }

    fn measured_width(&self) -> f32 {
        self.measured.0
    }

    fn measured_height(&self) -> f32 {
        self.measured.1
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}

/// Invisible full-width overlay that captures taps for one step. Generated
/// and owned by the container, never part of the host view tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchView {
    measured: (f32, f32),
    frame: Rect,
}

impl TouchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) {
        self.measured = (width_spec.resolve(0.0), height_spec.resolve(0.0));
    }

    pub fn measured_width(&self) -> f32 {
        self.measured.0
    }

    pub fn measured_height(&self) -> f32 {
        self.measured.1
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }
}

/// The generated continue button of one step. Its desired size derives from
/// the button style; the container measures and places it like any child.
#[derive(Debug, Clone)]
pub struct ContinueButton {
    desired_width: f32,
    desired_height: f32,
    visibility: Visibility,
    measured: (f32, f32),
    frame: Rect,
}

impl ContinueButton {
    pub fn new(style: &ButtonStyle, measurer: &dyn TextMeasurer) -> Self {
        let metrics = measurer.font_metrics(&style.text_paint);
        let label_width = measurer.text_width(&style.text_paint, &style.label);
        let text_height = -metrics.ascent + metrics.descent;
        Self {
            desired_width: label_width + style.padding.horizontal_total(),
            desired_height: (text_height + style.padding.vertical_total()).max(style.min_height),
            visibility: Visibility::Visible,
            measured: (0.0, 0.0),
            frame: Rect::default(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) {
        self.measured = (
            width_spec.resolve(self.desired_width),
            height_spec.resolve(self.desired_height),
        );
    }

    pub fn measured_width(&self) -> f32 {
        self.measured.0
    }

    pub fn measured_height(&self) -> f32 {
        self.measured.1
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }
}
