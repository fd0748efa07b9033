use thiserror::Error;

use crate::layout::{Dimension, MeasureSpec};
use crate::text::TextMeasurer;
use crate::types::{FillPaint, StepperStyle, TextPaint, Visibility};
use crate::view::{ContinueButton, TouchView, View};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("step {index}: title must be a non-empty string")]
    EmptyTitle { index: usize },
}

/// Declarative attributes for one step, consumed at construction.
#[derive(Debug, Clone, Default)]
pub struct StepAttributes {
    pub title: String,
    pub summary: String,
    pub optional: bool,
}

impl StepAttributes {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: String::new(),
            optional: false,
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One stepper entry: a host content view, the two generated companion views,
/// interactive state, and the geometry cache the measure pass fills in.
///
/// Every cached field is overwritten (never accumulated) on each measure
/// pass, so re-measuring with unchanged inputs is idempotent.
#[derive(Debug)]
pub struct Step {
    title: String,
    summary: String,
    error: String,
    active: bool,
    complete: bool,
    optional: bool,

    content: Box<dyn View>,
    touch_view: TouchView,
    continue_button: ContinueButton,

    decorator_height: f32,
    bottom_margin_height: f32,
    children_visible_height: f32,
    title_width: f32,
    subtitle_width: f32,
    title_baseline_relative_to_step_top: f32,
    title_bottom_relative_to_step_top: f32,
    subtitle_baseline_relative_to_title_bottom: f32,
    subtitle_bottom_relative_to_title_bottom: f32,
}

impl Step {
    /// Wrap a declared child view. The content view and continue button start
    /// out hidden; the touch overlay is always present.
    pub fn new(
        index: usize,
        attributes: StepAttributes,
        mut content: Box<dyn View>,
        mut continue_button: ContinueButton,
    ) -> Result<Self, StepError> {
        if attributes.title.is_empty() {
            return Err(StepError::EmptyTitle { index });
        }
        content.set_visibility(Visibility::Gone);
        continue_button.set_visibility(Visibility::Gone);
        Ok(Self {
            title: attributes.title,
            summary: attributes.summary,
            error: String::new(),
            active: false,
            complete: false,
            optional: attributes.optional,
            content,
            touch_view: TouchView::new(),
            continue_button,
            decorator_height: 0.0,
            bottom_margin_height: 0.0,
            children_visible_height: 0.0,
            title_width: 0.0,
            subtitle_width: 0.0,
            title_baseline_relative_to_step_top: 0.0,
            title_bottom_relative_to_step_top: 0.0,
            subtitle_baseline_relative_to_title_bottom: 0.0,
            subtitle_bottom_relative_to_title_bottom: 0.0,
        })
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    pub fn error(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn mark_complete(&mut self) {
        self.complete = true;
        self.error.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.complete = false;
    }

    /// Flip between collapsed and expanded, syncing the visibility of the
    /// content view and continue button.
    pub fn toggle_expanded(&mut self) {
        self.active = !self.active;
        let visibility = if self.active {
            Visibility::Visible
        } else {
            Visibility::Gone
        };
        self.content.set_visibility(visibility);
        self.continue_button.set_visibility(visibility);
    }

    /// The text shown under the title while collapsed: a pending error wins,
    /// then the summary of a completed step, otherwise nothing. Active steps
    /// never show subtitle text; the content view is visible instead.
    pub fn display_subtitle(&self) -> &str {
        if !self.error.is_empty() {
            &self.error
        } else if self.complete {
            &self.summary
        } else {
            ""
        }
    }

    // ------------------------------------------------------------------
    // Paint selection
    // ------------------------------------------------------------------

    /// Active wins over complete; a completed step that gets re-expanded is
    /// painted as active.
    pub fn icon_background<'a>(&self, style: &'a StepperStyle) -> &'a FillPaint {
        if self.active {
            &style.icon_active_paint
        } else if self.complete {
            &style.icon_complete_paint
        } else {
            &style.icon_inactive_paint
        }
    }

    pub fn title_paint<'a>(&self, style: &'a StepperStyle) -> &'a TextPaint {
        if self.active {
            &style.title_active_paint
        } else if !self.error.is_empty() {
            &style.title_error_paint
        } else if self.complete {
            &style.title_complete_paint
        } else {
            &style.title_inactive_paint
        }
    }

    pub fn subtitle_paint<'a>(&self, style: &'a StepperStyle) -> &'a TextPaint {
        if self.active {
            &style.subtitle_active_paint
        } else if !self.error.is_empty() {
            &style.subtitle_error_paint
        } else if self.complete {
            &style.subtitle_complete_paint
        } else {
            &style.subtitle_inactive_paint
        }
    }

    // ------------------------------------------------------------------
    // Measurement
    // ------------------------------------------------------------------

    pub fn measure_title_width(&mut self, style: &StepperStyle, measurer: &dyn TextMeasurer) {
        self.title_width = if self.title.is_empty() {
            0.0
        } else {
            measurer.text_width(self.title_paint(style), &self.title)
        };
    }

    pub fn measure_subtitle_width(&mut self, style: &StepperStyle, measurer: &dyn TextMeasurer) {
        self.subtitle_width = if self.display_subtitle().is_empty() {
            0.0
        } else {
            measurer.text_width(self.subtitle_paint(style), self.display_subtitle())
        };
    }

    /// Center the title baseline inside `height_to_center_in`, then push it
    /// down by half the title's tight bounds so the glyphs center optically.
    pub fn measure_title_vertical(
        &mut self,
        height_to_center_in: f32,
        style: &StepperStyle,
        measurer: &dyn TextMeasurer,
    ) {
        let paint = self.title_paint(style);
        let bounds_height = measurer.text_bounds_height(paint, &self.title);
        self.title_baseline_relative_to_step_top = height_to_center_in / 2.0 + bounds_height / 2.0;
        self.title_bottom_relative_to_step_top =
            self.title_baseline_relative_to_step_top + measurer.font_metrics(paint).descent;
    }

    /// The subtitle sits directly under the title: its baseline hangs a full
    /// ascent below the title's bottom.
    pub fn measure_subtitle_vertical(&mut self, style: &StepperStyle, measurer: &dyn TextMeasurer) {
        let metrics = measurer.font_metrics(self.subtitle_paint(style));
        self.subtitle_baseline_relative_to_title_bottom = -metrics.ascent;
        self.subtitle_bottom_relative_to_title_bottom =
            self.subtitle_baseline_relative_to_title_bottom + metrics.descent;
    }

    /// The decorator must contain either the icon or both text lines,
    /// whichever is taller.
    pub fn measure_decorator_height(&mut self, icon_dimension: f32) {
        self.decorator_height = icon_dimension.max(
            self.title_bottom_relative_to_step_top + self.subtitle_bottom_relative_to_title_bottom,
        );
    }

    /// The last step carries no trailing margin regardless of its state.
    pub fn measure_bottom_margin(&mut self, style: &StepperStyle, is_last: bool) {
        self.bottom_margin_height = if is_last {
            0.0
        } else if self.active {
            style.active_bottom_margin
        } else {
            style.inactive_bottom_margin
        };
    }

    /// Measure the content view and continue button under the parent's
    /// constraints. `used_height` is the running vertical offset of every
    /// decorator, margin, and previously expanded step above this one.
    pub fn measure_children(
        &mut self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        horizontal_padding: f32,
        used_height: f32,
        style: &StepperStyle,
    ) {
        let params = self.content.layout_params();
        let used_width = horizontal_padding
            + style.icon_decorator_width()
            + params.margins.horizontal_total();
        let content_used_height = used_height
            + style.title_margin_bottom_to_content
            + params.margins.vertical_total();
        self.content.measure(
            width_spec.for_child(used_width, params.width),
            height_spec.for_child(content_used_height, params.height),
        );

        let button_used_height = if self.active {
            content_used_height + self.content.measured_height()
        } else {
            content_used_height
        };
        self.continue_button.measure(
            width_spec.for_child(used_width, Dimension::WrapContent),
            height_spec.for_child(button_used_height, Dimension::WrapContent),
        );

        self.children_visible_height = if self.active {
            self.expanded_children_height(style)
        } else {
            0.0
        };
    }

    fn expanded_children_height(&self, style: &StepperStyle) -> f32 {
        style.title_margin_bottom_to_content
            + self.content.layout_params().margins.vertical_total()
            + self.content.measured_height()
            + self.continue_button.measured_height()
    }

    // ------------------------------------------------------------------
    // Derived geometry
    // ------------------------------------------------------------------

    pub fn decorator_width(&self, style: &StepperStyle) -> f32 {
        style.icon_decorator_width() + self.title_width.max(self.subtitle_width)
    }

    /// Horizontal space the content view cannot use: the icon decorator plus
    /// the view's own margins.
    pub fn content_horizontal_used_space(&self, style: &StepperStyle) -> f32 {
        style.icon_decorator_width() + self.content.layout_params().margins.horizontal_total()
    }

    pub fn button_horizontal_used_space(&self, style: &StepperStyle) -> f32 {
        style.icon_decorator_width()
    }

    /// Distance from the step top to the bottom of its visible text.
    pub fn y_distance_to_text_bottom(&self) -> f32 {
        let mut distance = self.title_bottom_relative_to_step_top;
        if !self.active && !self.display_subtitle().is_empty() {
            distance += self.subtitle_bottom_relative_to_title_bottom;
        }
        distance
    }

    /// Distance from this step's top to the next step's top.
    pub fn y_distance_to_next_step(&self, style: &StepperStyle) -> f32 {
        let mut distance = self.y_distance_to_text_bottom();
        if self.active {
            distance += self.expanded_children_height(style);
        }
        distance + self.bottom_margin_height
    }

    // ------------------------------------------------------------------
    // Cached geometry and views
    // ------------------------------------------------------------------

    pub fn decorator_height(&self) -> f32 {
        self.decorator_height
    }

    pub fn bottom_margin_height(&self) -> f32 {
        self.bottom_margin_height
    }

    pub fn children_visible_height(&self) -> f32 {
        self.children_visible_height
    }

    pub fn title_width(&self) -> f32 {
        self.title_width
    }

    pub fn subtitle_width(&self) -> f32 {
        self.subtitle_width
    }

    /// Title baseline, relative to the step top.
    pub fn title_baseline(&self) -> f32 {
        self.title_baseline_relative_to_step_top
    }

    /// Title bottom (baseline plus descent), relative to the step top.
    pub fn title_bottom(&self) -> f32 {
        self.title_bottom_relative_to_step_top
    }

    /// Subtitle baseline, relative to the title bottom.
    pub fn subtitle_baseline(&self) -> f32 {
        self.subtitle_baseline_relative_to_title_bottom
    }

    /// Subtitle bottom, relative to the title bottom.
    pub fn subtitle_bottom(&self) -> f32 {
        self.subtitle_bottom_relative_to_title_bottom
    }

    pub fn content(&self) -> &dyn View {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> &mut dyn View {
        self.content.as_mut()
    }

    pub fn touch_view(&self) -> &TouchView {
        &self.touch_view
    }

    pub fn touch_view_mut(&mut self) -> &mut TouchView {
        &mut self.touch_view
    }

    pub fn continue_button(&self) -> &ContinueButton {
        &self.continue_button
    }

    pub fn continue_button_mut(&mut self) -> &mut ContinueButton {
        &mut self.continue_button
    }
}
