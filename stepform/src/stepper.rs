use log::debug;

use crate::canvas::Canvas;
use crate::layout::{MeasureSpec, Rect};
use crate::step::{Step, StepAttributes, StepError};
use crate::text::TextMeasurer;
use crate::types::{StepperStyle, Visibility};
use crate::validation::{StepValidator, ValidationOutcome};
use crate::view::{ContinueButton, View};

/// A widget that measures, lays out, and draws itself under the host
/// toolkit's constrained-measurement protocol. The host calls the three
/// passes in order on its UI loop; each pass runs to completion.
pub trait Widget {
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec);
    fn measured_width(&self) -> f32;
    fn measured_height(&self) -> f32;
    fn layout(&mut self, bounds: Rect);
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// The vertical stepper container: an ordered list of steps, the shared
/// style, and the text measurement capability.
///
/// Step order is construction order; the displayed step number is the index
/// plus one.
pub struct Stepper {
    style: StepperStyle,
    measurer: Box<dyn TextMeasurer>,
    steps: Vec<Step>,
    measured_width: f32,
    measured_height: f32,
    validator: Option<Box<StepValidator>>,
    layout_requested: bool,
}

impl Stepper {
    /// Wrap each declared child in a step with its generated touch overlay
    /// and continue button. Content views and buttons start out hidden.
    pub fn new(
        style: StepperStyle,
        measurer: Box<dyn TextMeasurer>,
        children: Vec<(StepAttributes, Box<dyn View>)>,
    ) -> Result<Self, StepError> {
        let mut steps = Vec::with_capacity(children.len());
        for (index, (attributes, content)) in children.into_iter().enumerate() {
            let button = ContinueButton::new(&style.button, measurer.as_ref());
            steps.push(Step::new(index, attributes, content, button)?);
        }
        debug!("[stepper] initialized with {} steps", steps.len());
        Ok(Self {
            style,
            measurer,
            steps,
            measured_width: 0.0,
            measured_height: 0.0,
            validator: None,
            layout_requested: true,
        })
    }

    pub fn style(&self) -> &StepperStyle {
        &self.style
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut [Step] {
        &mut self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// Flip a step between collapsed and expanded and request a relayout.
    pub fn toggle_step(&mut self, index: usize) {
        if let Some(step) = self.steps.get_mut(index) {
            step.toggle_expanded();
            self.layout_requested = true;
            debug!(
                "[stepper] step {} is now {}",
                index + 1,
                if step.is_active() { "active" } else { "inactive" }
            );
        }
    }

    /// Route a tap: an active step's continue button wins over the touch
    /// overlays underneath it. Returns whether the tap was consumed.
    pub fn handle_tap(&mut self, x: f32, y: f32) -> bool {
        if let Some(index) = self.hit_test_button(x, y) {
            self.run_validator(index);
            return true;
        }
        if let Some(index) = self.hit_test_touch(x, y) {
            self.toggle_step(index);
            return true;
        }
        false
    }

    /// Index of the active step whose visible continue button contains the
    /// point, if any.
    pub fn hit_test_button(&self, x: f32, y: f32) -> Option<usize> {
        self.steps.iter().position(|step| {
            step.is_active()
                && step.continue_button().visibility() == Visibility::Visible
                && step.continue_button().frame().contains(x, y)
        })
    }

    /// Index of the step whose touch overlay contains the point, if any.
    pub fn hit_test_touch(&self, x: f32, y: f32) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.touch_view().frame().contains(x, y))
    }

    /// Install the per-step validation callback. Outcomes drive the step's
    /// complete/error state; nothing else changes automatically.
    pub fn set_validator(
        &mut self,
        validator: impl FnMut(usize, bool) -> ValidationOutcome + 'static,
    ) {
        self.validator = Some(Box::new(validator));
    }

    pub fn set_summary(&mut self, index: usize, summary: impl Into<String>) {
        if let Some(step) = self.steps.get_mut(index) {
            step.set_summary(summary);
            self.layout_requested = true;
        }
    }

    /// Whether a state change is waiting for the host to run a new
    /// measure/layout/draw pass.
    pub fn layout_requested(&self) -> bool {
        self.layout_requested
    }

    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    fn run_validator(&mut self, index: usize) {
        let Some(validator) = self.validator.as_mut() else {
            return;
        };
        let optional = self.steps[index].is_optional();
        match validator(index, optional) {
            ValidationOutcome::Complete => {
                self.steps[index].mark_complete();
                debug!("[stepper] step {} validated complete", index + 1);
            }
            ValidationOutcome::Incomplete => {}
            ValidationOutcome::Invalid(message) => {
                debug!("[stepper] step {} invalid: {message}", index + 1);
                self.steps[index].set_error(message);
            }
        }
        self.layout_requested = true;
    }

    // ------------------------------------------------------------------
    // Aggregate geometry
    // ------------------------------------------------------------------

    /// Desired width before constraint resolution: the outer padding plus the
    /// widest step, where each step claims the widest of its decorator, its
    /// content view, and its continue button.
    pub fn calculate_width(&self) -> f32 {
        self.style.padding.horizontal_total() + self.max_step_width()
    }

    /// Desired height before constraint resolution: the outer padding plus
    /// every step's decorator, visible children, and trailing margin.
    pub fn calculate_height(&self) -> f32 {
        let steps: f32 = self
            .steps
            .iter()
            .map(|step| {
                step.decorator_height() + step.children_visible_height() + step.bottom_margin_height()
            })
            .sum();
        self.style.padding.vertical_total() + steps
    }

    fn max_step_width(&self) -> f32 {
        let style = &self.style;
        self.steps.iter().fold(0.0_f32, |widest, step| {
            let decorator = step.decorator_width(style);
            let content =
                step.content().measured_width() + step.content_horizontal_used_space(style);
            let button = step.continue_button().measured_width()
                + step.button_horizontal_used_space(style);
            widest.max(decorator).max(content).max(button)
        })
    }
}

impl Widget for Stepper {
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) {
        let style = &self.style;
        let measurer = self.measurer.as_ref();

        for step in &mut self.steps {
            step.measure_title_width(style, measurer);
            step.measure_subtitle_width(style, measurer);
            step.measure_title_vertical(style.icon_dimension, style, measurer);
            step.measure_subtitle_vertical(style, measurer);
            step.measure_decorator_height(style.icon_dimension);
        }

        let last = self.steps.len().saturating_sub(1);
        for (index, step) in self.steps.iter_mut().enumerate() {
            step.measure_bottom_margin(style, index == last);
        }

        let horizontal_padding = style.padding.horizontal_total();
        let mut used_height = style.padding.vertical_total();
        for step in &mut self.steps {
            used_height += step.decorator_height();
            step.measure_children(width_spec, height_spec, horizontal_padding, used_height, style);
            used_height += step.children_visible_height() + step.bottom_margin_height();
        }

        let width = width_spec.resolve(self.calculate_width());
        let height = height_spec.resolve(self.calculate_height());
        self.measured_width = width;
        self.measured_height = height;

        let touch_height = self.style.touch_view_height;
        for step in &mut self.steps {
            step.touch_view_mut().measure(
                MeasureSpec::Exactly(width),
                MeasureSpec::Exactly(touch_height),
            );
        }

        debug!("[measure] resolved to {width}x{height}");
    }

    fn measured_width(&self) -> f32 {
        self.measured_width
    }

    fn measured_height(&self) -> f32 {
        self.measured_height
    }

    fn layout(&mut self, bounds: Rect) {
        let count = self.steps.len();
        let mut y = bounds.top() + self.style.padding.top;

        for index in 0..count {
            let style = &self.style;
            let step = &mut self.steps[index];

            // The overlay spans the full container width; its bottom edge is
            // pinned touch_view_height below the step top, clipped to the
            // container bounds.
            let touch_bottom = (y + style.touch_view_height).min(bounds.bottom());
            let touch_top = (touch_bottom - step.touch_view().measured_height()).max(bounds.top());
            step.touch_view_mut().set_frame(Rect::from_ltrb(
                bounds.left(),
                touch_top,
                bounds.right(),
                touch_bottom,
            ));

            if step.is_active() {
                let margins = step.content().layout_params().margins;
                let content_left =
                    bounds.left() + style.padding.left + style.icon_decorator_width() + margins.left;
                let content_top = y
                    + step.y_distance_to_text_bottom()
                    + style.title_margin_bottom_to_content
                    + margins.top;
                let content_right = (content_left + step.content().measured_width())
                    .min(bounds.right() - style.padding.right - margins.right);
                let content_bottom = (content_top + step.content().measured_height())
                    .min(bounds.bottom() - style.padding.bottom - margins.bottom);
                step.content_mut().set_frame(Rect::from_ltrb(
                    content_left,
                    content_top,
                    content_right,
                    content_bottom,
                ));

                let button_left = bounds.left() + style.padding.left + style.icon_decorator_width();
                let button_top = content_top + step.content().measured_height();
                let button_right = (button_left + step.continue_button().measured_width())
                    .min(bounds.right() - style.padding.right);
                let button_bottom = (button_top + step.continue_button().measured_height())
                    .min(bounds.bottom() - style.padding.bottom);
                step.continue_button_mut().set_frame(Rect::from_ltrb(
                    button_left,
                    button_top,
                    button_right,
                    button_bottom,
                ));
            }

            if index + 1 < count {
                y += step.y_distance_to_next_step(style);
            }
        }

        self.layout_requested = false;
        debug!("[layout] placed {count} steps in {bounds:?}");
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let style = &self.style;
        let measurer = self.measurer.as_ref();
        let count = self.steps.len();

        canvas.save();
        canvas.translate(style.padding.left, style.padding.top);

        for (index, step) in self.steps.iter().enumerate() {
            let radius = style.icon_dimension / 2.0;
            canvas.draw_circle(radius, radius, radius, step.icon_background(style));

            let number = (index + 1).to_string();
            let number_paint = &style.icon_text_paint;
            let number_width = measurer.text_width(number_paint, &number);
            let number_baseline =
                radius + measurer.text_bounds_height(number_paint, &number) / 2.0;
            canvas.draw_text(
                &number,
                radius - number_width / 2.0,
                number_baseline,
                number_paint,
            );

            let text_left = style.icon_decorator_width();
            canvas.draw_text(
                step.title(),
                text_left,
                step.title_baseline(),
                step.title_paint(style),
            );

            let subtitle = step.display_subtitle();
            if !step.is_active() && !subtitle.is_empty() {
                canvas.draw_text(
                    subtitle,
                    text_left,
                    step.title_bottom() + step.subtitle_baseline(),
                    step.subtitle_paint(style),
                );
            }

            if index + 1 < count {
                let distance = step.y_distance_to_next_step(style);
                let connector_x = radius;
                canvas.draw_line(
                    connector_x,
                    style.icon_dimension + style.icon_margin_vertical,
                    connector_x,
                    distance - style.icon_margin_vertical,
                    &style.connector_paint,
                );
                canvas.translate(0.0, distance);
            }
        }

        canvas.restore();
    }
}
