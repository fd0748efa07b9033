use thiserror::Error;

use super::{Color, Edges, FillPaint, StrokePaint, TextPaint};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("stepper style is missing required field: {0}")]
    MissingField(&'static str),
}

/// Appearance of the generated continue button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub label: String,
    pub text_paint: TextPaint,
    pub background: Color,
    pub padding: Edges,
    pub min_height: f32,
}

/// Configuration shared by every step of a stepper.
///
/// Resolved once from the host theme and immutable afterwards. Construct
/// through [`StepperStyleBuilder`], which refuses to hand out a partially
/// populated style.
#[derive(Debug, Clone, PartialEq)]
pub struct StepperStyle {
    pub title_active_paint: TextPaint,
    pub title_inactive_paint: TextPaint,
    pub title_error_paint: TextPaint,
    pub title_complete_paint: TextPaint,
    pub subtitle_active_paint: TextPaint,
    pub subtitle_inactive_paint: TextPaint,
    pub subtitle_error_paint: TextPaint,
    pub subtitle_complete_paint: TextPaint,
    pub icon_active_paint: FillPaint,
    pub icon_inactive_paint: FillPaint,
    pub icon_complete_paint: FillPaint,
    pub icon_text_paint: TextPaint,
    pub icon_dimension: f32,
    pub icon_margin_right: f32,
    pub icon_margin_vertical: f32,
    pub button: ButtonStyle,
    pub connector_paint: StrokePaint,
    pub title_margin_bottom_to_content: f32,
    pub active_bottom_margin: f32,
    pub inactive_bottom_margin: f32,
    pub touch_view_height: f32,
    pub padding: Edges,
}

impl StepperStyle {
    pub fn builder() -> StepperStyleBuilder {
        StepperStyleBuilder::default()
    }

    /// Horizontal space claimed by the icon and its trailing margin.
    pub fn icon_decorator_width(&self) -> f32 {
        self.icon_dimension + self.icon_margin_right
    }
}

/// Builder for [`StepperStyle`]. `build` walks every field in declaration
/// order and fails on the first one left unset.
#[derive(Debug, Clone, Default)]
pub struct StepperStyleBuilder {
    title_active_paint: Option<TextPaint>,
    title_inactive_paint: Option<TextPaint>,
    title_error_paint: Option<TextPaint>,
    title_complete_paint: Option<TextPaint>,
    subtitle_active_paint: Option<TextPaint>,
    subtitle_inactive_paint: Option<TextPaint>,
    subtitle_error_paint: Option<TextPaint>,
    subtitle_complete_paint: Option<TextPaint>,
    icon_active_paint: Option<FillPaint>,
    icon_inactive_paint: Option<FillPaint>,
    icon_complete_paint: Option<FillPaint>,
    icon_text_paint: Option<TextPaint>,
    icon_dimension: Option<f32>,
    icon_margin_right: Option<f32>,
    icon_margin_vertical: Option<f32>,
    button: Option<ButtonStyle>,
    connector_paint: Option<StrokePaint>,
    title_margin_bottom_to_content: Option<f32>,
    active_bottom_margin: Option<f32>,
    inactive_bottom_margin: Option<f32>,
    touch_view_height: Option<f32>,
    padding: Option<Edges>,
}

impl StepperStyleBuilder {
    pub fn title_active_paint(mut self, paint: TextPaint) -> Self {
        self.title_active_paint = Some(paint);
        self
    }

    pub fn title_inactive_paint(mut self, paint: TextPaint) -> Self {
        self.title_inactive_paint = Some(paint);
        self
    }

    pub fn title_error_paint(mut self, paint: TextPaint) -> Self {
        self.title_error_paint = Some(paint);
        self
    }

    pub fn title_complete_paint(mut self, paint: TextPaint) -> Self {
        self.title_complete_paint = Some(paint);
        self
    }

    pub fn subtitle_active_paint(mut self, paint: TextPaint) -> Self {
        self.subtitle_active_paint = Some(paint);
        self
    }

    pub fn subtitle_inactive_paint(mut self, paint: TextPaint) -> Self {
        self.subtitle_inactive_paint = Some(paint);
        self
    }

    pub fn subtitle_error_paint(mut self, paint: TextPaint) -> Self {
        self.subtitle_error_paint = Some(paint);
        self
    }

    pub fn subtitle_complete_paint(mut self, paint: TextPaint) -> Self {
        self.subtitle_complete_paint = Some(paint);
        self
    }

    pub fn icon_active_paint(mut self, paint: FillPaint) -> Self {
        self.icon_active_paint = Some(paint);
        self
    }

    pub fn icon_inactive_paint(mut self, paint: FillPaint) -> Self {
        self.icon_inactive_paint = Some(paint);
        self
    }

    pub fn icon_complete_paint(mut self, paint: FillPaint) -> Self {
        self.icon_complete_paint = Some(paint);
        self
    }

    pub fn icon_text_paint(mut self, paint: TextPaint) -> Self {
        self.icon_text_paint = Some(paint);
        self
    }

    pub fn icon_dimension(mut self, dimension: f32) -> Self {
        self.icon_dimension = Some(dimension);
        self
    }

    pub fn icon_margin_right(mut self, margin: f32) -> Self {
        self.icon_margin_right = Some(margin);
        self
    }

    pub fn icon_margin_vertical(mut self, margin: f32) -> Self {
        self.icon_margin_vertical = Some(margin);
        self
    }

    pub fn button(mut self, button: ButtonStyle) -> Self {
        self.button = Some(button);
        self
    }

    pub fn connector_paint(mut self, paint: StrokePaint) -> Self {
        self.connector_paint = Some(paint);
        self
    }

    pub fn title_margin_bottom_to_content(mut self, margin: f32) -> Self {
        self.title_margin_bottom_to_content = Some(margin);
        self
    }

    pub fn active_bottom_margin(mut self, margin: f32) -> Self {
        self.active_bottom_margin = Some(margin);
        self
    }

    pub fn inactive_bottom_margin(mut self, margin: f32) -> Self {
        self.inactive_bottom_margin = Some(margin);
        self
    }

    pub fn touch_view_height(mut self, height: f32) -> Self {
        self.touch_view_height = Some(height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn build(self) -> Result<StepperStyle, StyleError> {
        Ok(StepperStyle {
            title_active_paint: self
                .title_active_paint
                .ok_or(StyleError::MissingField("title_active_paint"))?,
            title_inactive_paint: self
                .title_inactive_paint
                .ok_or(StyleError::MissingField("title_inactive_paint"))?,
            title_error_paint: self
                .title_error_paint
                .ok_or(StyleError::MissingField("title_error_paint"))?,
            title_complete_paint: self
                .title_complete_paint
                .ok_or(StyleError::MissingField("title_complete_paint"))?,
            subtitle_active_paint: self
                .subtitle_active_paint
                .ok_or(StyleError::MissingField("subtitle_active_paint"))?,
            subtitle_inactive_paint: self
                .subtitle_inactive_paint
                .ok_or(StyleError::MissingField("subtitle_inactive_paint"))?,
            subtitle_error_paint: self
                .subtitle_error_paint
                .ok_or(StyleError::MissingField("subtitle_error_paint"))?,
            subtitle_complete_paint: self
                .subtitle_complete_paint
                .ok_or(StyleError::MissingField("subtitle_complete_paint"))?,
            icon_active_paint: self
                .icon_active_paint
                .ok_or(StyleError::MissingField("icon_active_paint"))?,
            icon_inactive_paint: self
                .icon_inactive_paint
                .ok_or(StyleError::MissingField("icon_inactive_paint"))?,
            icon_complete_paint: self
                .icon_complete_paint
                .ok_or(StyleError::MissingField("icon_complete_paint"))?,
            icon_text_paint: self
                .icon_text_paint
                .ok_or(StyleError::MissingField("icon_text_paint"))?,
            icon_dimension: self
                .icon_dimension
                .ok_or(StyleError::MissingField("icon_dimension"))?,
            icon_margin_right: self
                .icon_margin_right
                .ok_or(StyleError::MissingField("icon_margin_right"))?,
            icon_margin_vertical: self
                .icon_margin_vertical
                .ok_or(StyleError::MissingField("icon_margin_vertical"))?,
            button: self.button.ok_or(StyleError::MissingField("button"))?,
            connector_paint: self
                .connector_paint
                .ok_or(StyleError::MissingField("connector_paint"))?,
            title_margin_bottom_to_content: self
                .title_margin_bottom_to_content
                .ok_or(StyleError::MissingField("title_margin_bottom_to_content"))?,
            active_bottom_margin: self
                .active_bottom_margin
                .ok_or(StyleError::MissingField("active_bottom_margin"))?,
            inactive_bottom_margin: self
                .inactive_bottom_margin
                .ok_or(StyleError::MissingField("inactive_bottom_margin"))?,
            touch_view_height: self
                .touch_view_height
                .ok_or(StyleError::MissingField("touch_view_height"))?,
            padding: self.padding.ok_or(StyleError::MissingField("padding"))?,
        })
    }
}
