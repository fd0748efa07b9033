#![allow(dead_code)]

use stepform::{
    ButtonStyle, Color, Edges, FillPaint, MonospaceMeasurer, Pane, StepAttributes, Stepper,
    StepperStyle, StepperStyleBuilder, StrokePaint, TextPaint, View,
};

// Fixture measurer: one cell advances by the full font size, tight bounds are
// one font size tall, descent is half the ascent. Keeps every expected value
// a round number.
pub fn test_measurer() -> MonospaceMeasurer {
    MonospaceMeasurer {
        advance_ratio: 1.0,
        cap_ratio: 1.0,
        ascent_ratio: 1.0,
        descent_ratio: 0.5,
    }
}

pub fn title_paint(r: u8) -> TextPaint {
    TextPaint::new(Color::rgb(r, 0, 0), 10.0)
}

pub fn subtitle_paint(r: u8) -> TextPaint {
    TextPaint::new(Color::rgb(r, 0, 0), 8.0)
}

pub fn test_button_style() -> ButtonStyle {
    ButtonStyle {
        label: "Continue".to_string(),
        text_paint: TextPaint::new(Color::rgb(255, 255, 255), 10.0),
        background: Color::rgb(33, 150, 243),
        padding: Edges::symmetric(8.0, 16.0),
        min_height: 36.0,
    }
}

/// Fully populated builder; tests override individual fields before `build`.
///
/// Derived fixture geometry (with [`test_measurer`]):
/// title baseline 17, title bottom 22, subtitle baseline 8, subtitle
/// bottom 12, decorator height 34, icon decorator width 32.
pub fn style_builder() -> StepperStyleBuilder {
    StepperStyle::builder()
        .title_active_paint(title_paint(10))
        .title_inactive_paint(title_paint(20))
        .title_error_paint(title_paint(30))
        .title_complete_paint(title_paint(40))
        .subtitle_active_paint(subtitle_paint(50))
        .subtitle_inactive_paint(subtitle_paint(60))
        .subtitle_error_paint(subtitle_paint(70))
        .subtitle_complete_paint(subtitle_paint(80))
        .icon_active_paint(FillPaint::new(Color::rgb(1, 1, 1)))
        .icon_inactive_paint(FillPaint::new(Color::rgb(2, 2, 2)))
        .icon_complete_paint(FillPaint::new(Color::rgb(3, 3, 3)))
        .icon_text_paint(TextPaint::new(Color::rgb(255, 255, 255), 10.0))
        .icon_dimension(24.0)
        .icon_margin_right(8.0)
        .icon_margin_vertical(4.0)
        .button(test_button_style())
        .connector_paint(StrokePaint::new(Color::rgb(200, 200, 200), 2.0))
        .title_margin_bottom_to_content(12.0)
        .active_bottom_margin(40.0)
        .inactive_bottom_margin(20.0)
        .touch_view_height(48.0)
        .padding(Edges::symmetric(16.0, 12.0))
}

pub fn test_style() -> StepperStyle {
    style_builder().build().expect("fixture style is complete")
}

pub fn pane(width: f32, height: f32) -> Box<dyn View> {
    Box::new(Pane::new(width, height))
}

pub fn attrs(title: &str) -> StepAttributes {
    StepAttributes::new(title)
}

pub fn stepper_with(children: Vec<(StepAttributes, Box<dyn View>)>) -> Stepper {
    Stepper::new(test_style(), Box::new(test_measurer()), children)
        .expect("fixture stepper configuration is valid")
}
