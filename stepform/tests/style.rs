mod common;

use common::{style_builder, subtitle_paint, test_button_style, title_paint};

use stepform::{Color, Edges, FillPaint, StepperStyle, StrokePaint, StyleError, TextPaint};

// ============================================================================
// Builder Completeness Tests
// ============================================================================

#[test]
fn test_fully_populated_builder_builds() {
    let style = style_builder().build().expect("complete style");
    assert_eq!(style.icon_dimension, 24.0);
    assert_eq!(style.padding, Edges::symmetric(16.0, 12.0));
}

#[test]
fn test_empty_builder_names_first_field() {
    let error = StepperStyle::builder().build().unwrap_err();
    assert_eq!(error, StyleError::MissingField("title_active_paint"));
}

#[test]
fn test_validation_walks_fields_in_order() {
    let error = StepperStyle::builder()
        .title_active_paint(title_paint(10))
        .build()
        .unwrap_err();
    assert_eq!(error, StyleError::MissingField("title_inactive_paint"));
}

#[test]
fn test_single_missing_field_is_named() {
    // Everything set except the connector paint.
    let error = StepperStyle::builder()
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
        .title_margin_bottom_to_content(12.0)
        .active_bottom_margin(40.0)
        .inactive_bottom_margin(20.0)
        .touch_view_height(48.0)
        .padding(Edges::symmetric(16.0, 12.0))
        .build()
        .unwrap_err();
    assert_eq!(error, StyleError::MissingField("connector_paint"));
}

#[test]
fn test_error_message_names_the_field() {
    let error = StyleError::MissingField("padding");
    assert_eq!(
        error.to_string(),
        "stepper style is missing required field: padding"
    );
}

// ============================================================================
// Derived Value Tests
// ============================================================================

#[test]
fn test_icon_decorator_width_includes_trailing_margin() {
    let style = style_builder()
        .icon_dimension(40.0)
        .icon_margin_right(10.0)
        .build()
        .unwrap();
    assert_eq!(style.icon_decorator_width(), 50.0);
}

#[test]
fn test_connector_stroke_preserved() {
    let style = style_builder()
        .connector_paint(StrokePaint::new(Color::rgb(9, 9, 9), 3.0))
        .build()
        .unwrap();
    assert_eq!(style.connector_paint.width, 3.0);
    assert_eq!(style.connector_paint.color, Color::rgb(9, 9, 9));
}
