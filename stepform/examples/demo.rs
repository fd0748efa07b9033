use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use stepform::{
    ButtonStyle, Color, Edges, FillPaint, MeasureSpec, MonospaceMeasurer, Pane, Rect,
    RecordingCanvas, StepAttributes, Stepper, StepperStyle, StrokePaint, TextPaint, View, Widget,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let style = checkout_style().expect("demo style is complete");
    let children: Vec<(StepAttributes, Box<dyn View>)> = vec![
        (
            StepAttributes::new("Shipping address").summary("Where the order goes"),
            Box::new(Pane::new(320.0, 180.0)),
        ),
        (
            StepAttributes::new("Payment").summary("Card ending in 4242"),
            Box::new(Pane::new(320.0, 140.0)),
        ),
        (
            StepAttributes::new("Review order").optional(),
            Box::new(Pane::new(320.0, 220.0)),
        ),
    ];

    let mut stepper = Stepper::new(style, Box::new(MonospaceMeasurer::default()), children)
        .expect("demo steps are configured correctly");
    stepper.toggle_step(0);

    stepper.measure(MeasureSpec::AtMost(480.0), MeasureSpec::Unspecified);
    let bounds = Rect::from_size(stepper.measured_width(), stepper.measured_height());
    stepper.layout(bounds);

    let mut canvas = RecordingCanvas::new();
    stepper.draw(&mut canvas);

    println!(
        "stepper measured {}x{}, {} draw ops:",
        stepper.measured_width(),
        stepper.measured_height(),
        canvas.ops().len()
    );
    for op in canvas.ops() {
        println!("  {op:?}");
    }

    Ok(())
}

fn checkout_style() -> Result<StepperStyle, stepform::StyleError> {
    let title = |color| TextPaint::new(color, 16.0);
    let subtitle = |color| TextPaint::new(color, 13.0);
    let accent = Color::oklch(0.55, 0.17, 260.0);
    let muted = Color::oklch(0.55, 0.02, 260.0);
    let ink = Color::oklch(0.25, 0.02, 260.0);
    let danger = Color::oklch(0.55, 0.2, 25.0);

    StepperStyle::builder()
        .title_active_paint(title(ink).bold())
        .title_inactive_paint(title(muted))
        .title_error_paint(title(danger))
        .title_complete_paint(title(ink))
        .subtitle_active_paint(subtitle(muted))
        .subtitle_inactive_paint(subtitle(muted))
        .subtitle_error_paint(subtitle(danger))
        .subtitle_complete_paint(subtitle(muted))
        .icon_active_paint(FillPaint::new(accent))
        .icon_inactive_paint(FillPaint::new(muted))
        .icon_complete_paint(FillPaint::new(accent))
        .icon_text_paint(TextPaint::new(Color::rgb(255, 255, 255), 12.0))
        .icon_dimension(24.0)
        .icon_margin_right(12.0)
        .icon_margin_vertical(8.0)
        .button(ButtonStyle {
            label: "Continue".to_string(),
            text_paint: TextPaint::new(Color::rgb(255, 255, 255), 14.0),
            background: accent,
            padding: Edges::symmetric(10.0, 16.0),
            min_height: 40.0,
        })
        .connector_paint(StrokePaint::new(muted, 1.0))
        .title_margin_bottom_to_content(16.0)
        .active_bottom_margin(48.0)
        .inactive_bottom_margin(24.0)
        .touch_view_height(48.0)
        .padding(Edges::symmetric(24.0, 16.0))
        .build()
}
