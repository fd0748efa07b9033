mod common;

use common::{attrs, pane, stepper_with};

use stepform::{Color, DrawOp, MeasureSpec, Rect, RecordingCanvas, Widget};

fn drawn_ops(stepper: &mut stepform::Stepper) -> Vec<DrawOp> {
    stepper.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    stepper.layout(Rect::from_size(
        stepper.measured_width(),
        stepper.measured_height(),
    ));
    let mut canvas = RecordingCanvas::new();
    stepper.draw(&mut canvas);
    canvas.into_ops()
}

fn text_op<'a>(ops: &'a [DrawOp], needle: &str) -> Option<&'a DrawOp> {
    ops.iter().find(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
}

// ============================================================================
// Draw Pass Structure Tests
// ============================================================================

#[test]
fn test_two_inactive_steps_draw_op_counts() {
    let mut stepper = stepper_with(vec![
        (attrs("one"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
    ]);
    let ops = drawn_ops(&mut stepper);

    let circles = ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count();
    let lines = ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count();
    let texts = ops.iter().filter(|op| matches!(op, DrawOp::Text { .. })).count();

    assert_eq!(circles, 2, "one icon per step");
    assert_eq!(lines, 1, "one connector between adjacent steps");
    assert_eq!(texts, 4, "number and title per step, no subtitles");
}

#[test]
fn test_connector_drawn_per_adjacent_pair() {
    let mut stepper = stepper_with(vec![
        (attrs("one"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
        (attrs("three"), pane(200.0, 100.0)),
    ]);
    let ops = drawn_ops(&mut stepper);
    let lines = ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count();
    assert_eq!(lines, 2);
}

// ============================================================================
// Geometry Tests
// ============================================================================

#[test]
fn test_icon_circles_positioned_under_padding() {
    let mut stepper = stepper_with(vec![
        (attrs("one"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
    ]);
    let ops = drawn_ops(&mut stepper);

    let centers: Vec<(f32, f32, f32)> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Circle { cx, cy, radius, .. } => Some((*cx, *cy, *radius)),
            _ => None,
        })
        .collect();
    // Padding (12, 16), icon radius 12; second step starts 42 lower
    // (title bottom 22 + inactive margin 20).
    assert_eq!(centers, vec![(24.0, 28.0, 12.0), (24.0, 70.0, 12.0)]);
}

#[test]
fn test_connector_spans_icon_margins() {
    let mut stepper = stepper_with(vec![
        (attrs("one"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
    ]);
    let ops = drawn_ops(&mut stepper);

    let line = ops
        .iter()
        .find(|op| matches!(op, DrawOp::Line { .. }))
        .expect("one connector");
    let DrawOp::Line { x1, y1, x2, y2, .. } = line else {
        unreachable!()
    };
    // From icon bottom (16 + 24) plus vertical margin 4, down to the next
    // icon top minus the same margin.
    assert_eq!((*x1, *y1), (24.0, 44.0));
    assert_eq!((*x2, *y2), (24.0, 54.0));
}

#[test]
fn test_titles_drawn_at_cached_baselines() {
    let mut stepper = stepper_with(vec![
        (attrs("one"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
    ]);
    let ops = drawn_ops(&mut stepper);

    let DrawOp::Text { x, baseline, .. } = text_op(&ops, "one").expect("first title") else {
        unreachable!()
    };
    assert_eq!((*x, *baseline), (44.0, 33.0), "past the icon decorator");

    let DrawOp::Text { x, baseline, .. } = text_op(&ops, "two").expect("second title") else {
        unreachable!()
    };
    assert_eq!((*x, *baseline), (44.0, 75.0));
}

#[test]
fn test_step_numbers_centered_in_icon() {
    let mut stepper = stepper_with(vec![
        (attrs("one"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
    ]);
    let ops = drawn_ops(&mut stepper);

    let DrawOp::Text { x, baseline, .. } = text_op(&ops, "1").expect("first number") else {
        unreachable!()
    };
    // Icon center x 24, digit width 10 => left edge 19; baseline centered.
    assert_eq!((*x, *baseline), (19.0, 33.0));
    assert!(text_op(&ops, "2").is_some());
}

// ============================================================================
// State-Dependent Drawing Tests
// ============================================================================

#[test]
fn test_completed_step_draws_summary_subtitle() {
    let mut stepper = stepper_with(vec![
        (attrs("one").summary("done"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
    ]);
    stepper.steps_mut()[0].mark_complete();
    let ops = drawn_ops(&mut stepper);

    let DrawOp::Text { x, baseline, paint, .. } =
        text_op(&ops, "done").expect("subtitle of the completed step")
    else {
        unreachable!()
    };
    // Subtitle baseline hangs 8px below title bottom 22, inside padding 16.
    assert_eq!((*x, *baseline), (44.0, 46.0));
    assert_eq!(paint.color, Color::rgb(80, 0, 0), "complete subtitle paint");
}

#[test]
fn test_active_step_suppresses_subtitle() {
    let mut stepper = stepper_with(vec![
        (attrs("one"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
    ]);
    stepper.steps_mut()[0].set_error("oops");
    stepper.toggle_step(0);
    let ops = drawn_ops(&mut stepper);

    assert!(text_op(&ops, "oops").is_none(), "content replaces the subtitle");

    let DrawOp::Text { paint, .. } = text_op(&ops, "one").expect("title") else {
        unreachable!()
    };
    assert_eq!(paint.color, Color::rgb(10, 0, 0), "active title paint");
}

#[test]
fn test_icon_fill_follows_step_state() {
    let mut stepper = stepper_with(vec![
        (attrs("one"), pane(200.0, 100.0)),
        (attrs("two"), pane(200.0, 100.0)),
    ]);
    stepper.steps_mut()[0].mark_complete();
    let ops = drawn_ops(&mut stepper);

    let fills: Vec<Color> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Circle { paint, .. } => Some(paint.color),
            _ => None,
        })
        .collect();
    assert_eq!(
        fills,
        vec![Color::rgb(3, 3, 3), Color::rgb(2, 2, 2)],
        "complete then inactive icon fill"
    );
}
