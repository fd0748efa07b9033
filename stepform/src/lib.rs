pub mod canvas;
pub mod layout;
pub mod step;
pub mod stepper;
pub mod text;
pub mod types;
pub mod validation;
pub mod view;

pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use layout::{Dimension, LayoutParams, MeasureSpec, Rect};
pub use step::{Step, StepAttributes, StepError};
pub use stepper::{Stepper, Widget};
pub use text::{MonospaceMeasurer, TextMeasurer};
pub use types::*;
pub use validation::{StepValidator, ValidationOutcome};
pub use view::{ContinueButton, Pane, TouchView, View};
