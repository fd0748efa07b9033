mod color;
mod edges;
mod enums;
mod paint;
mod style;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{TextStyle, Visibility};
pub use paint::{FillPaint, FontMetrics, StrokePaint, TextPaint};
pub use style::{ButtonStyle, StepperStyle, StepperStyleBuilder, StyleError};
