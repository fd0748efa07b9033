mod measure;
mod rect;

pub use measure::{Dimension, LayoutParams, MeasureSpec};
pub use rect::Rect;
