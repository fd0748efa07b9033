use crate::types::Edges;

/// A measurement constraint handed down by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MeasureSpec {
    /// The measured party may be any size it wants.
    #[default]
    Unspecified,
    /// The measured party may be at most this large.
    AtMost(f32),
    /// The measured party must be exactly this large.
    Exactly(f32),
}

impl MeasureSpec {
    /// Reconcile a desired dimension with this constraint.
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            Self::Unspecified => desired,
            Self::AtMost(max) => desired.min(max),
            Self::Exactly(size) => size,
        }
    }

    /// Derive the constraint for a child, given the space already used inside
    /// the parent and the dimension the child asks for.
    pub fn for_child(self, used: f32, dimension: Dimension) -> Self {
        if let Dimension::Exact(size) = dimension {
            return Self::Exactly(size);
        }
        match self {
            Self::Unspecified => Self::Unspecified,
            Self::Exactly(size) => {
                let available = (size - used).max(0.0);
                match dimension {
                    Dimension::MatchParent => Self::Exactly(available),
                    _ => Self::AtMost(available),
                }
            }
            Self::AtMost(size) => Self::AtMost((size - used).max(0.0)),
        }
    }
}

/// The size a child view asks its parent for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    Exact(f32),
    MatchParent,
    #[default]
    WrapContent,
}

/// Requested dimensions plus margins for a child view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
    pub margins: Edges,
}

impl LayoutParams {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            margins: Edges::default(),
        }
    }

    pub fn margins(mut self, margins: Edges) -> Self {
        self.margins = margins;
        self
    }
}
