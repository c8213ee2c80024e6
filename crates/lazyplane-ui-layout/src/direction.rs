//! Reading direction of a layout

/// Horizontal reading direction used to resolve start/end edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Left to right: start is the left edge.
    #[default]
    Ltr,
    /// Right to left: start is the right edge.
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}
