//! Content padding with direction-aware horizontal edges

use crate::LayoutDirection;
use lazyplane_ui_graphics::EdgeInsets;

/// Padding declared in start/end terms.
///
/// Resolve to physical edges with [`PaddingValues::resolve`]. Values built with
/// [`PaddingValues::absolute`] ignore the layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub start: f32,
    pub top: f32,
    pub end: f32,
    pub bottom: f32,
    absolute: bool,
}

impl PaddingValues {
    pub const ZERO: PaddingValues = PaddingValues {
        start: 0.0,
        top: 0.0,
        end: 0.0,
        bottom: 0.0,
        absolute: false,
    };

    pub fn new(start: f32, top: f32, end: f32, bottom: f32) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
            absolute: false,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Padding bound to physical left/right edges.
    pub fn absolute(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            start: left,
            top,
            end: right,
            bottom,
            absolute: true,
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn left(&self, layout_direction: LayoutDirection) -> f32 {
        if !self.absolute && layout_direction.is_rtl() {
            self.end
        } else {
            self.start
        }
    }

    pub fn right(&self, layout_direction: LayoutDirection) -> f32 {
        if !self.absolute && layout_direction.is_rtl() {
            self.start
        } else {
            self.end
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.start + self.end
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn resolve(&self, layout_direction: LayoutDirection) -> EdgeInsets {
        EdgeInsets::from_components(
            self.left(layout_direction),
            self.top,
            self.right(layout_direction),
            self.bottom,
        )
    }
}

impl From<EdgeInsets> for PaddingValues {
    fn from(insets: EdgeInsets) -> Self {
        Self::absolute(insets.left, insets.top, insets.right, insets.bottom)
    }
}

#[cfg(test)]
#[path = "tests/padding_tests.rs"]
mod tests;
