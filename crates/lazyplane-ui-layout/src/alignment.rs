//! Alignment utilities for positioning content

use crate::LayoutDirection;
use lazyplane_ui_graphics::{Point, Size};

/// Alignment across both axes, expressed as a bias in `[-1, 1]` per axis.
///
/// `-1` places content at the start/top edge, `0` centers it, `1` places it
/// at the end/bottom edge. The horizontal bias is measured from the start
/// edge, so it is mirrored when the layout direction is right-to-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alignment {
    /// Horizontal bias.
    pub horizontal_bias: f32,
    /// Vertical bias.
    pub vertical_bias: f32,
}

impl Alignment {
    /// Creates a new [`Alignment`] from explicit biases.
    pub const fn new(horizontal_bias: f32, vertical_bias: f32) -> Self {
        Self {
            horizontal_bias,
            vertical_bias,
        }
    }

    pub const TOP_START: Self = Self::new(-1.0, -1.0);
    pub const TOP_CENTER: Self = Self::new(0.0, -1.0);
    pub const TOP_END: Self = Self::new(1.0, -1.0);
    pub const CENTER_START: Self = Self::new(-1.0, 0.0);
    pub const CENTER: Self = Self::new(0.0, 0.0);
    pub const CENTER_END: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_START: Self = Self::new(-1.0, 1.0);
    pub const BOTTOM_CENTER: Self = Self::new(0.0, 1.0);
    pub const BOTTOM_END: Self = Self::new(1.0, 1.0);

    /// Computes the top-left offset of `size` placed inside `space`.
    ///
    /// The result is not clamped: content larger than the space gets a
    /// negative offset on that axis.
    pub fn align(&self, size: Size, space: Size, layout_direction: LayoutDirection) -> Point {
        let center_x = (space.width - size.width) / 2.0;
        let center_y = (space.height - size.height) / 2.0;
        let resolved_horizontal = if layout_direction.is_rtl() {
            -self.horizontal_bias
        } else {
            self.horizontal_bias
        };
        Point::new(
            center_x * (1.0 + resolved_horizontal),
            center_y * (1.0 + self.vertical_bias),
        )
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}
