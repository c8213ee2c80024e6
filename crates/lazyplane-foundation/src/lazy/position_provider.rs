//! Scroll offsets that bring an item into view.

use lazyplane_ui_graphics::{Point, Size};
use lazyplane_ui_layout::{Alignment, LayoutDirection, PaddingValues};

use super::item_provider::ItemIndex;

/// Computes the scroll offset that aligns an item inside the viewport.
pub trait LazyPlanePositionProvider {
    /// Offset for item `index` under `alignment`.
    ///
    /// A locked axis keeps `current`. An unknown index yields [`Point::ZERO`].
    fn get_offset(
        &self,
        index: usize,
        alignment: Alignment,
        padding: PaddingValues,
        current: Point,
    ) -> Point;

    /// Top-left offset of `item_size` aligned inside `space`.
    fn align(&self, item_size: Size, space: Size, alignment: Alignment) -> Point;
}

/// Position provider over one layout pass's geometry and viewport.
#[derive(Clone, Debug)]
pub struct LazyPlanePositionProviderImpl {
    items: ItemIndex,
    layout_direction: LayoutDirection,
    size: Size,
}

impl LazyPlanePositionProviderImpl {
    pub fn new(items: ItemIndex, layout_direction: LayoutDirection, size: Size) -> Self {
        Self {
            items,
            layout_direction,
            size,
        }
    }

    pub fn items(&self) -> &ItemIndex {
        &self.items
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Viewport size the offsets are computed for.
    pub fn size(&self) -> Size {
        self.size
    }

    /// True when built from the same geometry, direction and viewport.
    pub fn matches(
        &self,
        items: &ItemIndex,
        layout_direction: LayoutDirection,
        size: Size,
    ) -> bool {
        self.layout_direction == layout_direction && self.size == size && self.items.same_as(items)
    }
}

impl LazyPlanePositionProvider for LazyPlanePositionProviderImpl {
    fn get_offset(
        &self,
        index: usize,
        alignment: Alignment,
        padding: PaddingValues,
        current: Point,
    ) -> Point {
        let Some(geometry) = self.items.get(index) else {
            log::warn!(
                "LazyPlane: item {} is out of range for {} item(s), using zero offset",
                index,
                self.items.len()
            );
            return Point::ZERO;
        };
        let insets = padding.resolve(self.layout_direction);
        let space = Size::new(
            (self.size.width - insets.horizontal_sum()).max(0.0),
            (self.size.height - insets.vertical_sum()).max(0.0),
        );
        // Relative dimensions have no parent here and count as 0.
        let item_size = geometry.resolve_size(None);
        let offset = self.align(item_size, space, alignment);
        Point::new(
            if geometry.lock_horizontal {
                current.x
            } else {
                geometry.x - offset.x - insets.left
            },
            if geometry.lock_vertical {
                current.y
            } else {
                geometry.y - offset.y - insets.top
            },
        )
    }

    fn align(&self, item_size: Size, space: Size, alignment: Alignment) -> Point {
        alignment.align(item_size, space, self.layout_direction)
    }
}
