//! Viewport culling over the geometry map.
//!
//! These functions are pure: they read an [`ItemIndex`] and never mutate it,
//! so repeated calls with the same inputs return the same result.

use lazyplane_ui_graphics::{EdgeInsets, Point, Rect, Size};
use rustc_hash::FxHashMap;

use super::item_config::ItemGeometry;
use super::item_provider::ItemIndex;

/// Viewport rectangle in content coordinates for a scroll `offset`.
pub fn viewport_rect(offset: Point, padding: EdgeInsets, viewport: Size) -> Rect {
    Rect::new(
        offset.x - padding.left,
        offset.y - padding.top,
        viewport.width,
        viewport.height,
    )
}

/// Returns true if `geometry` intersects `viewport`.
///
/// Relative dimensions resolve against the viewport extent. An item locked
/// on an axis is only tested on the other axis, and an item locked on both
/// axes always overlaps.
pub fn overlaps(geometry: &ItemGeometry, viewport: &Rect) -> bool {
    if geometry.is_pinned() {
        return true;
    }
    let width = geometry.width.resolve_in(viewport.width);
    let height = geometry.height.resolve_in(viewport.height);
    let horizontal = geometry.x + width > viewport.left() && geometry.x < viewport.right();
    let vertical = geometry.y + height > viewport.top() && geometry.y < viewport.bottom();
    match (geometry.lock_horizontal, geometry.lock_vertical) {
        (true, false) => vertical,
        (false, true) => horizontal,
        _ => horizontal && vertical,
    }
}

/// Screen rect of `geometry` for the given scroll `offset`.
///
/// A locked axis ignores the offset. Relative dimensions resolve against the
/// viewport minus padding, floored at 0.
pub fn placement_rect(
    geometry: &ItemGeometry,
    offset: Point,
    padding: EdgeInsets,
    viewport: Size,
) -> Rect {
    let translate_x = if geometry.lock_horizontal {
        0.0
    } else {
        offset.x
    };
    let translate_y = if geometry.lock_vertical {
        0.0
    } else {
        offset.y
    };
    let space = Size::new(
        (viewport.width - padding.horizontal_sum()).max(0.0),
        (viewport.height - padding.vertical_sum()).max(0.0),
    );
    Rect::from_origin_size(
        Point::new(
            geometry.x - translate_x + padding.left,
            geometry.y - translate_y + padding.top,
        ),
        geometry.resolve_size(Some(space)),
    )
}

/// Visible items keyed by global index, mapped to their screen rects.
///
/// Iteration order of the result is unspecified.
pub fn visible_items(
    items: &ItemIndex,
    offset: Point,
    padding: EdgeInsets,
    viewport: Size,
) -> FxHashMap<usize, Rect> {
    let window = viewport_rect(offset, padding, viewport);
    items
        .iter()
        .filter(|(_, geometry)| overlaps(geometry, &window))
        .map(|(index, geometry)| {
            (index, placement_rect(geometry, offset, padding, viewport))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/viewport_culler_tests.rs"]
mod tests;
