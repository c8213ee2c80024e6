//! Measurement pass of the lazy plane.
//!
//! Each pass refreshes the scroll bounds when the geometry, direction,
//! viewport or padding changed, culls against the current offset, and
//! materializes only the visible items.

use std::rc::Rc;

use lazyplane_ui_graphics::{EdgeInsets, Point, Rect, Size};
use lazyplane_ui_layout::{Constraints, LayoutDirection, PaddingValues};

use super::item_provider::LazyPlaneItemProvider;
use super::lazy_plane_scope::LazyLayoutKey;
use super::lazy_plane_state::LazyPlaneState;
use super::position_provider::LazyPlanePositionProviderImpl;
use super::viewport::ViewportHandler;
use crate::gestures::{LazyPlaneScrollGestures, ScrollDirection};

/// Layout configuration of a lazy plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LazyPlaneSpec {
    /// Padding around the content, inside the viewport.
    pub content_padding: PaddingValues,
    /// Axes the plane scrolls on.
    pub scroll_direction: ScrollDirection,
    pub layout_direction: LayoutDirection,
}

impl LazyPlaneSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_padding(mut self, padding: PaddingValues) -> Self {
        self.content_padding = padding;
        self
    }

    pub fn scroll_direction(mut self, direction: ScrollDirection) -> Self {
        self.scroll_direction = direction;
        self
    }

    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }
}

/// A visible item ready to be placed.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem<C> {
    pub index: usize,
    pub key: LazyLayoutKey,
    pub content_type: Option<u64>,
    pub content: C,
    /// Top-left corner in viewport coordinates.
    pub position: Point,
    pub size: Size,
}

impl<C> PlacedItem<C> {
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// Outcome of one measurement pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LazyPlaneMeasureResult<C> {
    /// Reported container width.
    pub width: f32,
    /// Reported container height.
    pub height: f32,
    /// Viewport the items were culled against.
    pub viewport: Size,
    /// Visible items by ascending global index.
    pub items: Vec<PlacedItem<C>>,
}

impl<C> LazyPlaneMeasureResult<C> {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Layout engine bound to one [`LazyPlaneState`].
pub struct LazyPlaneLayout {
    state: LazyPlaneState,
    spec: LazyPlaneSpec,
    position_provider: Option<Rc<LazyPlanePositionProviderImpl>>,
    last_padding: EdgeInsets,
}

impl LazyPlaneLayout {
    pub fn new(state: LazyPlaneState, spec: LazyPlaneSpec) -> Self {
        Self {
            state,
            spec,
            position_provider: None,
            last_padding: EdgeInsets::ZERO,
        }
    }

    pub fn state(&self) -> &LazyPlaneState {
        &self.state
    }

    pub fn spec(&self) -> LazyPlaneSpec {
        self.spec
    }

    /// Replaces the layout configuration. Takes effect on the next pass.
    pub fn set_spec(&mut self, spec: LazyPlaneSpec) {
        self.spec = spec;
    }

    /// Gesture adapter honouring this plane's scroll direction.
    pub fn scroll_gestures(&self) -> LazyPlaneScrollGestures {
        LazyPlaneScrollGestures::new(self.state.clone(), self.spec.scroll_direction)
    }

    /// Position provider built by the most recent pass that changed inputs.
    pub fn position_provider(&self) -> Option<Rc<LazyPlanePositionProviderImpl>> {
        self.position_provider.clone()
    }

    pub fn measure<C>(
        &mut self,
        provider: &LazyPlaneItemProvider<C>,
        constraints: Constraints,
    ) -> LazyPlaneMeasureResult<C> {
        let layout_direction = self.spec.layout_direction;
        let padding = self.spec.content_padding.resolve(layout_direction);
        let items_size = provider.items_size(padding);
        let viewport = Size::new(
            ViewportHandler::new(constraints.max_width, items_size.width).effective_size(),
            ViewportHandler::new(constraints.max_height, items_size.height).effective_size(),
        );

        let reusable = self.state.is_initialized()
            && self.last_padding == padding
            && self.position_provider.as_ref().is_some_and(|previous| {
                previous.matches(provider.item_index(), layout_direction, viewport)
            });
        if !reusable {
            let position_provider = Rc::new(LazyPlanePositionProviderImpl::new(
                provider.item_index().clone(),
                layout_direction,
                viewport,
            ));
            let bounds = Rect::from_ltrb(
                0.0,
                0.0,
                (items_size.width - viewport.width).max(0.0),
                (items_size.height - viewport.height).max(0.0),
            );
            self.state.update_bounds(position_provider.clone(), bounds);
            self.position_provider = Some(position_provider);
            self.last_padding = padding;
        }

        let offset = Point::new(self.state.value_x(), self.state.value_y());
        let mut visible: Vec<(usize, Rect)> = provider
            .get_items(offset, padding, viewport)
            .into_iter()
            .collect();
        visible.sort_unstable_by_key(|(index, _)| *index);

        let content = provider.content();
        let items: Vec<PlacedItem<C>> = visible
            .into_iter()
            .filter_map(|(index, rect)| {
                Some(PlacedItem {
                    index,
                    key: content.get_key(index),
                    content_type: content.get_content_type(index),
                    content: provider.materialize(index)?,
                    position: rect.top_left(),
                    size: rect.size(),
                })
            })
            .collect();

        let width = items_size.width.min(constraints.max_width);
        let height = items_size.height.min(constraints.max_height);
        log::trace!(
            "LazyPlane measure: {} of {} item(s) visible, viewport {:?}, offset {:?}, size {}x{}",
            items.len(),
            provider.item_index().len(),
            viewport,
            offset,
            width,
            height
        );

        LazyPlaneMeasureResult {
            width,
            height,
            viewport,
            items,
        }
    }
}

impl std::fmt::Debug for LazyPlaneLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyPlaneLayout")
            .field("state", &self.state)
            .field("spec", &self.spec)
            .field("has_position_provider", &self.position_provider.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/lazy_plane_measure_tests.rs"]
mod tests;
