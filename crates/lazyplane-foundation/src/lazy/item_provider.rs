//! Item provider for the lazy plane.
//!
//! [`LazyLayoutItemProvider`] is the read-only view the layout needs of the
//! content. [`LazyPlaneItemProvider`] implements it over an interval registry
//! and keeps the geometry map derived from it.

use std::rc::Rc;

use lazyplane_ui_graphics::{EdgeInsets, Point, Rect, Size};

use super::item_config::ItemGeometry;
use super::lazy_plane_scope::{LazyLayoutKey, LazyPlaneIntervalContent};
use super::viewport_culler;
use crate::error::{LazyPlaneError, Result};

/// Provides the identity information about items which layouts need.
///
/// Implementations should be immutable. Changes to the content should
/// create a new provider.
pub trait LazyLayoutItemProvider {
    /// Total number of items, visible or not.
    fn item_count(&self) -> usize;

    /// Key for the item at `index`. Defaults to the index key.
    fn get_key(&self, index: usize) -> LazyLayoutKey {
        LazyLayoutKey::Index(index)
    }

    /// Content type tag, `None` when the item declares none.
    fn get_content_type(&self, index: usize) -> Option<u64> {
        let _ = index;
        None
    }

    /// Index of the item with `key`, if present.
    fn get_index(&self, key: LazyLayoutKey) -> Option<usize> {
        (0..self.item_count()).find(|&i| self.get_key(i) == key)
    }
}

/// Read-only global index to geometry map.
///
/// Cloning shares the underlying storage, so a rebuilt map is always a new
/// allocation and readers never see a partial update.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemIndex {
    geometry: Rc<[ItemGeometry]>,
}

impl ItemIndex {
    pub fn len(&self) -> usize {
        self.geometry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemGeometry> {
        self.geometry.get(index)
    }

    /// Entries in global index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ItemGeometry)> + '_ {
        self.geometry.iter().enumerate()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.geometry, &other.geometry)
    }

    /// Same allocation, or equal entries.
    pub fn same_as(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.geometry[..] == other.geometry[..]
    }

    /// Smallest origin-anchored size covering every far edge.
    ///
    /// Relative dimensions contribute 0 here because there is no parent yet.
    pub fn content_size(&self) -> Size {
        self.geometry.iter().fold(Size::ZERO, |size, geometry| {
            let edges = geometry.far_edges();
            Size::new(size.width.max(edges.x), size.height.max(edges.y))
        })
    }
}

impl From<Vec<ItemGeometry>> for ItemIndex {
    fn from(geometry: Vec<ItemGeometry>) -> Self {
        Self {
            geometry: Rc::from(geometry),
        }
    }
}

impl Default for ItemIndex {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

/// Registry plus the geometry derived from it, built once per content change.
pub struct LazyPlaneItemProvider<C> {
    content: LazyPlaneIntervalContent<C>,
    item_index: ItemIndex,
    content_size: Size,
}

impl<C> LazyPlaneItemProvider<C> {
    /// Evaluates every geometry factory of `content` once.
    pub fn new(content: LazyPlaneIntervalContent<C>) -> Self {
        let item_index = content.all_geometry();
        let content_size = item_index.content_size();
        Self {
            content,
            item_index,
            content_size,
        }
    }

    pub fn content(&self) -> &LazyPlaneIntervalContent<C> {
        &self.content
    }

    pub fn item_index(&self) -> &ItemIndex {
        &self.item_index
    }

    /// Content extent without padding.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Content extent including `padding` on both axes.
    pub fn items_size(&self, padding: EdgeInsets) -> Size {
        Size::new(
            self.content_size.width + padding.horizontal_sum(),
            self.content_size.height + padding.vertical_sum(),
        )
    }

    pub fn try_geometry(&self, index: usize) -> Result<ItemGeometry> {
        self.item_index
            .get(index)
            .copied()
            .ok_or(LazyPlaneError::IndexOutOfRange {
                index,
                item_count: self.item_index.len(),
            })
    }

    pub fn geometry(&self, index: usize) -> Option<ItemGeometry> {
        self.item_index.get(index).copied()
    }

    /// Invokes the content factory for `index`.
    pub fn materialize(&self, index: usize) -> Option<C> {
        self.content.invoke_content(index)
    }

    pub fn key(&self, index: usize) -> LazyLayoutKey {
        self.content.get_key(index)
    }

    /// Currently visible items and their screen rects.
    pub fn get_items(
        &self,
        offset: Point,
        padding: EdgeInsets,
        viewport: Size,
    ) -> rustc_hash::FxHashMap<usize, Rect> {
        viewport_culler::visible_items(&self.item_index, offset, padding, viewport)
    }
}

impl<C> LazyLayoutItemProvider for LazyPlaneItemProvider<C> {
    fn item_count(&self) -> usize {
        self.content.item_count()
    }

    fn get_key(&self, index: usize) -> LazyLayoutKey {
        self.content.get_key(index)
    }

    fn get_content_type(&self, index: usize) -> Option<u64> {
        self.content.get_content_type(index)
    }

    fn get_index(&self, key: LazyLayoutKey) -> Option<usize> {
        self.content.get_index_by_key(key)
    }
}

impl<C> std::fmt::Debug for LazyPlaneItemProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyPlaneItemProvider")
            .field("item_count", &self.item_index.len())
            .field("content_size", &self.content_size)
            .finish()
    }
}
