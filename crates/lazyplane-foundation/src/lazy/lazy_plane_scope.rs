//! DSL scope for declaring plane content.
//!
//! Content is registered as contiguous intervals. Each interval owns one
//! factory per concern (geometry, key, content type, content) keyed by the
//! local index, so nothing is evaluated per item until it is asked for.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use rustc_hash::FxHashMap;

use super::item_config::ItemGeometry;
use super::item_provider::ItemIndex;
use crate::error::{LazyPlaneError, Result};

static KEY_OVERFLOW_LOGGED: AtomicBool = AtomicBool::new(false);

/// Identity of a plane item.
///
/// Caller keys and default index keys live in separate variants, so a
/// default key can never collide with a caller key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LazyLayoutKey {
    User(u64),
    Index(usize),
}

impl LazyLayoutKey {
    const INDEX_TAG: u64 = 1 << 62;
    const VALUE_MASK: u64 = (1u64 << 62) - 1;

    /// Packs the key into a `u64`, tagging the variant in the top two bits.
    ///
    /// Values wider than 62 bits are hashed down, which may collide.
    pub fn to_slot_id(self) -> u64 {
        match self {
            LazyLayoutKey::User(value) => Self::fit_value_bits(value),
            LazyLayoutKey::Index(index) => Self::INDEX_TAG | Self::fit_value_bits(index as u64),
        }
    }

    fn fit_value_bits(value: u64) -> u64 {
        if value <= Self::VALUE_MASK {
            return value;
        }
        if !KEY_OVERFLOW_LOGGED.swap(true, Ordering::Relaxed) {
            log::warn!("LazyPlane key {value:#018x} exceeds 62 bits, hashing");
        }
        let mut mixed = value;
        mixed ^= mixed >> 33;
        mixed = mixed.wrapping_mul(0xff51_afd7_ed55_8ccd);
        mixed ^= mixed >> 33;
        mixed = mixed.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        mixed ^= mixed >> 33;
        mixed & Self::VALUE_MASK
    }

    pub fn is_user_key(self) -> bool {
        matches!(self, LazyLayoutKey::User(_))
    }
}

/// Receiver scope for plane content.
///
/// `C` is whatever the host materializes per item (a widget, a draw command,
/// a test marker).
pub trait LazyPlaneScope<C> {
    /// Adds one item.
    fn item<F>(
        &mut self,
        geometry: ItemGeometry,
        key: Option<u64>,
        content_type: Option<u64>,
        content: F,
    ) where
        F: Fn() -> C + 'static;

    /// Adds `count` items. Every factory receives the local index.
    fn items<G, K, T, F>(
        &mut self,
        count: usize,
        geometry: G,
        key: Option<K>,
        content_type: Option<T>,
        content: F,
    ) where
        G: Fn(usize) -> ItemGeometry + 'static,
        K: Fn(usize) -> u64 + 'static,
        T: Fn(usize) -> u64 + 'static,
        F: Fn(usize) -> C + 'static;
}

/// Factory evaluated with an index local to its interval.
pub type IndexedFn<T> = Rc<dyn Fn(usize) -> T>;

fn constant(value: u64) -> IndexedFn<u64> {
    Rc::new(move |_| value)
}

/// One registered range of items.
pub struct LazyPlaneInterval<C> {
    pub start_index: usize,
    pub count: usize,
    pub geometry: IndexedFn<ItemGeometry>,
    pub key: Option<IndexedFn<u64>>,
    pub content_type: Option<IndexedFn<u64>>,
    pub content: IndexedFn<C>,
}

impl<C> LazyPlaneInterval<C> {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.start_index + self.count
    }
}

impl<C> std::fmt::Debug for LazyPlaneInterval<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyPlaneInterval")
            .field("start_index", &self.start_index)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

/// A global index resolved to its interval.
#[derive(Debug)]
pub struct ResolvedItem<'a, C> {
    /// Position of the interval in registration order.
    pub interval_index: usize,
    pub local_index: usize,
    pub interval: &'a LazyPlaneInterval<C>,
}

/// Interval registry built by running a [`LazyPlaneScope`] block.
pub struct LazyPlaneIntervalContent<C> {
    intervals: Vec<LazyPlaneInterval<C>>,
    total_count: usize,
    key_cache: RefCell<Option<FxHashMap<u64, usize>>>,
}

impl<C> LazyPlaneIntervalContent<C> {
    /// Below this many items key lookups scan linearly instead of caching.
    const CACHE_THRESHOLD: usize = 64;

    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
            total_count: 0,
            key_cache: RefCell::new(None),
        }
    }

    /// Runs `block` against a fresh registry.
    pub fn build(block: impl FnOnce(&mut Self)) -> Self {
        let mut content = Self::new();
        block(&mut content);
        content
    }

    pub fn item_count(&self) -> usize {
        self.total_count
    }

    pub fn intervals(&self) -> &[LazyPlaneInterval<C>] {
        &self.intervals
    }

    /// Maps a global index to its interval and local index.
    pub fn resolve(&self, index: usize) -> Result<ResolvedItem<'_, C>> {
        let out_of_range = LazyPlaneError::IndexOutOfRange {
            index,
            item_count: self.total_count,
        };
        if index >= self.total_count {
            return Err(out_of_range);
        }
        let position = self
            .intervals
            .partition_point(|interval| interval.start_index + interval.count <= index);
        match self.intervals.get(position) {
            Some(interval) if interval.contains(index) => Ok(ResolvedItem {
                interval_index: position,
                local_index: index - interval.start_index,
                interval,
            }),
            _ => Err(out_of_range),
        }
    }

    /// Caller key if the interval declares one, otherwise the index key.
    pub fn get_key(&self, index: usize) -> LazyLayoutKey {
        match self.resolve(index) {
            Ok(ResolvedItem {
                local_index,
                interval:
                    LazyPlaneInterval {
                        key: Some(key_fn), ..
                    },
                ..
            }) => LazyLayoutKey::User(key_fn(local_index)),
            _ => LazyLayoutKey::Index(index),
        }
    }

    pub fn get_content_type(&self, index: usize) -> Option<u64> {
        let resolved = self.resolve(index).ok()?;
        resolved
            .interval
            .content_type
            .as_ref()
            .map(|type_fn| type_fn(resolved.local_index))
    }

    /// Evaluates the content factory of one item.
    pub fn invoke_content(&self, index: usize) -> Option<C> {
        let resolved = self.resolve(index).ok()?;
        Some((resolved.interval.content)(resolved.local_index))
    }

    /// Evaluates every geometry factory once, in global index order.
    pub fn all_geometry(&self) -> ItemIndex {
        let mut geometry = Vec::with_capacity(self.total_count);
        for interval in &self.intervals {
            geometry.extend((0..interval.count).map(&*interval.geometry));
        }
        ItemIndex::from(geometry)
    }

    pub fn get_index_by_key(&self, key: LazyLayoutKey) -> Option<usize> {
        self.get_index_by_slot_id(key.to_slot_id())
    }

    pub fn get_index_by_slot_id(&self, slot_id: u64) -> Option<usize> {
        if self.total_count <= Self::CACHE_THRESHOLD {
            return (0..self.total_count)
                .find(|&index| self.get_key(index).to_slot_id() == slot_id);
        }
        let mut cache = self.key_cache.borrow_mut();
        let map = cache.get_or_insert_with(|| {
            let mut map = FxHashMap::default();
            map.reserve(self.total_count);
            for index in 0..self.total_count {
                // First registration wins on duplicate keys.
                map.entry(self.get_key(index).to_slot_id()).or_insert(index);
            }
            map
        });
        map.get(&slot_id).copied()
    }

    fn push_interval(&mut self, interval: LazyPlaneInterval<C>) {
        *self.key_cache.get_mut() = None;
        self.total_count += interval.count;
        self.intervals.push(interval);
    }
}

impl<C> Default for LazyPlaneIntervalContent<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for LazyPlaneIntervalContent<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyPlaneIntervalContent")
            .field("intervals", &self.intervals)
            .field("total_count", &self.total_count)
            .finish()
    }
}

impl<C: 'static> LazyPlaneScope<C> for LazyPlaneIntervalContent<C> {
    fn item<F>(
        &mut self,
        geometry: ItemGeometry,
        key: Option<u64>,
        content_type: Option<u64>,
        content: F,
    ) where
        F: Fn() -> C + 'static,
    {
        let start_index = self.total_count;
        self.push_interval(LazyPlaneInterval {
            start_index,
            count: 1,
            geometry: Rc::new(move |_: usize| geometry),
            key: key.map(constant),
            content_type: content_type.map(constant),
            content: Rc::new(move |_: usize| content()),
        });
    }

    fn items<G, K, T, F>(
        &mut self,
        count: usize,
        geometry: G,
        key: Option<K>,
        content_type: Option<T>,
        content: F,
    ) where
        G: Fn(usize) -> ItemGeometry + 'static,
        K: Fn(usize) -> u64 + 'static,
        T: Fn(usize) -> u64 + 'static,
        F: Fn(usize) -> C + 'static,
    {
        if count == 0 {
            return;
        }
        let start_index = self.total_count;
        self.push_interval(LazyPlaneInterval {
            start_index,
            count,
            geometry: Rc::new(geometry),
            key: key.map(|k| Rc::new(k) as IndexedFn<u64>),
            content_type: content_type.map(|t| Rc::new(t) as IndexedFn<u64>),
            content: Rc::new(content),
        });
    }
}

/// Typed-data overloads for [`LazyPlaneScope`].
pub trait LazyPlaneScopeExt<C>: LazyPlaneScope<C> {
    /// Adds one item per element, taking ownership of the data.
    fn items_vec<T, G, K, F>(&mut self, items: Vec<T>, geometry: G, key: Option<K>, content: F)
    where
        T: 'static,
        G: Fn(&T) -> ItemGeometry + 'static,
        K: Fn(&T) -> u64 + 'static,
        F: Fn(&T) -> C + 'static,
    {
        let data: Rc<[T]> = Rc::from(items);
        let geometry_data = Rc::clone(&data);
        let content_data = Rc::clone(&data);
        // Local indices never exceed the slice length.
        let key_fn = key.map(|key| {
            let key_data = Rc::clone(&data);
            move |index: usize| key(&key_data[index])
        });
        self.items(
            data.len(),
            move |index| geometry(&geometry_data[index]),
            key_fn,
            None::<fn(usize) -> u64>,
            move |index| content(&content_data[index]),
        );
    }

    /// Adds one item per element, copying the slice.
    fn items_slice<T, G, K, F>(&mut self, items: &[T], geometry: G, key: Option<K>, content: F)
    where
        T: Clone + 'static,
        G: Fn(&T) -> ItemGeometry + 'static,
        K: Fn(&T) -> u64 + 'static,
        F: Fn(&T) -> C + 'static,
    {
        self.items_vec(items.to_vec(), geometry, key, content);
    }
}

impl<C, S: LazyPlaneScope<C> + ?Sized> LazyPlaneScopeExt<C> for S {}

#[cfg(test)]
#[path = "tests/lazy_plane_scope_tests.rs"]
mod tests;
