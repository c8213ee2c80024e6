//! Virtualized two-dimensional layout.
//!
//! Items declare explicit geometry on an unbounded plane. Only the items that
//! intersect the viewport at the current scroll offset are materialized.
//!
//! # Architecture
//!
//! - [`LazyPlaneScope`] - DSL for registering item intervals
//! - [`LazyPlaneItemProvider`] - registry plus derived geometry map
//! - [`viewport_culler`] - visibility test and screen placement
//! - [`LazyPlanePositionProvider`] - offset that brings an item into view
//! - [`LazyPlaneState`] - two-axis scroll state, drags, flings, animations
//! - [`LazyPlaneLayout`] - per-pass orchestration
//!
//! # Example
//!
//! ```rust,ignore
//! let content = LazyPlaneIntervalContent::build(|scope| {
//!     scope.items(
//!         1_000,
//!         |i| {
//!             let (col, row) = ((i % 40) as f32, (i / 40) as f32);
//!             ItemGeometry::absolute(col * 120.0, row * 120.0, 100.0, 100.0)
//!         },
//!         None::<fn(usize) -> u64>,
//!         None::<fn(usize) -> u64>,
//!         |i| format!("cell {i}"),
//!     );
//! });
//! let provider = LazyPlaneItemProvider::new(content);
//! let state = LazyPlaneState::new(runtime.handle());
//! let mut layout = LazyPlaneLayout::new(state, LazyPlaneSpec::default());
//! let result = layout.measure(&provider, Constraints::tight(800.0, 600.0));
//! ```

mod item_config;
mod item_provider;
mod lazy_plane_measure;
mod lazy_plane_scope;
mod lazy_plane_state;
mod position_provider;
mod viewport;
pub mod viewport_culler;

pub use item_config::*;
pub use item_provider::*;
pub use lazy_plane_measure::*;
pub use lazy_plane_scope::*;
pub use lazy_plane_state::*;
pub use position_provider::*;
pub use viewport::ViewportHandler;
