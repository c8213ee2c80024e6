//! Lazy two-dimensional layout for LazyPlane
//!
//! Windowing over explicitly positioned items, two-axis scroll state with
//! drag, fling and animated navigation, and the gesture adapter that feeds it.

pub mod gestures;
pub mod lazy;
pub mod test_helpers;

mod error;

pub use error::{LazyPlaneError, Result};
pub use gestures::*;
pub use lazy::*;

pub mod prelude {
    pub use crate::gestures::{LazyPlaneScrollGestures, ScrollDirection};
    pub use crate::lazy::{
        Dimension, ItemGeometry, LazyLayoutItemProvider, LazyLayoutKey, LazyPlaneIntervalContent,
        LazyPlaneItemProvider, LazyPlaneLayout, LazyPlaneMeasureResult, LazyPlanePositionProvider,
        LazyPlaneScope, LazyPlaneScopeExt, LazyPlaneSpec, LazyPlaneState, LazyPlaneStateConfig,
        PlacedItem, Translate,
    };
    pub use lazyplane_ui_layout::{Alignment, Constraints, LayoutDirection, PaddingValues};
}
