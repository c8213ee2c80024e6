//! Pure math/data for LazyPlane
//!
//! Geometry primitives shared by the layout, animation and foundation crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size, Velocity};
}
