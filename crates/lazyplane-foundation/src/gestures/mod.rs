//! Gesture plumbing for the lazy plane.
//!
//! Consumes drag deltas and pointer positions that the host has already
//! resolved from raw input, applies the plane's [`ScrollDirection`], and
//! turns releases into flings.

mod scroll_direction;
mod scroll_gestures;
mod velocity_tracker;

pub use scroll_direction::ScrollDirection;
pub use scroll_gestures::{LazyPlaneScrollGestures, MAX_FLING_VELOCITY};
pub use velocity_tracker::{AxisVelocityTracker, VelocityTracker, ASSUME_STOPPED_MS};
