//! Drag and fling adapter between resolved pointer events and plane state.

use lazyplane_animation::JoinAxes;
use lazyplane_ui_graphics::{Point, Velocity};

use super::scroll_direction::ScrollDirection;
use super::velocity_tracker::VelocityTracker;
use crate::lazy::LazyPlaneState;

/// Maximum release velocity in logical px/s.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Feeds drag events into a [`LazyPlaneState`] and flings on release.
///
/// Events carry the pointer uptime in ms, the pointer position (for velocity
/// tracking) and the already resolved drag amount.
#[derive(Debug)]
pub struct LazyPlaneScrollGestures {
    state: LazyPlaneState,
    direction: ScrollDirection,
    tracker: VelocityTracker,
    max_fling_velocity: f32,
    dragging: bool,
}

impl LazyPlaneScrollGestures {
    pub fn new(state: LazyPlaneState, direction: ScrollDirection) -> Self {
        Self {
            state,
            direction,
            tracker: VelocityTracker::new(),
            max_fling_velocity: MAX_FLING_VELOCITY,
            dragging: false,
        }
    }

    pub fn with_max_fling_velocity(mut self, max_fling_velocity: f32) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: ScrollDirection) {
        self.direction = direction;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Stops any running animation and starts tracking at `position`.
    pub fn on_drag_start(&mut self, uptime_ms: i64, position: Point) {
        self.state.stop_animation();
        self.tracker.reset();
        self.tracker.add_position(uptime_ms, position);
        self.dragging = true;
    }

    pub fn on_drag(&mut self, uptime_ms: i64, position: Point, drag_amount: Point) {
        self.tracker.add_position(uptime_ms, position);
        self.state.drag_by(self.direction.mask_offset(drag_amount));
    }

    /// Flings with the tracked release velocity. The returned join resolves
    /// when both axes settle.
    pub fn on_drag_end(&mut self) -> JoinAxes {
        let velocity = self.current_velocity();
        self.tracker.reset();
        self.dragging = false;
        self.state.fling_by(velocity)
    }

    /// Ends the drag without a fling.
    pub fn on_drag_cancel(&mut self) {
        self.tracker.reset();
        self.dragging = false;
    }

    /// Release velocity the tracker would report now.
    pub fn current_velocity(&self) -> Velocity {
        let max = self.max_fling_velocity;
        let velocity = self.tracker.calculate_velocity_with_max(max);
        self.direction.mask_velocity(velocity)
    }
}

#[cfg(test)]
#[path = "tests/scroll_gestures_tests.rs"]
mod tests;
