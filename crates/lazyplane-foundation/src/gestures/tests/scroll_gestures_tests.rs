use super::*;

use std::rc::Rc;

use lazyplane_animation::AnimationEndReason;
use lazyplane_ui_graphics::{Rect, Size};
use lazyplane_ui_layout::LayoutDirection;

use crate::lazy::{ItemGeometry, ItemIndex, LazyPlanePositionProviderImpl};
use crate::test_helpers::FrameDriver;

fn ready_state(driver: &FrameDriver) -> LazyPlaneState {
    let state = LazyPlaneState::new(driver.handle());
    let provider = LazyPlanePositionProviderImpl::new(
        ItemIndex::from(vec![ItemGeometry::absolute(0.0, 0.0, 2000.0, 2000.0)]),
        LayoutDirection::Ltr,
        Size::new(200.0, 200.0),
    );
    state.update_bounds(Rc::new(provider), Rect::from_ltrb(0.0, 0.0, 1800.0, 1800.0));
    state.snap_to(Some(500.0), Some(500.0));
    state
}

/// Drags the content left by 20 px every 10 ms.
fn drag_left(gestures: &mut LazyPlaneScrollGestures, steps: i64) {
    gestures.on_drag_start(0, Point::new(300.0, 300.0));
    for step in 1..=steps {
        let x = 300.0 - step as f32 * 20.0;
        gestures.on_drag(step * 10, Point::new(x, 300.0), Point::new(-20.0, 0.0));
    }
}

#[test]
fn drag_applies_masked_delta() {
    let driver = FrameDriver::new();
    let state = ready_state(&driver);
    let mut gestures = LazyPlaneScrollGestures::new(state.clone(), ScrollDirection::Horizontal);

    gestures.on_drag_start(0, Point::new(100.0, 100.0));
    gestures.on_drag(10, Point::new(90.0, 80.0), Point::new(-10.0, -20.0));

    assert!(gestures.is_dragging());
    assert_eq!((state.value_x(), state.value_y()), (510.0, 500.0));
}

#[test]
fn release_flings_along_the_drag() {
    let driver = FrameDriver::new();
    let state = ready_state(&driver);
    let mut gestures = LazyPlaneScrollGestures::new(state.clone(), ScrollDirection::Both);

    drag_left(&mut gestures, 4);
    let released_at = state.value_x();
    assert_eq!(released_at, 580.0);
    assert!(gestures.current_velocity().x < 0.0);

    let join = gestures.on_drag_end();
    assert!(!gestures.is_dragging());
    driver.pump_until_idle(600);

    assert!(join.is_complete());
    assert!(state.value_x() > released_at);
    assert_eq!(state.value_y(), 500.0);
}

#[test]
fn vertical_only_plane_drops_horizontal_fling() {
    let driver = FrameDriver::new();
    let state = ready_state(&driver);
    let mut gestures = LazyPlaneScrollGestures::new(state.clone(), ScrollDirection::Vertical);

    drag_left(&mut gestures, 4);
    let join = gestures.on_drag_end();

    assert_eq!(state.value_x(), 500.0);
    assert!(join.is_complete());
    assert!(!state.is_animation_running());
}

#[test]
fn drag_start_stops_running_fling() {
    let driver = FrameDriver::new();
    let state = ready_state(&driver);
    let mut gestures = LazyPlaneScrollGestures::new(state.clone(), ScrollDirection::Both);

    drag_left(&mut gestures, 4);
    let join = gestures.on_drag_end();
    driver.pump_frames(3);
    assert!(state.is_animation_running());

    gestures.on_drag_start(100, Point::new(0.0, 0.0));

    assert!(!state.is_animation_running());
    assert_eq!(
        join.x().result().map(|result| result.end_reason),
        Some(AnimationEndReason::Interrupted)
    );
}

#[test]
fn cancel_ends_drag_without_fling() {
    let driver = FrameDriver::new();
    let state = ready_state(&driver);
    let mut gestures = LazyPlaneScrollGestures::new(state.clone(), ScrollDirection::Both);

    drag_left(&mut gestures, 4);
    gestures.on_drag_cancel();

    assert!(!gestures.is_dragging());
    assert_eq!(gestures.current_velocity(), Velocity::ZERO);
    assert!(!driver.handle().has_frame_callbacks());
    assert_eq!(state.value_x(), 580.0);
}
