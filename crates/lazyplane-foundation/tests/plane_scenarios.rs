//! End-to-end scenarios over the public lazy plane API.
//!
//! Each test drives content registration, measurement, gestures and the
//! frame clock together the way a host would.

use lazyplane_animation::AnimationEndReason;
use lazyplane_foundation::prelude::*;
use lazyplane_foundation::test_helpers::FrameDriver;
use lazyplane_ui_graphics::{Point, Rect, Velocity};

const COLUMNS: usize = 40;
const CELL: f32 = 100.0;
const PITCH: f32 = 120.0;

type NoKey = fn(usize) -> u64;

fn grid_cell(i: usize) -> ItemGeometry {
    let col = (i % COLUMNS) as f32;
    let row = (i / COLUMNS) as f32;
    ItemGeometry::absolute(col * PITCH, row * PITCH, CELL, CELL)
}

/// 40 x 40 grid of 100 px cells on a 120 px pitch, plus a pinned overlay.
fn grid_provider() -> LazyPlaneItemProvider<String> {
    LazyPlaneItemProvider::new(LazyPlaneIntervalContent::build(|scope| {
        scope.items(
            COLUMNS * COLUMNS,
            grid_cell,
            Some(|i: usize| i as u64),
            None::<NoKey>,
            |i| format!("cell {i}"),
        );
        scope.item(
            ItemGeometry::absolute(16.0, 16.0, 48.0, 48.0).pinned(),
            Some(u64::from(u32::MAX)),
            Some(1),
            || "minimap".to_string(),
        );
    }))
}

const OVERLAY_INDEX: usize = COLUMNS * COLUMNS;

fn visible_indices(result: &LazyPlaneMeasureResult<String>) -> Vec<usize> {
    result.items.iter().map(|item| item.index).collect()
}

fn assert_all_visible(result: &LazyPlaneMeasureResult<String>) {
    let window = Rect::from_origin_size(Point::ZERO, result.viewport);
    for item in &result.items {
        if item.index == OVERLAY_INDEX {
            continue;
        }
        assert!(
            item.bounds().overlaps(&window),
            "item {} placed at {:?} outside {:?}",
            item.index,
            item.bounds(),
            window
        );
    }
}

#[test]
fn drag_and_fling_move_the_visible_window() {
    let driver = FrameDriver::new();
    let mut layout = LazyPlaneLayout::new(
        LazyPlaneState::new(driver.handle()),
        LazyPlaneSpec::default(),
    );
    let provider = grid_provider();
    let constraints = Constraints::tight(800.0, 600.0);

    let first = layout.measure(&provider, constraints);
    // Columns 0..=6 and rows 0..=4 intersect, plus the overlay.
    assert_eq!(first.items.len(), 7 * 5 + 1);
    assert_eq!(first.items.first().map(|item| item.index), Some(0));
    assert_eq!(visible_indices(&first).last(), Some(&OVERLAY_INDEX));
    assert_eq!(layout.state().max_x(), 39.0 * PITCH + CELL - 800.0);
    assert_eq!(layout.state().max_y(), 39.0 * PITCH + CELL - 600.0);

    let mut gestures = layout.scroll_gestures();
    gestures.on_drag_start(0, Point::new(400.0, 300.0));
    for step in 1..=5_i64 {
        let position = Point::new(400.0 - step as f32 * 30.0, 300.0 - step as f32 * 20.0);
        gestures.on_drag(step * 10, position, Point::new(-30.0, -20.0));
    }
    let offset = layout.state().translate().map(|t| t.offset());
    assert_eq!(offset, Some(Point::new(150.0, 100.0)));

    let dragged = layout.measure(&provider, constraints);
    let indices = visible_indices(&dragged);
    assert!(!indices.contains(&0));
    assert!(indices.contains(&(COLUMNS + 1)));
    assert_all_visible(&dragged);

    let join = gestures.on_drag_end();
    driver.pump_until_idle(600);
    assert!(join.is_complete());
    assert!(layout.state().value_x() > 150.0);
    assert!(layout.state().value_y() > 100.0);

    let flung = layout.measure(&provider, constraints);
    assert_all_visible(&flung);
    assert!(visible_indices(&flung).contains(&OVERLAY_INDEX));
}

#[test]
fn initial_offset_centres_an_item_on_the_first_pass() {
    let driver = FrameDriver::new();
    let state = LazyPlaneState::with_initial_offset(driver.handle(), |provider| {
        provider.get_offset(500, Alignment::CENTER, PaddingValues::ZERO, Point::ZERO)
    });
    let mut layout = LazyPlaneLayout::new(state, LazyPlaneSpec::default());

    let result = layout.measure(&grid_provider(), Constraints::tight(800.0, 600.0));

    // Item 500 is column 20, row 12.
    assert_eq!(layout.state().value_x(), 20.0 * PITCH - 350.0);
    assert_eq!(layout.state().value_y(), 12.0 * PITCH - 250.0);
    let centred = result
        .items
        .iter()
        .find(|item| item.index == 500)
        .map(|item| item.position);
    assert_eq!(centred, Some(Point::new(350.0, 250.0)));
}

#[test]
fn animate_to_item_lands_after_frames() {
    let driver = FrameDriver::new();
    let mut layout = LazyPlaneLayout::new(
        LazyPlaneState::new(driver.handle()),
        LazyPlaneSpec::default(),
    );
    let provider = grid_provider();
    let constraints = Constraints::tight(800.0, 600.0);
    layout.measure(&provider, constraints);

    let join = layout
        .state()
        .animate_to_item(COLUMNS * 10 + 10, Alignment::TOP_START, PaddingValues::ZERO);
    assert!(!join.is_complete());
    driver.pump_until_idle(600);

    let (x, y) = join.results().expect("both axes settled");
    assert_eq!(x.end_reason, AnimationEndReason::Finished);
    assert_eq!(y.end_reason, AnimationEndReason::Finished);
    assert_eq!(layout.state().value_x(), 10.0 * PITCH);
    assert_eq!(layout.state().value_y(), 10.0 * PITCH);

    let result = layout.measure(&provider, constraints);
    assert_eq!(
        result.items.first().map(|item| (item.index, item.position)),
        Some((COLUMNS * 10 + 10, Point::ZERO))
    );
}

#[test]
fn animate_to_a_far_corner_stops_on_the_bound() {
    let driver = FrameDriver::new();
    let mut layout = LazyPlaneLayout::new(
        LazyPlaneState::new(driver.handle()),
        LazyPlaneSpec::default(),
    );
    layout.measure(&grid_provider(), Constraints::tight(800.0, 600.0));

    let join = layout.state().animate_to(Some(1.0e6), None);
    driver.pump_until_idle(600);

    let (x, y) = join.results().expect("both axes settled");
    assert_eq!(x.end_reason, AnimationEndReason::BoundReached);
    assert_eq!(x.end_value, layout.state().max_x());
    assert_eq!(y.end_value, 0.0);
}

/// Small deterministic generator so the sequence is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 32) as u32
    }

    fn range(&mut self, low: f32, high: f32) -> f32 {
        low + (self.next() as f32 / u32::MAX as f32) * (high - low)
    }
}

fn assert_within_bounds(state: &LazyPlaneState, step: usize) {
    let translate = state.translate().expect("initialized");
    assert!(
        (0.0..=translate.max_x).contains(&translate.x),
        "step {step}: x {} outside [0, {}]",
        translate.x,
        translate.max_x
    );
    assert!(
        (0.0..=translate.max_y).contains(&translate.y),
        "step {step}: y {} outside [0, {}]",
        translate.y,
        translate.max_y
    );
}

#[test]
fn offset_stays_clamped_through_mixed_commands() {
    let driver = FrameDriver::new();
    let mut layout = LazyPlaneLayout::new(
        LazyPlaneState::new(driver.handle()),
        LazyPlaneSpec::default(),
    );
    let provider = grid_provider();
    let viewports = [
        Constraints::tight(800.0, 600.0),
        Constraints::tight(300.0, 300.0),
        Constraints::tight(5000.0, 5000.0),
        Constraints::loose(1200.0, 200.0),
    ];
    layout.measure(&provider, viewports[0]);

    let mut rng = Lcg(0x5eed);
    for step in 0..300 {
        let state = layout.state().clone();
        match rng.next() % 7 {
            0 => {
                let delta = Point::new(rng.range(-400.0, 400.0), rng.range(-400.0, 400.0));
                state.drag_by(delta);
            }
            1 => {
                let x = rng.range(-1000.0, 6000.0);
                let y = rng.range(-1000.0, 6000.0);
                state.snap_to(Some(x), Some(y));
            }
            2 => {
                let _join = state.animate_to(Some(rng.range(-1000.0, 6000.0)), None);
            }
            3 => {
                let _join = state.fling_by(Velocity::new(
                    rng.range(-6000.0, 6000.0),
                    rng.range(-6000.0, 6000.0),
                ));
            }
            4 => state.stop_animation(),
            5 => {
                let constraints = viewports[rng.next() as usize % viewports.len()];
                let result = layout.measure(&provider, constraints);
                assert_all_visible(&result);
            }
            _ => driver.pump_frames(1 + rng.next() as usize % 8),
        }
        assert_within_bounds(layout.state(), step);
    }

    driver.pump_until_idle(2000);
    assert!(!layout.state().is_animation_running());
    assert_within_bounds(layout.state(), usize::MAX);
}

#[test]
fn overlay_stays_visible_at_every_corner() {
    let driver = FrameDriver::new();
    let mut layout = LazyPlaneLayout::new(
        LazyPlaneState::new(driver.handle()),
        LazyPlaneSpec::default(),
    );
    let provider = grid_provider();
    let constraints = Constraints::tight(800.0, 600.0);
    layout.measure(&provider, constraints);

    for (x, y) in [(0.0, 0.0), (1.0e6, 0.0), (0.0, 1.0e6), (1.0e6, 1.0e6)] {
        layout.state().snap_to(Some(x), Some(y));
        let result = layout.measure(&provider, constraints);
        let overlay = result.items.iter().find(|item| item.index == OVERLAY_INDEX);
        assert_eq!(
            overlay.map(|item| (item.bounds(), item.content.as_str())),
            Some((Rect::new(16.0, 16.0, 48.0, 48.0), "minimap"))
        );
    }
}

#[test]
fn vertical_plane_ignores_horizontal_drags() {
    let driver = FrameDriver::new();
    let mut layout = LazyPlaneLayout::new(
        LazyPlaneState::new(driver.handle()),
        LazyPlaneSpec::new().scroll_direction(ScrollDirection::Vertical),
    );
    layout.measure(&grid_provider(), Constraints::tight(800.0, 600.0));

    let mut gestures = layout.scroll_gestures();
    gestures.on_drag_start(0, Point::new(400.0, 300.0));
    gestures.on_drag(10, Point::new(300.0, 250.0), Point::new(-100.0, -50.0));
    gestures.on_drag_cancel();

    assert_eq!(layout.state().value_x(), 0.0);
    assert_eq!(layout.state().value_y(), 50.0);
    assert!(!layout.state().is_animation_running());
}
