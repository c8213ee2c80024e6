use super::*;

#[test]
fn empty_and_single_sample_trackers_report_zero() {
    let mut tracker = AxisVelocityTracker::new();
    assert_eq!(tracker.calculate_velocity(), 0.0);
    tracker.add_data_point(0, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn steady_motion_matches_rate() {
    let mut tracker = AxisVelocityTracker::new();
    // 100 px every 10 ms.
    for step in 0..4 {
        tracker.add_data_point(step * 10, step as f32 * 100.0);
    }
    let velocity = tracker.calculate_velocity();
    assert!((velocity - 10_000.0).abs() < 1_000.0, "velocity {velocity}");
}

#[test]
fn backwards_motion_is_negative() {
    let mut tracker = AxisVelocityTracker::new();
    tracker.add_data_point(0, 300.0);
    tracker.add_data_point(10, 200.0);
    tracker.add_data_point(20, 100.0);
    assert!(tracker.calculate_velocity() < 0.0);
}

#[test]
fn velocity_is_capped_both_ways() {
    let mut tracker = AxisVelocityTracker::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(1, 10_000.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

    tracker.reset();
    tracker.add_data_point(0, 10_000.0);
    tracker.add_data_point(1, 0.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
    assert_eq!(tracker.calculate_velocity_with_max(f32::NAN), 0.0);
}

#[test]
fn samples_before_a_pause_are_ignored() {
    let mut tracker = AxisVelocityTracker::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);

    tracker.add_data_point(ASSUME_STOPPED_MS + 11, 200.0);
    tracker.add_data_point(ASSUME_STOPPED_MS + 21, 300.0);
    assert!(tracker.calculate_velocity() > 0.0);
}

#[test]
fn ring_keeps_only_recent_history() {
    let mut tracker = AxisVelocityTracker::new();
    // Slow drift, then a fast flick within the last samples.
    for step in 0..40 {
        tracker.add_data_point(step * 5, step as f32);
    }
    let slow = tracker.calculate_velocity();
    for step in 40..44 {
        tracker.add_data_point(step * 5, 40.0 + (step - 39) as f32 * 50.0);
    }
    assert!(tracker.calculate_velocity() > slow);
}

#[test]
fn two_axis_tracker_reports_each_axis() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(10, Point::new(10.0, -20.0));
    tracker.add_position(20, Point::new(20.0, -40.0));

    let velocity = tracker.calculate_velocity();
    assert!(velocity.x > 0.0);
    assert!(velocity.y < 0.0);
    assert!(velocity.y.abs() > velocity.x.abs());

    tracker.reset();
    assert_eq!(tracker.calculate_velocity(), Velocity::ZERO);
}

#[test]
fn only_the_last_stop_window_counts() {
    let mut tracker = AxisVelocityTracker::new();
    // Slow drift up to 50 ms, then 100 px every 10 ms.
    for time in (0..=50).step_by(10) {
        tracker.add_data_point(time, time as f32 / 10.0);
    }
    for time in (60..=100).step_by(10) {
        tracker.add_data_point(time, 5.0 + (time - 50) as f32 * 10.0);
    }

    assert_eq!(tracker.calculate_velocity(), 10_000.0);
}
