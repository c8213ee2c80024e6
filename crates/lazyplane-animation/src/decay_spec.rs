//! Decay animation specification for fling animations.
//!
//! A decay has no fixed target: it starts with a velocity and decelerates
//! until the velocity drops below a threshold.

/// Trait for decay animation specifications.
pub trait FloatDecayAnimationSpec {
    /// Velocity threshold (px/s) below which the animation is finished.
    fn abs_velocity_threshold(&self) -> f32;

    fn get_value_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32;

    fn get_velocity_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32;

    fn get_duration_nanos(&self, initial_value: f32, initial_velocity: f32) -> i64;

    /// Final resting value of the animation.
    fn get_target_value(&self, initial_value: f32, initial_velocity: f32) -> f32;
}

const EXPONENTIAL_DECAY_FRICTION: f32 = -4.2;

/// Exponential decay: `v(t) = v0 * e^(f*t)` with `f = -4.2 * friction_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecaySpec {
    friction: f32,
    abs_velocity_threshold: f32,
}

impl ExponentialDecaySpec {
    /// Non-positive multipliers are raised to a small positive friction.
    pub fn new(friction_multiplier: f32, abs_velocity_threshold: f32) -> Self {
        let friction_multiplier = if friction_multiplier > 0.0 {
            friction_multiplier
        } else {
            log::warn!("friction {friction_multiplier} <= 0, using 0.01");
            0.01
        };
        Self {
            friction: EXPONENTIAL_DECAY_FRICTION * friction_multiplier,
            abs_velocity_threshold: abs_velocity_threshold.max(0.0001),
        }
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }
}

impl Default for ExponentialDecaySpec {
    fn default() -> Self {
        Self::new(1.0, 0.1)
    }
}

impl FloatDecayAnimationSpec for ExponentialDecaySpec {
    fn abs_velocity_threshold(&self) -> f32 {
        self.abs_velocity_threshold
    }

    fn get_value_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let seconds = play_time_nanos as f64 / 1_000_000_000.0;
        let friction = self.friction as f64;
        let v0 = initial_velocity as f64;
        (initial_value as f64 - v0 / friction + v0 / friction * (friction * seconds).exp()) as f32
    }

    fn get_velocity_from_nanos(
        &self,
        play_time_nanos: i64,
        _initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let seconds = play_time_nanos as f64 / 1_000_000_000.0;
        (initial_velocity as f64 * (self.friction as f64 * seconds).exp()) as f32
    }

    fn get_duration_nanos(&self, _initial_value: f32, initial_velocity: f32) -> i64 {
        let speed = initial_velocity.abs();
        if speed <= self.abs_velocity_threshold {
            return 0;
        }
        let seconds = ((self.abs_velocity_threshold / speed) as f64).ln() / self.friction as f64;
        (seconds * 1_000_000_000.0) as i64
    }

    fn get_target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        if initial_velocity.abs() <= self.abs_velocity_threshold {
            return initial_value;
        }
        let duration = self.get_duration_nanos(initial_value, initial_velocity);
        self.get_value_from_nanos(duration, initial_value, initial_velocity)
    }
}
