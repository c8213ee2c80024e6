//! Bounded scalar animation channel.
//!
//! An [`Animatable`] holds one `f32` value, a `[lower, upper]` range and at
//! most one active transition. It does not schedule frames itself: the owner
//! calls [`Animatable::on_frame`] with the host frame time for as long as
//! [`Animatable::is_running`] reports true. This lets several channels share
//! a single frame callback and publish their values together.

use crate::decay_spec::FloatDecayAnimationSpec;
use crate::job::{AnimationEndReason, AnimationJob, AnimationResult, JobCompleter};
use crate::{AnimationSpec, AnimationType, SpringSpec};

const NANOS_PER_SECOND: f32 = 1_000_000_000.0;
const SPRING_TIMESTEP_SECONDS: f32 = 0.016;

enum Transition {
    Idle,
    Animating {
        start: f32,
        target: f32,
        animation: AnimationType,
        start_time_nanos: Option<u64>,
        last_frame_nanos: Option<u64>,
    },
    Decaying {
        initial_value: f32,
        initial_velocity: f32,
        spec: Box<dyn FloatDecayAnimationSpec>,
        start_time_nanos: Option<u64>,
    },
}

pub struct Animatable {
    value: f32,
    velocity: f32,
    lower_bound: f32,
    upper_bound: f32,
    transition: Transition,
    completer: Option<JobCompleter>,
}

impl Animatable {
    /// Unbounded channel resting at `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            lower_bound: f32::NEG_INFINITY,
            upper_bound: f32::INFINITY,
            transition: Transition::Idle,
            completer: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current speed in px/s. Zero while idle.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn lower_bound(&self) -> f32 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f32 {
        self.upper_bound
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.transition, Transition::Idle)
    }

    /// Value the active transition is heading to, or the current value.
    pub fn target_value(&self) -> f32 {
        match &self.transition {
            Transition::Idle => self.value,
            Transition::Animating { target, .. } => self.clamp(*target),
            Transition::Decaying {
                initial_value,
                initial_velocity,
                spec,
                ..
            } => self.clamp(spec.get_target_value(*initial_value, *initial_velocity)),
        }
    }

    /// Replaces the bounds and reclamps the value. Returns true if the value moved.
    ///
    /// A running transition keeps going and stops at the new bound if it
    /// reaches it.
    pub fn update_bounds(&mut self, lower: f32, upper: f32) -> bool {
        let lower = if lower.is_nan() {
            f32::NEG_INFINITY
        } else {
            lower
        };
        let upper = if upper.is_nan() { f32::INFINITY } else { upper };
        self.lower_bound = lower;
        self.upper_bound = upper.max(lower);
        let clamped = self.clamp(self.value);
        if clamped != self.value {
            log::debug!(
                "bounds [{}, {}] reclamped value {} -> {}",
                self.lower_bound,
                self.upper_bound,
                self.value,
                clamped
            );
            self.value = clamped;
            true
        } else {
            false
        }
    }

    /// Jumps to `target` (clamped) and cancels any running transition.
    pub fn snap_to(&mut self, target: f32) {
        self.interrupt();
        self.value = self.clamp(target);
    }

    /// Stops at the current value.
    pub fn stop(&mut self) {
        self.interrupt();
    }

    /// Starts a target-based animation from the current value.
    ///
    /// Animating to the current value ends immediately with
    /// [`AnimationEndReason::Finished`].
    pub fn animate_to(&mut self, target: f32, animation: AnimationType) -> AnimationJob {
        let carried_velocity = self.velocity;
        self.interrupt();
        if target == self.value {
            return AnimationJob::completed(AnimationResult::new(
                AnimationEndReason::Finished,
                self.value,
            ));
        }
        if let AnimationType::Spring(_) = animation {
            self.velocity = carried_velocity;
        }
        self.transition = Transition::Animating {
            start: self.value,
            target,
            animation,
            start_time_nanos: None,
            last_frame_nanos: None,
        };
        self.begin_job()
    }

    /// Starts a decay seeded with `initial_velocity` (px/s).
    ///
    /// A velocity at or below the decay threshold settles immediately.
    pub fn animate_decay<S>(&mut self, initial_velocity: f32, spec: S) -> AnimationJob
    where
        S: FloatDecayAnimationSpec + 'static,
    {
        self.interrupt();
        if initial_velocity.abs() <= spec.abs_velocity_threshold() {
            return AnimationJob::completed(AnimationResult::new(
                AnimationEndReason::Finished,
                self.value,
            ));
        }
        self.velocity = initial_velocity;
        self.transition = Transition::Decaying {
            initial_value: self.value,
            initial_velocity,
            spec: Box::new(spec),
            start_time_nanos: None,
        };
        self.begin_job()
    }

    /// Advances the active transition to `frame_time_nanos`.
    ///
    /// Returns true while the channel needs further frames.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let outcome = match &mut self.transition {
            Transition::Idle => return false,
            Transition::Animating {
                start,
                target,
                animation,
                start_time_nanos,
                last_frame_nanos,
            } => {
                let started = *start_time_nanos.get_or_insert(frame_time_nanos);
                let previous = last_frame_nanos
                    .replace(frame_time_nanos)
                    .unwrap_or(started);
                let elapsed = frame_time_nanos.saturating_sub(started);
                let dt = frame_time_nanos.saturating_sub(previous) as f32 / NANOS_PER_SECOND;
                match *animation {
                    AnimationType::Tween(spec) => {
                        tween_step(spec, *start, *target, elapsed, self.value, dt)
                    }
                    AnimationType::Spring(spec) => {
                        spring_step(spec, *target, self.value, self.velocity, dt)
                    }
                }
            }
            Transition::Decaying {
                initial_value,
                initial_velocity,
                spec,
                start_time_nanos,
            } => {
                let started = *start_time_nanos.get_or_insert(frame_time_nanos);
                let play_time = frame_time_nanos.saturating_sub(started) as i64;
                let duration = spec.get_duration_nanos(*initial_value, *initial_velocity);
                if play_time >= duration {
                    Step::Done(spec.get_target_value(*initial_value, *initial_velocity))
                } else {
                    Step::Running {
                        value: spec.get_value_from_nanos(
                            play_time,
                            *initial_value,
                            *initial_velocity,
                        ),
                        velocity: spec.get_velocity_from_nanos(
                            play_time,
                            *initial_value,
                            *initial_velocity,
                        ),
                    }
                }
            }
        };

        let (value, reached_end) = match outcome {
            Step::Running { value, velocity } => {
                self.velocity = velocity;
                (value, false)
            }
            Step::Done(value) => (value, true),
        };

        if value < self.lower_bound || value > self.upper_bound {
            self.value = self.clamp(value);
            self.finish(AnimationEndReason::BoundReached);
            return false;
        }
        self.value = value;
        if reached_end {
            self.finish(AnimationEndReason::Finished);
            return false;
        }
        true
    }

    fn clamp(&self, value: f32) -> f32 {
        value.max(self.lower_bound).min(self.upper_bound)
    }

    fn begin_job(&mut self) -> AnimationJob {
        let (job, completer) = AnimationJob::pending();
        self.completer = Some(completer);
        job
    }

    fn interrupt(&mut self) {
        self.transition = Transition::Idle;
        self.velocity = 0.0;
        if let Some(completer) = self.completer.take() {
            completer.complete(AnimationResult::new(
                AnimationEndReason::Interrupted,
                self.value,
            ));
        }
    }

    fn finish(&mut self, reason: AnimationEndReason) {
        self.transition = Transition::Idle;
        self.velocity = 0.0;
        if let Some(completer) = self.completer.take() {
            completer.complete(AnimationResult::new(reason, self.value));
        }
    }
}

impl Drop for Animatable {
    fn drop(&mut self) {
        self.interrupt();
    }
}

impl std::fmt::Debug for Animatable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animatable")
            .field("value", &self.value)
            .field("velocity", &self.velocity)
            .field("lower_bound", &self.lower_bound)
            .field("upper_bound", &self.upper_bound)
            .field("running", &self.is_running())
            .finish()
    }
}

enum Step {
    Running { value: f32, velocity: f32 },
    Done(f32),
}

fn tween_step(
    spec: AnimationSpec,
    start: f32,
    target: f32,
    elapsed_nanos: u64,
    previous_value: f32,
    dt: f32,
) -> Step {
    let delay_nanos = spec.delay_millis * 1_000_000;
    if elapsed_nanos < delay_nanos {
        return Step::Running {
            value: start,
            velocity: 0.0,
        };
    }
    let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
    let linear = ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
    if linear >= 1.0 {
        return Step::Done(target);
    }
    let value = start + (target - start) * spec.easing.transform(linear);
    let velocity = if dt > 0.0 {
        (value - previous_value) / dt
    } else {
        0.0
    };
    Step::Running { value, velocity }
}

/// Damped harmonic oscillator integrated with semi-implicit Euler.
fn spring_step(spec: SpringSpec, target: f32, value: f32, velocity: f32, dt: f32) -> Step {
    let stiffness = spec.stiffness.max(f32::EPSILON);
    let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
    let mut position = value;
    let mut velocity = velocity;
    let mut remaining = dt;
    while remaining > 0.0 {
        let step = SPRING_TIMESTEP_SECONDS.min(remaining);
        let force = -stiffness * (position - target) - damping * velocity;
        velocity += force * step;
        position += velocity * step;
        remaining -= step;
    }
    let at_rest = velocity.abs() < spec.velocity_threshold;
    let near_target = (position - target).abs() < spec.position_threshold;
    if at_rest && near_target {
        Step::Done(target)
    } else {
        Step::Running {
            value: position,
            velocity,
        }
    }
}

#[cfg(test)]
#[path = "tests/animatable_tests.rs"]
mod tests;
