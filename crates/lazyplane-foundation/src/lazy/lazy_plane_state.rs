//! Scroll state of a lazy plane.
//!
//! [`LazyPlaneState`] owns one bounded [`Animatable`] channel per axis and
//! the [`Translate`] snapshot derived from them. Drags and snaps mutate the
//! channels synchronously. Animations and flings run from a single frame
//! callback that ticks both channels, so a frame publishes at most one
//! snapshot.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use lazyplane_animation::{
    Animatable, AnimationEndReason, AnimationJob, AnimationResult, AnimationType,
    ExponentialDecaySpec, JoinAxes,
};
use lazyplane_core::{FrameCallbackRegistration, RuntimeHandle};
use lazyplane_ui_graphics::{Point, Rect, Velocity};
use lazyplane_ui_layout::{Alignment, PaddingValues};

use super::position_provider::LazyPlanePositionProvider;

/// Committed scroll offset and its upper bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translate {
    pub x: f32,
    pub y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Translate {
    pub fn offset(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Motion configuration for [`LazyPlaneState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LazyPlaneStateConfig {
    /// Curve used by `animate_to` and `animate_to_item`.
    pub animation: AnimationType,
    /// Decay used by `fling_by`.
    pub decay: ExponentialDecaySpec,
}

impl Default for LazyPlaneStateConfig {
    fn default() -> Self {
        Self {
            animation: AnimationType::default(),
            decay: ExponentialDecaySpec::default(),
        }
    }
}

impl LazyPlaneStateConfig {
    pub fn animation(mut self, animation: AnimationType) -> Self {
        self.animation = animation;
        self
    }

    pub fn decay(mut self, decay: ExponentialDecaySpec) -> Self {
        self.decay = decay;
        self
    }
}

type InitialOffset = Rc<dyn Fn(&dyn LazyPlanePositionProvider) -> Point>;
type TranslateObserver = Rc<dyn Fn(Translate)>;

struct Channels {
    x: Animatable,
    y: Animatable,
}

impl Channels {
    fn snapshot(&self) -> Translate {
        Translate {
            x: self.x.value(),
            y: self.y.value(),
            max_x: finite_or_zero(self.x.upper_bound()),
            max_y: finite_or_zero(self.y.upper_bound()),
        }
    }

    fn current(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    fn is_running(&self) -> bool {
        self.x.is_running() || self.y.is_running()
    }
}

struct PlaneStateInner {
    runtime: RuntimeHandle,
    config: LazyPlaneStateConfig,
    initial_offset: InitialOffset,
    channels: Option<Channels>,
    position_provider: Option<Rc<dyn LazyPlanePositionProvider>>,
    translate: Option<Translate>,
    observers: Vec<(u64, TranslateObserver)>,
    next_observer_id: u64,
    frame_registration: Option<FrameCallbackRegistration>,
}

/// Handle to a plane's scroll state. Clones share the same state.
#[derive(Clone)]
pub struct LazyPlaneState {
    inner: Rc<RefCell<PlaneStateInner>>,
}

impl LazyPlaneState {
    /// State that starts at the origin.
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self::with_initial_offset(runtime, |_| Point::ZERO)
    }

    /// State whose first offset comes from `initial_offset`.
    ///
    /// The function runs on the first bounds update, and again after
    /// [`reset`](Self::reset).
    pub fn with_initial_offset(
        runtime: RuntimeHandle,
        initial_offset: impl Fn(&dyn LazyPlanePositionProvider) -> Point + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PlaneStateInner {
                runtime,
                config: LazyPlaneStateConfig::default(),
                initial_offset: Rc::new(initial_offset),
                channels: None,
                position_provider: None,
                translate: None,
                observers: Vec::new(),
                next_observer_id: 1,
                frame_registration: None,
            })),
        }
    }

    pub fn with_config(self, config: LazyPlaneStateConfig) -> Self {
        self.inner.borrow_mut().config = config;
        self
    }

    pub fn config(&self) -> LazyPlaneStateConfig {
        self.inner.borrow().config
    }

    // ─────────────────────────────────────────────────────────────────────
    // Layout-facing
    // ─────────────────────────────────────────────────────────────────────

    /// Installs the pass's position provider and scroll bounds.
    ///
    /// `bounds` holds the lower limits in its left/top edges and the upper
    /// limits in its right/bottom edges. The first call creates the channels
    /// at the initial offset.
    pub fn update_bounds(&self, provider: Rc<dyn LazyPlanePositionProvider>, bounds: Rect) {
        let needs_init = {
            let mut inner = self.inner.borrow_mut();
            inner.position_provider = Some(Rc::clone(&provider));
            inner.channels.is_none()
        };
        if needs_init {
            let initial_offset = Rc::clone(&self.inner.borrow().initial_offset);
            let start = initial_offset(&*provider);
            let start = Point::new(finite_or_zero(start.x), finite_or_zero(start.y));
            log::debug!("LazyPlane: initial offset ({}, {})", start.x, start.y);
            let mut inner = self.inner.borrow_mut();
            if inner.channels.is_none() {
                inner.channels = Some(Channels {
                    x: Animatable::new(start.x),
                    y: Animatable::new(start.y),
                });
            }
        }
        if let Some(channels) = self.inner.borrow_mut().channels.as_mut() {
            channels.x.update_bounds(bounds.left(), bounds.right());
            channels.y.update_bounds(bounds.top(), bounds.bottom());
        }
        self.publish();
    }

    /// Discards the channels. The next bounds update re-runs the initial
    /// offset function. Pending jobs end as interrupted.
    pub fn reset(&self) {
        let (channels, registration) = {
            let mut inner = self.inner.borrow_mut();
            inner.translate = None;
            (inner.channels.take(), inner.frame_registration.take())
        };
        drop(registration);
        drop(channels);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────

    /// Moves the content by `delta`: each offset decreases by the delta.
    pub fn drag_by(&self, delta: Point) {
        if !delta.is_finite() {
            log::warn!("LazyPlane: ignoring non-finite drag delta {:?}", delta);
            return;
        }
        let applied = self.with_channels("drag_by", |channels, _| {
            let x = channels.x.value() - delta.x;
            let y = channels.y.value() - delta.y;
            channels.x.snap_to(x);
            channels.y.snap_to(y);
        });
        if applied.is_some() {
            self.publish();
        }
    }

    /// Jumps to the given offsets. `None` or NaN keeps the axis's value.
    pub fn snap_to(&self, x: Option<f32>, y: Option<f32>) {
        let applied = self.with_channels("snap_to", |channels, _| {
            let target_x = valid_target(x).unwrap_or(channels.x.value());
            let target_y = valid_target(y).unwrap_or(channels.y.value());
            channels.x.snap_to(target_x);
            channels.y.snap_to(target_y);
        });
        if applied.is_some() {
            self.publish();
        }
    }

    /// Animates to the given offsets with the configured curve.
    pub fn animate_to(&self, x: Option<f32>, y: Option<f32>) -> JoinAxes {
        let animation = self.config().animation;
        self.animate_to_with(x, y, animation)
    }

    /// Animates to the given offsets with `animation`.
    ///
    /// `None` or NaN targets the axis's current value, which settles at once.
    pub fn animate_to_with(
        &self,
        x: Option<f32>,
        y: Option<f32>,
        animation: AnimationType,
    ) -> JoinAxes {
        let joined = self.with_channels("animate_to", |channels, _| {
            let target_x = valid_target(x).unwrap_or(channels.x.value());
            let target_y = valid_target(y).unwrap_or(channels.y.value());
            JoinAxes::new(
                channels.x.animate_to(target_x, animation),
                channels.y.animate_to(target_y, animation),
            )
        });
        self.start_motion(joined)
    }

    /// Starts an inertial decay from a release velocity of the content.
    ///
    /// The offset moves against the velocity, so each axis decays with the
    /// negated value.
    pub fn fling_by(&self, velocity: Velocity) -> JoinAxes {
        if !velocity.is_finite() {
            log::warn!("LazyPlane: non-finite fling velocity {velocity:?}");
            return self.settled_now(AnimationEndReason::Interrupted);
        }
        let joined = self.with_channels("fling_by", |channels, config| {
            log::debug!("LazyPlane: fling at ({}, {})", velocity.x, velocity.y);
            JoinAxes::new(
                channels.x.animate_decay(-velocity.x, config.decay),
                channels.y.animate_decay(-velocity.y, config.decay),
            )
        });
        self.start_motion(joined)
    }

    /// Stops both channels where they are.
    pub fn stop_animation(&self) {
        let registration = {
            let mut inner = self.inner.borrow_mut();
            if let Some(channels) = inner.channels.as_mut() {
                channels.x.stop();
                channels.y.stop();
            }
            inner.frame_registration.take()
        };
        drop(registration);
        self.publish();
    }

    /// Animates so item `index` sits at `alignment` inside the padded viewport.
    pub fn animate_to_item(
        &self,
        index: usize,
        alignment: Alignment,
        padding: PaddingValues,
    ) -> JoinAxes {
        match self.item_target(index, alignment, padding) {
            Some(target) => self.animate_to(Some(target.x), Some(target.y)),
            None => {
                log::warn!("LazyPlane: animate_to_item({index}) before first layout");
                self.settled_now(AnimationEndReason::Interrupted)
            }
        }
    }

    /// Jumps so item `index` sits at `alignment` inside the padded viewport.
    pub fn snap_to_item(&self, index: usize, alignment: Alignment, padding: PaddingValues) {
        match self.item_target(index, alignment, padding) {
            Some(target) => self.snap_to(Some(target.x), Some(target.y)),
            None => log::warn!("LazyPlane: snap_to_item({index}) before first layout"),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Observation
    // ─────────────────────────────────────────────────────────────────────

    /// Last published snapshot, `None` before the first bounds update.
    pub fn translate(&self) -> Option<Translate> {
        self.inner.borrow().translate
    }

    pub fn value_x(&self) -> f32 {
        self.read_channels(|channels| channels.x.value())
    }

    pub fn value_y(&self) -> f32 {
        self.read_channels(|channels| channels.y.value())
    }

    pub fn max_x(&self) -> f32 {
        self.read_channels(|channels| finite_or_zero(channels.x.upper_bound()))
    }

    pub fn max_y(&self) -> f32 {
        self.read_channels(|channels| finite_or_zero(channels.y.upper_bound()))
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.borrow().channels.is_some()
    }

    pub fn is_animation_running(&self) -> bool {
        self.inner
            .borrow()
            .channels
            .as_ref()
            .is_some_and(Channels::is_running)
    }

    /// Registers `observer` for every newly published snapshot.
    pub fn add_translate_observer(&self, observer: impl Fn(Translate) + 'static) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_observer_id;
        inner.next_observer_id += 1;
        inner.observers.push((id, Rc::new(observer)));
        id
    }

    pub fn remove_translate_observer(&self, id: u64) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.observers.len();
        inner.observers.retain(|(observer_id, _)| *observer_id != id);
        inner.observers.len() != before
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    fn with_channels<R>(
        &self,
        command: &str,
        f: impl FnOnce(&mut Channels, &LazyPlaneStateConfig) -> R,
    ) -> Option<R> {
        let mut inner = self.inner.borrow_mut();
        let config = inner.config;
        match inner.channels.as_mut() {
            Some(channels) => Some(f(channels, &config)),
            None => {
                log::warn!("LazyPlane: {command} ignored before first layout");
                None
            }
        }
    }

    fn read_channels(&self, f: impl FnOnce(&Channels) -> f32) -> f32 {
        self.inner.borrow().channels.as_ref().map_or(0.0, f)
    }

    fn item_target(
        &self,
        index: usize,
        alignment: Alignment,
        padding: PaddingValues,
    ) -> Option<Point> {
        let (provider, current) = {
            let inner = self.inner.borrow();
            let provider = Rc::clone(inner.position_provider.as_ref()?);
            (provider, inner.channels.as_ref()?.current())
        };
        Some(provider.get_offset(index, alignment, padding, current))
    }

    fn settled_now(&self, reason: AnimationEndReason) -> JoinAxes {
        let current = {
            let inner = self.inner.borrow();
            inner
                .channels
                .as_ref()
                .map_or(Point::ZERO, Channels::current)
        };
        JoinAxes::new(
            AnimationJob::completed(AnimationResult::new(reason, current.x)),
            AnimationJob::completed(AnimationResult::new(reason, current.y)),
        )
    }

    fn start_motion(&self, joined: Option<JoinAxes>) -> JoinAxes {
        match joined {
            Some(joined) => {
                self.publish();
                if self.is_animation_running() {
                    self.ensure_frame_loop();
                }
                joined
            }
            None => self.settled_now(AnimationEndReason::Interrupted),
        }
    }

    fn ensure_frame_loop(&self) {
        let clock = {
            let inner = self.inner.borrow();
            if inner.frame_registration.is_some() {
                return;
            }
            inner.runtime.frame_clock()
        };
        let weak: Weak<RefCell<PlaneStateInner>> = Rc::downgrade(&self.inner);
        let registration = clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(inner) = weak.upgrade() {
                LazyPlaneState { inner }.on_frame(frame_time_nanos);
            }
        });
        if registration.is_active() {
            self.inner.borrow_mut().frame_registration = Some(registration);
        } else {
            log::warn!("LazyPlane: runtime is gone, animation cannot advance");
        }
    }

    fn on_frame(&self, frame_time_nanos: u64) {
        let (fired, running) = {
            let mut inner = self.inner.borrow_mut();
            let fired = inner.frame_registration.take();
            let running = match inner.channels.as_mut() {
                Some(channels) => {
                    let x_running = channels.x.on_frame(frame_time_nanos);
                    let y_running = channels.y.on_frame(frame_time_nanos);
                    x_running || y_running
                }
                None => false,
            };
            (fired, running)
        };
        drop(fired);
        self.publish();
        if running {
            self.ensure_frame_loop();
        }
    }

    fn publish(&self) {
        let (snapshot, observers) = {
            let mut inner = self.inner.borrow_mut();
            let Some(snapshot) = inner.channels.as_ref().map(Channels::snapshot) else {
                return;
            };
            if inner.translate == Some(snapshot) {
                return;
            }
            inner.translate = Some(snapshot);
            let observers: Vec<TranslateObserver> = inner
                .observers
                .iter()
                .map(|(_, observer)| Rc::clone(observer))
                .collect();
            (snapshot, observers)
        };
        for observer in observers {
            observer(snapshot);
        }
    }
}

impl std::fmt::Debug for LazyPlaneState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        let running = inner.channels.as_ref().is_some_and(Channels::is_running);
        f.debug_struct("LazyPlaneState")
            .field("translate", &inner.translate)
            .field("running", &running)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn valid_target(target: Option<f32>) -> Option<f32> {
    target.filter(|value| !value.is_nan())
}

#[cfg(test)]
#[path = "tests/lazy_plane_state_tests.rs"]
mod tests;
