//! Cooperative single-threaded runtime for LazyPlane.
//!
//! Work makes progress only when the host advances the clock: frame callbacks
//! run from [`RuntimeHandle::drain_frame_callbacks`] and spawned futures are
//! polled from [`RuntimeHandle::drain_ui`].

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock, NextFrame};
pub use platform::RuntimeScheduler;
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle, TaskHandle};

pub type FrameCallbackId = u64;

pub mod prelude {
    pub use crate::{FrameClock, Runtime, RuntimeHandle, RuntimeScheduler};
}
