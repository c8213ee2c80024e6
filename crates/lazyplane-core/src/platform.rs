//! Platform abstraction for runtime services.
//!
//! The host implements [`RuntimeScheduler`] to learn when the runtime wants
//! another frame, and then drives the runtime from its own clock.

/// Schedules work for the runtime.
///
/// Wakers created by the runtime hold the scheduler, so implementations must
/// be safe to share across threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}
