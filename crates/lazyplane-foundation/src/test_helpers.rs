//! Deterministic frame driving for tests and headless hosts.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lazyplane_core::{Runtime, RuntimeHandle, RuntimeScheduler};

/// One frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Scheduler that only counts frame requests.
#[derive(Debug, Default)]
pub struct TestScheduler {
    requests: AtomicUsize,
}

impl TestScheduler {
    pub fn frame_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl RuntimeScheduler for TestScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

/// Owns a runtime and advances its clock by fixed frames.
pub struct FrameDriver {
    scheduler: Arc<TestScheduler>,
    runtime: Runtime,
    frame_time_nanos: Cell<u64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        let scheduler = Arc::new(TestScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        Self {
            scheduler,
            runtime,
            frame_time_nanos: Cell::new(0),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn scheduler(&self) -> &TestScheduler {
        &self.scheduler
    }

    /// Timestamp of the last pumped frame.
    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos.get()
    }

    /// Runs queued tasks without advancing the clock.
    pub fn drain_ui(&self) {
        self.runtime.handle().drain_ui();
    }

    /// Advances `count` frames, draining frame callbacks then UI tasks each time.
    pub fn pump_frames(&self, count: usize) {
        let handle = self.runtime.handle();
        handle.drain_ui();
        for _ in 0..count {
            let time = self.frame_time_nanos.get() + FRAME_NANOS;
            self.frame_time_nanos.set(time);
            handle.drain_frame_callbacks(time);
            handle.drain_ui();
        }
    }

    /// Pumps until no frame callbacks remain or `max_frames` is hit.
    ///
    /// Returns the number of frames pumped.
    pub fn pump_until_idle(&self, max_frames: usize) -> usize {
        let handle = self.runtime.handle();
        handle.drain_ui();
        let mut frames = 0;
        while frames < max_frames && handle.has_frame_callbacks() {
            self.pump_frames(1);
            frames += 1;
        }
        frames
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
