use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingScheduler {
    frames: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.frames.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn frame_callbacks_run_once_with_frame_time() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    handle.register_frame_callback(move |time| sink.borrow_mut().push(time));
    assert!(runtime.needs_frame());

    handle.drain_frame_callbacks(16);
    handle.drain_frame_callbacks(32);

    assert_eq!(*seen.borrow(), vec![16]);
    assert!(!runtime.needs_frame());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let rearm = handle.clone();
    handle.register_frame_callback(move |time| {
        sink.borrow_mut().push(time);
        let sink = Rc::clone(&sink);
        rearm.register_frame_callback(move |time| sink.borrow_mut().push(time));
    });

    handle.drain_frame_callbacks(1);
    assert_eq!(*seen.borrow(), vec![1]);
    handle.drain_frame_callbacks(2);
    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let fired = Rc::new(Cell::new(false));

    let flag = Rc::clone(&fired);
    let registration = runtime
        .frame_clock()
        .with_frame_nanos(move |_| flag.set(true));
    assert!(registration.is_active());
    drop(registration);

    runtime.handle().drain_frame_callbacks(10);
    assert!(!fired.get());
    assert!(!runtime.needs_frame());
}

#[test]
fn spawned_future_resumes_on_next_frame() {
    let scheduler = Arc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let handle = runtime.handle();
    let result = Rc::new(Cell::new(None));

    let clock = runtime.frame_clock();
    let slot = Rc::clone(&result);
    let task = handle.spawn_ui(async move {
        let time = clock.next_frame().await;
        slot.set(Some(time));
    });
    assert!(task.is_some());

    handle.drain_ui();
    assert_eq!(result.get(), None);
    assert!(handle.has_frame_callbacks());

    let before = scheduler.frames.load(Ordering::SeqCst);
    handle.drain_frame_callbacks(42);
    assert!(scheduler.frames.load(Ordering::SeqCst) > before);

    handle.drain_ui();
    assert_eq!(result.get(), Some(42));
    assert!(!handle.has_pending_ui());
}

#[test]
fn cancelled_task_is_never_polled_again() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let polled = Rc::new(Cell::new(0));

    let counter = Rc::clone(&polled);
    let clock = runtime.frame_clock();
    let task = handle
        .spawn_ui(async move {
            counter.set(counter.get() + 1);
            clock.next_frame().await;
            counter.set(counter.get() + 1);
        })
        .expect("runtime alive");

    handle.drain_ui();
    assert_eq!(polled.get(), 1);
    task.cancel();

    handle.drain_frame_callbacks(1);
    handle.drain_ui();
    assert_eq!(polled.get(), 1);
}

#[test]
fn handle_is_inert_after_runtime_drop() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    assert!(handle.register_frame_callback(|_| {}).is_none());
    assert!(handle.spawn_ui(async {}).is_none());

    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    handle.enqueue_ui_task(Box::new(move || flag.set(true)));
    assert!(ran.get());
}
