//! Completion futures for per-axis animations.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

/// Why an animation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEndReason {
    /// Reached its target, or the decay ran out of velocity.
    Finished,
    /// Hit a bound and came to rest on it.
    BoundReached,
    /// Preempted by another command on the same channel.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationResult {
    pub end_reason: AnimationEndReason,
    pub end_value: f32,
}

impl AnimationResult {
    pub fn new(end_reason: AnimationEndReason, end_value: f32) -> Self {
        Self {
            end_reason,
            end_value,
        }
    }
}

#[derive(Default)]
struct JobSlot {
    result: Option<AnimationResult>,
    waker: Option<Waker>,
}

/// Future resolving when a channel's animation ends, for whatever reason.
///
/// Dropping the job does not stop the animation.
#[derive(Clone)]
pub struct AnimationJob {
    slot: Rc<RefCell<JobSlot>>,
}

/// Write side of an [`AnimationJob`], held by the running channel.
pub(crate) struct JobCompleter {
    slot: Rc<RefCell<JobSlot>>,
}

impl AnimationJob {
    pub(crate) fn pending() -> (Self, JobCompleter) {
        let slot = Rc::new(RefCell::new(JobSlot::default()));
        (
            Self { slot: slot.clone() },
            JobCompleter { slot },
        )
    }

    /// A job that has already ended with `result`.
    pub fn completed(result: AnimationResult) -> Self {
        Self {
            slot: Rc::new(RefCell::new(JobSlot {
                result: Some(result),
                waker: None,
            })),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.slot.borrow().result.is_some()
    }

    pub fn result(&self) -> Option<AnimationResult> {
        self.slot.borrow().result
    }
}

impl JobCompleter {
    pub(crate) fn complete(self, result: AnimationResult) {
        let waker = {
            let mut slot = self.slot.borrow_mut();
            slot.result = Some(result);
            slot.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl Future for AnimationJob {
    type Output = AnimationResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.borrow_mut();
        match slot.result {
            Some(result) => Poll::Ready(result),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

/// Joins the X and Y jobs of a two-axis command.
pub struct JoinAxes {
    x: AnimationJob,
    y: AnimationJob,
}

impl JoinAxes {
    pub fn new(x: AnimationJob, y: AnimationJob) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &AnimationJob {
        &self.x
    }

    pub fn y(&self) -> &AnimationJob {
        &self.y
    }

    pub fn is_complete(&self) -> bool {
        self.x.is_complete() && self.y.is_complete()
    }

    /// Both results, once both axes have ended.
    pub fn results(&self) -> Option<(AnimationResult, AnimationResult)> {
        Some((self.x.result()?, self.y.result()?))
    }
}

impl Future for JoinAxes {
    type Output = (AnimationResult, AnimationResult);

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let x = Pin::new(&mut self.x).poll(cx);
        let y = Pin::new(&mut self.y).poll(cx);
        match (x, y) {
            (Poll::Ready(x), Poll::Ready(y)) => Poll::Ready((x, y)),
            _ => Poll::Pending,
        }
    }
}
