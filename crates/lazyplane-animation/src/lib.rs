//! Animation system for LazyPlane
//!
//! Time-based tweens, spring physics and decay, applied to bounded scalar
//! channels that an owner advances frame by frame.

mod animatable;
mod animation;
mod decay_spec;
mod job;

pub use animatable::Animatable;
pub use animation::*;
pub use decay_spec::{ExponentialDecaySpec, FloatDecayAnimationSpec};
pub use job::{AnimationEndReason, AnimationJob, AnimationResult, JoinAxes};

pub mod prelude {
    pub use crate::{
        Animatable, AnimationEndReason, AnimationJob, AnimationResult, AnimationSpec,
        AnimationType, Easing, ExponentialDecaySpec, JoinAxes, SpringSpec,
    };
}
