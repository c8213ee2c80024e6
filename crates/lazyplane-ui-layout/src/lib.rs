//! Layout contracts & policies for LazyPlane

mod alignment;
mod constraints;
mod direction;
mod padding;

pub use alignment::*;
pub use constraints::*;
pub use direction::*;
pub use padding::*;

pub mod prelude {
    pub use crate::alignment::Alignment;
    pub use crate::constraints::Constraints;
    pub use crate::direction::LayoutDirection;
    pub use crate::padding::PaddingValues;
}
