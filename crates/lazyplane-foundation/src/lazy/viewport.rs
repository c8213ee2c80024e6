//! Viewport size handling for plane measurement.
//!
//! An unbounded constraint has no viewport to cull against, so the handler
//! falls back to the content extent on that axis.

/// Effective viewport size along one axis.
#[derive(Clone, Copy, Debug)]
pub struct ViewportHandler {
    effective_size: f32,
    is_infinite: bool,
}

impl ViewportHandler {
    /// `viewport_size` is the raw max constraint, `content_extent` the padded
    /// content size on the same axis.
    pub fn new(viewport_size: f32, content_extent: f32) -> Self {
        let is_infinite = !viewport_size.is_finite();
        let effective_size = if is_infinite {
            log::warn!(
                "LazyPlane: Detected infinite viewport ({}), using content extent {}. \
                 Consider placing LazyPlane in a constrained container.",
                viewport_size,
                content_extent
            );
            content_extent.max(0.0)
        } else {
            viewport_size.max(0.0)
        };
        Self {
            effective_size,
            is_infinite,
        }
    }

    #[inline]
    pub fn effective_size(&self) -> f32 {
        self.effective_size
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.is_infinite
    }
}
