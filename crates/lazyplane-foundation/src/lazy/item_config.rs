//! Declared geometry of a single plane item.

use lazyplane_ui_graphics::{Point, Size};

/// Extent of an item along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// Fixed size in px.
    Absolute(f32),
    /// Fraction of the parent extent on the same axis.
    Relative(f32),
}

impl Dimension {
    /// Resolves against `parent`. A relative dimension without a parent is 0.
    #[inline]
    pub fn resolve(self, parent: Option<f32>) -> f32 {
        match self {
            Dimension::Absolute(px) => px,
            Dimension::Relative(fraction) => parent.map_or(0.0, |parent| parent * fraction),
        }
    }

    #[inline]
    pub fn resolve_in(self, parent: f32) -> f32 {
        self.resolve(Some(parent))
    }
}

impl From<f32> for Dimension {
    fn from(px: f32) -> Self {
        Dimension::Absolute(px)
    }
}

/// Position and size of an item in plane coordinates, plus its scroll locks.
///
/// A locked axis does not move with the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry {
    pub x: f32,
    pub y: f32,
    pub width: Dimension,
    pub height: Dimension,
    pub lock_horizontal: bool,
    pub lock_vertical: bool,
}

impl ItemGeometry {
    pub fn new(x: f32, y: f32, width: Dimension, height: Dimension) -> Self {
        Self {
            x,
            y,
            width,
            height,
            lock_horizontal: false,
            lock_vertical: false,
        }
    }

    /// Geometry with both dimensions in px.
    pub fn absolute(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (width, height) = (Dimension::Absolute(width), Dimension::Absolute(height));
        Self::new(x, y, width, height)
    }

    pub fn lock_horizontal(mut self) -> Self {
        self.lock_horizontal = true;
        self
    }

    pub fn lock_vertical(mut self) -> Self {
        self.lock_vertical = true;
        self
    }

    /// Locks both axes, producing an overlay that is always visible.
    pub fn pinned(self) -> Self {
        self.lock_horizontal().lock_vertical()
    }

    pub fn is_pinned(&self) -> bool {
        self.lock_horizontal && self.lock_vertical
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn resolve_size(&self, parent: Option<Size>) -> Size {
        Size::new(
            self.width.resolve(parent.map(|size| size.width)),
            self.height.resolve(parent.map(|size| size.height)),
        )
    }

    /// Right and bottom edges with relative dimensions counted as 0.
    pub fn far_edges(&self) -> Point {
        let size = self.resolve_size(None);
        Point::new(self.x + size.width, self.y + size.height)
    }
}
