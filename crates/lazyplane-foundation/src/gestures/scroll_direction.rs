use lazyplane_ui_graphics::{Point, Velocity};

/// Axes a plane accepts drags and flings on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    #[default]
    Both,
    Horizontal,
    Vertical,
}

impl ScrollDirection {
    pub fn allows_horizontal(self) -> bool {
        !matches!(self, ScrollDirection::Vertical)
    }

    pub fn allows_vertical(self) -> bool {
        !matches!(self, ScrollDirection::Horizontal)
    }

    /// Zeroes the suppressed axis of a drag delta.
    pub fn mask_offset(self, offset: Point) -> Point {
        let (x, y) = self.mask(offset.x, offset.y);
        Point::new(x, y)
    }

    /// Zeroes the suppressed axis of a release velocity.
    pub fn mask_velocity(self, velocity: Velocity) -> Velocity {
        let (x, y) = self.mask(velocity.x, velocity.y);
        Velocity::new(x, y)
    }

    fn mask(self, x: f32, y: f32) -> (f32, f32) {
        match self {
            ScrollDirection::Both => (x, y),
            ScrollDirection::Horizontal => (x, 0.0),
            ScrollDirection::Vertical => (0.0, y),
        }
    }
}
