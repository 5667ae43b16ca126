//! Geometry primitives
//!
//! Document-space value types shared by the whole engine. The convention is
//! the usual screen one: y grows downward, an element's `top` is its document
//! y coordinate, and the viewport's `scroll_y` is the document y currently
//! aligned with the top of the screen.

/// A point in document space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in document space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Document y of the top edge
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Document y of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }
}

/// The visible window into the document
///
/// `scroll_y` is the document coordinate aligned with the top of the screen.
/// Observers derive all progress anchors from this plus element bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    /// Document y currently at `fraction` of the way down the screen
    /// (0.0 = top edge, 1.0 = bottom edge)
    pub fn anchor(&self, fraction: f32) -> f32 {
        self.scroll_y + self.height * fraction
    }
}
