//! Geometry in the global Quartz coordinate space.
//!
//! Origin is the top-left corner of the primary display and y grows
//! downwards, matching `kCGWindowBounds` and `CGDisplayBounds`.

/// A point in global display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        !(self.size.width > 0.0 && self.size.height > 0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Half-open containment: left and top edges are inside, right and
    /// bottom edges are not, so a point on the seam between two side-by-side
    /// displays belongs to exactly one of them.
    pub fn contains(&self, p: Point) -> bool {
        !self.is_empty()
            && p.x >= self.min_x()
            && p.x < self.max_x()
            && p.y >= self.min_y()
            && p.y < self.max_y()
    }
}

/// Decides whether a window lives on a display.
///
/// A window belongs to the display that holds its centre point. Empty
/// windows belong nowhere.
pub fn window_belongs_to_display(window: &Rect, display: &Rect) -> bool {
    !window.is_empty() && display.contains(window.center())
}

/// Origin that centres a child of `child` size inside `container`.
///
/// The result may lie outside the container when the child is larger.
pub fn center_origin(container: &Rect, child: &Size) -> Point {
    Point::new(
        container.origin.x + (container.size.width - child.width) / 2.0,
        container.origin.y + (container.size.height - child.height) / 2.0,
    )
}
