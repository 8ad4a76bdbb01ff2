//! Geometry: measured layouts, orientation and the size/spacing primitives
//! used by view nodes.

/// Measured bounding box of the swiper, reported by the host after a layout pass
///
/// Units are layout pixels. A width or height of 0 means "not yet measured".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Layout of a given size at the origin
    pub const fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Whether both dimensions are known and non-zero
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Dimension along the movement axis
    pub fn axis_size(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Axis along which slides are laid out and swiped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Sign applied to `axis_size * index` to get the settled offset
    ///
    /// Vertical carousels always scroll "up" (negative). Horizontal ones scroll
    /// left in left-to-right layouts and right in right-to-left layouts.
    pub const fn direction_sign(self, rtl: bool) -> f32 {
        match self {
            Orientation::Vertical => -1.0,
            Orientation::Horizontal if rtl => 1.0,
            Orientation::Horizontal => -1.0,
        }
    }

    /// Pick the component of a 2D translation that lies on this axis
    pub fn component(self, translation: glam::Vec2) -> f32 {
        match self {
            Orientation::Horizontal => translation.x,
            Orientation::Vertical => translation.y,
        }
    }

    /// Build a 2D translation that only moves along this axis
    pub fn along(self, value: f32) -> glam::Vec2 {
        match self {
            Orientation::Horizontal => glam::Vec2::new(value, 0.0),
            Orientation::Vertical => glam::Vec2::new(0.0, value),
        }
    }
}

/// Authoritative store of the measured slide size
///
/// Mutated only through [`LayoutTracker::measure`], which the host wires to its
/// measurement callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutTracker {
    layout: Layout,
}

impl LayoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a measurement
    ///
    /// Negative or non-finite sizes are treated as 0 (unmeasured).
    pub fn measure(&mut self, layout: Layout) {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let width = sanitize(layout.width);
        let height = sanitize(layout.height);
        if width != layout.width || height != layout.height {
            log::warn!(
                "swiper: ignoring invalid layout size {}x{}",
                layout.width,
                layout.height
            );
        }

        let x = if layout.x.is_finite() { layout.x } else { 0.0 };
        let y = if layout.y.is_finite() { layout.y } else { 0.0 };
        self.layout = Layout::new(x, y, width, height);
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_measured(&self) -> bool {
        self.layout.is_measured()
    }

    /// Size along the movement axis, or `None` until a valid measurement arrived
    pub fn axis_size(&self, orientation: Orientation) -> Option<f32> {
        self.is_measured()
            .then(|| self.layout.axis_size(orientation))
    }
}

/// Size specification for view nodes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Size {
    /// Fixed size in logical pixels
    Fixed(f32),
    /// Relative size as a fraction of parent (0.0 to 1.0)
    Relative(f32),
    /// Fill all remaining available space
    Fill,
    /// Size to the minimum that fits content
    #[default]
    FitContent,
}

impl Size {
    /// Create a fixed size in logical pixels
    pub const fn lpx(pixels: f32) -> Self {
        Self::Fixed(pixels)
    }

    /// Resolve against the parent dimension, `None` for `Fill` and `FitContent`
    pub fn try_resolve(&self, parent_size: f32) -> Option<f32> {
        match self {
            Size::Fixed(px) => Some(*px),
            Size::Relative(fraction) => Some(parent_size * fraction),
            Size::Fill | Size::FitContent => None,
        }
    }
}

/// Spacing on the four sides of a node
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    pub const ZERO: Self = Self::all(0.0);

    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn get_horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn get_vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// How a node is placed relative to its parent
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Position {
    /// Normal flow
    #[default]
    Relative,
    /// Taken out of flow, placed at `top`/`left` inside the parent
    Absolute { top: f32, left: f32 },
    /// Pinned to the viewport at `top`/`left`
    Fixed { top: f32, left: f32 },
}

/// Arrangement of a node's children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flow {
    /// Children are arranged left to right
    Row,
    /// Children are arranged top to bottom
    #[default]
    Column,
    /// Children overlap
    Stack,
}

impl From<Orientation> for Flow {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Flow::Row,
            Orientation::Vertical => Flow::Column,
        }
    }
}

/// Overflow policy for children exceeding the node's bounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
}

/// Cross/main axis alignment of children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}
