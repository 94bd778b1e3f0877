//! Geometry primitives for anchor measurement and overlay placement
//!
//! All coordinates are in viewport space: origin at the top-left corner,
//! y growing downward, matching what platform measurement APIs report.

/// Screen-space rectangle of the held (anchor) element
///
/// Produced at most once per activation cycle by an [`crate::AnchorMeasurer`]
/// and immutable for the remainder of that cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal center in viewport coordinates
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Bottom edge in viewport coordinates
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Vertical half of an anchor position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Horizontal half of an anchor position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Center,
    Right,
}

/// Which corner/edge of the anchor the overlay expands from
///
/// Either pinned by the caller (never recomputed) or resolved once per
/// activation cycle and frozen until the cycle returns to idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl AnchorPosition {
    /// Default position before any measurement has happened
    pub fn default_for(force_bottom: bool) -> Self {
        if force_bottom {
            AnchorPosition::BottomRight
        } else {
            AnchorPosition::TopRight
        }
    }

    pub fn vertical(&self) -> VerticalEdge {
        match self {
            AnchorPosition::TopLeft | AnchorPosition::TopCenter | AnchorPosition::TopRight => {
                VerticalEdge::Top
            }
            AnchorPosition::BottomLeft
            | AnchorPosition::BottomCenter
            | AnchorPosition::BottomRight => VerticalEdge::Bottom,
        }
    }

    pub fn horizontal(&self) -> HorizontalEdge {
        match self {
            AnchorPosition::TopLeft | AnchorPosition::BottomLeft => HorizontalEdge::Left,
            AnchorPosition::TopCenter | AnchorPosition::BottomCenter => HorizontalEdge::Center,
            AnchorPosition::TopRight | AnchorPosition::BottomRight => HorizontalEdge::Right,
        }
    }

    pub fn is_top(&self) -> bool {
        self.vertical() == VerticalEdge::Top
    }

    pub fn is_bottom(&self) -> bool {
        self.vertical() == VerticalEdge::Bottom
    }

    /// Combine a vertical choice with a horizontal edge
    pub fn from_edges(vertical: VerticalEdge, horizontal: HorizontalEdge) -> Self {
        match (vertical, horizontal) {
            (VerticalEdge::Top, HorizontalEdge::Left) => AnchorPosition::TopLeft,
            (VerticalEdge::Top, HorizontalEdge::Center) => AnchorPosition::TopCenter,
            (VerticalEdge::Top, HorizontalEdge::Right) => AnchorPosition::TopRight,
            (VerticalEdge::Bottom, HorizontalEdge::Left) => AnchorPosition::BottomLeft,
            (VerticalEdge::Bottom, HorizontalEdge::Center) => AnchorPosition::BottomCenter,
            (VerticalEdge::Bottom, HorizontalEdge::Right) => AnchorPosition::BottomRight,
        }
    }
}

impl Default for AnchorPosition {
    fn default() -> Self {
        AnchorPosition::TopRight
    }
}

/// Device orientation derived from window dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Window dimensions in viewport coordinates
///
/// The raw width/height pair as reported by the platform. Calculators always
/// go through [`Viewport::horizontal_extent`] / [`Viewport::vertical_extent`]
/// so that geometry stays correct when the reported dimensions do not swap on
/// rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square viewports count as portrait
    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// The dimension running across the device in its current orientation
    pub fn horizontal_extent(&self) -> f32 {
        match self.orientation() {
            Orientation::Portrait => self.width,
            Orientation::Landscape => self.height,
        }
    }

    /// The dimension running down the device in its current orientation
    pub fn vertical_extent(&self) -> f32 {
        match self.orientation() {
            Orientation::Portrait => self.height,
            Orientation::Landscape => self.width,
        }
    }
}

/// Reserved margins at the top/bottom of the viewport (notches, home bars)
///
/// Missing insets are simply zero; they are never an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
}

impl SafeAreaInsets {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}
