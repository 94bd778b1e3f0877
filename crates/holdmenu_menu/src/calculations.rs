//! Pure geometry calculators
//!
//! Everything in this module is a deterministic function of its arguments:
//! same inputs, same outputs, no hidden state. The lifecycle calls these once
//! per activation; renderers may call the placement helpers every frame.

use holdmenu_core::geometry::{
    AnchorPosition, AnchorRect, HorizontalEdge, SafeAreaInsets, VerticalEdge, Viewport,
};
use holdmenu_core::style::StyleGuide;

/// Below this spread between the left/right center distances the anchor is
/// considered horizontally centered. Ties at the tolerance resolve to center.
pub const TRANSFORM_ORIGIN_TOLERANCE: f32 = 10.0;

/// Resolve which corner/edge of the anchor the overlay expands from
///
/// `window_width` is the dimension running across the device in its current
/// orientation ([`Viewport::horizontal_extent`]). Skipped entirely when the
/// caller pins an anchor position.
pub fn transform_origin(
    anchor_x: f32,
    anchor_width: f32,
    window_width: f32,
    force_bottom: bool,
) -> AnchorPosition {
    let distance_to_left = (anchor_x + anchor_width / 2.0).round();
    let distance_to_right = (window_width - distance_to_left).round();

    let vertical = if force_bottom {
        VerticalEdge::Bottom
    } else {
        VerticalEdge::Top
    };

    let spread = (distance_to_left - distance_to_right).abs();
    let horizontal = if spread <= TRANSFORM_ORIGIN_TOLERANCE {
        HorizontalEdge::Center
    } else if distance_to_left < distance_to_right {
        HorizontalEdge::Left
    } else {
        HorizontalEdge::Right
    };

    AnchorPosition::from_edges(vertical, horizontal)
}

/// Estimated menu height from the item and separator counts
///
/// Every pair of adjacent items gets a one-pixel hairline divider (the
/// `n - 1` term); items explicitly flagged with a separator add one spacing
/// unit of extra gap on top of that.
pub fn menu_height(item_count: usize, separator_count: usize, style: &StyleGuide) -> f32 {
    if item_count == 0 {
        // An empty list never activates; report no height rather than the
        // formula's negative hairline term.
        return 0.0;
    }
    let n = item_count as f32;
    style.item_height() * n + (n - 1.0) + separator_count as f32 * style.spacing
}

/// Vertical correction keeping the overlay inside the safe viewport region
///
/// Negative moves the overlay up, positive moves it down, zero leaves it
/// where the anchor put it. With `disable_move` the correction is skipped
/// unconditionally.
pub fn clamped_translation(
    position: AnchorPosition,
    anchor: AnchorRect,
    menu_height: f32,
    viewport: &Viewport,
    insets: SafeAreaInsets,
    style: &StyleGuide,
    disable_move: bool,
) -> f32 {
    if disable_move {
        return 0.0;
    }

    let window_height = viewport.vertical_extent();

    if position.is_top() {
        // Menu hangs below the anchor; push up if its bottom edge overflows.
        let top_transform =
            anchor.y + anchor.height + menu_height + style.spacing + insets.bottom;
        if top_transform > window_height {
            window_height - top_transform
        } else {
            0.0
        }
    } else {
        // Menu rises above the anchor; push down if its top edge underflows.
        let bottom_transform = anchor.y - menu_height - insets.top;
        if bottom_transform < 0.0 {
            -bottom_transform + style.spacing * 2.0
        } else {
            0.0
        }
    }
}

/// Where the overlay wrapper sits relative to the anchor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPlacement {
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

/// Overlay wrapper frame: below the anchor for top positions, above for
/// bottom positions, always one spacing unit away
pub fn overlay_placement(
    position: AnchorPosition,
    anchor: AnchorRect,
    style: &StyleGuide,
) -> OverlayPlacement {
    let top = if position.is_top() {
        anchor.y + anchor.height + style.spacing
    } else {
        anchor.y - style.spacing
    };
    OverlayPlacement {
        top,
        left: anchor.x,
        width: anchor.width,
    }
}

/// Horizontal offset of the menu list inside the overlay wrapper
pub fn list_offset_x(position: AnchorPosition, anchor_width: f32, menu_width: f32) -> f32 {
    match position.horizontal() {
        HorizontalEdge::Right => menu_width + anchor_width,
        HorizontalEdge::Left => 0.0,
        HorizontalEdge::Center => -anchor_width - menu_width / 2.0 + anchor_width / 2.0,
    }
}

/// A translate pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

/// Begin/end translations for the menu's scale-in so growth appears to
/// originate at the anchor position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTransforms {
    pub begin: Translation,
    pub end: Translation,
}

pub fn entrance_transforms(
    position: AnchorPosition,
    anchor_width: f32,
    menu_width: f32,
    menu_height: f32,
) -> EntranceTransforms {
    let half_width = menu_width / 2.0;
    let half_height = menu_height / 2.0;

    let begin_x = match position.horizontal() {
        HorizontalEdge::Right => half_width,
        HorizontalEdge::Left => -half_width,
        HorizontalEdge::Center => anchor_width,
    };
    let end_x = match position.horizontal() {
        HorizontalEdge::Right => -half_width,
        HorizontalEdge::Left => half_width,
        HorizontalEdge::Center => 0.0,
    };
    let end_y = match position.vertical() {
        VerticalEdge::Top => half_height,
        VerticalEdge::Bottom => -half_height,
    };

    EntranceTransforms {
        begin: Translation {
            x: begin_x,
            y: -half_height,
        },
        end: Translation { x: end_x, y: end_y },
    }
}
