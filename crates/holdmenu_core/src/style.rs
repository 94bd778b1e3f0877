//! Style guide constants supplied by the caller
//!
//! The engine does not render anything itself, but menu height estimation
//! depends on typography: one menu row is one line of callout text plus fixed
//! padding. Callers embedding the engine in a themed app override the
//! defaults; the defaults mirror a stock mobile style sheet.

use crate::geometry::Viewport;

/// Font size / line height pair for one text role
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeScale {
    pub font_size: f32,
    pub line_height: f32,
}

/// The text roles the menu renders with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub body: TypeScale,
    pub callout: TypeScale,
    pub callout2: TypeScale,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            body: TypeScale {
                font_size: 17.0,
                line_height: 20.0,
            },
            callout: TypeScale {
                font_size: 16.0,
                line_height: 20.0,
            },
            callout2: TypeScale {
                font_size: 14.0,
                line_height: 18.0,
            },
        }
    }
}

/// Spacing and typography constants that feed the geometry calculators
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleGuide {
    /// Base spacing unit, also the gap added per flagged separator
    pub spacing: f32,
    /// System font scale multiplier (accessibility setting)
    pub font_scale: f32,
    pub typography: Typography,
}

impl Default for StyleGuide {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            font_scale: 1.0,
            typography: Typography::default(),
        }
    }
}

impl StyleGuide {
    /// Height of a single menu row: one callout line plus fixed padding
    pub fn item_height(&self) -> f32 {
        self.typography.callout.line_height * self.font_scale + self.spacing * 2.5
    }

    /// Menu list width: 60% of the orientation-matching window width
    pub fn menu_width(&self, viewport: &Viewport) -> f32 {
        viewport.horizontal_extent() * 60.0 / 100.0
    }
}
