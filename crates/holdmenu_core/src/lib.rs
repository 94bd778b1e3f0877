//! holdmenu core
//!
//! Foundational types for the press-anchored contextual menu engine:
//!
//! - **Geometry Model**: anchor rectangles, anchor positions, viewport and
//!   safe-area types used by the pure calculators
//! - **Shared Menu Context**: the single-writer geometry record published per
//!   activation and read every frame by the two render consumers
//! - **Collaborator Traits**: anchor measurement and haptic dispatch, kept as
//!   interfaces so platforms plug in their own implementations
//! - **Configuration**: activation mode, haptic style, and per-item style
//!   guide constants supplied by the caller
//!
//! # Example
//!
//! ```rust
//! use holdmenu_core::context::SharedMenuContext;
//! use holdmenu_core::geometry::{AnchorPosition, AnchorRect};
//!
//! let ctx = SharedMenuContext::new();
//!
//! // The lifecycle publishes geometry once per activation...
//! let mut geometry = ctx.geometry();
//! geometry.anchor_rect = AnchorRect::new(10.0, 20.0, 120.0, 44.0);
//! geometry.anchor_position = AnchorPosition::TopLeft;
//! ctx.set_geometry(geometry);
//!
//! // ...and renderers read whole-record snapshots on their own schedule.
//! assert_eq!(ctx.geometry().anchor_rect.width, 120.0);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod haptics;
pub mod measure;
pub mod style;

pub use config::{ActivationMode, HapticStyle, MenuConfig};
pub use context::{GeometryState, MenuSnapshot, SharedMenuContext, SubscriptionHandle};
pub use error::ActivationError;
pub use geometry::{
    AnchorPosition, AnchorRect, HorizontalEdge, Orientation, SafeAreaInsets, VerticalEdge,
    Viewport,
};
pub use haptics::{Haptics, HapticClass, NoopHaptics};
pub use measure::{AnchorHandle, AnchorMeasurer, NullMeasurer};
pub use style::{StyleGuide, TypeScale, Typography};
