//! holdmenu engine
//!
//! Positions and animates a contextual menu anchored to a pressed on-screen
//! element:
//!
//! - **Geometry Calculators**: transform-origin resolution, menu height
//!   estimation, and the viewport clamping translation - all pure functions
//! - **Gesture Lifecycle**: a per-element state machine consuming recognizer
//!   events and publishing geometry to the shared menu context
//! - **Animation Sequencer**: the press-feedback pulse and the overlay
//!   entrance/exit, coordinated through one-shot driver completions
//! - **Render Snapshots**: the per-frame values the held-element and overlay
//!   renderers sample
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use holdmenu_animation::AnimationDriver;
//! use holdmenu_core::geometry::{AnchorRect, Viewport};
//! use holdmenu_core::measure::AnchorHandle;
//! use holdmenu_menu::{GestureEvent, GestureLifecycle, MenuItem, MenuSpec};
//!
//! let driver = AnimationDriver::new();
//! let lifecycle = GestureLifecycle::builder(driver.handle())
//!     .items(
//!         MenuSpec::new()
//!             .item(MenuItem::new("Reply"))
//!             .item(MenuItem::new("Copy").with_separator())
//!             .item(MenuItem::new("Delete").destructive()),
//!     )
//!     .viewport(Viewport::new(400.0, 800.0))
//!     .measurer(Arc::new(|_: AnchorHandle| {
//!         Some(AnchorRect::new(24.0, 300.0, 160.0, 48.0))
//!     }))
//!     .build();
//!
//! // The host routes recognizer events in and ticks the driver per frame.
//! lifecycle.handle_event(GestureEvent::Begin);
//! lifecycle.handle_event(GestureEvent::Activate);
//! while driver.tick(1000.0 / 60.0) {
//!     lifecycle.poll();
//! }
//! assert!(lifecycle.context().is_active());
//! ```

pub mod calculations;
pub mod gesture;
pub mod item;
pub mod lifecycle;
pub mod render;
pub mod sequencer;

pub use calculations::{
    clamped_translation, entrance_transforms, list_offset_x, menu_height, overlay_placement,
    transform_origin, EntranceTransforms, OverlayPlacement, Translation,
    TRANSFORM_ORIGIN_TOLERANCE,
};
pub use gesture::{recognizer_for, GestureEvent, RecognizerSpec};
pub use item::{MenuItem, MenuSpec};
pub use lifecycle::{GestureLifecycle, GestureLifecycleBuilder, LifecycleState};
pub use render::{HeldItemFrame, OverlayFrame};
pub use sequencer::{
    AnimationSequencer, SCALE_DOWN_DURATION_MS, SCALE_DOWN_VALUE, TRANSFORM_DURATION_MS,
};
