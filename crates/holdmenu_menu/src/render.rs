//! Per-frame render snapshots
//!
//! The engine renders nothing; these are the values the two consumers sample
//! every frame. The held-element renderer applies [`HeldItemFrame`] to the
//! element in place; the overlay renderer positions the detached menu from
//! [`OverlayFrame`].

/// What the held element looks like this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeldItemFrame {
    /// Press-feedback scale (1.0 at rest)
    pub scale: f32,
    /// Zero while the overlay copy is showing
    pub opacity: f32,
}

/// Where and how the overlay draws this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayFrame {
    /// Wrapper top edge in viewport coordinates
    pub top: f32,
    /// Wrapper left edge in viewport coordinates
    pub left: f32,
    /// Wrapper width (the anchor's width)
    pub width: f32,
    /// Animated vertical correction applied on top of the wrapper position
    pub translate_y: f32,
    pub opacity: f32,
    /// Horizontal offset of the menu list inside the wrapper
    pub list_offset_x: f32,
    /// Whether the overlay should receive input this frame
    pub pointer_events: bool,
}

#[cfg(test)]
mod tests {
    use crate::gesture::GestureEvent;
    use crate::item::{MenuItem, MenuSpec};
    use crate::lifecycle::GestureLifecycle;
    use holdmenu_animation::AnimationDriver;
    use holdmenu_core::geometry::{AnchorRect, Viewport};
    use holdmenu_core::measure::{AnchorHandle, AnchorMeasurer};
    use std::sync::Arc;

    struct FixedMeasurer(AnchorRect);

    impl AnchorMeasurer for FixedMeasurer {
        fn measure(&self, _handle: AnchorHandle) -> Option<AnchorRect> {
            Some(self.0)
        }
    }

    #[test]
    fn test_frames_reflect_activation() {
        let driver = AnimationDriver::new();
        let lifecycle = GestureLifecycle::builder(driver.handle())
            .items(MenuSpec::new().item(MenuItem::new("Copy")))
            .viewport(Viewport::new(400.0, 800.0))
            .measurer(Arc::new(FixedMeasurer(AnchorRect::new(
                30.0, 100.0, 120.0, 40.0,
            ))))
            .build();

        // At rest: held element fully visible, overlay hidden
        let held = lifecycle.held_item_frame();
        assert_eq!(held.scale, 1.0);
        assert_eq!(held.opacity, 1.0);
        assert_eq!(lifecycle.overlay_frame().opacity, 0.0);

        lifecycle.handle_event(GestureEvent::Begin);
        lifecycle.handle_event(GestureEvent::Activate);
        for _ in 0..20 {
            driver.tick(1000.0 / 60.0);
            lifecycle.poll();
        }

        // Active: visibility handed off to the overlay, wrapper placed one
        // spacing unit below the anchor
        let held = lifecycle.held_item_frame();
        assert_eq!(held.opacity, 0.0);

        let overlay = lifecycle.overlay_frame();
        assert_eq!(overlay.opacity, 1.0);
        assert!(overlay.pointer_events);
        assert_eq!(overlay.top, 148.0);
        assert_eq!(overlay.left, 30.0);
        assert_eq!(overlay.width, 120.0);
    }
}
