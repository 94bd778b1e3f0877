//! Animation sequencer for the held element and the overlay
//!
//! Two independently timed effects share one driver: the press-feedback pulse
//! on the held element (scale), and the overlay's entrance/exit
//! (translate + opacity). The overlay translate rides a spring while the menu
//! becomes active and a fixed-duration curve on the way back; opacity swaps
//! between the held element and the overlay are delayed by the transform
//! duration while fading out so the handoff never pops.

use holdmenu_animation::{
    AnimatedValue, CompletionFn, Curve, DriverHandle, SpringConfig,
};

/// Total duration of the overlay entrance/exit transform
pub const TRANSFORM_DURATION_MS: u32 = 150;
/// Duration of the press-feedback scale-down
pub const SCALE_DOWN_DURATION_MS: u32 = 200;
/// Scale the held element shrinks to while pressed
pub const SCALE_DOWN_VALUE: f32 = 0.95;

/// Drives the four animated scalars the renderers sample every frame
pub struct AnimationSequencer {
    /// Press feedback on the held element
    item_scale: AnimatedValue,
    /// Overlay vertical translate (the clamping correction)
    overlay_translate: AnimatedValue,
    /// Overlay visibility
    overlay_opacity: AnimatedValue,
    /// Held element visibility (hidden while its overlay copy shows)
    held_opacity: AnimatedValue,
}

impl AnimationSequencer {
    pub fn new(handle: DriverHandle) -> Self {
        Self {
            item_scale: AnimatedValue::new(handle.clone(), 1.0),
            overlay_translate: AnimatedValue::new(handle.clone(), 0.0),
            overlay_opacity: AnimatedValue::new(handle.clone(), 0.0),
            held_opacity: AnimatedValue::new(handle, 1.0),
        }
    }

    /// Timed scale-down to the pressed value
    ///
    /// For hold mode this is the whole press feedback: the element stays
    /// small until activation or release. For tap modes it is the first leg
    /// of the pulse.
    pub fn press_down(&mut self, on_complete: CompletionFn) {
        self.item_scale.start(
            SCALE_DOWN_VALUE,
            Curve::timed(SCALE_DOWN_DURATION_MS),
            Some(on_complete),
        );
    }

    /// Recover to full scale over half the transform duration
    pub fn press_release(&mut self, on_complete: Option<CompletionFn>) {
        self.item_scale.start(
            1.0,
            Curve::timed(TRANSFORM_DURATION_MS / 2),
            on_complete,
        );
    }

    /// Overlay entrance: spring the translate to its clamped target and hand
    /// visibility from the held element to the overlay immediately
    pub fn enter_active(&mut self, translate_y: f32) {
        self.overlay_translate
            .start(translate_y, Curve::spring(SpringConfig::menu()), None);
        self.overlay_opacity.set_immediate(1.0);
        self.held_opacity.set_immediate(0.0);
    }

    /// Overlay exit: timed translate back to rest; the opacity handoff waits
    /// out the transform duration to avoid visual pop
    pub fn exit_to_rest(&mut self, on_complete: Option<CompletionFn>) {
        self.overlay_translate
            .start(0.0, Curve::timed(TRANSFORM_DURATION_MS), on_complete);
        self.overlay_opacity.start(
            0.0,
            Curve::timed(0).delayed(TRANSFORM_DURATION_MS),
            None,
        );
        self.held_opacity.start(
            1.0,
            Curve::timed(0).delayed(TRANSFORM_DURATION_MS),
            None,
        );
    }

    pub fn item_scale(&self) -> f32 {
        self.item_scale.get()
    }

    pub fn overlay_translate(&self) -> f32 {
        self.overlay_translate.get()
    }

    pub fn overlay_opacity(&self) -> f32 {
        self.overlay_opacity.get()
    }

    pub fn held_opacity(&self) -> f32 {
        self.held_opacity.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdmenu_animation::AnimationDriver;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    fn run_frames(driver: &AnimationDriver, frames: usize) {
        for _ in 0..frames {
            driver.tick(FRAME_MS);
        }
    }

    #[test]
    fn test_press_down_reaches_scale_value() {
        let driver = AnimationDriver::new();
        let mut sequencer = AnimationSequencer::new(driver.handle());

        let completions = Arc::new(AtomicUsize::new(0));
        let completions_cb = Arc::clone(&completions);
        sequencer.press_down(Box::new(move |finished| {
            assert!(finished);
            completions_cb.fetch_add(1, Ordering::SeqCst);
        }));

        run_frames(&driver, 15);
        assert!((sequencer.item_scale() - SCALE_DOWN_VALUE).abs() < 1e-4);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_enter_active_swaps_visibility() {
        let driver = AnimationDriver::new();
        let mut sequencer = AnimationSequencer::new(driver.handle());

        sequencer.enter_active(-120.0);
        assert_eq!(sequencer.overlay_opacity(), 1.0);
        assert_eq!(sequencer.held_opacity(), 0.0);

        run_frames(&driver, 120);
        assert!((sequencer.overlay_translate() - -120.0).abs() < 0.01);
    }

    #[test]
    fn test_exit_delays_opacity_handoff() {
        let driver = AnimationDriver::new();
        let mut sequencer = AnimationSequencer::new(driver.handle());

        sequencer.enter_active(-80.0);
        run_frames(&driver, 120);

        sequencer.exit_to_rest(None);
        // ~100ms in: translate is moving but the handoff has not happened yet
        run_frames(&driver, 6);
        assert_eq!(sequencer.overlay_opacity(), 1.0);
        assert_eq!(sequencer.held_opacity(), 0.0);
        assert!(sequencer.overlay_translate().abs() < 80.0);

        // Past the transform duration everything is at rest
        run_frames(&driver, 6);
        assert_eq!(sequencer.overlay_opacity(), 0.0);
        assert_eq!(sequencer.held_opacity(), 1.0);
        assert!(sequencer.overlay_translate().abs() < 1e-3);
    }

    #[test]
    fn test_exit_retargets_in_flight_spring() {
        let driver = AnimationDriver::new();
        let mut sequencer = AnimationSequencer::new(driver.handle());

        sequencer.enter_active(-120.0);
        run_frames(&driver, 3);
        let mid_flight = sequencer.overlay_translate();
        assert!(mid_flight < 0.0);

        // Close arrives mid-entrance; the translate aims at rest instead.
        sequencer.exit_to_rest(None);
        run_frames(&driver, 12);
        assert!(sequencer.overlay_translate().abs() < 1e-3);
    }
}
