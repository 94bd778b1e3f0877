//! Simulated Press Demo
//!
//! Drives one full hold-to-open interaction without a windowing stack:
//! a long-press on an anchor near the bottom of a phone-sized viewport,
//! the menu opening with its clamping correction, and a backdrop tap
//! closing it again. Frame samples are printed so the handoff between the
//! held element and the overlay is visible in the log.
//!
//! Run with: cargo run -p holdmenu_menu --example simulated_press

use std::sync::Arc;

use holdmenu_animation::AnimationDriver;
use holdmenu_core::config::MenuConfig;
use holdmenu_core::geometry::{AnchorRect, SafeAreaInsets, Viewport};
use holdmenu_core::measure::AnchorHandle;
use holdmenu_menu::{GestureEvent, GestureLifecycle, MenuItem, MenuSpec};

const FRAME_MS: f32 = 1000.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let driver = AnimationDriver::new();

    let lifecycle = GestureLifecycle::builder(driver.handle())
        .items(
            MenuSpec::new()
                .item(MenuItem::new("Reply"))
                .item(MenuItem::new("Copy"))
                .item(MenuItem::new("Forward").with_separator())
                .item(MenuItem::new("Delete").destructive()),
        )
        .config(MenuConfig::new().long_press_min_duration_ms(150))
        .viewport(Viewport::new(390.0, 844.0))
        .insets(SafeAreaInsets::new(47.0, 34.0))
        .measurer(Arc::new(|_: AnchorHandle| {
            // An anchor low enough that the menu needs an upward correction
            Some(AnchorRect::new(24.0, 680.0, 180.0, 48.0))
        }))
        .build();

    println!("recognizer: {:?}", lifecycle.recognizer());

    // Press down; the recognizer activates after its threshold.
    lifecycle.handle_event(GestureEvent::Begin);
    lifecycle.handle_event(GestureEvent::Activate);

    let geometry = lifecycle.context().geometry();
    println!(
        "geometry: position={:?} menu_height={:.1} translate_y={:.1}",
        geometry.anchor_position, geometry.menu_height, geometry.translate_y
    );

    run(&driver, &lifecycle, 24, "opening");
    lifecycle.handle_event(GestureEvent::Finish);
    println!("state after release: {:?}", lifecycle.state());

    // Backdrop tap closes the menu.
    lifecycle.on_overlay_press();
    run(&driver, &lifecycle, 15, "closing");
    println!("state at rest: {:?}", lifecycle.state());
}

fn run(driver: &AnimationDriver, lifecycle: &GestureLifecycle, frames: usize, label: &str) {
    for frame in 0..frames {
        driver.tick(FRAME_MS);
        lifecycle.poll();

        if frame % 6 == 0 {
            let held = lifecycle.held_item_frame();
            let overlay = lifecycle.overlay_frame();
            println!(
                "{label} f{frame:02}: state={:?} held(scale={:.3} opacity={:.1}) overlay(ty={:+.1} opacity={:.1})",
                lifecycle.state(),
                held.scale,
                held.opacity,
                overlay.translate_y,
                overlay.opacity,
            );
        }
    }
}
