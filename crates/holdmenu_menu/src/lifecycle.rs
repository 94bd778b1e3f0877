//! Gesture lifecycle state machine
//!
//! Consumes discrete gesture events from the host's recognizer and drives
//! everything else at the right transitions: anchor measurement, transform
//! origin resolution, menu height and translation, geometry publication,
//! press feedback, haptics, and the overlay entrance/exit.
//!
//! ```text
//! Idle --[begin/activate]--> Measuring --[activate]--> Transforming
//! Transforming --[scale settles, items present]--> Active
//! Transforming --[scale settles, no items]--> Idle      (rejected)
//! Active --[close signal]--> Dismissing --[exit settles]--> Idle
//! ```
//!
//! All geometry work happens synchronously inside the event handler; the
//! animated transitions complete later through one-shot driver callbacks on
//! the same thread.

use std::sync::{Arc, Mutex, Weak};

use holdmenu_animation::{CompletionFn, DriverHandle};
use holdmenu_core::config::{HapticStyle, MenuConfig};
use holdmenu_core::context::{GeometryState, SharedMenuContext};
use holdmenu_core::error::ActivationError;
use holdmenu_core::geometry::{SafeAreaInsets, Viewport};
use holdmenu_core::haptics::{Haptics, NoopHaptics};
use holdmenu_core::measure::{AnchorHandle, AnchorMeasurer};
use holdmenu_core::style::StyleGuide;

use crate::calculations::{clamped_translation, menu_height, transform_origin};
use crate::gesture::{recognizer_for, GestureEvent, RecognizerSpec};
use crate::item::MenuSpec;
use crate::render::{HeldItemFrame, OverlayFrame};
use crate::sequencer::AnimationSequencer;

/// Where one held element currently is in its interaction cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// No geometry held; waiting for a gesture
    Idle,
    /// Anchor measured and geometry published for this cycle
    Measuring,
    /// Press feedback in flight
    Transforming,
    /// Menu open
    Active,
    /// Close signal received; exit animations running
    Dismissing,
}

type SharedMeasurer = Arc<dyn AnchorMeasurer + Send + Sync>;
type SharedHaptics = Arc<dyn Haptics + Send + Sync>;

struct LifecycleInner {
    config: MenuConfig,
    style: StyleGuide,
    viewport: Viewport,
    insets: SafeAreaInsets,
    items: MenuSpec,
    /// Recomputed only when the item list changes
    menu_height: f32,
    context: SharedMenuContext,
    sequencer: AnimationSequencer,
    measurer: SharedMeasurer,
    haptics: SharedHaptics,
    anchor: AnchorHandle,
    state: LifecycleState,
    /// Anchor measured for the current press cycle; cleared on finish/cancel
    measured_this_cycle: bool,
    /// Tap-mode pulse in flight; further activations are ignored
    animation_started: bool,
    last_rejection: Option<ActivationError>,
    weak_self: Weak<Mutex<LifecycleInner>>,
}

impl LifecycleInner {
    /// One-shot driver callback that re-enters this lifecycle
    fn completion(&self, f: fn(&mut LifecycleInner, bool)) -> CompletionFn {
        let weak = self.weak_self.clone();
        Box::new(move |finished| {
            if let Some(inner) = weak.upgrade() {
                let mut guard = inner.lock().unwrap();
                f(&mut guard, finished);
            }
        })
    }

    /// Measure the anchor once for this cycle and publish the whole geometry
    /// record. A failed measurement keeps the previous rectangle.
    fn measure_and_publish(&mut self) {
        if self.state == LifecycleState::Idle {
            self.state = LifecycleState::Measuring;
        }

        let anchor_rect = match self.measurer.measure(self.anchor) {
            Some(rect) => rect,
            None => {
                tracing::debug!("anchor measurement unavailable; keeping previous rectangle");
                self.context.geometry().anchor_rect
            }
        };

        let force_bottom = self
            .config
            .anchor_position
            .map(|position| position.is_bottom())
            .unwrap_or(false);

        // Pinned positions skip the resolver entirely.
        let anchor_position = self.config.anchor_position.unwrap_or_else(|| {
            transform_origin(
                anchor_rect.x,
                anchor_rect.width,
                self.viewport.horizontal_extent(),
                force_bottom,
            )
        });

        let translate_y = clamped_translation(
            anchor_position,
            anchor_rect,
            self.menu_height,
            &self.viewport,
            self.insets,
            &self.style,
            self.config.disable_move,
        );

        self.context.set_geometry(GeometryState {
            anchor_rect,
            anchor_position,
            menu_height: self.menu_height,
            translate_y,
        });
        self.measured_this_cycle = true;

        tracing::trace!(
            ?anchor_position,
            menu_height = self.menu_height,
            translate_y,
            "geometry published"
        );
    }

    /// Tap-mode pulses must not overlap; hold is level-triggered and free to
    /// re-fire.
    fn can_activate(&self) -> bool {
        !(self.config.activate_on.is_instant() && self.animation_started)
    }

    fn handle_activate(&mut self) {
        if !self.can_activate() {
            tracing::debug!("activation ignored; tap pulse already in flight");
            return;
        }

        if !self.measured_this_cycle {
            self.measure_and_publish();
        }

        if self.context.is_active() {
            return;
        }

        self.state = LifecycleState::Transforming;
        if self.config.activate_on.is_instant() {
            self.animation_started = true;
            let settled = self.completion(LifecycleInner::on_tap_down_settled);
            self.sequencer.press_down(settled);
        } else {
            let settled = self.completion(LifecycleInner::on_hold_settled);
            self.sequencer.press_down(settled);
        }
    }

    fn handle_finish(&mut self) {
        self.measured_this_cycle = false;
        if !self.config.activate_on.is_instant() {
            // Tap modes already scheduled their recovery as the second leg.
            self.sequencer.press_release(None);
        }
        if matches!(
            self.state,
            LifecycleState::Measuring | LifecycleState::Transforming
        ) {
            self.state = LifecycleState::Idle;
        }
    }

    fn on_hold_settled(&mut self, finished: bool) {
        // Released before the threshold scale was reached; the recovery
        // animation is already running.
        if !finished {
            return;
        }
        self.try_activate();
    }

    fn on_tap_down_settled(&mut self, finished: bool) {
        if !finished {
            self.animation_started = false;
            return;
        }
        let settled = self.completion(LifecycleInner::on_tap_up_settled);
        self.sequencer.press_release(Some(settled));
    }

    fn on_tap_up_settled(&mut self, finished: bool) {
        if finished {
            self.try_activate();
        }
        self.animation_started = false;
    }

    /// Press feedback finished; open the menu if there is one to open
    fn try_activate(&mut self) {
        if self.items.is_empty() {
            self.last_rejection = Some(ActivationError::EmptyItemList);
            tracing::debug!("activation rejected: empty item list");
            self.state = LifecycleState::Idle;
            return;
        }

        self.state = LifecycleState::Active;
        self.last_rejection = None;
        self.context.set_active(true);

        // At most once per activation, and never for the None style.
        if self.config.haptic_feedback != HapticStyle::None {
            self.haptics.trigger(self.config.haptic_feedback);
        }

        self.sequencer.press_release(None);
        let translate_y = self.context.geometry().translate_y;
        self.sequencer.enter_active(translate_y);

        tracing::debug!(translate_y, "menu active");
    }

    fn begin_dismiss(&mut self) {
        if self.state != LifecycleState::Active {
            return;
        }
        self.state = LifecycleState::Dismissing;
        self.context.set_active(false);
        let settled = self.completion(LifecycleInner::on_exit_settled);
        self.sequencer.exit_to_rest(Some(settled));
        tracing::debug!("menu dismissing");
    }

    fn on_exit_settled(&mut self, finished: bool) {
        // A new activation re-targeted the exit; that cycle owns the state now.
        if !finished {
            return;
        }
        self.state = LifecycleState::Idle;
        self.measured_this_cycle = false;
        self.context.clear_close_request();
    }
}

/// The gesture-driven lifecycle for one held element
///
/// Owns the state machine and the sequencer; shares the menu context with the
/// render layer. The host keeps one instance per held element and routes
/// recognizer events into it.
pub struct GestureLifecycle {
    inner: Arc<Mutex<LifecycleInner>>,
}

impl GestureLifecycle {
    pub fn builder(driver: DriverHandle) -> GestureLifecycleBuilder {
        GestureLifecycleBuilder::new(driver)
    }

    /// Feed one recognizer event
    ///
    /// Events arrive one at a time and are handled synchronously; geometry is
    /// computed inline, animations are started fire-and-forget.
    pub fn handle_event(&self, event: GestureEvent) {
        let mut inner = self.inner.lock().unwrap();
        match event {
            GestureEvent::Begin => {
                if !inner.measured_this_cycle {
                    inner.measure_and_publish();
                }
            }
            GestureEvent::Activate => inner.handle_activate(),
            GestureEvent::Finish | GestureEvent::Cancel => inner.handle_finish(),
        }
    }

    /// Observe an external close request published on the shared context
    ///
    /// Call once per frame, after ticking the animation driver.
    pub fn poll(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.context.close_requested() && inner.state == LifecycleState::Active {
            inner.begin_dismiss();
        }
    }

    /// Backdrop tap on the overlay; honors `close_on_tap`
    pub fn on_overlay_press(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.config.close_on_tap && inner.state == LifecycleState::Active {
            inner.context.request_close();
            inner.begin_dismiss();
        }
    }

    /// Programmatic close
    pub fn dismiss(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.context.request_close();
        inner.begin_dismiss();
    }

    pub fn state(&self) -> LifecycleState {
        self.inner.lock().unwrap().state
    }

    /// The shared context the render layer reads (clone shares state)
    pub fn context(&self) -> SharedMenuContext {
        self.inner.lock().unwrap().context.clone()
    }

    /// Recognizer parameters the host should install for this element
    pub fn recognizer(&self) -> RecognizerSpec {
        recognizer_for(&self.inner.lock().unwrap().config)
    }

    /// Why the last press settled back without opening, if it did
    pub fn last_rejection(&self) -> Option<ActivationError> {
        self.inner.lock().unwrap().last_rejection
    }

    /// Replace the item list; menu height is recomputed here and nowhere else
    pub fn set_items(&self, items: MenuSpec) {
        let mut inner = self.inner.lock().unwrap();
        inner.menu_height = menu_height(items.len(), items.separator_count(), &inner.style);
        inner.items = items;
    }

    /// Window dimensions changed (rotation, resize)
    pub fn set_viewport(&self, viewport: Viewport) {
        self.inner.lock().unwrap().viewport = viewport;
    }

    pub fn set_insets(&self, insets: SafeAreaInsets) {
        self.inner.lock().unwrap().insets = insets;
    }

    /// Per-frame sample for the held element's in-place renderer
    pub fn held_item_frame(&self) -> HeldItemFrame {
        let inner = self.inner.lock().unwrap();
        HeldItemFrame {
            scale: inner.sequencer.item_scale(),
            opacity: inner.sequencer.held_opacity(),
        }
    }

    /// Per-frame sample for the detached overlay renderer
    pub fn overlay_frame(&self) -> OverlayFrame {
        let inner = self.inner.lock().unwrap();
        let geometry = inner.context.geometry();
        let placement = crate::calculations::overlay_placement(
            geometry.anchor_position,
            geometry.anchor_rect,
            &inner.style,
        );
        OverlayFrame {
            top: placement.top,
            left: placement.left,
            width: placement.width,
            translate_y: inner.sequencer.overlay_translate(),
            opacity: inner.sequencer.overlay_opacity(),
            list_offset_x: crate::calculations::list_offset_x(
                geometry.anchor_position,
                geometry.anchor_rect.width,
                inner.style.menu_width(&inner.viewport),
            ),
            pointer_events: inner.context.is_active(),
        }
    }
}

/// Builder wiring a lifecycle to its collaborators
pub struct GestureLifecycleBuilder {
    driver: DriverHandle,
    config: MenuConfig,
    style: StyleGuide,
    viewport: Viewport,
    insets: SafeAreaInsets,
    items: MenuSpec,
    measurer: Option<SharedMeasurer>,
    haptics: Option<SharedHaptics>,
    anchor: AnchorHandle,
    context: Option<SharedMenuContext>,
}

impl GestureLifecycleBuilder {
    fn new(driver: DriverHandle) -> Self {
        Self {
            driver,
            config: MenuConfig::default(),
            style: StyleGuide::default(),
            viewport: Viewport::new(0.0, 0.0),
            insets: SafeAreaInsets::default(),
            items: MenuSpec::new(),
            measurer: None,
            haptics: None,
            anchor: AnchorHandle(0),
            context: None,
        }
    }

    pub fn config(mut self, config: MenuConfig) -> Self {
        self.config = config;
        self
    }

    pub fn style(mut self, style: StyleGuide) -> Self {
        self.style = style;
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn insets(mut self, insets: SafeAreaInsets) -> Self {
        self.insets = insets;
        self
    }

    pub fn items(mut self, items: MenuSpec) -> Self {
        self.items = items;
        self
    }

    pub fn measurer(mut self, measurer: SharedMeasurer) -> Self {
        self.measurer = Some(measurer);
        self
    }

    pub fn haptics(mut self, haptics: SharedHaptics) -> Self {
        self.haptics = Some(haptics);
        self
    }

    pub fn anchor(mut self, anchor: AnchorHandle) -> Self {
        self.anchor = anchor;
        self
    }

    /// Share an existing context instead of creating a fresh one
    pub fn context(mut self, context: SharedMenuContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn build(self) -> GestureLifecycle {
        let menu_height = menu_height(
            self.items.len(),
            self.items.separator_count(),
            &self.style,
        );

        // A missing measurer behaves like a measurement that never resolves:
        // geometry stays at its previous defaults.
        let measurer = self
            .measurer
            .unwrap_or_else(|| Arc::new(holdmenu_core::measure::NullMeasurer));
        let haptics = self.haptics.unwrap_or_else(|| Arc::new(NoopHaptics));

        let sequencer = AnimationSequencer::new(self.driver);
        let context = self.context.unwrap_or_default();

        // Pre-measurement reads see the pinned position rather than the
        // resolver's top-right default.
        if let Some(position) = self.config.anchor_position {
            let mut geometry = context.geometry();
            geometry.anchor_position = position;
            context.set_geometry(geometry);
        }

        let inner = Arc::new_cyclic(|weak| {
            Mutex::new(LifecycleInner {
                config: self.config,
                style: self.style,
                viewport: self.viewport,
                insets: self.insets,
                items: self.items,
                menu_height,
                context,
                sequencer,
                measurer,
                haptics,
                anchor: self.anchor,
                state: LifecycleState::Idle,
                measured_this_cycle: false,
                animation_started: false,
                last_rejection: None,
                weak_self: weak.clone(),
            })
        });

        GestureLifecycle { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{MenuItem, MenuSpec};
    use holdmenu_animation::AnimationDriver;
    use holdmenu_core::config::ActivationMode;
    use holdmenu_core::geometry::{AnchorPosition, AnchorRect};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const FRAME_MS: f32 = 1000.0 / 60.0;

    struct CountingMeasurer {
        calls: AtomicUsize,
        rect: AnchorRect,
    }

    impl AnchorMeasurer for CountingMeasurer {
        fn measure(&self, _handle: AnchorHandle) -> Option<AnchorRect> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some(self.rect)
        }
    }

    struct CountingHaptics {
        calls: AtomicUsize,
    }

    impl Haptics for CountingHaptics {
        fn trigger(&self, _style: HapticStyle) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn run_frames(driver: &AnimationDriver, lifecycle: &GestureLifecycle, frames: usize) {
        for _ in 0..frames {
            driver.tick(FRAME_MS);
            lifecycle.poll();
        }
    }

    fn three_items() -> MenuSpec {
        MenuSpec::new()
            .item(MenuItem::new("Copy"))
            .item(MenuItem::new("Paste").with_separator())
            .item(MenuItem::new("Delete").destructive())
    }

    fn test_rig(
        items: MenuSpec,
        config: MenuConfig,
    ) -> (
        AnimationDriver,
        GestureLifecycle,
        Arc<CountingMeasurer>,
        Arc<CountingHaptics>,
    ) {
        let driver = AnimationDriver::new();
        let measurer = Arc::new(CountingMeasurer {
            calls: AtomicUsize::new(0),
            rect: AnchorRect::new(10.0, 600.0, 40.0, 40.0),
        });
        let haptics = Arc::new(CountingHaptics {
            calls: AtomicUsize::new(0),
        });
        let lifecycle = GestureLifecycle::builder(driver.handle())
            .items(items)
            .config(config)
            .viewport(Viewport::new(400.0, 800.0))
            .measurer(Arc::clone(&measurer) as SharedMeasurer)
            .haptics(Arc::clone(&haptics) as SharedHaptics)
            .build();
        (driver, lifecycle, measurer, haptics)
    }

    #[test]
    fn test_hold_lifecycle_ordering() {
        let (driver, lifecycle, measurer, haptics) =
            test_rig(three_items(), MenuConfig::default());

        assert_eq!(lifecycle.state(), LifecycleState::Idle);

        lifecycle.handle_event(GestureEvent::Begin);
        assert_eq!(lifecycle.state(), LifecycleState::Measuring);

        lifecycle.handle_event(GestureEvent::Activate);
        assert_eq!(lifecycle.state(), LifecycleState::Transforming);

        // Re-entrant activation: no second measurement
        lifecycle.handle_event(GestureEvent::Activate);
        assert_eq!(measurer.calls.load(Ordering::SeqCst), 1);

        // Let the scale-down settle (200ms) and the activation land
        run_frames(&driver, &lifecycle, 20);
        assert_eq!(lifecycle.state(), LifecycleState::Active);
        assert!(lifecycle.context().is_active());
        assert_eq!(haptics.calls.load(Ordering::SeqCst), 1);

        // Release: the menu stays open, the cycle's measurement is spent
        lifecycle.handle_event(GestureEvent::Finish);
        assert_eq!(lifecycle.state(), LifecycleState::Active);

        lifecycle.dismiss();
        assert_eq!(lifecycle.state(), LifecycleState::Dismissing);
        assert!(!lifecycle.context().is_active());

        run_frames(&driver, &lifecycle, 15);
        assert_eq!(lifecycle.state(), LifecycleState::Idle);
        assert!(!lifecycle.context().close_requested());
    }

    #[test]
    fn test_geometry_published_once_per_cycle() {
        let (_driver, lifecycle, measurer, _haptics) =
            test_rig(three_items(), MenuConfig::default());

        lifecycle.handle_event(GestureEvent::Begin);
        lifecycle.handle_event(GestureEvent::Activate);
        lifecycle.handle_event(GestureEvent::Activate);
        assert_eq!(measurer.calls.load(Ordering::SeqCst), 1);

        let geometry = lifecycle.context().geometry();
        assert_eq!(geometry.anchor_rect, AnchorRect::new(10.0, 600.0, 40.0, 40.0));
        // Anchor near the left edge of a 400pt window
        assert_eq!(geometry.anchor_position, AnchorPosition::TopLeft);
        assert!(geometry.menu_height > 0.0);
    }

    #[test]
    fn test_tap_reentrancy_guard() {
        let (driver, lifecycle, measurer, haptics) = test_rig(
            three_items(),
            MenuConfig::new().activate_on(ActivationMode::Tap),
        );

        lifecycle.handle_event(GestureEvent::Activate);
        assert_eq!(lifecycle.state(), LifecycleState::Transforming);

        run_frames(&driver, &lifecycle, 2);

        // Second tap while the pulse is in flight: ignored entirely
        lifecycle.handle_event(GestureEvent::Activate);
        assert_eq!(measurer.calls.load(Ordering::SeqCst), 1);

        // Down leg (200ms) + up leg (75ms): had the second tap restarted the
        // pulse, activation could not land by 284ms.
        run_frames(&driver, &lifecycle, 15);
        assert_eq!(lifecycle.state(), LifecycleState::Active);
        assert_eq!(haptics.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_items_rejects_activation() {
        let (driver, lifecycle, _measurer, haptics) =
            test_rig(MenuSpec::new(), MenuConfig::default());

        lifecycle.handle_event(GestureEvent::Begin);
        lifecycle.handle_event(GestureEvent::Activate);
        run_frames(&driver, &lifecycle, 20);

        assert_eq!(lifecycle.state(), LifecycleState::Idle);
        assert!(!lifecycle.context().is_active());
        assert_eq!(
            lifecycle.last_rejection(),
            Some(ActivationError::EmptyItemList)
        );
        assert_eq!(haptics.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_haptics_skipped_for_none_style() {
        let (driver, lifecycle, _measurer, haptics) = test_rig(
            three_items(),
            MenuConfig::new().haptic_feedback(HapticStyle::None),
        );

        lifecycle.handle_event(GestureEvent::Activate);
        run_frames(&driver, &lifecycle, 20);

        assert_eq!(lifecycle.state(), LifecycleState::Active);
        assert_eq!(haptics.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_before_threshold_returns_to_idle() {
        let (driver, lifecycle, _measurer, haptics) =
            test_rig(three_items(), MenuConfig::default());

        lifecycle.handle_event(GestureEvent::Begin);
        lifecycle.handle_event(GestureEvent::Activate);
        run_frames(&driver, &lifecycle, 3);

        lifecycle.handle_event(GestureEvent::Finish);
        assert_eq!(lifecycle.state(), LifecycleState::Idle);

        // The displaced press-down completion must not activate
        run_frames(&driver, &lifecycle, 20);
        assert_eq!(lifecycle.state(), LifecycleState::Idle);
        assert!(!lifecycle.context().is_active());
        assert_eq!(haptics.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_close_request_observed_by_poll() {
        let (driver, lifecycle, _measurer, _haptics) =
            test_rig(three_items(), MenuConfig::default());

        lifecycle.handle_event(GestureEvent::Begin);
        lifecycle.handle_event(GestureEvent::Activate);
        run_frames(&driver, &lifecycle, 20);
        assert_eq!(lifecycle.state(), LifecycleState::Active);

        // Overlay consumer publishes the close signal through the context
        lifecycle.context().request_close();
        driver.tick(FRAME_MS);
        lifecycle.poll();
        assert_eq!(lifecycle.state(), LifecycleState::Dismissing);

        run_frames(&driver, &lifecycle, 15);
        assert_eq!(lifecycle.state(), LifecycleState::Idle);
        assert!(!lifecycle.context().close_requested());
    }

    #[test]
    fn test_overlay_press_respects_close_on_tap() {
        let (driver, lifecycle, _measurer, _haptics) = test_rig(
            three_items(),
            MenuConfig::new().close_on_tap(false),
        );

        lifecycle.handle_event(GestureEvent::Begin);
        lifecycle.handle_event(GestureEvent::Activate);
        run_frames(&driver, &lifecycle, 20);

        lifecycle.on_overlay_press();
        assert_eq!(lifecycle.state(), LifecycleState::Active);
    }

    #[test]
    fn test_measurement_failure_keeps_prior_geometry() {
        let driver = AnimationDriver::new();
        let lifecycle = GestureLifecycle::builder(driver.handle())
            .items(three_items())
            .viewport(Viewport::new(400.0, 800.0))
            .build();

        lifecycle.handle_event(GestureEvent::Begin);
        lifecycle.handle_event(GestureEvent::Activate);
        run_frames(&driver, &lifecycle, 20);

        // No measurer: rectangle stays all-zero, cycle still reaches Active
        assert_eq!(lifecycle.state(), LifecycleState::Active);
        assert_eq!(lifecycle.context().geometry().anchor_rect, AnchorRect::default());
    }

    #[test]
    fn test_pinned_anchor_position_skips_resolver() {
        let (driver, lifecycle, _measurer, _haptics) = test_rig(
            three_items(),
            MenuConfig::new().anchor_position(AnchorPosition::BottomRight),
        );

        lifecycle.handle_event(GestureEvent::Begin);
        run_frames(&driver, &lifecycle, 1);

        // The resolver would have said TopLeft for this anchor
        assert_eq!(
            lifecycle.context().geometry().anchor_position,
            AnchorPosition::BottomRight
        );
    }

    #[test]
    fn test_translation_applied_for_overflowing_anchor() {
        let driver = AnimationDriver::new();
        let measurer = Arc::new(CountingMeasurer {
            calls: AtomicUsize::new(0),
            rect: AnchorRect::new(10.0, 720.0, 40.0, 40.0),
        });
        let lifecycle = GestureLifecycle::builder(driver.handle())
            .items(three_items())
            .viewport(Viewport::new(400.0, 800.0))
            .measurer(measurer as SharedMeasurer)
            .build();

        lifecycle.handle_event(GestureEvent::Begin);
        let geometry = lifecycle.context().geometry();
        assert!(geometry.translate_y < 0.0);

        // The corrected menu bottom sits inside the window
        let bottom = geometry.anchor_rect.bottom()
            + geometry.menu_height
            + StyleGuide::default().spacing
            + geometry.translate_y;
        assert!(bottom <= 800.0);
    }
}
