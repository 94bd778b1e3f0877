//! Animation driver
//!
//! Owns every live track and advances them from the host's frame loop.
//! Starting an animation is fire-and-forget: `start(target, curve,
//! on_complete)` returns immediately and the completion callback is invoked
//! by [`AnimationDriver::tick`] on the same thread once the track finishes.
//!
//! Interruption model: a track always animates toward its latest target.
//! Re-targeting replaces the pending completion; the displaced callback is
//! invoked with `finished = false` on the next tick, mirroring how the
//! natural completion is invoked with `finished = true`.
//!
//! # Example
//!
//! ```rust
//! use holdmenu_animation::{AnimatedValue, AnimationDriver, Curve};
//!
//! let driver = AnimationDriver::new();
//! let mut scale = AnimatedValue::new(driver.handle(), 1.0);
//!
//! scale.start(0.95, Curve::timed(200), None);
//! while driver.tick(1000.0 / 60.0) {}
//! assert!((scale.get() - 0.95).abs() < 1e-4);
//! ```

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use crate::timed::TimedTrack;

/// One-shot completion callback
///
/// `finished` is `true` when the track reached its target and `false` when
/// the track was re-targeted or stopped before getting there.
pub type CompletionFn = Box<dyn FnOnce(bool) + Send>;

new_key_type! {
    /// Handle to a registered track
    pub struct TrackId;
}

/// How a value travels to its target
#[derive(Clone, Copy, Debug)]
pub enum Curve {
    /// Spring physics; velocity carries across retargets
    Spring(SpringConfig),
    /// Fixed-duration eased transition
    Timed {
        duration_ms: u32,
        easing: Easing,
        delay_ms: u32,
    },
}

impl Curve {
    /// Timed transition with the default ease-in-out
    pub fn timed(duration_ms: u32) -> Self {
        Curve::Timed {
            duration_ms,
            easing: Easing::default(),
            delay_ms: 0,
        }
    }

    pub fn timed_with(duration_ms: u32, easing: Easing) -> Self {
        Curve::Timed {
            duration_ms,
            easing,
            delay_ms: 0,
        }
    }

    pub fn spring(config: SpringConfig) -> Self {
        Curve::Spring(config)
    }

    /// Hold the starting value for `ms` before the transition runs
    ///
    /// Only meaningful for timed curves; springs ignore it.
    pub fn delayed(self, ms: u32) -> Self {
        match self {
            Curve::Timed {
                duration_ms,
                easing,
                ..
            } => Curve::Timed {
                duration_ms,
                easing,
                delay_ms: ms,
            },
            spring => spring,
        }
    }
}

enum TrackKind {
    Spring(Spring),
    Timed(TimedTrack),
}

impl TrackKind {
    fn value(&self) -> f32 {
        match self {
            TrackKind::Spring(spring) => spring.value(),
            TrackKind::Timed(track) => track.value(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            TrackKind::Spring(spring) => spring.is_settled(),
            TrackKind::Timed(track) => track.is_finished(),
        }
    }
}

struct Track {
    kind: TrackKind,
    on_complete: Option<CompletionFn>,
    /// Completion already delivered; the track only provides its final value
    done: bool,
}

struct DriverInner {
    tracks: SlotMap<TrackId, Track>,
    /// Callbacks displaced by retargeting; delivered `false` on the next tick
    displaced: Vec<CompletionFn>,
}

/// The animation driver ticked once per frame by the host
pub struct AnimationDriver {
    inner: Arc<Mutex<DriverInner>>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DriverInner {
                tracks: SlotMap::with_key(),
                displaced: Vec::new(),
            })),
        }
    }

    /// Weak handle for components that register animated values
    pub fn handle(&self) -> DriverHandle {
        DriverHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all tracks by `dt_ms` milliseconds
    ///
    /// Completion callbacks (displaced first, then naturally finished) run
    /// after the driver lock is released, so they are free to start new
    /// animations. Returns `true` while any track is still in flight.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let dt_seconds = dt_ms / 1000.0;

        let (callbacks, has_active) = {
            let mut inner = self.inner.lock().unwrap();

            let mut callbacks: Vec<(CompletionFn, bool)> = inner
                .displaced
                .drain(..)
                .map(|callback| (callback, false))
                .collect();

            for (_, track) in inner.tracks.iter_mut() {
                if track.done {
                    continue;
                }
                match &mut track.kind {
                    TrackKind::Spring(spring) => spring.step(dt_seconds),
                    TrackKind::Timed(timed) => timed.tick(dt_ms),
                }
                if track.kind.is_finished() {
                    track.done = true;
                    if let Some(callback) = track.on_complete.take() {
                        callbacks.push((callback, true));
                    }
                }
            }

            let has_active = inner.tracks.iter().any(|(_, track)| !track.done);
            (callbacks, has_active)
        };

        for (callback, finished) in callbacks {
            callback(finished);
        }

        has_active
    }

    /// Any track still moving toward its target
    pub fn has_active(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        !inner.displaced.is_empty() || inner.tracks.iter().any(|(_, track)| !track.done)
    }

    pub fn track_count(&self) -> usize {
        self.inner.lock().unwrap().tracks.len()
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the driver
///
/// Held by animated values; does not keep the driver alive.
#[derive(Clone)]
pub struct DriverHandle {
    inner: Weak<Mutex<DriverInner>>,
}

impl DriverHandle {
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut DriverInner) -> R) -> Option<R> {
        self.inner
            .upgrade()
            .map(|inner| f(&mut inner.lock().unwrap()))
    }

    fn track_value(&self, id: TrackId) -> Option<f32> {
        self.with_inner(|inner| inner.tracks.get(id).map(|track| track.kind.value()))
            .flatten()
    }

    fn track_in_flight(&self, id: TrackId) -> bool {
        self.with_inner(|inner| {
            inner
                .tracks
                .get(id)
                .map(|track| !track.done)
                .unwrap_or(false)
        })
        .unwrap_or(false)
    }

    fn remove_track(&self, id: TrackId) {
        self.with_inner(|inner| {
            if let Some(track) = inner.tracks.remove(id) {
                if let Some(callback) = track.on_complete {
                    inner.displaced.push(callback);
                }
            }
        });
    }
}

/// A single animated scalar
///
/// The component-facing wrapper around one driver track. Starting a new
/// animation on a value that is already moving re-targets it: springs keep
/// their velocity, timed curves restart from the current sampled value, and
/// the displaced completion is reported unfinished.
pub struct AnimatedValue {
    handle: DriverHandle,
    track: Option<TrackId>,
    /// Last known value while no track exists
    current: f32,
    target: f32,
}

impl AnimatedValue {
    pub fn new(handle: DriverHandle, initial: f32) -> Self {
        Self {
            handle,
            track: None,
            current: initial,
            target: initial,
        }
    }

    /// Animate toward `target` along `curve`
    pub fn start(&mut self, target: f32, curve: Curve, on_complete: Option<CompletionFn>) {
        let from = self.get();
        self.target = target;

        let track_id = self.track;
        let registered = self.handle.with_inner(|inner| {
            // Retarget an existing spring in place so velocity carries over.
            if let (Curve::Spring(config), Some(id)) = (&curve, track_id) {
                if let Some(track) = inner.tracks.get_mut(id) {
                    if let TrackKind::Spring(spring) = &track.kind {
                        let mut retargeted =
                            Spring::new(*config, spring.value()).with_velocity(spring.velocity());
                        retargeted.set_target(target);
                        track.kind = TrackKind::Spring(retargeted);
                        track.done = false;
                        if let Some(displaced) = track.on_complete.take() {
                            inner.displaced.push(displaced);
                        }
                        track.on_complete = on_complete;
                        return Some(id);
                    }
                }
            }

            // Otherwise replace the track wholesale, starting from the
            // currently sampled value.
            if let Some(id) = track_id {
                if let Some(old) = inner.tracks.remove(id) {
                    if !old.done {
                        if let Some(displaced) = old.on_complete {
                            inner.displaced.push(displaced);
                        }
                    }
                }
            }

            let kind = match curve {
                Curve::Spring(config) => {
                    let mut spring = Spring::new(config, from);
                    spring.set_target(target);
                    TrackKind::Spring(spring)
                }
                Curve::Timed {
                    duration_ms,
                    easing,
                    delay_ms,
                } => TrackKind::Timed(
                    TimedTrack::new(from, target, duration_ms, easing).with_delay(delay_ms),
                ),
            };

            Some(inner.tracks.insert(Track {
                kind,
                on_complete,
                done: false,
            }))
        });

        match registered {
            Some(id) => self.track = id,
            None => {
                // Driver gone; snap so state stays coherent.
                tracing::debug!("animation driver dropped; snapping value to target");
                self.current = target;
                self.track = None;
            }
        }
    }

    /// Current sampled value
    pub fn get(&self) -> f32 {
        match self.track {
            Some(id) => self.handle.track_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    /// Jump to `value` with no animation, dropping any in-flight track
    ///
    /// A displaced completion is still reported unfinished.
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.track.take() {
            self.handle.remove_track(id);
        }
        self.current = value;
        self.target = value;
    }

    /// Still moving toward the target
    pub fn is_animating(&self) -> bool {
        self.track
            .map(|id| self.handle.track_in_flight(id))
            .unwrap_or(false)
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.track.take() {
            self.handle.remove_track(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const FRAME_MS: f32 = 1000.0 / 60.0;

    #[test]
    fn test_timed_completion_fires_once() {
        let driver = AnimationDriver::new();
        let mut value = AnimatedValue::new(driver.handle(), 1.0);

        let finishes = Arc::new(AtomicUsize::new(0));
        let finishes_cb = Arc::clone(&finishes);
        value.start(
            0.95,
            Curve::timed(100),
            Some(Box::new(move |finished| {
                assert!(finished);
                finishes_cb.fetch_add(1, Ordering::SeqCst);
            })),
        );

        for _ in 0..30 {
            driver.tick(FRAME_MS);
        }

        assert_eq!(finishes.load(Ordering::SeqCst), 1);
        assert!((value.get() - 0.95).abs() < 1e-4);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_spring_completion() {
        let driver = AnimationDriver::new();
        let mut value = AnimatedValue::new(driver.handle(), 0.0);

        let done = Arc::new(AtomicUsize::new(0));
        let done_cb = Arc::clone(&done);
        value.start(
            120.0,
            Curve::spring(SpringConfig::menu()),
            Some(Box::new(move |finished| {
                assert!(finished);
                done_cb.fetch_add(1, Ordering::SeqCst);
            })),
        );

        // Two seconds is plenty for the menu spring to settle.
        for _ in 0..120 {
            driver.tick(FRAME_MS);
        }

        assert_eq!(done.load(Ordering::SeqCst), 1);
        assert!((value.get() - 120.0).abs() < 0.01);
    }

    #[test]
    fn test_retarget_displaces_completion() {
        let driver = AnimationDriver::new();
        let mut value = AnimatedValue::new(driver.handle(), 1.0);

        let outcomes = Arc::new(Mutex::new(Vec::new()));

        let outcomes_first = Arc::clone(&outcomes);
        value.start(
            0.95,
            Curve::timed(200),
            Some(Box::new(move |finished| {
                outcomes_first.lock().unwrap().push(("first", finished));
            })),
        );

        driver.tick(FRAME_MS);

        let outcomes_second = Arc::clone(&outcomes);
        value.start(
            1.0,
            Curve::timed(75),
            Some(Box::new(move |finished| {
                outcomes_second.lock().unwrap().push(("second", finished));
            })),
        );

        for _ in 0..30 {
            driver.tick(FRAME_MS);
        }

        let outcomes = outcomes.lock().unwrap();
        assert_eq!(outcomes.as_slice(), &[("first", false), ("second", true)]);
    }

    #[test]
    fn test_spring_retarget_keeps_velocity() {
        let driver = AnimationDriver::new();
        let mut value = AnimatedValue::new(driver.handle(), 0.0);

        value.start(100.0, Curve::spring(SpringConfig::menu()), None);
        for _ in 0..5 {
            driver.tick(FRAME_MS);
        }
        let moving = value.get();
        assert!(moving > 0.0);

        // Retarget mid-flight; the value keeps moving smoothly rather than
        // jumping, and the driver still reports activity.
        value.start(0.0, Curve::spring(SpringConfig::menu()), None);
        assert!(driver.tick(FRAME_MS));
        assert_eq!(driver.track_count(), 1);
    }

    #[test]
    fn test_set_immediate_stops_track() {
        let driver = AnimationDriver::new();
        let mut value = AnimatedValue::new(driver.handle(), 0.0);

        let displaced = Arc::new(AtomicUsize::new(0));
        let displaced_cb = Arc::clone(&displaced);
        value.start(
            50.0,
            Curve::timed(500),
            Some(Box::new(move |finished| {
                assert!(!finished);
                displaced_cb.fetch_add(1, Ordering::SeqCst);
            })),
        );

        value.set_immediate(7.0);
        assert_eq!(value.get(), 7.0);
        assert!(!value.is_animating());

        driver.tick(FRAME_MS);
        assert_eq!(displaced.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_removes_track() {
        let driver = AnimationDriver::new();
        {
            let mut value = AnimatedValue::new(driver.handle(), 0.0);
            value.start(10.0, Curve::timed(100), None);
            assert_eq!(driver.track_count(), 1);
        }
        assert_eq!(driver.track_count(), 0);
    }

    #[test]
    fn test_tick_idle_returns_false() {
        let driver = AnimationDriver::new();
        assert!(!driver.tick(FRAME_MS));
    }

    #[test]
    fn test_delayed_track_waits() {
        let driver = AnimationDriver::new();
        let mut opacity = AnimatedValue::new(driver.handle(), 1.0);

        opacity.start(0.0, Curve::timed(0).delayed(150), None);

        for _ in 0..6 {
            driver.tick(FRAME_MS);
        }
        // ~100ms in: still holding the starting value
        assert_eq!(opacity.get(), 1.0);

        for _ in 0..6 {
            driver.tick(FRAME_MS);
        }
        assert_eq!(opacity.get(), 0.0);
    }
}
