//! Shared menu context - the single geometry record both renderers read
//!
//! One lifecycle writes the record (a whole-record replacement once per
//! activation); the held-element renderer and the detached overlay renderer
//! read it on their own schedule. Consumers that want change notification
//! instead of per-frame polling subscribe explicitly; there is no ambient
//! reactivity.
//!
//! # Example
//!
//! ```rust
//! use holdmenu_core::context::SharedMenuContext;
//!
//! let ctx = SharedMenuContext::new();
//! let _sub = ctx.subscribe(|snapshot| {
//!     if snapshot.active {
//!         // mount the overlay
//!     }
//! });
//!
//! ctx.set_active(true);
//! assert!(ctx.is_active());
//! ```

use std::sync::{Arc, RwLock};

use smallvec::SmallVec;

use crate::geometry::{AnchorPosition, AnchorRect};

/// Geometry published once per activation cycle
///
/// All-zero until the first successful measurement; a failed measurement
/// leaves the previous record in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryState {
    pub anchor_rect: AnchorRect,
    pub anchor_position: AnchorPosition,
    pub menu_height: f32,
    pub translate_y: f32,
}

/// Whole-record view handed to subscribers
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuSnapshot {
    pub geometry: GeometryState,
    pub active: bool,
    pub close_requested: bool,
}

type SubscriberFn = Box<dyn Fn(&MenuSnapshot) + Send + Sync>;

struct ContextInner {
    geometry: GeometryState,
    active: bool,
    close_requested: bool,
    /// Two expected readers (held element + overlay); slots stay allocated
    /// after unsubscribe so handles remain stable
    subscribers: SmallVec<[Option<SubscriberFn>; 2]>,
}

/// Handle for removing a subscriber
#[derive(Debug)]
pub struct SubscriptionHandle {
    index: usize,
}

/// Shared, explicitly-passed menu state
///
/// Cloning shares the same underlying record. Exactly one component (the
/// gesture lifecycle) is expected to write; everything else reads.
#[derive(Clone)]
pub struct SharedMenuContext {
    inner: Arc<RwLock<ContextInner>>,
}

impl SharedMenuContext {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ContextInner {
                geometry: GeometryState::default(),
                active: false,
                close_requested: false,
                subscribers: SmallVec::new(),
            })),
        }
    }

    /// Current geometry record (whole-record copy)
    pub fn geometry(&self) -> GeometryState {
        self.inner.read().unwrap().geometry
    }

    /// Replace the geometry record and notify subscribers
    pub fn set_geometry(&self, geometry: GeometryState) {
        let snapshot = {
            let mut inner = self.inner.write().unwrap();
            inner.geometry = geometry;
            Self::snapshot_of(&inner)
        };
        self.notify(&snapshot);
    }

    pub fn is_active(&self) -> bool {
        self.inner.read().unwrap().active
    }

    /// Flip the active flag; clears any pending close request when activating
    pub fn set_active(&self, active: bool) {
        let snapshot = {
            let mut inner = self.inner.write().unwrap();
            inner.active = active;
            if active {
                inner.close_requested = false;
            }
            Self::snapshot_of(&inner)
        };
        self.notify(&snapshot);
    }

    pub fn close_requested(&self) -> bool {
        self.inner.read().unwrap().close_requested
    }

    /// External close signal (overlay backdrop tap or programmatic close)
    ///
    /// The lifecycle observes this on its next poll and drives the dismissal;
    /// the flag itself never closes anything.
    pub fn request_close(&self) {
        tracing::debug!("menu close requested");
        let snapshot = {
            let mut inner = self.inner.write().unwrap();
            inner.close_requested = true;
            Self::snapshot_of(&inner)
        };
        self.notify(&snapshot);
    }

    pub fn clear_close_request(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.close_requested = false;
    }

    /// Whole-record snapshot for per-frame readers
    pub fn snapshot(&self) -> MenuSnapshot {
        Self::snapshot_of(&self.inner.read().unwrap())
    }

    /// Subscribe to every published change
    ///
    /// The callback runs synchronously on the writer's thread; keep it cheap.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&MenuSnapshot) + Send + Sync + 'static,
    {
        let mut inner = self.inner.write().unwrap();
        let index = inner.subscribers.len();
        inner.subscribers.push(Some(Box::new(callback)));
        SubscriptionHandle { index }
    }

    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        let mut inner = self.inner.write().unwrap();
        if let Some(slot) = inner.subscribers.get_mut(handle.index) {
            *slot = None;
        }
    }

    fn snapshot_of(inner: &ContextInner) -> MenuSnapshot {
        MenuSnapshot {
            geometry: inner.geometry,
            active: inner.active,
            close_requested: inner.close_requested,
        }
    }

    fn notify(&self, snapshot: &MenuSnapshot) {
        let inner = self.inner.read().unwrap();
        for subscriber in inner.subscribers.iter().flatten() {
            subscriber(snapshot);
        }
    }
}

impl Default for SharedMenuContext {
    fn default() -> Self {
        Self::new()
    }
}
