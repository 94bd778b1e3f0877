//! Haptic feedback collaborator interface
//!
//! Haptics cross into an effectively asynchronous platform domain; the
//! lifecycle dispatches them fire-and-forget and never observes a result.

use crate::config::HapticStyle;

/// Platform feedback channel a style maps onto
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticClass {
    /// Selection-change tick
    Selection,
    /// Physical impact of a given weight
    Impact,
    /// Notification-style feedback pattern
    Notification,
    /// No feedback
    None,
}

impl HapticStyle {
    /// Which platform channel this style dispatches through
    pub fn class(&self) -> HapticClass {
        match self {
            HapticStyle::Selection => HapticClass::Selection,
            HapticStyle::Light | HapticStyle::Medium | HapticStyle::Heavy => HapticClass::Impact,
            HapticStyle::Success | HapticStyle::Warning | HapticStyle::Error => {
                HapticClass::Notification
            }
            HapticStyle::None => HapticClass::None,
        }
    }
}

/// Side-effecting haptic dispatcher
///
/// Called at most once per activation cycle, exactly on the transition into
/// the active state. Never called with [`HapticStyle::None`]; the lifecycle
/// skips dispatch entirely for that style.
pub trait Haptics {
    fn trigger(&self, style: HapticStyle);
}

/// Dispatcher that does nothing; useful for tests and headless hosts
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn trigger(&self, _style: HapticStyle) {}
}
