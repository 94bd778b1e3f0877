//! Caller-supplied configuration for a held element
//!
//! Immutable for the lifetime of the lifecycle that owns it.

use crate::geometry::AnchorPosition;

/// Which gesture opens the menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationMode {
    /// Long-press; press feedback is held until the threshold elapses
    #[default]
    Hold,
    /// Single tap; plays the full down-then-up pulse before activating
    Tap,
    /// Double tap; same pulse as [`ActivationMode::Tap`]
    DoubleTap,
}

impl ActivationMode {
    /// Tap modes fold measuring and transforming into one animated step
    pub fn is_instant(&self) -> bool {
        matches!(self, ActivationMode::Tap | ActivationMode::DoubleTap)
    }
}

/// Haptic feedback flavor fired when the menu becomes active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HapticStyle {
    Selection,
    Light,
    #[default]
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
    /// Suppress haptics entirely
    None,
}

/// Configuration for one held element
#[derive(Clone, Debug)]
pub struct MenuConfig {
    /// Gesture that opens the menu
    pub activate_on: ActivationMode,
    /// Minimum press duration before a hold activates
    pub long_press_min_duration_ms: u32,
    /// Skip the vertical overflow correction entirely
    pub disable_move: bool,
    /// Tapping the overlay backdrop dismisses the menu
    pub close_on_tap: bool,
    /// Haptic fired exactly once on entering the active state
    pub haptic_feedback: HapticStyle,
    /// Pin the anchor position instead of resolving it per activation
    pub anchor_position: Option<AnchorPosition>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            activate_on: ActivationMode::Hold,
            long_press_min_duration_ms: 150,
            disable_move: false,
            close_on_tap: true,
            haptic_feedback: HapticStyle::Medium,
            anchor_position: None,
        }
    }
}

impl MenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate_on(mut self, mode: ActivationMode) -> Self {
        self.activate_on = mode;
        self
    }

    pub fn long_press_min_duration_ms(mut self, ms: u32) -> Self {
        self.long_press_min_duration_ms = ms;
        self
    }

    pub fn disable_move(mut self, disable: bool) -> Self {
        self.disable_move = disable;
        self
    }

    pub fn close_on_tap(mut self, close: bool) -> Self {
        self.close_on_tap = close;
        self
    }

    pub fn haptic_feedback(mut self, style: HapticStyle) -> Self {
        self.haptic_feedback = style;
        self
    }

    /// Pin the anchor position; the resolver is skipped entirely
    pub fn anchor_position(mut self, position: AnchorPosition) -> Self {
        self.anchor_position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.activate_on, ActivationMode::Hold);
        assert_eq!(config.long_press_min_duration_ms, 150);
        assert!(!config.disable_move);
        assert!(config.anchor_position.is_none());
    }

    #[test]
    fn test_instant_modes() {
        assert!(!ActivationMode::Hold.is_instant());
        assert!(ActivationMode::Tap.is_instant());
        assert!(ActivationMode::DoubleTap.is_instant());
    }

    #[test]
    fn test_builder() {
        let config = MenuConfig::new()
            .activate_on(ActivationMode::Tap)
            .disable_move(true)
            .anchor_position(AnchorPosition::BottomCenter);
        assert_eq!(config.activate_on, ActivationMode::Tap);
        assert!(config.disable_move);
        assert_eq!(config.anchor_position, Some(AnchorPosition::BottomCenter));
    }
}
