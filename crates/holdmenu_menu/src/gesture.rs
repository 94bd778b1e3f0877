//! Gesture event model and recognizer strategy table
//!
//! The engine does not recognize gestures itself; a platform gesture source
//! feeds it discrete events. Which recognizer the host should install comes
//! from the activation mode, dispatched through a tagged variant instead of
//! constructing recognizer wrappers ad hoc.

use holdmenu_core::config::{ActivationMode, MenuConfig};

/// Discrete events emitted by the host's gesture recognizer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEvent {
    /// Recognizer saw a touch that may become the configured gesture
    Begin,
    /// The configured gesture fired (tap count reached, hold threshold met)
    Activate,
    /// Touch lifted; the gesture is over
    Finish,
    /// Recognizer gave up (moved out, interrupted)
    Cancel,
}

/// Recognizer parameters the host should install for an activation mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizerSpec {
    /// Tap recognizer firing after `taps` taps
    Tap { taps: u8 },
    /// Long-press recognizer firing after `min_duration_ms`
    LongPress { min_duration_ms: u32 },
}

/// Map an activation mode to its recognizer parameters
pub fn recognizer_for(config: &MenuConfig) -> RecognizerSpec {
    match config.activate_on {
        ActivationMode::Hold => RecognizerSpec::LongPress {
            min_duration_ms: config.long_press_min_duration_ms,
        },
        ActivationMode::Tap => RecognizerSpec::Tap { taps: 1 },
        ActivationMode::DoubleTap => RecognizerSpec::Tap { taps: 2 },
    }
}
