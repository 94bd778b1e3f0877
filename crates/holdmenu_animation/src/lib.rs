//! holdmenu animation driver
//!
//! Single-threaded cooperative animation for the menu engine:
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Timed Tracks**: fixed-duration eased transitions with optional delay
//! - **One-Shot Completions**: every `start()` may carry a completion callback
//!   invoked by the driver's `tick()` on the same thread
//! - **Interruptible**: re-targeting an in-flight animation aims at the latest
//!   target; springs inherit their velocity, displaced completions fire with
//!   `finished = false`
//!
//! There is no background thread. The host calls
//! [`AnimationDriver::tick`] once per frame; everything else is bookkeeping.

pub mod driver;
pub mod easing;
pub mod spring;
pub mod timed;

pub use driver::{AnimatedValue, AnimationDriver, CompletionFn, Curve, DriverHandle, TrackId};
pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use timed::TimedTrack;
