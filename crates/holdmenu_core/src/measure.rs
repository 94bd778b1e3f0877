//! Anchor measurement collaborator interface

use crate::geometry::AnchorRect;

/// Opaque handle identifying a measurable on-screen element
///
/// The engine never interprets the value; it is whatever key the host UI
/// uses to find the element again (a node id, a view tag, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorHandle(pub u64);

/// Resolves an element handle to its current screen-space rectangle
///
/// Must be callable synchronously from inside a gesture event handler.
/// Returning `None` is not an error: the lifecycle keeps the previous
/// rectangle (all-zero before the first successful measurement) and carries
/// on. The overlay may end up visually misplaced, but the cycle never aborts.
pub trait AnchorMeasurer {
    fn measure(&self, handle: AnchorHandle) -> Option<AnchorRect>;
}

impl<F> AnchorMeasurer for F
where
    F: Fn(AnchorHandle) -> Option<AnchorRect>,
{
    fn measure(&self, handle: AnchorHandle) -> Option<AnchorRect> {
        self(handle)
    }
}

/// Measurer that never resolves; geometry stays at its previous defaults
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMeasurer;

impl AnchorMeasurer for NullMeasurer {
    fn measure(&self, _handle: AnchorHandle) -> Option<AnchorRect> {
        None
    }
}
