//! Error types
//!
//! The engine expresses failure as "does not transition" rather than as a
//! raised error; the one condition callers can observe is a rejected
//! activation.

use thiserror::Error;

/// Why an activation settled back without reaching the active state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActivationError {
    /// Press feedback completed but there was nothing to show
    #[error("menu item list is empty; activation suppressed")]
    EmptyItemList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ActivationError::EmptyItemList.to_string(),
            "menu item list is empty; activation suppressed"
        );
    }
}
