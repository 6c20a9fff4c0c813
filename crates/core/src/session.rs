//! Per-visitor session flags.
//!
//! Session state is passed into view construction explicitly; nothing in
//! this crate reads ambient storage.

use serde::{Deserialize, Serialize};

/// Flags describing what the visitor has already seen this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlags {
    /// The intro splash has already been shown.
    #[serde(default)]
    pub splash_seen: bool,
}

impl SessionFlags {
    /// Flags for a visitor who has already watched the splash.
    #[must_use]
    pub const fn returning() -> Self {
        Self { splash_seen: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_visit() {
        assert!(!SessionFlags::default().splash_seen);
        assert!(SessionFlags::returning().splash_seen);
    }
}
