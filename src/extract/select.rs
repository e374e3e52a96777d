//! Record selection for narrowing scan output.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::IpAssignment;

/// Which assignments to keep from a scan.
///
/// Selection is a presence test on the `secondary` flag applied after
/// extraction; it never changes what the scan itself matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Keep every assignment.
    #[default]
    All,
    /// Keep only primary assignments.
    PrimaryOnly,
    /// Keep only assignments carrying the `secondary` marker.
    SecondaryOnly,
}

impl Selection {
    /// Returns true if the record passes this selection.
    #[must_use]
    pub const fn matches(self, record: &IpAssignment) -> bool {
        match self {
            Self::All => true,
            Self::PrimaryOnly => !record.secondary,
            Self::SecondaryOnly => record.secondary,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::PrimaryOnly => write!(f, "primary-only"),
            Self::SecondaryOnly => write!(f, "secondary-only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> IpAssignment {
        IpAssignment::new("10.0.0.1", "255.255.255.0", false)
    }

    fn secondary() -> IpAssignment {
        IpAssignment::new("10.0.0.2", "255.255.255.0", true)
    }

    #[test]
    fn all_keeps_everything() {
        assert!(Selection::All.matches(&primary()));
        assert!(Selection::All.matches(&secondary()));
    }

    #[test]
    fn primary_only_drops_secondary() {
        assert!(Selection::PrimaryOnly.matches(&primary()));
        assert!(!Selection::PrimaryOnly.matches(&secondary()));
    }

    #[test]
    fn secondary_only_drops_primary() {
        assert!(!Selection::SecondaryOnly.matches(&primary()));
        assert!(Selection::SecondaryOnly.matches(&secondary()));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Selection::default(), Selection::All);
    }

    #[test]
    fn display_formats_correctly() {
        assert_eq!(Selection::All.to_string(), "all");
        assert_eq!(Selection::PrimaryOnly.to_string(), "primary-only");
        assert_eq!(Selection::SecondaryOnly.to_string(), "secondary-only");
    }
}
