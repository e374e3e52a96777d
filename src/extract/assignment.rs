//! Core record type for extracted assignments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single `ip address` assignment found in configuration text.
///
/// # Fidelity
///
/// Both tokens are exact substrings of the scanned text: no trimming, no
/// case normalization, and no validation that either is a well-formed
/// dotted quad. A record has no identity beyond its position of occurrence
/// in the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAssignment {
    /// The address token as it appeared in the text.
    pub address: String,
    /// The netmask token as it appeared in the text.
    pub netmask: String,
    /// True iff the literal `secondary` marker followed the netmask.
    pub secondary: bool,
}

impl IpAssignment {
    /// Creates a new assignment record.
    #[must_use]
    pub fn new(address: impl Into<String>, netmask: impl Into<String>, secondary: bool) -> Self {
        Self {
            address: address.into(),
            netmask: netmask.into(),
            secondary,
        }
    }

    /// Returns true if this is a primary (non-secondary) assignment.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        !self.secondary
    }
}

impl fmt::Display for IpAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.netmask)?;
        if self.secondary {
            write!(f, " secondary")?;
        }
        Ok(())
    }
}
