//! Pattern-driven extraction of assignment lines.

use std::fmt;
use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

use super::IpAssignment;

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;

/// Grammar for one assignment: `ip address <address> <netmask>` with an
/// optional ` secondary` marker. Tokens are maximal runs of non-whitespace
/// characters separated by exactly one space.
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ip address (?P<address>\S+) (?P<netmask>\S+)(?P<secondary> secondary)?")
        .expect("assignment grammar is a valid pattern")
});

/// Extracts `ip address` assignments from device configuration text.
///
/// The scan is unanchored and context-free: it finds the grammar anywhere
/// in the text, not only inside an `interface` stanza, and does not track
/// which interface a match belongs to. Matching is case-sensitive and
/// whitespace-sensitive. Text that never matches simply produces no
/// records; there is no error condition.
///
/// # Examples
///
/// ```
/// use cfgscan::extract::AddressExtractor;
///
/// let extractor = AddressExtractor::new();
/// let mut found = extractor.scan("ip address 10.0.0.1 255.255.255.0");
///
/// let record = found.next().unwrap();
/// assert_eq!(record.address, "10.0.0.1");
/// assert_eq!(record.netmask, "255.255.255.0");
/// assert!(!record.secondary);
/// assert!(found.next().is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AddressExtractor {
    pattern: &'static Regex,
}

impl AddressExtractor {
    /// Creates an extractor for the fixed assignment grammar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: &ASSIGNMENT,
        }
    }

    /// Scans `config` and returns a lazy iterator over the assignments.
    ///
    /// Records are produced on demand, one per non-overlapping match, in
    /// order of the first character of each match. Dropping the iterator
    /// early is safe; no resources are held. Scanning the same text again
    /// yields an identical sequence.
    #[must_use]
    pub fn scan<'t>(&self, config: &'t str) -> Assignments<'t> {
        Assignments {
            matches: self.pattern.captures_iter(config),
        }
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the assignments found in one scan.
///
/// Finite, forward-only, and non-restartable; call
/// [`AddressExtractor::scan`] again to re-scan the same text.
pub struct Assignments<'t> {
    matches: CaptureMatches<'static, 't>,
}

impl Iterator for Assignments<'_> {
    type Item = IpAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|caps| {
            IpAssignment::new(
                &caps["address"],
                &caps["netmask"],
                caps.name("secondary").is_some(),
            )
        })
    }
}

impl std::iter::FusedIterator for Assignments<'_> {}

// Manual Debug impl since the inner match state is not useful to show
impl fmt::Debug for Assignments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assignments").finish_non_exhaustive()
    }
}
