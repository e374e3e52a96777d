//! Assignment extraction from device configuration text.
//!
//! This module provides types for:
//! - Representing one extracted assignment ([`IpAssignment`])
//! - Scanning configuration text ([`AddressExtractor`]) and iterating the
//!   matches lazily ([`Assignments`])
//! - Narrowing scan output by the secondary marker ([`Selection`])

mod assignment;
mod extractor;
mod select;

pub use assignment::IpAssignment;
pub use extractor::{AddressExtractor, Assignments};
pub use select::Selection;
