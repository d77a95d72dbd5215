//! Small semantic version value type.
//!
//! A [`Version`] is parsed from `MAJOR.MINOR.PATCH`, bumped and tagged in
//! place, rendered as `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]` and
//! ordered lexicographically on its numeric parts.

pub mod domain;
pub mod error;
pub mod ordering;

pub use domain::{Component, PreRelease, Version, VersionBump};
pub use error::{FormatIssue, Result, VersionError};
pub use ordering::{ascending, descending, parse_all, sort_ascending, sort_descending};
