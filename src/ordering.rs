//! Batch parsing and sort orders for collections of versions

use crate::domain::Version;
use crate::error::Result;
use std::cmp::Ordering;
use tracing::trace;

/// Parses multiple versions at once.
///
/// Inputs are parsed in order and the first invalid one aborts the whole
/// batch; no partial result is returned.
///
/// # Example
/// ```ignore
/// let versions = parse_all(["1.2.3", "0.1.0"])?;
/// assert_eq!(versions.len(), 2);
/// ```
pub fn parse_all<I, S>(inputs: I) -> Result<Vec<Version>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let versions = inputs
        .into_iter()
        .map(|input| Version::parse(input.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    trace!(count = versions.len(), "parsed versions");
    Ok(versions)
}

/// Comparator for ascending order, for use with `sort_by`
pub fn ascending(a: &Version, b: &Version) -> Ordering {
    if a.before(b) {
        Ordering::Less
    } else if b.before(a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Comparator for descending order, for use with `sort_by`
pub fn descending(a: &Version, b: &Version) -> Ordering {
    if a.after(b) {
        Ordering::Less
    } else if b.after(a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Stable in-place sort, lowest version first
pub fn sort_ascending(versions: &mut [Version]) {
    versions.sort_by(ascending);
}

/// Stable in-place sort, highest version first
pub fn sort_descending(versions: &mut [Version]) {
    versions.sort_by(descending);
}
