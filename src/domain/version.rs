use super::{Component, PreRelease, VersionBump};
use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::{debug, trace};

/// Semantic version representation
///
/// Equality, hashing and ordering only look at the numeric triple; the
/// pre-release tag and build metadata are carried along for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pre_release: Option<PreRelease>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    metadata: String,
}

impl Version {
    /// Create a new version without pre-release or metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            metadata: String::new(),
        }
    }

    /// Parse a version from `MAJOR.MINOR.PATCH[...]`.
    ///
    /// An empty string is the zero version. Segments after the third are
    /// ignored, so pre-release and metadata are never read from the input.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Version::default());
        }

        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() < 3 {
            debug!(input, segments = parts.len(), "version has too few segments");
            return Err(VersionError::missing_segments(input, parts.len()));
        }

        let major = parse_number(input, Component::Major, parts[0])?;
        let minor = parse_number(input, Component::Minor, parts[1])?;
        let patch = parse_number(input, Component::Patch, parts[2])?;

        Ok(Version::new(major, minor, patch))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<PreRelease> {
        self.pre_release
    }

    /// Build metadata, `None` when empty
    pub fn metadata(&self) -> Option<&str> {
        if self.metadata.is_empty() {
            None
        } else {
            Some(&self.metadata)
        }
    }

    /// Numeric value of a single component
    pub fn get(&self, component: Component) -> u64 {
        match component {
            Component::Major => self.major,
            Component::Minor => self.minor,
            Component::Patch => self.patch,
        }
    }

    /// Bump in place from change flags.
    ///
    /// Breaking changes bump major and reset minor and patch, otherwise
    /// changes bump minor and reset patch, otherwise patch is bumped. Tags
    /// are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the bumped component is already `u64::MAX`.
    pub fn bump(&mut self, breaking_changes: bool, changes: bool) {
        self.apply(VersionBump::from_changes(breaking_changes, changes));
    }

    /// Apply an explicit bump in place
    ///
    /// # Panics
    ///
    /// Panics if the bumped component is already `u64::MAX`, in release
    /// builds too, rather than wrapping to zero.
    pub fn apply(&mut self, bump: VersionBump) {
        match bump {
            VersionBump::Major => {
                self.major = increment(self.major, Component::Major);
                self.minor = 0;
                self.patch = 0;
            }
            VersionBump::Minor => {
                self.minor = increment(self.minor, Component::Minor);
                self.patch = 0;
            }
            VersionBump::Patch => {
                self.patch = increment(self.patch, Component::Patch);
            }
        }
        trace!(?bump, version = %self, "bumped version");
    }

    /// Mark as an alpha pre-release
    pub fn alpha(&mut self) {
        self.pre_release = Some(PreRelease::Alpha);
    }

    /// Mark as a beta pre-release
    pub fn beta(&mut self) {
        self.pre_release = Some(PreRelease::Beta);
    }

    /// Set build metadata, such as a build date or commit hash.
    /// An empty string clears it.
    pub fn add_metadata(&mut self, metadata: impl Into<String>) {
        self.metadata = metadata.into();
    }

    /// Lexicographic comparison of major, minor, then patch
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }

    /// Whether this version comes strictly before `other`
    pub fn before(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Less
    }

    /// Whether this version comes strictly after `other`
    pub fn after(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Greater
    }

    /// Whether both versions have the same major, minor and patch
    pub fn equal(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }
}

fn increment(value: u64, component: Component) -> u64 {
    match value.checked_add(1) {
        Some(next) => next,
        None => panic!("{component} version number overflow: can't bump past {value}"),
    }
}

fn parse_number(input: &str, component: Component, value: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|source| {
        debug!(input, %component, value, "can't parse version number");
        VersionError::invalid_number(input, component, value, source)
    })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(metadata) = self.metadata() {
            write!(f, "+{}", metadata)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.major, self.minor, self.patch).hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
    }
}
