//! Pre-release tags
//!
//! Only two labels exist: `alpha` and `beta`. They are rendered after the
//! numeric part of a version with a `-` separator and take no part in
//! comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pre-release label attached to a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PreRelease {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
}

impl PreRelease {
    /// The literal label rendered into a version string
    pub fn as_str(self) -> &'static str {
        match self {
            PreRelease::Alpha => "alpha",
            PreRelease::Beta => "beta",
        }
    }
}

impl FromStr for PreRelease {
    type Err = UnknownPreRelease;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(PreRelease::Alpha),
            "beta" => Ok(PreRelease::Beta),
            _ => Err(UnknownPreRelease(s.to_string())),
        }
    }
}

impl TryFrom<String> for PreRelease {
    type Error = UnknownPreRelease;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PreRelease> for String {
    fn from(pre: PreRelease) -> Self {
        pre.as_str().to_string()
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label outside the alpha/beta vocabulary
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid pre-release identifier: '{0}' - expected alpha or beta")]
pub struct UnknownPreRelease(pub String);
