use crate::domain::Component;
use std::num::ParseIntError;
use thiserror::Error;

/// Error returned when a version string cannot be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version format: '{input}'")]
    InvalidFormat {
        input: String,
        #[source]
        issue: FormatIssue,
    },
}

/// What exactly was wrong with the input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    #[error("expected MAJOR.MINOR.PATCH, found {found} segment(s)")]
    MissingSegments { found: usize },

    #[error("can't parse {component} version number '{value}'")]
    InvalidNumber {
        component: Component,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Convenience type alias for Results in tagver
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Input had fewer than three dot-separated segments
    pub fn missing_segments(input: impl Into<String>, found: usize) -> Self {
        VersionError::InvalidFormat {
            input: input.into(),
            issue: FormatIssue::MissingSegments { found },
        }
    }

    /// One of the first three segments is not a non-negative integer
    pub fn invalid_number(
        input: impl Into<String>,
        component: Component,
        value: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        VersionError::InvalidFormat {
            input: input.into(),
            issue: FormatIssue::InvalidNumber {
                component,
                value: value.into(),
                source,
            },
        }
    }

    /// The rejected input string
    pub fn input(&self) -> &str {
        match self {
            VersionError::InvalidFormat { input, .. } => input,
        }
    }

    pub fn issue(&self) -> &FormatIssue {
        match self {
            VersionError::InvalidFormat { issue, .. } => issue,
        }
    }

    /// The component that failed to parse, if the failure was numeric
    pub fn component(&self) -> Option<Component> {
        match self.issue() {
            FormatIssue::InvalidNumber { component, .. } => Some(*component),
            FormatIssue::MissingSegments { .. } => None,
        }
    }
}
