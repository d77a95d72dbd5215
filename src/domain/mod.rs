//! Domain logic - the version value and its parts

pub mod component;
pub mod prerelease;
pub mod version;

pub use component::{Component, VersionBump};
pub use prerelease::{PreRelease, UnknownPreRelease};
pub use version::Version;
