use std::fmt;

/// One of the three numeric parts of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    /// All components in precedence order
    pub const ALL: [Component; 3] = [Component::Major, Component::Minor, Component::Patch];
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => write!(f, "major"),
            Component::Minor => write!(f, "minor"),
            Component::Patch => write!(f, "patch"),
        }
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Decide the bump from change flags.
    ///
    /// Breaking changes win over plain changes; with neither flag set the
    /// patch number is bumped.
    pub fn from_changes(breaking_changes: bool, changes: bool) -> Self {
        if breaking_changes {
            VersionBump::Major
        } else if changes {
            VersionBump::Minor
        } else {
            VersionBump::Patch
        }
    }

    /// The component this bump increments
    pub fn component(self) -> Component {
        match self {
            VersionBump::Major => Component::Major,
            VersionBump::Minor => Component::Minor,
            VersionBump::Patch => Component::Patch,
        }
    }
}
