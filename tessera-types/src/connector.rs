//! Connector identity shared by the orchestrator and connector crates.

use core::fmt;

/// Stable name of a registered connector, used to order providers per capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectorKey(&'static str);

impl ConnectorKey {
    /// Wrap a connector's static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The connector name this key refers to.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ConnectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<&'static str> for ConnectorKey {
    fn from(name: &'static str) -> Self {
        Self(name)
    }
}
