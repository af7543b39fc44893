use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while fetching, routing, and assembling calendar and presence data.
///
/// Only a failed primary fetch reaches the caller of a calendar request; a
/// failed secondary fetch is kept as a warning on the report instead.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TesseraError {
    /// No registered connector offers the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. "events".
        capability: String,
    },

    /// A source answered but its body could not be decoded.
    #[error("data issue: {0}")]
    Data(String),

    /// Rejected before any source was contacted (blank user, zero weeks, bad base URL).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A connector failed; `msg` is the source's own description,
    /// e.g. "Failed to fetch data: 502".
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Failure outside any connector, such as a session closed mid-wait.
    #[error("unknown error: {0}")]
    Other(String),

    /// The source has no such user.
    #[error("not found: {what}")]
    NotFound {
        /// What was missing, e.g. "contributions for octocat".
        what: String,
    },

    /// Every capable connector was tried and failed.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<TesseraError>),

    /// One connector exceeded the per-provider timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "contributions", "events", "presence").
        capability: String,
    },

    /// The whole request exceeded its deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label, e.g. "calendar".
        capability: String,
    },

    /// Every capable connector exceeded the per-provider timeout.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },
}

impl TesseraError {
    /// `Unsupported` for a capability label.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// `Connector` tagged with the failing connector's name.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// `NotFound` describing the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// `ProviderTimeout` for one connector and capability.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// `RequestTimeout` for a capability label.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Whether a retry could plausibly help.
    ///
    /// An unknown user or a missing capability will fail the same way again;
    /// an aggregate is actionable if any of its members is.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } | Self::InvalidArg(_) => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }
}
