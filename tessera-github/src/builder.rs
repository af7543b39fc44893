use url::Url;

use tessera_core::TesseraError;

use crate::GithubConnector;
use crate::adapter::{
    DEFAULT_API_BASE, DEFAULT_CONTRIBUTIONS_BASE, DEFAULT_USER_AGENT, RealAdapter,
};

/// Builder for [`GithubConnector`].
///
/// Every setting has a default: the public endpoints, a `tessera/<version>`
/// user agent, and a fresh `reqwest::Client`.
#[derive(Debug, Default)]
pub struct GithubConnectorBuilder {
    contributions_base: Option<Url>,
    api_base: Option<Url>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
}

impl GithubConnectorBuilder {
    /// Create a builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root of the contributions calendar API (e.g. a mirror or test server).
    #[must_use]
    pub fn contributions_base(mut self, base: Url) -> Self {
        self.contributions_base = Some(base);
        self
    }

    /// Root of the GitHub REST API (e.g. an Enterprise host or test server).
    #[must_use]
    pub fn api_base(mut self, base: Url) -> Self {
        self.api_base = Some(base);
        self
    }

    /// `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Reuse an existing HTTP client (timeouts, proxies, connection pool).
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a default base fails to parse, or `Other` if
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<GithubConnector, TesseraError> {
        let contributions_base = match self.contributions_base {
            Some(u) => u,
            None => parse_base(DEFAULT_CONTRIBUTIONS_BASE)?,
        };
        let api_base = match self.api_base {
            Some(u) => u,
            None => parse_base(DEFAULT_API_BASE)?,
        };
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let http = match self.client {
            Some(c) => c,
            None => reqwest::Client::builder()
                .user_agent(user_agent.clone())
                .build()
                .map_err(|e| TesseraError::Other(e.to_string()))?,
        };

        let adapter = RealAdapter::new(http, contributions_base, api_base, user_agent);
        Ok(GithubConnector::from_real(&adapter))
    }
}

fn parse_base(s: &str) -> Result<Url, TesseraError> {
    Url::parse(s).map_err(|e| TesseraError::InvalidArg(format!("invalid base url {s}: {e}")))
}
