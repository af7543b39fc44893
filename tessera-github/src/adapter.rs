use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tessera_core::{ActivityEvent, ContributionEntry, TesseraError};
use url::Url;

/// Contributions abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait GhContributions: Send + Sync {
    /// Fetch the last year of contribution entries for `user`.
    async fn fetch(&self, user: &str) -> Result<Vec<ContributionEntry>, TesseraError>;
}

/// Public events abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait GhEvents: Send + Sync {
    /// Fetch up to one page (100) of recent public events for `user`.
    async fn fetch(&self, user: &str) -> Result<Vec<ActivityEvent>, TesseraError>;
}

/// Contributions endpoint used when no base is configured.
pub const DEFAULT_CONTRIBUTIONS_BASE: &str = "https://github-contributions-api.jogruber.de";
/// GitHub REST API root used when no base is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// User agent sent to GitHub, which rejects anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!("tessera/", env!("CARGO_PKG_VERSION"));

const EVENTS_PAGE_SIZE: &str = "100";

#[derive(Deserialize)]
struct ContributionsPayload {
    #[serde(default)]
    contributions: Vec<ContributionEntry>,
}

/// Real adapter backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync` and pools connections internally.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    contributions_base: Url,
    api_base: Url,
    user_agent: String,
}

impl RealAdapter {
    /// Wrap an existing client with explicit endpoint bases.
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        contributions_base: Url,
        api_base: Url,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            http,
            contributions_base,
            api_base,
            user_agent: user_agent.into(),
        }
    }

    /// `{contributions_base}/v4/{user}?y=last`
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base cannot carry a path (e.g. `data:` URLs).
    pub fn contributions_url(&self, user: &str) -> Result<Url, TesseraError> {
        let mut url = endpoint(&self.contributions_base, &["v4", user])?;
        url.query_pairs_mut().append_pair("y", "last");
        Ok(url)
    }

    /// `{api_base}/users/{user}/events/public?per_page=100`
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base cannot carry a path.
    pub fn events_url(&self, user: &str) -> Result<Url, TesseraError> {
        let mut url = endpoint(&self.api_base, &["users", user, "events", "public"])?;
        url.query_pairs_mut()
            .append_pair("per_page", EVENTS_PAGE_SIZE);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        accept: &'static str,
        what: &str,
    ) -> Result<T, TesseraError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "GET");
        let resp = self
            .http
            .get(url)
            .header(ACCEPT, accept)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|e| map_transport_err(&e, what))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(TesseraError::not_found(what.to_string()));
        }
        if !status.is_success() {
            return Err(TesseraError::connector(
                crate::GithubConnector::NAME,
                format!("Failed to fetch data: {}", status.as_u16()),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| map_transport_err(&e, what))?;
        serde_json::from_str(&body).map_err(|e| TesseraError::Data(format!("{what}: {e}")))
    }
}

fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, TesseraError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| TesseraError::InvalidArg(format!("base url cannot carry a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn map_transport_err(e: &reqwest::Error, context: &str) -> TesseraError {
    if e.is_timeout() {
        TesseraError::connector(
            crate::GithubConnector::NAME,
            format!("timed out: {context}"),
        )
    } else if e.is_decode() {
        TesseraError::Data(format!("{context}: {e}"))
    } else {
        TesseraError::connector(crate::GithubConnector::NAME, e.to_string())
    }
}

#[async_trait]
impl GhContributions for RealAdapter {
    async fn fetch(&self, user: &str) -> Result<Vec<ContributionEntry>, TesseraError> {
        let url = self.contributions_url(user)?;
        let payload: ContributionsPayload = self
            .get_json(url, "application/json", &format!("contributions for {user}"))
            .await?;
        Ok(payload.contributions)
    }
}

#[async_trait]
impl GhEvents for RealAdapter {
    async fn fetch(&self, user: &str) -> Result<Vec<ActivityEvent>, TesseraError> {
        let url = self.events_url(user)?;
        self.get_json(url, "application/vnd.github+json", &format!("events for {user}"))
            .await
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn GhContributions {
    /// Build a `GhContributions` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn GhContributions>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Vec<ContributionEntry>, TesseraError>,
    {
        struct FnContrib<F>(F);
        #[async_trait]
        impl<F> GhContributions for FnContrib<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Vec<ContributionEntry>, TesseraError>,
        {
            async fn fetch(&self, user: &str) -> Result<Vec<ContributionEntry>, TesseraError> {
                (self.0)(user.to_string())
            }
        }
        Arc::new(FnContrib(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn GhEvents {
    /// Build a `GhEvents` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn GhEvents>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Vec<ActivityEvent>, TesseraError>,
    {
        struct FnEvents<F>(F);
        #[async_trait]
        impl<F> GhEvents for FnEvents<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Vec<ActivityEvent>, TesseraError>,
        {
            async fn fetch(&self, user: &str) -> Result<Vec<ActivityEvent>, TesseraError> {
                (self.0)(user.to_string())
            }
        }
        Arc::new(FnEvents(f))
    }
}

/// Hand out shared adapter handles. Used by [`crate::GithubConnector::from_adapter`].
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn GhContributions>`.
    fn clone_arc_contributions(&self) -> Arc<dyn GhContributions>;
    /// Clone as `Arc<dyn GhEvents>`.
    fn clone_arc_events(&self) -> Arc<dyn GhEvents>;
}

impl CloneArcAdapters for RealAdapter {
    fn clone_arc_contributions(&self) -> Arc<dyn GhContributions> {
        Arc::new(self.clone()) as Arc<dyn GhContributions>
    }
    fn clone_arc_events(&self) -> Arc<dyn GhEvents> {
        Arc::new(self.clone()) as Arc<dyn GhEvents>
    }
}
