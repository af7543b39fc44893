//! tessera-lanyard
//!
//! Presence connector backed by the Lanyard REST API, which mirrors a Discord
//! user's status and rich-presence activities. Only the one-shot REST lookup
//! is implemented; the live WebSocket feed is not.
#![warn(missing_docs)]

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tessera_core::{
    PresenceData, TesseraError,
    connector::{ConnectorKey, PresenceProvider, TesseraConnector},
};
use url::Url;

/// Lanyard API root used when no base is configured.
pub const DEFAULT_BASE: &str = "https://api.lanyard.rest";

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<PresenceData>,
    #[serde(default)]
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    error: Option<EnvelopeError>,
}

#[derive(Deserialize)]
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
struct EnvelopeError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Public connector type.
#[derive(Clone)]
pub struct LanyardConnector {
    http: reqwest::Client,
    base: Url,
}

impl LanyardConnector {
    /// Connector name used for priorities and error tagging.
    pub const NAME: &'static str = "tessera-lanyard";
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(Self::NAME);

    /// Build against the public API with a fresh HTTP client.
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, TesseraError> {
        let base = Url::parse(DEFAULT_BASE)
            .map_err(|e| TesseraError::InvalidArg(format!("invalid base url: {e}")))?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TesseraError::Other(e.to_string()))?;
        Ok(Self::new(http, base))
    }

    /// Use an existing client against `base` (a mirror or test server).
    #[must_use]
    pub const fn new(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    /// `{base}/v1/users/{user_id}`
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base cannot carry a path.
    pub fn user_url(&self, user_id: &str) -> Result<Url, TesseraError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                TesseraError::InvalidArg(format!("base url cannot carry a path: {}", self.base))
            })?
            .pop_if_empty()
            .extend(["v1", "users", user_id]);
        Ok(url)
    }

    fn unwrap_envelope(env: Envelope, user_id: &str) -> Result<PresenceData, TesseraError> {
        let what = format!("presence for {user_id}");
        if !env.success {
            #[cfg(feature = "tracing")]
            if let Some(err) = &env.error {
                tracing::debug!(code = %err.code, message = %err.message, "lanyard lookup unsuccessful");
            }
            return Err(TesseraError::not_found(what));
        }
        env.data
            .ok_or_else(|| TesseraError::Data(format!("{what}: success without data")))
    }
}

#[async_trait]
impl PresenceProvider for LanyardConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tessera_lanyard::presence",
            skip(self),
            fields(user_id = %user_id),
        )
    )]
    async fn presence(&self, user_id: &str) -> Result<PresenceData, TesseraError> {
        let url = self.user_url(user_id)?;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TesseraError::connector(Self::NAME, e.to_string()))?;

        // Unknown users come back as 404 with a well-formed envelope.
        let status = resp.status();
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(TesseraError::connector(
                Self::NAME,
                format!("Failed to fetch data: {}", status.as_u16()),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| TesseraError::connector(Self::NAME, e.to_string()))?;
        let env: Envelope = serde_json::from_str(&body)
            .map_err(|e| TesseraError::Data(format!("presence for {user_id}: {e}")))?;
        Self::unwrap_envelope(env, user_id)
    }
}

impl TesseraConnector for LanyardConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Lanyard"
    }

    fn as_presence_provider(&self) -> Option<&dyn PresenceProvider> {
        Some(self as &dyn PresenceProvider)
    }
}
