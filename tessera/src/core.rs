use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono_tz::Tz;
use tessera_core::connector::ConnectorKey;
use tessera_core::{
    Capability, Clock, FetchStrategy, LayoutConfig, NaiveDate, SystemClock, TesseraConfig,
    TesseraConnector, TesseraError, Weeks,
};

/// Orchestrator that routes calendar and presence requests across registered providers.
pub struct Tessera {
    pub(crate) connectors: Vec<Arc<dyn TesseraConnector>>,
    pub(crate) cfg: TesseraConfig,
    pub(crate) per_capability_priority: HashMap<Capability, Vec<ConnectorKey>>,
    pub(crate) clock: Arc<dyn Clock>,
}

/// Builder for constructing a `Tessera` orchestrator with custom configuration.
pub struct TesseraBuilder {
    connectors: Vec<Arc<dyn TesseraConnector>>,
    cfg: TesseraConfig,
    per_capability_priority: HashMap<Capability, Vec<ConnectorKey>>,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for TesseraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TesseraBuilder {
    /// Create a new builder with defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via [`with_connector`].
    /// - Priority-with-fallback fetches, no provider or request timeout (the
    ///   transport bounds each call), 52 default weeks, and a UTC system clock.
    ///
    /// [`with_connector`]: TesseraBuilder::with_connector
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: TesseraConfig::default(),
            per_capability_priority: HashMap::new(),
            clock: None,
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is used only when no explicit priority is set for a
    ///   capability via [`prefer_for`](TesseraBuilder::prefer_for).
    /// - Duplicates are not deduplicated; avoid registering the same connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn TesseraConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set preferred providers for a capability using connector instances.
    ///
    /// The list is an ordering hint: capable connectors that are not listed are
    /// still tried after the listed ones.
    #[must_use]
    pub fn prefer_for(
        mut self,
        capability: Capability,
        connectors_desc: &[Arc<dyn TesseraConnector>],
    ) -> Self {
        let keys: Vec<ConnectorKey> = connectors_desc
            .iter()
            .map(|c| ConnectorKey::new(c.name()))
            .collect();
        self.per_capability_priority.insert(capability, keys);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: TesseraConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the fetch strategy for multi-provider requests.
    ///
    /// Behavior and trade-offs:
    /// - `PriorityWithFallback`: deterministic order, aggregates errors; may be
    ///   slower but economical on rate limits.
    /// - `Latency`: race all eligible providers and return the first success.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Bound each provider call. Exceeding it yields `ProviderTimeout`.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = Some(timeout);
        self
    }

    /// Bound a whole calendar fetch (both sources). Exceeding it yields `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Week count used by sessions before any resize is observed.
    #[must_use]
    pub const fn default_weeks(mut self, weeks: Weeks) -> Self {
        self.cfg.default_weeks = weeks;
        self
    }

    /// Geometry used to derive week counts from container widths.
    #[must_use]
    pub const fn layout(mut self, layout: LayoutConfig) -> Self {
        self.cfg.layout = layout;
        self
    }

    /// Time zone in which the system clock evaluates "today".
    ///
    /// Ignored when a custom clock is installed via [`clock`](TesseraBuilder::clock).
    #[must_use]
    pub const fn timezone(mut self, tz: Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Install a custom clock, e.g. a `FixedClock` for deterministic grids.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the `Tessera` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`with_connector`].
    ///
    /// [`with_connector`]: TesseraBuilder::with_connector
    pub fn build(mut self) -> Result<Tessera, TesseraError> {
        // Drop priority keys naming unregistered connectors and dedup the rest.
        let known: std::collections::HashSet<&'static str> =
            self.connectors.iter().map(|c| c.name()).collect();
        for v in self.per_capability_priority.values_mut() {
            let mut seen: std::collections::HashSet<&'static str> =
                std::collections::HashSet::new();
            v.retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));
        }

        if self.connectors.is_empty() {
            return Err(TesseraError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::new(self.cfg.timezone)));

        Ok(Tessera {
            connectors: self.connectors,
            cfg: self.cfg,
            per_capability_priority: self.per_capability_priority,
            clock,
        })
    }
}

/// Attach the connector name to errors that do not already carry routing context.
pub fn tag_err(connector: &str, e: TesseraError) -> TesseraError {
    match e {
        e @ (TesseraError::NotFound { .. }
        | TesseraError::ProviderTimeout { .. }
        | TesseraError::Connector { .. }
        | TesseraError::RequestTimeout { .. }
        | TesseraError::AllProvidersTimedOut { .. }
        | TesseraError::AllProvidersFailed(_)) => e,
        other => TesseraError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Run `fut` under an optional deadline, mapping expiry to `RequestTimeout("request")`.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    fut: Fut,
) -> Result<T, TesseraError>
where
    Fut: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| TesseraError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Tessera {
    /// Wrap a provider future with an optional timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tessera::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, TesseraError>
    where
        Fut: core::future::Future<Output = Result<T, TesseraError>>,
    {
        match timeout {
            Some(t) => (tokio::time::timeout(t, fut).await)
                .unwrap_or_else(|_| Err(TesseraError::provider_timeout(connector_name, capability))),
            None => fut.await,
        }
    }

    /// Start building a new `Tessera` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use tessera::{Capability, Tessera};
    ///
    /// let github = Arc::new(GithubConnector::new_default());
    /// let mirror = Arc::new(GithubConnector::builder().contributions_base(mirror_url).build()?);
    ///
    /// let tessera = Tessera::builder()
    ///     .with_connector(github.clone())
    ///     .with_connector(mirror.clone())
    ///     .prefer_for(Capability::Contributions, &[mirror, github])
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> TesseraBuilder {
        TesseraBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TesseraConfig {
        &self.cfg
    }

    /// Registered connectors in registration order.
    #[must_use]
    pub fn connectors(&self) -> &[Arc<dyn TesseraConnector>] {
        &self.connectors
    }

    /// Current date according to the configured clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub(crate) fn ordered(&self, capability: Capability) -> Vec<Arc<dyn TesseraConnector>> {
        let mut out: Vec<(usize, Arc<dyn TesseraConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if let Some(pref) = self.per_capability_priority.get(&capability) {
            let pos: HashMap<_, _> = pref
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic single-item fetch across connectors offering `capability`.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`
    /// - Applies the optional per-provider timeout in both modes
    /// - `NotFound` from every attempted provider collapses to one `NotFound`
    /// - No capable provider yields `Unsupported`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tessera::core::fetch_single",
            skip(self, call),
            fields(subject = %subject, capability = %capability, not_found = %not_found_label),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        subject: &str,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, TesseraError>
    where
        T: Send,
        F: Fn(Arc<dyn TesseraConnector>, String) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, TesseraError>> + Send,
    {
        match self.cfg.fetch_strategy {
            FetchStrategy::PriorityWithFallback => {
                self.fetch_single_priority_with_fallback(subject, capability, not_found_label, call)
                    .await
            }
            FetchStrategy::Latency => {
                self.fetch_single_latency(subject, capability, not_found_label, call)
                    .await
            }
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tessera::core::fetch_single_priority_with_fallback",
            skip(self, call),
            fields(subject = %subject, capability = %capability),
        )
    )]
    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        subject: &str,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, TesseraError>
    where
        T: Send,
        F: Fn(Arc<dyn TesseraConnector>, String) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, TesseraError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<TesseraError> = Vec::new();

        for c in self.ordered(capability) {
            if let Some(fut) = call(c.clone(), subject.to_string()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability.as_str(),
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (TesseraError::NotFound { .. } | TesseraError::ProviderTimeout { .. })) => {
                        errors.push(e);
                    }
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(connector = c.name(), error = %e, "provider failed; trying next");
                        errors.push(tag_err(c.name(), e));
                    }
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{not_found_label} for {subject}")),
        ))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tessera::core::fetch_single_latency",
            skip(self, call),
            fields(subject = %subject, capability = %capability),
        )
    )]
    async fn fetch_single_latency<T, F, Fut>(
        &self,
        subject: &str,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, TesseraError>
    where
        T: Send,
        F: Fn(Arc<dyn TesseraConnector>, String) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, TesseraError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let mut futs = FuturesUnordered::new();
        let mut attempted_any = false;
        for c in self.ordered(capability) {
            if let Some(fut) = call(c.clone(), subject.to_string()) {
                let name = c.name();
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        Self::provider_call_with_timeout(name, capability.as_str(), timeout, fut)
                            .await,
                    )
                });
                attempted_any = true;
            }
        }

        let mut errors: Vec<TesseraError> = Vec::new();
        while let Some((name, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok(v),
                Err(e @ (TesseraError::ProviderTimeout { .. } | TesseraError::NotFound { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{not_found_label} for {subject}")),
        ))
    }
}
