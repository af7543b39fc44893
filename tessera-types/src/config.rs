//! Configuration types shared by the orchestrator, sessions, and layout helpers.

use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::activity::Weeks;

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchStrategy {
    /// Use priority order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// Pixel geometry used to derive how many weeks fit in a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Side length of one day cell in pixels.
    pub cell_size: u32,
    /// Gap between adjacent week columns in pixels.
    pub cell_gap: u32,
    /// Horizontal space reserved for labels and margins.
    pub padding: u32,
    /// Lower clamp for the derived week count.
    pub min_weeks: u16,
    /// Upper clamp for the derived week count.
    pub max_weeks: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: 13,
            cell_gap: 2,
            padding: 60,
            min_weeks: 20,
            max_weeks: 70,
        }
    }
}

/// Global configuration for the `Tessera` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesseraConfig {
    /// Strategy for fetching the primary contributions source from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Optional timeout for individual provider requests.
    ///
    /// `None` leaves request bounds to the underlying transport.
    pub provider_timeout: Option<Duration>,
    /// Optional overall deadline for a whole calendar fetch (both sources).
    pub request_timeout: Option<Duration>,
    /// Week count used by sessions before any resize is observed.
    pub default_weeks: Weeks,
    /// Geometry used to translate container widths into week counts.
    pub layout: LayoutConfig,
    /// Time zone in which "today" is evaluated by the system clock.
    pub timezone: Tz,
}

impl Default for TesseraConfig {
    fn default() -> Self {
        Self {
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: None,
            request_timeout: None,
            default_weeks: Weeks::DEFAULT,
            layout: LayoutConfig::default(),
            timezone: Tz::UTC,
        }
    }
}
