//! Configuration types for series-tally

use crate::catalog::{self, CatalogEntry};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration for [`SeriesCounter`](crate::SeriesCounter)
///
/// Every field has a default matching the reference publication, so
/// `Config::default()` runs against <https://thezvi.substack.com> with the
/// politeness delays the site expects. The delays exist purely for
/// rate-limiting courtesy, not correctness; tests shrink them to zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Publication base URL (default: "https://thezvi.substack.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of records requested per archive page (default: 50)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Per-request network timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_ms_serde")]
    pub request_timeout: Duration,

    /// Politeness delay between archive page requests (default: 500 ms)
    #[serde(default = "default_page_delay", with = "duration_ms_serde")]
    pub page_delay: Duration,

    /// Politeness delay between per-post fetches (default: 300 ms)
    #[serde(default = "default_post_delay", with = "duration_ms_serde")]
    pub post_delay: Duration,

    /// Browser-like User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Retry behavior for the archive listing call
    ///
    /// Only the listing is retried. Per-post fetches make a single attempt and
    /// fall through to the next stage on failure; losing enumeration loses the
    /// whole run, while a single lost post is cheap to skip.
    #[serde(default)]
    pub retry: RetryConfig,

    /// Fallback catalog substituted wholesale when enumeration yields nothing
    ///
    /// Individual gaps in a partially successful enumeration are never
    /// backfilled from this table.
    #[serde(default = "catalog::default_catalog")]
    pub fallback_catalog: Vec<CatalogEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            request_timeout: default_request_timeout(),
            page_delay: default_page_delay(),
            post_delay: default_post_delay(),
            user_agent: default_user_agent(),
            retry: RetryConfig::default(),
            fallback_catalog: catalog::default_catalog(),
        }
    }
}

/// Retry configuration for the archive listing fetch
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt (default: 2)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry (default: 2 seconds)
    #[serde(default = "default_initial_delay", with = "duration_ms_serde")]
    pub initial_delay: Duration,

    /// Maximum delay between retries (default: 60 seconds)
    #[serde(default = "default_max_delay", with = "duration_ms_serde")]
    pub max_delay: Duration,

    /// Multiplier for exponential backoff (default: 2.0)
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Add random jitter to delays (default: false)
    ///
    /// A single sequential client does not contend with itself, so the
    /// deterministic 2 s / 4 s ladder is the default.
    #[serde(default)]
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay: default_initial_delay(),
            max_delay: default_max_delay(),
            backoff_multiplier: default_backoff_multiplier(),
            jitter: false,
        }
    }
}

fn default_base_url() -> String {
    "https://thezvi.substack.com".to_string()
}

fn default_page_size() -> usize {
    50
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_page_delay() -> Duration {
    Duration::from_millis(500)
}

fn default_post_delay() -> Duration {
    Duration::from_millis(300)
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
        .to_string()
}

fn default_max_attempts() -> u32 {
    2
}

fn default_initial_delay() -> Duration {
    Duration::from_secs(2)
}

fn default_max_delay() -> Duration {
    Duration::from_secs(60)
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

// Duration serialization helper (milliseconds; the politeness delays are
// sub-second, so whole seconds would not round-trip)
mod duration_ms_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
