//! Connection settings for the TMDb adapter.

use std::fmt;
use std::time::Duration;

use url::Url;

/// Default provider root, including the API version segment.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default bound on idle pooled connections per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;
/// Default idle connection lifetime.
pub const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

const DEFAULT_USER_AGENT: &str = "media-gateway/0.1";

/// Everything the adapter needs to reach the provider.
///
/// The API key is redacted from the `Debug` output.
#[derive(Clone)]
pub struct TmdbConfig {
    pub base_url: Url,
    pub api_key: String,
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    pub user_agent: String,
}

impl TmdbConfig {
    /// Config for `base_url` with the default pool and timeout settings.
    ///
    /// # Examples
    /// ```
    /// use media_gateway::outbound::tmdb::TmdbConfig;
    ///
    /// let base = url::Url::parse("https://api.themoviedb.org/3").expect("url");
    /// let config = TmdbConfig::new(base, "secret");
    ///
    /// assert_eq!(config.pool_max_idle_per_host, 10);
    /// assert!(!format!("{config:?}").contains("secret"));
    /// ```
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            pool_idle_timeout: DEFAULT_POOL_IDLE_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Replace the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the idle connection bound.
    #[must_use]
    pub fn with_pool_max_idle_per_host(mut self, max_idle: usize) -> Self {
        self.pool_max_idle_per_host = max_idle;
        self
    }
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
            .field("pool_idle_timeout", &self.pool_idle_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
