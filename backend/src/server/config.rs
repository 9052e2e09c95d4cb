//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use media_gateway::settings::{ListenerSettings, SettingsError};

/// Listener configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) request_timeout: Duration,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, cors_origins: Vec<String>, request_timeout: Duration) -> Self {
        Self {
            bind_addr,
            cors_origins,
            request_timeout,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Validate listener settings into a server configuration.
    ///
    /// # Errors
    /// Propagates address and origin validation failures from
    /// [`ListenerSettings`].
    pub fn from_settings(settings: &ListenerSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(
            settings.bind_addr()?,
            settings.cors_origins()?,
            settings.request_timeout(),
        ))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Deadline put on every inbound call's upstream work.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
