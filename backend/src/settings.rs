//! Process configuration loaded via OrthoConfig.
//!
//! Two independent sections are read from the environment (and an optional
//! config file): [`UpstreamSettings`] under the `TMDB_` prefix and
//! [`ListenerSettings`] under `GATEWAY_`. Unset values fall back to the
//! defaults below; only the API key is mandatory.

use std::ffi::OsString;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::tmdb::{
    DEFAULT_BASE_URL, DEFAULT_POOL_MAX_IDLE_PER_HOST, DEFAULT_TIMEOUT, TmdbConfig,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3005";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Program name handed to OrthoConfig in place of real CLI arguments.
const PROGRAM_NAME: &str = "media-gateway";

/// Configuration failures surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// OrthoConfig could not merge the sources for a section.
    #[error("failed to load {section} settings: {message}")]
    Load {
        section: &'static str,
        message: String,
    },
    /// `TMDB_API_KEY` is unset or blank.
    #[error("TMDB_API_KEY must be set to a non-empty value")]
    MissingApiKey,
    /// `TMDB_BASE_URL` is not an absolute URL.
    #[error("invalid TMDB_BASE_URL {value:?}: {source}")]
    BaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// An entry of `GATEWAY_CORS_ORIGINS` is not an absolute origin.
    #[error("invalid CORS origin {value:?}: {source}")]
    CorsOrigin {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// `GATEWAY_HOST` is not an IP address.
    #[error("invalid GATEWAY_HOST {value:?}: {source}")]
    Host {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Provider connection settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TMDB")]
pub struct UpstreamSettings {
    /// Provider API key, sent as the `api_key` query parameter.
    pub api_key: Option<String>,
    /// Provider root including the version segment.
    pub base_url: Option<String>,
    /// Per-call timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Idle pooled connections kept per host.
    pub pool_max_idle_per_host: Option<usize>,
}

impl UpstreamSettings {
    /// Load from `TMDB_*` variables and the config file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Load`] when a value cannot be parsed.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
            SettingsError::Load {
                section: "upstream",
                message: err.to_string(),
            }
        })
    }

    /// Build the adapter configuration, validating the key and URL.
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingApiKey`] or [`SettingsError::BaseUrl`].
    pub fn to_tmdb_config(&self) -> Result<TmdbConfig, SettingsError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(SettingsError::MissingApiKey)?;
        let raw_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw_url).map_err(|source| SettingsError::BaseUrl {
            value: raw_url.to_owned(),
            source,
        })?;

        let timeout = self
            .timeout_secs
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
        let max_idle = self
            .pool_max_idle_per_host
            .unwrap_or(DEFAULT_POOL_MAX_IDLE_PER_HOST);
        Ok(TmdbConfig::new(base_url, api_key)
            .with_timeout(timeout)
            .with_pool_max_idle_per_host(max_idle))
    }
}

/// Inbound listener settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GATEWAY")]
pub struct ListenerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Comma-separated browser origins allowed by CORS.
    pub cors_origins: Option<String>,
    /// Deadline in seconds applied to each inbound request's upstream call.
    pub request_timeout_secs: Option<u64>,
}

impl ListenerSettings {
    /// Load from `GATEWAY_*` variables and the config file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Load`] when a value cannot be parsed.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
            SettingsError::Load {
                section: "listener",
                message: err.to_string(),
            }
        })
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`SettingsError::Host`] when the host is not an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST).trim();
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::Host {
            value: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Allowed CORS origins, trimmed, with blanks dropped.
    ///
    /// # Errors
    /// Returns [`SettingsError::CorsOrigin`] for an entry that is not a URL.
    pub fn cors_origins(&self) -> Result<Vec<String>, SettingsError> {
        self.cors_origins
            .as_deref()
            .unwrap_or(DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                Url::parse(origin)
                    .map(|_| origin.to_owned())
                    .map_err(|source| SettingsError::CorsOrigin {
                        value: origin.to_owned(),
                        source,
                    })
            })
            .collect()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
