//! TMDb outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `MetadataSource`
//! port against The Movie Database v3 API.

mod config;
mod dto;
mod http_source;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_POOL_IDLE_TIMEOUT, DEFAULT_POOL_MAX_IDLE_PER_HOST, DEFAULT_TIMEOUT,
    TmdbConfig,
};
pub use http_source::TmdbHttpSource;
