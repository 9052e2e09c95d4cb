//! Builders wiring the TMDb adapter into the domain services behind
//! [`HttpState`].

use std::sync::Arc;

use media_gateway::domain::{MediaLookupService, MediaSearchService};
use media_gateway::inbound::http::state::HttpState;
use media_gateway::outbound::tmdb::{TmdbConfig, TmdbHttpSource};

/// Build handler state whose search and lookup services share one pooled
/// TMDb client.
///
/// # Errors
/// Returns the [`reqwest::Error`] raised when the HTTP client cannot be
/// constructed.
pub fn build_http_state(tmdb: TmdbConfig) -> Result<HttpState, reqwest::Error> {
    let source = Arc::new(TmdbHttpSource::new(tmdb)?);
    let search = Arc::new(MediaSearchService::new(Arc::clone(&source)));
    let lookup = Arc::new(MediaLookupService::new(source));
    Ok(HttpState::new(search, lookup))
}
