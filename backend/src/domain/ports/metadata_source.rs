//! Driven port for the external media metadata provider.
//!
//! The domain owns the request and response shapes; adapters own the wire
//! format, authentication, and transport. Every call receives a
//! [`CallContext`] so adapters can refuse work for callers that have already
//! gone away.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{
    CallContext, Movie, MovieChart, MovieDetails, Page, Person, PersonCombinedCredits,
    PersonDetails, PersonMovieCredits, PersonTvCredits, ReviewPage, SearchRequest, TimeWindow,
    TitleCredits, TvShow, TvShowDetails, UnifiedResult,
};

define_port_error! {
    /// Failures surfaced while talking to the metadata provider.
    pub enum MetadataSourceError {
        /// The provider answered with an error status.
        Upstream { status: u16, message: String } =>
            "metadata provider returned {status}: {message}",
        /// The request never produced a response.
        Transport { message: String } =>
            "metadata provider transport failed: {message}",
        /// The request exceeded its time budget.
        Timeout { message: String } =>
            "metadata provider timed out: {message}",
        /// The provider reported success but the body did not match the contract.
        Decode { message: String } =>
            "metadata provider response decode failed: {message}",
        /// The caller cancelled before the call completed.
        Cancelled { message: String } =>
            "metadata provider call cancelled: {message}",
    }
}

impl MetadataSourceError {
    /// Upstream HTTP status, when the provider produced one.
    #[must_use]
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for reading search results, records, and listings from the provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Search every resource family at once. Items arrive already tagged.
    async fn search_multi(
        &self,
        ctx: &CallContext,
        request: &SearchRequest,
    ) -> Result<Page<UnifiedResult>, MetadataSourceError>;

    /// Search movies only. `request.year()` narrows the release year.
    async fn search_movies(
        &self,
        ctx: &CallContext,
        request: &SearchRequest,
    ) -> Result<Page<Movie>, MetadataSourceError>;

    /// Search TV shows only.
    async fn search_tv_shows(
        &self,
        ctx: &CallContext,
        request: &SearchRequest,
    ) -> Result<Page<TvShow>, MetadataSourceError>;

    /// Search people only.
    async fn search_people(
        &self,
        ctx: &CallContext,
        request: &SearchRequest,
    ) -> Result<Page<Person>, MetadataSourceError>;

    async fn movie_details(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<MovieDetails, MetadataSourceError>;

    async fn movie_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<TitleCredits, MetadataSourceError>;

    async fn movie_reviews(
        &self,
        ctx: &CallContext,
        id: u64,
        page: u32,
    ) -> Result<ReviewPage, MetadataSourceError>;

    async fn tv_show_details(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<TvShowDetails, MetadataSourceError>;

    async fn tv_show_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<TitleCredits, MetadataSourceError>;

    async fn tv_show_reviews(
        &self,
        ctx: &CallContext,
        id: u64,
        page: u32,
    ) -> Result<ReviewPage, MetadataSourceError>;

    async fn person_details(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonDetails, MetadataSourceError>;

    async fn person_movie_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonMovieCredits, MetadataSourceError>;

    async fn person_tv_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonTvCredits, MetadataSourceError>;

    async fn person_combined_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonCombinedCredits, MetadataSourceError>;

    /// Curated movie chart such as `popular` or `top_rated`.
    async fn movie_chart(
        &self,
        ctx: &CallContext,
        chart: MovieChart,
        page: u32,
    ) -> Result<Page<Movie>, MetadataSourceError>;

    async fn trending_movies(
        &self,
        ctx: &CallContext,
        window: TimeWindow,
        page: u32,
    ) -> Result<Page<Movie>, MetadataSourceError>;

    async fn trending_tv_shows(
        &self,
        ctx: &CallContext,
        window: TimeWindow,
        page: u32,
    ) -> Result<Page<TvShow>, MetadataSourceError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn only_upstream_failures_expose_a_status() {
        assert_eq!(
            MetadataSourceError::upstream(404_u16, "not found").upstream_status(),
            Some(404)
        );
        assert_eq!(
            MetadataSourceError::decode("eof").upstream_status(),
            None
        );
        assert_eq!(
            MetadataSourceError::cancelled("gone").upstream_status(),
            None
        );
    }
}
