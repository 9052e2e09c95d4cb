//! Driving port for single-resource lookups and curated listings.

use async_trait::async_trait;

use crate::domain::{
    CallContext, Error, Movie, MovieChart, MovieDetails, Page, PersonCombinedCredits,
    PersonDetails, PersonMovieCredits, PersonTvCredits, ReviewPage, TimeWindow, TitleCredits,
    TvShow, TvShowDetails,
};

/// Use-case port for record lookups by provider id.
///
/// Every method returns an already translated domain error, so a missing
/// record surfaces as `movie_not_found`, `tv_not_found`, or
/// `person_not_found` depending on which method was called.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaLookup: Send + Sync {
    async fn movie(&self, ctx: &CallContext, id: u64) -> Result<MovieDetails, Error>;

    async fn movie_credits(&self, ctx: &CallContext, id: u64) -> Result<TitleCredits, Error>;

    async fn movie_reviews(
        &self,
        ctx: &CallContext,
        id: u64,
        page: u32,
    ) -> Result<ReviewPage, Error>;

    async fn tv_show(&self, ctx: &CallContext, id: u64) -> Result<TvShowDetails, Error>;

    async fn tv_show_credits(&self, ctx: &CallContext, id: u64) -> Result<TitleCredits, Error>;

    async fn tv_show_reviews(
        &self,
        ctx: &CallContext,
        id: u64,
        page: u32,
    ) -> Result<ReviewPage, Error>;

    async fn person(&self, ctx: &CallContext, id: u64) -> Result<PersonDetails, Error>;

    async fn person_movie_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonMovieCredits, Error>;

    async fn person_tv_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonTvCredits, Error>;

    async fn person_combined_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonCombinedCredits, Error>;

    /// Provider-curated movie chart.
    async fn movie_chart(
        &self,
        ctx: &CallContext,
        chart: MovieChart,
        page: u32,
    ) -> Result<Page<Movie>, Error>;

    async fn trending_movies(
        &self,
        ctx: &CallContext,
        window: TimeWindow,
        page: u32,
    ) -> Result<Page<Movie>, Error>;

    async fn trending_tv_shows(
        &self,
        ctx: &CallContext,
        window: TimeWindow,
        page: u32,
    ) -> Result<Page<TvShow>, Error>;
}
