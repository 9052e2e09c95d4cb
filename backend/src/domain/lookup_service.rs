//! Record lookup and listing service.
//!
//! Implements the [`MediaLookup`] driving port by forwarding to the metadata
//! source and translating failures with the resource context of each call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{MediaLookup, MetadataSource, MetadataSourceError};
use crate::domain::{
    CallContext, Error, Movie, MovieChart, MovieDetails, Page, PersonCombinedCredits,
    PersonDetails, PersonMovieCredits, PersonTvCredits, ResourceContext, ReviewPage, TimeWindow,
    TitleCredits, TvShow, TvShowDetails, translate_source_error,
};

/// Lookup service over a metadata source.
#[derive(Clone)]
pub struct MediaLookupService<S> {
    source: Arc<S>,
}

impl<S> MediaLookupService<S> {
    /// Create a service reading from `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

fn in_context<T>(
    result: Result<T, MetadataSourceError>,
    context: ResourceContext,
    action: &str,
) -> Result<T, Error> {
    result.map_err(|err| translate_source_error(&err, context, action))
}

#[async_trait]
impl<S> MediaLookup for MediaLookupService<S>
where
    S: MetadataSource,
{
    async fn movie(&self, ctx: &CallContext, id: u64) -> Result<MovieDetails, Error> {
        in_context(
            self.source.movie_details(ctx, id).await,
            ResourceContext::Movie(id),
            "retrieve movie details",
        )
    }

    async fn movie_credits(&self, ctx: &CallContext, id: u64) -> Result<TitleCredits, Error> {
        in_context(
            self.source.movie_credits(ctx, id).await,
            ResourceContext::Movie(id),
            "retrieve movie credits",
        )
    }

    async fn movie_reviews(
        &self,
        ctx: &CallContext,
        id: u64,
        page: u32,
    ) -> Result<ReviewPage, Error> {
        in_context(
            self.source.movie_reviews(ctx, id, page).await,
            ResourceContext::Movie(id),
            "retrieve movie reviews",
        )
    }

    async fn tv_show(&self, ctx: &CallContext, id: u64) -> Result<TvShowDetails, Error> {
        in_context(
            self.source.tv_show_details(ctx, id).await,
            ResourceContext::Tv(id),
            "retrieve TV show details",
        )
    }

    async fn tv_show_credits(&self, ctx: &CallContext, id: u64) -> Result<TitleCredits, Error> {
        in_context(
            self.source.tv_show_credits(ctx, id).await,
            ResourceContext::Tv(id),
            "retrieve TV show credits",
        )
    }

    async fn tv_show_reviews(
        &self,
        ctx: &CallContext,
        id: u64,
        page: u32,
    ) -> Result<ReviewPage, Error> {
        in_context(
            self.source.tv_show_reviews(ctx, id, page).await,
            ResourceContext::Tv(id),
            "retrieve TV show reviews",
        )
    }

    async fn person(&self, ctx: &CallContext, id: u64) -> Result<PersonDetails, Error> {
        in_context(
            self.source.person_details(ctx, id).await,
            ResourceContext::Person(id),
            "retrieve person details",
        )
    }

    async fn person_movie_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonMovieCredits, Error> {
        in_context(
            self.source.person_movie_credits(ctx, id).await,
            ResourceContext::Person(id),
            "retrieve person movie credits",
        )
    }

    async fn person_tv_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonTvCredits, Error> {
        in_context(
            self.source.person_tv_credits(ctx, id).await,
            ResourceContext::Person(id),
            "retrieve person TV credits",
        )
    }

    async fn person_combined_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonCombinedCredits, Error> {
        in_context(
            self.source.person_combined_credits(ctx, id).await,
            ResourceContext::Person(id),
            "retrieve person combined credits",
        )
    }

    async fn movie_chart(
        &self,
        ctx: &CallContext,
        chart: MovieChart,
        page: u32,
    ) -> Result<Page<Movie>, Error> {
        let action = match chart {
            MovieChart::Popular => "retrieve popular movies",
            MovieChart::TopRated => "retrieve top rated movies",
        };
        in_context(
            self.source.movie_chart(ctx, chart, page).await,
            ResourceContext::Listing,
            action,
        )
    }

    async fn trending_movies(
        &self,
        ctx: &CallContext,
        window: TimeWindow,
        page: u32,
    ) -> Result<Page<Movie>, Error> {
        in_context(
            self.source.trending_movies(ctx, window, page).await,
            ResourceContext::Listing,
            "retrieve trending movies",
        )
    }

    async fn trending_tv_shows(
        &self,
        ctx: &CallContext,
        window: TimeWindow,
        page: u32,
    ) -> Result<Page<TvShow>, Error> {
        in_context(
            self.source.trending_tv_shows(ctx, window, page).await,
            ResourceContext::Listing,
            "retrieve trending TV shows",
        )
    }
}
