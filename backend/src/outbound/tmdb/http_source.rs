//! Reqwest-backed TMDb source adapter.
//!
//! This adapter owns transport details only: URL construction, API key
//! injection, cancellation, HTTP error mapping, and JSON decoding into
//! domain records.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::config::TmdbConfig;
use super::dto::{MultiSearchItemDto, TmdbErrorDto, into_unified_page};
use crate::domain::ports::{MetadataSource, MetadataSourceError};
use crate::domain::{
    CallContext, Interrupted, Movie, MovieChart, MovieDetails, Page, Person,
    PersonCombinedCredits, PersonDetails, PersonMovieCredits, PersonTvCredits, ReviewPage,
    SearchRequest, TimeWindow, TitleCredits, TvShow, TvShowDetails, UnifiedResult,
};

type QueryParams = Vec<(&'static str, String)>;

/// Metadata source adapter that performs HTTP GET requests against TMDb.
pub struct TmdbHttpSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl TmdbHttpSource {
    /// Build an adapter with one pooled client shared by every call.
    /// ```rust,ignore
    /// let source = TmdbHttpSource::new(TmdbConfig::new(base_url, api_key))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: TmdbConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, MetadataSourceError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|error| {
            MetadataSourceError::transport(format!("invalid endpoint for {path}: {error}"))
        })
    }

    async fn get_json<T>(
        &self,
        ctx: &CallContext,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, MetadataSourceError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let request = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(&[("api_key", self.api_key.as_str())])
            .query(params);

        ctx.run(async move {
            let response = request.send().await.map_err(map_transport_error)?;
            let status = response.status();
            let body = response.bytes().await.map_err(map_transport_error)?;
            debug!(path, status = status.as_u16(), "metadata provider responded");
            if !status.is_success() {
                return Err(map_status_error(status, body.as_ref()));
            }
            decode_body(body.as_ref())
        })
        .await
        .map_err(map_interruption)?
    }
}

fn search_params(request: &SearchRequest) -> QueryParams {
    vec![
        ("query", request.query().to_owned()),
        ("page", request.page().to_string()),
        ("language", request.language().to_owned()),
    ]
}

fn page_param(page: u32) -> QueryParams {
    vec![("page", page.to_string())]
}

#[async_trait]
impl MetadataSource for TmdbHttpSource {
    async fn search_multi(
        &self,
        ctx: &CallContext,
        request: &SearchRequest,
    ) -> Result<Page<UnifiedResult>, MetadataSourceError> {
        let page: Page<MultiSearchItemDto> = self
            .get_json(ctx, "/search/multi", &search_params(request))
            .await?;
        Ok(into_unified_page(page))
    }

    async fn search_movies(
        &self,
        ctx: &CallContext,
        request: &SearchRequest,
    ) -> Result<Page<Movie>, MetadataSourceError> {
        let mut params = search_params(request);
        if let Some(year) = request.year() {
            params.push(("year", year.to_string()));
        }
        self.get_json(ctx, "/search/movie", &params).await
    }

    async fn search_tv_shows(
        &self,
        ctx: &CallContext,
        request: &SearchRequest,
    ) -> Result<Page<TvShow>, MetadataSourceError> {
        self.get_json(ctx, "/search/tv", &search_params(request))
            .await
    }

    async fn search_people(
        &self,
        ctx: &CallContext,
        request: &SearchRequest,
    ) -> Result<Page<Person>, MetadataSourceError> {
        self.get_json(ctx, "/search/person", &search_params(request))
            .await
    }

    async fn movie_details(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<MovieDetails, MetadataSourceError> {
        self.get_json(ctx, &format!("/movie/{id}"), &[]).await
    }

    async fn movie_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<TitleCredits, MetadataSourceError> {
        self.get_json(ctx, &format!("/movie/{id}/credits"), &[])
            .await
    }

    async fn movie_reviews(
        &self,
        ctx: &CallContext,
        id: u64,
        page: u32,
    ) -> Result<ReviewPage, MetadataSourceError> {
        self.get_json(ctx, &format!("/movie/{id}/reviews"), &page_param(page))
            .await
    }

    async fn tv_show_details(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<TvShowDetails, MetadataSourceError> {
        self.get_json(ctx, &format!("/tv/{id}"), &[]).await
    }

    async fn tv_show_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<TitleCredits, MetadataSourceError> {
        self.get_json(ctx, &format!("/tv/{id}/credits"), &[]).await
    }

    async fn tv_show_reviews(
        &self,
        ctx: &CallContext,
        id: u64,
        page: u32,
    ) -> Result<ReviewPage, MetadataSourceError> {
        self.get_json(ctx, &format!("/tv/{id}/reviews"), &page_param(page))
            .await
    }

    async fn person_details(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonDetails, MetadataSourceError> {
        self.get_json(ctx, &format!("/person/{id}"), &[]).await
    }

    async fn person_movie_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonMovieCredits, MetadataSourceError> {
        self.get_json(ctx, &format!("/person/{id}/movie_credits"), &[])
            .await
    }

    async fn person_tv_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonTvCredits, MetadataSourceError> {
        self.get_json(ctx, &format!("/person/{id}/tv_credits"), &[])
            .await
    }

    async fn person_combined_credits(
        &self,
        ctx: &CallContext,
        id: u64,
    ) -> Result<PersonCombinedCredits, MetadataSourceError> {
        self.get_json(ctx, &format!("/person/{id}/combined_credits"), &[])
            .await
    }

    async fn movie_chart(
        &self,
        ctx: &CallContext,
        chart: MovieChart,
        page: u32,
    ) -> Result<Page<Movie>, MetadataSourceError> {
        self.get_json(ctx, &format!("/movie/{}", chart.as_str()), &page_param(page))
            .await
    }

    async fn trending_movies(
        &self,
        ctx: &CallContext,
        window: TimeWindow,
        page: u32,
    ) -> Result<Page<Movie>, MetadataSourceError> {
        self.get_json(ctx, &format!("/trending/movie/{window}"), &page_param(page))
            .await
    }

    async fn trending_tv_shows(
        &self,
        ctx: &CallContext,
        window: TimeWindow,
        page: u32,
    ) -> Result<Page<TvShow>, MetadataSourceError> {
        self.get_json(ctx, &format!("/trending/tv/{window}"), &page_param(page))
            .await
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, MetadataSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        MetadataSourceError::decode(format!("invalid TMDb JSON payload: {error}"))
    })
}

fn map_interruption(interrupted: Interrupted) -> MetadataSourceError {
    match interrupted {
        Interrupted::Cancelled => MetadataSourceError::cancelled(interrupted.to_string()),
        Interrupted::DeadlineExceeded => MetadataSourceError::timeout(interrupted.to_string()),
    }
}

fn map_transport_error(error: reqwest::Error) -> MetadataSourceError {
    if error.is_timeout() {
        MetadataSourceError::timeout(error.to_string())
    } else {
        MetadataSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> MetadataSourceError {
    let message = match serde_json::from_slice::<TmdbErrorDto>(body) {
        Ok(provider) => {
            debug!(
                status = status.as_u16(),
                provider_code = provider.status_code,
                "metadata provider error body"
            );
            provider.status_message
        }
        Err(_) => format!("HTTP {}: {}", status.as_u16(), String::from_utf8_lossy(body)),
    };
    MetadataSourceError::upstream(status.as_u16(), message)
}

#[cfg(test)]
#[path = "http_source_tests.rs"]
mod tests;
