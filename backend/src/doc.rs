//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler under `/api/v1`, the orchestration
//! probes, and the schema wrappers from
//! [`crate::inbound::http::schemas`] that describe domain types without
//! deriving utoipa traits on them.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, MovieDetailsSchema, MoviePageSchema, MovieSchema, PersonCreditsSchema,
    PersonDetailsSchema, PersonSchema, ReviewPageSchema, TitleCreditsSchema, TvShowDetailsSchema,
    TvShowPageSchema, TvShowSchema, UnifiedResultSchema,
};
use crate::inbound::http::search::SearchResponseBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Media gateway API",
        description = "Read-only movie, TV and people metadata backed by The Movie Database."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::search::search,
        crate::inbound::http::movies::get_movie,
        crate::inbound::http::movies::get_movie_credits,
        crate::inbound::http::movies::get_movie_reviews,
        crate::inbound::http::listings::popular_movies,
        crate::inbound::http::listings::top_rated_movies,
        crate::inbound::http::listings::trending,
        crate::inbound::http::tv::get_tv_show,
        crate::inbound::http::tv::get_tv_show_credits,
        crate::inbound::http::tv::get_tv_show_reviews,
        crate::inbound::http::people::get_person,
        crate::inbound::http::people::get_person_movie_credits,
        crate::inbound::http::people::get_person_tv_credits,
        crate::inbound::http::people::get_person_combined_credits,
        crate::inbound::http::health::api_health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorEnvelope,
        ErrorCodeSchema,
        SearchResponseBody,
        UnifiedResultSchema,
        MovieSchema,
        TvShowSchema,
        PersonSchema,
        MovieDetailsSchema,
        TvShowDetailsSchema,
        PersonDetailsSchema,
        TitleCreditsSchema,
        PersonCreditsSchema,
        ReviewPageSchema,
        MoviePageSchema,
        TvShowPageSchema,
        HealthResponse,
    )),
    tags(
        (name = "search", description = "Unified search across movies, TV shows and people"),
        (name = "movies", description = "Movie details, credits and reviews"),
        (name = "tv", description = "TV show details, credits and reviews"),
        (name = "people", description = "Person details and credits"),
        (name = "listings", description = "Popular, top rated and trending charts"),
        (name = "health", description = "Service status and orchestration probes")
    )
)]
pub struct ApiDoc;
