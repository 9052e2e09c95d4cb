//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The wrappers mirror the fields clients rely on most. Nested provider
//! structures are documented as free-form objects since they are forwarded
//! verbatim.

use serde::Serialize;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Required input is missing or has an illegal value.
    #[schema(rename = "validation_error")]
    ValidationError,
    /// Optional input is syntactically wrong.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A path parameter is not a positive integer.
    #[schema(rename = "invalid_parameter")]
    InvalidParameter,
    /// No movie with the requested id.
    #[schema(rename = "movie_not_found")]
    MovieNotFound,
    /// No TV show with the requested id.
    #[schema(rename = "tv_not_found")]
    TvNotFound,
    /// No person with the requested id.
    #[schema(rename = "person_not_found")]
    PersonNotFound,
    /// No route matches the path.
    #[schema(rename = "not_found")]
    NotFound,
    /// Only GET is accepted.
    #[schema(rename = "method_not_allowed")]
    MethodNotAllowed,
    /// A lookup or listing failed upstream.
    #[schema(rename = "api_error")]
    ApiError,
    /// A search failed upstream.
    #[schema(rename = "search_error")]
    SearchError,
    /// An unexpected gateway failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Movie`].
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::Movie)]
pub struct MovieSchema {
    #[schema(example = 550)]
    id: u64,
    #[schema(example = "Fight Club")]
    title: String,
    original_title: String,
    original_language: String,
    overview: String,
    release_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    genre_ids: Vec<i64>,
    popularity: f64,
    vote_average: f64,
    vote_count: u64,
    adult: bool,
    video: bool,
}

/// OpenAPI schema for [`crate::domain::TvShow`].
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::TvShow)]
pub struct TvShowSchema {
    #[schema(example = 1399)]
    id: u64,
    #[schema(example = "Game of Thrones")]
    name: String,
    original_name: String,
    original_language: String,
    origin_country: Vec<String>,
    overview: String,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    genre_ids: Vec<i64>,
    popularity: f64,
    vote_average: f64,
    vote_count: u64,
    adult: bool,
}

/// OpenAPI schema for [`crate::domain::Person`].
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::Person)]
pub struct PersonSchema {
    #[schema(example = 287)]
    id: u64,
    #[schema(example = "Brad Pitt")]
    name: String,
    original_name: String,
    known_for_department: String,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    gender: u8,
    profile_path: Option<String>,
    popularity: f64,
    adult: bool,
    /// Movies and shows tagged by `media_type`.
    #[schema(value_type = Vec<Object>)]
    known_for: Vec<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::UnifiedResult`].
///
/// The record's own fields sit next to a `media_type` discriminant.
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::UnifiedResult)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum UnifiedResultSchema {
    /// A movie hit.
    Movie(MovieSchema),
    /// A TV show hit.
    Tv(TvShowSchema),
    /// A person hit.
    Person(PersonSchema),
}

/// OpenAPI schema for [`crate::domain::MovieDetails`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MovieDetails)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MovieDetailsSchema {
    id: u64,
    title: String,
    original_title: String,
    overview: Option<String>,
    tagline: Option<String>,
    status: String,
    release_date: Option<String>,
    /// Minutes.
    runtime: Option<u32>,
    budget: i64,
    revenue: i64,
    imdb_id: Option<String>,
    homepage: Option<String>,
    #[schema(value_type = Vec<Object>)]
    genres: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    production_companies: Vec<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    belongs_to_collection: Option<serde_json::Value>,
    vote_average: f64,
    vote_count: u64,
}

/// OpenAPI schema for [`crate::domain::TvShowDetails`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TvShowDetails)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TvShowDetailsSchema {
    id: u64,
    name: String,
    original_name: String,
    overview: Option<String>,
    status: String,
    #[schema(rename = "type")]
    show_type: String,
    first_air_date: Option<String>,
    last_air_date: Option<String>,
    in_production: bool,
    number_of_seasons: u32,
    number_of_episodes: u32,
    #[schema(value_type = Vec<Object>)]
    seasons: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    networks: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    created_by: Vec<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::PersonDetails`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PersonDetails)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonDetailsSchema {
    id: u64,
    name: String,
    biography: String,
    birthday: Option<String>,
    deathday: Option<String>,
    place_of_birth: Option<String>,
    known_for_department: String,
    also_known_as: Vec<String>,
    profile_path: Option<String>,
    imdb_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::TitleCredits`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TitleCredits)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TitleCreditsSchema {
    id: u64,
    #[schema(value_type = Vec<Object>)]
    cast: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    crew: Vec<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::PersonCredits`].
///
/// Shared by the movie, TV, and combined credit endpoints; combined entries
/// additionally carry `media_type`.
#[derive(ToSchema)]
#[schema(as = crate::domain::PersonCredits)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonCreditsSchema {
    id: u64,
    #[schema(value_type = Vec<Object>)]
    cast: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    crew: Vec<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::ReviewPage`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReviewPage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewPageSchema {
    id: u64,
    page: u32,
    total_pages: u32,
    total_results: u32,
    #[schema(value_type = Vec<Object>)]
    results: Vec<serde_json::Value>,
}

/// OpenAPI schema for a page of [`crate::domain::Movie`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MoviePage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MoviePageSchema {
    page: u32,
    total_pages: u32,
    total_results: u32,
    results: Vec<MovieSchema>,
}

/// OpenAPI schema for a page of [`crate::domain::TvShow`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TvShowPage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TvShowPageSchema {
    page: u32,
    total_pages: u32,
    total_results: u32,
    results: Vec<TvShowSchema>,
}
