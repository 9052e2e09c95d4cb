//! Unified search handler.
//!
//! ```text
//! GET /api/v1/search?query=Fight%20Club&type=movie&page=1&language=en-US&year=1999
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::SearchOutcome;
use crate::domain::{RawSearchParams, ResourceType, SearchRequest, UnifiedResult};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::UnifiedResultSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::FirstValueQuery;

/// Query string accepted by `GET /api/v1/search`.
///
/// Every parameter arrives as text so malformed numbers are reported by the
/// domain normaliser rather than rejected by the extractor.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free-text search. Required and non-blank.
    #[param(example = "Fight Club")]
    pub query: Option<String>,
    /// One of `movie`, `tv`, `person`, `all`. Defaults to `all`.
    #[serde(rename = "type")]
    #[param(rename = "type", example = "all")]
    pub resource_type: Option<String>,
    /// One-based page number. Defaults to 1.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    /// Response language. Defaults to `ja-JP`.
    #[param(example = "en-US")]
    pub language: Option<String>,
    /// Release year between 1900 and 2100; applied to movie searches.
    #[param(value_type = Option<u16>)]
    pub year: Option<String>,
}

impl From<SearchQuery> for RawSearchParams {
    fn from(value: SearchQuery) -> Self {
        Self {
            query: value.query,
            resource_type: value.resource_type,
            page: value.page,
            language: value.language,
            year: value.year,
        }
    }
}

/// Search response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponseBody {
    /// Normalised query echoed back.
    pub query: String,
    /// Resource family that was searched.
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "all")]
    pub resource_type: ResourceType,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    /// Hits tagged by `media_type`.
    #[schema(value_type = Vec<UnifiedResultSchema>)]
    pub results: Vec<UnifiedResult>,
    /// Language the provider was asked to answer in.
    pub language: String,
}

impl From<SearchOutcome> for SearchResponseBody {
    fn from(outcome: SearchOutcome) -> Self {
        let SearchOutcome { request, page } = outcome;
        Self {
            query: request.query().to_owned(),
            resource_type: request.resource_type(),
            page: page.pagination.page,
            total_pages: page.pagination.total_pages,
            total_results: page.pagination.total_results,
            results: page.results,
            language: request.language().to_owned(),
        }
    }
}

/// Search movies, TV shows, and people in one call.
///
/// Input is validated before the provider is contacted; an empty query or an
/// unknown type never reaches upstream.
#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponseBody),
        (status = 400, description = "Invalid search parameters", body = ErrorEnvelope),
        (status = 405, description = "Only GET is allowed", body = ErrorEnvelope),
        (status = 500, description = "Search failed upstream", body = ErrorEnvelope)
    ),
    tags = ["search"],
    operation_id = "search"
)]
pub async fn search(
    state: web::Data<HttpState>,
    query: FirstValueQuery<SearchQuery>,
) -> ApiResult<web::Json<SearchResponseBody>> {
    let request = SearchRequest::normalize(&query.into_inner().into())?;
    let ctx = state.call_context();
    let outcome = state.search.search(&ctx, request).await?;
    Ok(web::Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{MockMediaLookup, MockMediaSearch};
    use crate::domain::{Movie, Page, Pagination};
    use crate::inbound::http::test_utils::{mock_state, test_app};

    fn fight_club_page() -> Page<UnifiedResult> {
        Page {
            pagination: Pagination {
                page: 1,
                total_pages: 1,
                total_results: 1,
            },
            results: vec![UnifiedResult::from(Movie {
                id: 550,
                title: "Fight Club".to_owned(),
                ..Movie::default()
            })],
        }
    }

    #[actix_web::test]
    async fn search_returns_the_envelope() {
        let mut search = MockMediaSearch::new();
        search
            .expect_search()
            .withf(|_, request| {
                request.query() == "Fight Club" && request.resource_type() == ResourceType::All
            })
            .times(1)
            .return_once(|_, request| {
                Ok(SearchOutcome {
                    request,
                    page: fight_club_page(),
                })
            });
        let app =
            actix_test::init_service(test_app(mock_state(search, MockMediaLookup::new()))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/search?query=Fight%20Club")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["query"], "Fight Club");
        assert_eq!(body["type"], "all");
        assert_eq!(body["language"], "ja-JP");
        assert_eq!(body["total_results"], 1);
        assert_eq!(body["results"][0]["media_type"], "movie");
        assert_eq!(body["results"][0]["title"], "Fight Club");
    }

    #[actix_web::test]
    async fn repeated_parameters_keep_the_first_value() {
        let mut search = MockMediaSearch::new();
        search
            .expect_search()
            .withf(|_, request| request.query() == "a" && request.page() == 2)
            .times(1)
            .return_once(|_, request| {
                Ok(SearchOutcome {
                    request,
                    page: fight_club_page(),
                })
            });
        let app =
            actix_test::init_service(test_app(mock_state(search, MockMediaLookup::new()))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/search?query=a&query=b&page=2&page=9")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["query"], "a");
    }

    #[rstest]
    #[case::empty_query("/api/v1/search?query=%20%20", "validation_error", "query")]
    #[case::missing_query("/api/v1/search", "validation_error", "query")]
    #[case::unknown_type("/api/v1/search?query=x&type=episode", "validation_error", "type")]
    #[case::bad_page("/api/v1/search?query=x&page=0", "invalid_request", "page")]
    #[case::bad_year("/api/v1/search?query=x&year=1800", "invalid_request", "year")]
    #[case::page_before_query("/api/v1/search?page=abc", "invalid_request", "page")]
    #[actix_web::test]
    async fn invalid_input_never_reaches_the_service(
        #[case] uri: &str,
        #[case] kind: &str,
        #[case] field: &str,
    ) {
        let mut search = MockMediaSearch::new();
        search.expect_search().times(0);
        let app =
            actix_test::init_service(test_app(mock_state(search, MockMediaLookup::new()))).await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["error"], kind);
        assert_eq!(body["code"], 400);
        assert_eq!(body["details"], json!({ "field": field }));
    }
}
