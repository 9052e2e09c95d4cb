//! Movie lookup handlers.
//!
//! ```text
//! GET /api/v1/movies/{id}
//! GET /api/v1/movies/{id}/credits
//! GET /api/v1/movies/{id}/reviews?page=1
//! ```

use actix_web::web;

use crate::domain::{MovieDetails, ReviewPage, TitleCredits};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{MovieDetailsSchema, ReviewPageSchema, TitleCreditsSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FirstValueQuery, IdKind, PageQuery, parse_id};

/// Fetch full details of one movie.
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(("id" = u64, Path, description = "Provider movie id", example = 550)),
    responses(
        (status = 200, description = "Movie details", body = MovieDetailsSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such movie", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["movies"],
    operation_id = "getMovie"
)]
pub async fn get_movie(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<MovieDetails>> {
    let id = parse_id(&id, IdKind::Movie)?;
    let details = state.lookup.movie(&state.call_context(), id).await?;
    Ok(web::Json(details))
}

/// Fetch cast and crew of one movie.
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}/credits",
    params(("id" = u64, Path, description = "Provider movie id")),
    responses(
        (status = 200, description = "Movie credits", body = TitleCreditsSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such movie", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["movies"],
    operation_id = "getMovieCredits"
)]
pub async fn get_movie_credits(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<TitleCredits>> {
    let id = parse_id(&id, IdKind::Movie)?;
    let credits = state.lookup.movie_credits(&state.call_context(), id).await?;
    Ok(web::Json(credits))
}

/// Fetch one page of user reviews for a movie.
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}/reviews",
    params(("id" = u64, Path, description = "Provider movie id"), PageQuery),
    responses(
        (status = 200, description = "Movie reviews", body = ReviewPageSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such movie", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["movies"],
    operation_id = "getMovieReviews"
)]
pub async fn get_movie_reviews(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    query: FirstValueQuery<PageQuery>,
) -> ApiResult<web::Json<ReviewPage>> {
    let id = parse_id(&id, IdKind::Movie)?;
    let reviews = state
        .lookup
        .movie_reviews(&state.call_context(), id, query.page())
        .await?;
    Ok(web::Json(reviews))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::{MockMediaLookup, MockMediaSearch};
    use crate::domain::{Error, ErrorCode};
    use crate::inbound::http::test_utils::{mock_state, test_app};

    #[actix_web::test]
    async fn details_are_forwarded() {
        let mut lookup = MockMediaLookup::new();
        lookup
            .expect_movie()
            .withf(|_, id| *id == 550)
            .times(1)
            .return_once(|_, id| {
                Ok(MovieDetails {
                    id,
                    title: "Fight Club".to_owned(),
                    tagline: Some("Mischief. Mayhem. Soap.".to_owned()),
                    ..MovieDetails::default()
                })
            });
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/movies/550")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["title"], "Fight Club");
        assert_eq!(body["tagline"], "Mischief. Mayhem. Soap.");
    }

    #[rstest]
    #[case("/api/v1/movies/abc")]
    #[case("/api/v1/movies/0")]
    #[case("/api/v1/movies/-1/credits")]
    #[actix_web::test]
    async fn malformed_ids_are_rejected(#[case] uri: &str) {
        let mut lookup = MockMediaLookup::new();
        lookup.expect_movie().times(0);
        lookup.expect_movie_credits().times(0);
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["error"], "invalid_parameter");
        assert_eq!(body["message"], "Movie ID must be a positive integer");
    }

    #[actix_web::test]
    async fn missing_movie_is_a_404() {
        let mut lookup = MockMediaLookup::new();
        lookup.expect_movie().return_once(|_, _| {
            Err(Error::new(
                ErrorCode::MovieNotFound,
                "Movie with ID 999999 not found",
            ))
        });
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/movies/999999")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["error"], "movie_not_found");
        assert_eq!(body["code"], 404);
    }

    #[rstest]
    #[case("/api/v1/movies/550/reviews", 1)]
    #[case("/api/v1/movies/550/reviews?page=4", 4)]
    #[case("/api/v1/movies/550/reviews?page=zero", 1)]
    #[actix_web::test]
    async fn reviews_page_is_lenient(#[case] uri: &str, #[case] expected_page: u32) {
        let mut lookup = MockMediaLookup::new();
        lookup
            .expect_movie_reviews()
            .withf(move |_, id, page| *id == 550 && *page == expected_page)
            .times(1)
            .return_once(|_, id, _| {
                Ok(ReviewPage {
                    id,
                    ..ReviewPage::default()
                })
            });
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
