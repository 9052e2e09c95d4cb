//! TV show lookup handlers.
//!
//! ```text
//! GET /api/v1/tv/{id}
//! GET /api/v1/tv/{id}/credits
//! GET /api/v1/tv/{id}/reviews?page=1
//! ```

use actix_web::web;

use crate::domain::{ReviewPage, TitleCredits, TvShowDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{ReviewPageSchema, TitleCreditsSchema, TvShowDetailsSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FirstValueQuery, IdKind, PageQuery, parse_id};

/// Fetch full details of one TV show.
#[utoipa::path(
    get,
    path = "/api/v1/tv/{id}",
    params(("id" = u64, Path, description = "Provider TV show id", example = 1399)),
    responses(
        (status = 200, description = "TV show details", body = TvShowDetailsSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such TV show", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["tv"],
    operation_id = "getTvShow"
)]
pub async fn get_tv_show(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<TvShowDetails>> {
    let id = parse_id(&id, IdKind::TvShow)?;
    let details = state.lookup.tv_show(&state.call_context(), id).await?;
    Ok(web::Json(details))
}

/// Fetch cast and crew of one TV show.
#[utoipa::path(
    get,
    path = "/api/v1/tv/{id}/credits",
    params(("id" = u64, Path, description = "Provider TV show id")),
    responses(
        (status = 200, description = "TV show credits", body = TitleCreditsSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such TV show", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["tv"],
    operation_id = "getTvShowCredits"
)]
pub async fn get_tv_show_credits(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<TitleCredits>> {
    let id = parse_id(&id, IdKind::TvShow)?;
    let credits = state
        .lookup
        .tv_show_credits(&state.call_context(), id)
        .await?;
    Ok(web::Json(credits))
}

/// Fetch one page of user reviews for a TV show.
#[utoipa::path(
    get,
    path = "/api/v1/tv/{id}/reviews",
    params(("id" = u64, Path, description = "Provider TV show id"), PageQuery),
    responses(
        (status = 200, description = "TV show reviews", body = ReviewPageSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such TV show", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["tv"],
    operation_id = "getTvShowReviews"
)]
pub async fn get_tv_show_reviews(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    query: FirstValueQuery<PageQuery>,
) -> ApiResult<web::Json<ReviewPage>> {
    let id = parse_id(&id, IdKind::TvShow)?;
    let reviews = state
        .lookup
        .tv_show_reviews(&state.call_context(), id, query.page())
        .await?;
    Ok(web::Json(reviews))
}
