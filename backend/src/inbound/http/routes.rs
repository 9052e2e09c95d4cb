//! Route table for the `/api/v1` scope.
//!
//! Every resource answers `GET` and a bare `OPTIONS`; any other verb gets the
//! `method_not_allowed` envelope. Literal segments are registered ahead of
//! `{id}` captures so `/movies/popular` never reaches the id parser.

use actix_web::dev::HttpServiceFactory;
use actix_web::http::Method;
use actix_web::{FromRequest, Handler, HttpRequest, HttpResponse, Resource, Responder, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::health::api_health;
use crate::inbound::http::listings::{popular_movies, top_rated_movies, trending};
use crate::inbound::http::movies::{get_movie, get_movie_credits, get_movie_reviews};
use crate::inbound::http::people::{
    get_person, get_person_combined_credits, get_person_movie_credits, get_person_tv_credits,
};
use crate::inbound::http::search::search;
use crate::inbound::http::tv::{get_tv_show, get_tv_show_credits, get_tv_show_reviews};

/// Prefix shared by every JSON route.
pub const API_PREFIX: &str = "/api/v1";

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed("Only GET method is allowed"))
}

async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("No endpoint at {}", req.path())))
}

fn get_only<F, Args>(path: &str, handler: F) -> Resource
where
    F: Handler<Args>,
    Args: FromRequest + 'static,
    F::Output: Responder + 'static,
{
    web::resource(path)
        .route(web::get().to(handler))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}

/// Register every API resource on `cfg`.
///
/// Paths are relative to [`API_PREFIX`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_only("/health", api_health))
        .service(get_only("/search", search))
        .service(get_only("/movies/popular", popular_movies))
        .service(get_only("/movies/top_rated", top_rated_movies))
        .service(get_only("/movies/{id}", get_movie))
        .service(get_only("/movies/{id}/credits", get_movie_credits))
        .service(get_only("/movies/{id}/reviews", get_movie_reviews))
        .service(get_only("/tv/{id}", get_tv_show))
        .service(get_only("/tv/{id}/credits", get_tv_show_credits))
        .service(get_only("/tv/{id}/reviews", get_tv_show_reviews))
        .service(get_only("/people/{id}", get_person))
        .service(get_only("/people/{id}/movie_credits", get_person_movie_credits))
        .service(get_only("/people/{id}/tv_credits", get_person_tv_credits))
        .service(get_only(
            "/people/{id}/combined_credits",
            get_person_combined_credits,
        ))
        .service(get_only("/trending/{media}/{window}", trending));
}

/// The complete `/api/v1` scope with a JSON 404 for unknown paths.
#[must_use]
pub fn api_scope() -> impl HttpServiceFactory {
    web::scope(API_PREFIX)
        .configure(configure)
        .default_service(web::to(not_found))
}
