//! Curated listing handlers.
//!
//! ```text
//! GET /api/v1/movies/popular?page=1
//! GET /api/v1/movies/top_rated?page=1
//! GET /api/v1/trending/{movie|tv}/{day|week}?page=1
//! ```

use actix_web::{HttpResponse, web};

use crate::domain::{Error, Movie, MovieChart, Page, TimeWindow};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{MoviePageSchema, TvShowPageSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FirstValueQuery, PageQuery};

async fn chart(
    state: &HttpState,
    chart: MovieChart,
    query: &PageQuery,
) -> ApiResult<web::Json<Page<Movie>>> {
    let page = state
        .lookup
        .movie_chart(&state.call_context(), chart, query.page())
        .await?;
    Ok(web::Json(page))
}

/// Movies currently popular with the provider's audience.
#[utoipa::path(
    get,
    path = "/api/v1/movies/popular",
    params(PageQuery),
    responses(
        (status = 200, description = "Popular movies", body = MoviePageSchema),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["listings"],
    operation_id = "getPopularMovies"
)]
pub async fn popular_movies(
    state: web::Data<HttpState>,
    query: FirstValueQuery<PageQuery>,
) -> ApiResult<web::Json<Page<Movie>>> {
    chart(&state, MovieChart::Popular, &query).await
}

/// Highest rated movies.
#[utoipa::path(
    get,
    path = "/api/v1/movies/top_rated",
    params(PageQuery),
    responses(
        (status = 200, description = "Top rated movies", body = MoviePageSchema),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["listings"],
    operation_id = "getTopRatedMovies"
)]
pub async fn top_rated_movies(
    state: web::Data<HttpState>,
    query: FirstValueQuery<PageQuery>,
) -> ApiResult<web::Json<Page<Movie>>> {
    chart(&state, MovieChart::TopRated, &query).await
}

/// Trending movies or TV shows over a day or a week.
///
/// An unrecognised window falls back to `week`; a media segment other than
/// `movie` or `tv` is a 404.
#[utoipa::path(
    get,
    path = "/api/v1/trending/{media}/{window}",
    params(
        ("media" = String, Path, description = "`movie` or `tv`"),
        ("window" = String, Path, description = "`day` or `week`; anything else means `week`"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Trending movies (media=movie)", body = MoviePageSchema),
        (status = 200, description = "Trending TV shows (media=tv)", body = TvShowPageSchema),
        (status = 404, description = "Unknown media segment", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["listings"],
    operation_id = "getTrending"
)]
pub async fn trending(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    query: FirstValueQuery<PageQuery>,
) -> ApiResult<HttpResponse> {
    let (media, window) = path.into_inner();
    let window = TimeWindow::parse_lenient(&window);
    let ctx = state.call_context();
    match media.as_str() {
        "movie" => {
            let page = state
                .lookup
                .trending_movies(&ctx, window, query.page())
                .await?;
            Ok(HttpResponse::Ok().json(page))
        }
        "tv" => {
            let page = state
                .lookup
                .trending_tv_shows(&ctx, window, query.page())
                .await?;
            Ok(HttpResponse::Ok().json(page))
        }
        _ => Err(Error::not_found(format!(
            "Unknown trending media type: {media}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::{MockMediaLookup, MockMediaSearch};
    use crate::domain::{Pagination, TvShow};
    use crate::inbound::http::test_utils::{mock_state, test_app};

    #[rstest]
    #[case("/api/v1/movies/popular?page=2", MovieChart::Popular, 2)]
    #[case("/api/v1/movies/top_rated", MovieChart::TopRated, 1)]
    #[case("/api/v1/movies/top_rated?page=-5", MovieChart::TopRated, 1)]
    #[actix_web::test]
    async fn charts_are_not_mistaken_for_ids(
        #[case] uri: &str,
        #[case] expected_chart: MovieChart,
        #[case] expected_page: u32,
    ) {
        let mut lookup = MockMediaLookup::new();
        lookup.expect_movie().times(0);
        lookup
            .expect_movie_chart()
            .withf(move |_, chart, page| *chart == expected_chart && *page == expected_page)
            .times(1)
            .return_once(|_, _, page| {
                Ok(Page {
                    pagination: Pagination {
                        page,
                        total_pages: 500,
                        total_results: 10_000,
                    },
                    results: Vec::new(),
                })
            });
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["total_pages"], 500);
    }

    #[rstest]
    #[case("/api/v1/trending/tv/day", TimeWindow::Day)]
    #[case("/api/v1/trending/tv/week", TimeWindow::Week)]
    #[case("/api/v1/trending/tv/month", TimeWindow::Week)]
    #[actix_web::test]
    async fn trending_window_is_lenient(#[case] uri: &str, #[case] expected: TimeWindow) {
        let mut lookup = MockMediaLookup::new();
        lookup
            .expect_trending_tv_shows()
            .withf(move |_, window, _| *window == expected)
            .times(1)
            .return_once(|_, _, _| {
                Ok(Page {
                    pagination: Pagination::default(),
                    results: vec![TvShow {
                        id: 1399,
                        name: "Game of Thrones".to_owned(),
                        ..TvShow::default()
                    }],
                })
            });
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["results"][0]["name"], "Game of Thrones");
    }

    #[actix_web::test]
    async fn unknown_trending_media_is_not_found() {
        let mut lookup = MockMediaLookup::new();
        lookup.expect_trending_movies().times(0);
        lookup.expect_trending_tv_shows().times(0);
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/trending/person/day")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["error"], "not_found");
    }
}
