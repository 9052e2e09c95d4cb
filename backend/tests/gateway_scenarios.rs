//! End-to-end scenarios: real handlers, services, and adapter against a
//! stubbed provider, with upstream call counts asserted by wiremock.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use media_gateway::Trace;
use media_gateway::domain::{MediaLookupService, MediaSearchService, TRACE_ID_HEADER};
use media_gateway::inbound::http::routes::api_scope;
use media_gateway::inbound::http::state::HttpState;
use media_gateway::outbound::tmdb::{TmdbConfig, TmdbHttpSource};

const API_KEY: &str = "scenario-key";

fn state_for(server: &MockServer) -> HttpState {
    let base = Url::parse(&format!("{}/3", server.uri())).expect("mock server url");
    let source =
        Arc::new(TmdbHttpSource::new(TmdbConfig::new(base, API_KEY)).expect("client builds"));
    HttpState::new(
        Arc::new(MediaSearchService::new(Arc::clone(&source))),
        Arc::new(MediaLookupService::new(source)),
    )
}

async fn get_json(server: &MockServer, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(server)))
            .wrap(Trace)
            .service(api_scope()),
    )
    .await;
    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    assert!(
        res.headers().contains_key(TRACE_ID_HEADER),
        "every response carries a trace id"
    );
    let status = res.status();
    let body: Value = actix_test::read_body_json(res).await;
    (status, body)
}

#[actix_web::test]
async fn untyped_query_runs_one_multi_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/multi"))
        .and(query_param("query", "Fight Club"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "total_pages": 1,
            "total_results": 1,
            "results": [{
                "media_type": "movie",
                "id": 550,
                "title": "Fight Club",
                "original_title": "Fight Club",
                "release_date": "1999-10-15",
                "vote_average": 8.4
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(&server, "/api/v1/search?query=Fight%20Club").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "all");
    assert_eq!(body["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["results"][0]["media_type"], "movie");
    assert_eq!(body["results"][0]["title"], "Fight Club");
}

#[actix_web::test]
async fn repeated_query_keys_forward_the_first_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/multi"))
        .and(query_param("query", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "total_pages": 0,
            "total_results": 0,
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(&server, "/api/v1/search?query=a&query=b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "a");
}

#[actix_web::test]
async fn movie_search_tags_every_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "Fight Club"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "total_pages": 1,
            "total_results": 2,
            "results": [
                {"id": 550, "title": "Fight Club"},
                {"id": 14476, "title": "Fight Club: Members Only"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/search/multi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get_json(&server, "/api/v1/search?query=Fight%20Club&type=movie").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "movie");
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|hit| hit["media_type"] == "movie"));
}

#[rstest]
#[case::empty_query("/api/v1/search?query=", "validation_error")]
#[case::year_out_of_range("/api/v1/search?query=Fight%20Club&year=1800", "invalid_request")]
#[actix_web::test]
async fn rejected_input_never_reaches_upstream(#[case] uri: &str, #[case] kind: &str) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get_json(&server, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], kind);
    assert_eq!(body["code"], 400);
}

#[actix_web::test]
async fn upstream_404_becomes_movie_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(&server, "/api/v1/movies/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "movie_not_found");
    assert!(
        !body.to_string().contains("could not be found"),
        "upstream messages stay internal"
    );
}

#[rstest]
#[case::search("/3/search/multi", "/api/v1/search?query=Fight%20Club", "search_error")]
#[case::lookup("/3/movie/550", "/api/v1/movies/550", "api_error")]
#[actix_web::test]
async fn malformed_upstream_json_is_a_500(
    #[case] upstream_path: &str,
    #[case] uri: &str,
    #[case] kind: &str,
) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(upstream_path))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("{\"page\": oops"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(&server, uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], kind);
    assert_eq!(body["code"], 500);
}

#[actix_web::test]
async fn popular_is_not_parsed_as_an_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/popular"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 3,
            "total_pages": 500,
            "total_results": 10000,
            "results": [{"id": 27205, "title": "Inception"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(&server, "/api/v1/movies/popular?page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 3);
    assert_eq!(body["results"][0]["title"], "Inception");
}
