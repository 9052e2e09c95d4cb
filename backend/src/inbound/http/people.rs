//! Person lookup handlers.
//!
//! ```text
//! GET /api/v1/people/{id}
//! GET /api/v1/people/{id}/movie_credits
//! GET /api/v1/people/{id}/tv_credits
//! GET /api/v1/people/{id}/combined_credits
//! ```

use actix_web::web;

use crate::domain::{PersonCombinedCredits, PersonDetails, PersonMovieCredits, PersonTvCredits};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{PersonCreditsSchema, PersonDetailsSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{IdKind, parse_id};

/// Fetch biography and profile of one person.
#[utoipa::path(
    get,
    path = "/api/v1/people/{id}",
    params(("id" = u64, Path, description = "Provider person id", example = 287)),
    responses(
        (status = 200, description = "Person details", body = PersonDetailsSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such person", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["people"],
    operation_id = "getPerson"
)]
pub async fn get_person(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<PersonDetails>> {
    let id = parse_id(&id, IdKind::Person)?;
    let details = state.lookup.person(&state.call_context(), id).await?;
    Ok(web::Json(details))
}

/// Fetch a person's film credits.
#[utoipa::path(
    get,
    path = "/api/v1/people/{id}/movie_credits",
    params(("id" = u64, Path, description = "Provider person id")),
    responses(
        (status = 200, description = "Film credits", body = PersonCreditsSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such person", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["people"],
    operation_id = "getPersonMovieCredits"
)]
pub async fn get_person_movie_credits(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<PersonMovieCredits>> {
    let id = parse_id(&id, IdKind::Person)?;
    let credits = state
        .lookup
        .person_movie_credits(&state.call_context(), id)
        .await?;
    Ok(web::Json(credits))
}

/// Fetch a person's television credits.
#[utoipa::path(
    get,
    path = "/api/v1/people/{id}/tv_credits",
    params(("id" = u64, Path, description = "Provider person id")),
    responses(
        (status = 200, description = "Television credits", body = PersonCreditsSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such person", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["people"],
    operation_id = "getPersonTvCredits"
)]
pub async fn get_person_tv_credits(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<PersonTvCredits>> {
    let id = parse_id(&id, IdKind::Person)?;
    let credits = state
        .lookup
        .person_tv_credits(&state.call_context(), id)
        .await?;
    Ok(web::Json(credits))
}

/// Fetch a person's film and television credits in one list.
#[utoipa::path(
    get,
    path = "/api/v1/people/{id}/combined_credits",
    params(("id" = u64, Path, description = "Provider person id")),
    responses(
        (status = 200, description = "Combined credits tagged by media_type", body = PersonCreditsSchema),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "No such person", body = ErrorEnvelope),
        (status = 500, description = "Provider failure", body = ErrorEnvelope)
    ),
    tags = ["people"],
    operation_id = "getPersonCombinedCredits"
)]
pub async fn get_person_combined_credits(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<PersonCombinedCredits>> {
    let id = parse_id(&id, IdKind::Person)?;
    let credits = state
        .lookup
        .person_combined_credits(&state.call_context(), id)
        .await?;
    Ok(web::Json(credits))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::{MockMediaLookup, MockMediaSearch};
    use crate::domain::{
        CombinedCastCredit, Error, ErrorCode, Movie, MovieCastCredit, PersonCredits,
    };
    use crate::inbound::http::test_utils::{mock_state, test_app};

    #[actix_web::test]
    async fn missing_person_is_person_not_found() {
        let mut lookup = MockMediaLookup::new();
        lookup.expect_person().return_once(|_, id| {
            Err(Error::new(
                ErrorCode::PersonNotFound,
                format!("Person with ID {id} not found"),
            ))
        });
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/people/999999")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["error"], "person_not_found");
        assert_eq!(body["message"], "Person with ID 999999 not found");
    }

    #[actix_web::test]
    async fn combined_credits_are_tagged() {
        let mut lookup = MockMediaLookup::new();
        lookup
            .expect_person_combined_credits()
            .withf(|_, id| *id == 287)
            .return_once(|_, id| {
                Ok(PersonCredits {
                    id,
                    cast: vec![CombinedCastCredit::Movie(MovieCastCredit {
                        movie: Movie {
                            id: 550,
                            title: "Fight Club".to_owned(),
                            ..Movie::default()
                        },
                        character: "Tyler Durden".to_owned(),
                        credit_id: "52fe4250c3a36847f80149f3".to_owned(),
                        order: Some(1),
                    })],
                    crew: Vec::new(),
                })
            });
        let app =
            actix_test::init_service(test_app(mock_state(MockMediaSearch::new(), lookup))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/people/287/combined_credits")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["cast"][0]["media_type"], "movie");
        assert_eq!(body["cast"][0]["character"], "Tyler Durden");
    }

    #[actix_web::test]
    async fn malformed_id_names_people() {
        let app = actix_test::init_service(test_app(mock_state(
            MockMediaSearch::new(),
            MockMediaLookup::new(),
        )))
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/people/brad/tv_credits")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], "Person ID must be a positive integer");
    }
}
