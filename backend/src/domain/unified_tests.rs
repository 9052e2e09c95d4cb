//! Tests for result unification and projection.

use super::*;
use crate::domain::{KnownFor, Pagination};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn movie() -> Movie {
    Movie {
        adult: false,
        backdrop_path: Some("/hZkgoQYus5vegHoetLkCJzb17zJ.jpg".to_owned()),
        genre_ids: vec![18, 53, 35],
        id: 550,
        original_language: "en".to_owned(),
        original_title: "Fight Club".to_owned(),
        overview: "A ticking-time-bomb insomniac and a slippery soap salesman.".to_owned(),
        popularity: 61.416,
        poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_owned()),
        release_date: Some("1999-10-15".to_owned()),
        title: "Fight Club".to_owned(),
        video: false,
        vote_average: 8.433,
        vote_count: 26_280,
    }
}

#[fixture]
fn tv_show() -> TvShow {
    TvShow {
        adult: false,
        backdrop_path: None,
        genre_ids: vec![10765, 18],
        id: 1399,
        origin_country: vec!["US".to_owned()],
        original_language: "en".to_owned(),
        original_name: "Game of Thrones".to_owned(),
        overview: "Seven noble families fight for control.".to_owned(),
        popularity: 369.594,
        poster_path: Some("/1XS1oqL89opfnbLl8WnZY1O1uJx.jpg".to_owned()),
        first_air_date: Some("2011-04-17".to_owned()),
        name: "Game of Thrones".to_owned(),
        vote_average: 8.442,
        vote_count: 21_857,
    }
}

#[fixture]
fn person(movie: Movie, tv_show: TvShow) -> Person {
    Person {
        adult: false,
        gender: 2,
        id: 287,
        known_for: vec![KnownFor::Movie(movie), KnownFor::Tv(tv_show)],
        known_for_department: "Acting".to_owned(),
        name: "Brad Pitt".to_owned(),
        original_name: "Brad Pitt".to_owned(),
        popularity: 50.18,
        profile_path: None,
    }
}

#[rstest]
fn movie_round_trips_through_its_projection(movie: Movie) {
    let unified = UnifiedResult::from(movie.clone());
    assert_eq!(unified.media_type(), MediaType::Movie);
    assert_eq!(unified.as_movie(), Some(&movie));
    assert_eq!(unified.into_movie(), Some(movie));
}

#[rstest]
fn tv_show_round_trips_through_its_projection(tv_show: TvShow) {
    let unified = UnifiedResult::from(tv_show.clone());
    assert_eq!(unified.media_type(), MediaType::Tv);
    assert_eq!(unified.into_tv_show(), Some(tv_show));
}

#[rstest]
fn person_round_trips_through_its_projection(person: Person) {
    let unified = UnifiedResult::from(person.clone());
    assert_eq!(unified.media_type(), MediaType::Person);
    assert_eq!(unified.into_person(), Some(person));
}

#[rstest]
fn mismatched_projections_are_absent(movie: Movie, tv_show: TvShow, person: Person) {
    let movie = UnifiedResult::from(movie);
    assert!(movie.as_tv_show().is_none());
    assert!(movie.as_person().is_none());

    let show = UnifiedResult::from(tv_show);
    assert!(show.as_movie().is_none());
    assert!(show.as_person().is_none());

    let person = UnifiedResult::from(person);
    assert!(person.as_movie().is_none());
    assert!(person.as_tv_show().is_none());
}

fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect())
        .unwrap_or_default();
    keys.sort_unstable();
    keys
}

#[rstest]
fn movie_wire_form_carries_only_movie_fields(movie: Movie) {
    let encoded = serde_json::to_value(UnifiedResult::from(movie)).expect("encodes");
    assert_eq!(
        keys(&encoded),
        vec![
            "adult",
            "backdrop_path",
            "genre_ids",
            "id",
            "media_type",
            "original_language",
            "original_title",
            "overview",
            "popularity",
            "poster_path",
            "release_date",
            "title",
            "video",
            "vote_average",
            "vote_count",
        ]
    );
    assert_eq!(encoded["media_type"], "movie");
}

#[rstest]
fn tv_wire_form_has_no_movie_or_person_fields(tv_show: TvShow) {
    let encoded = serde_json::to_value(UnifiedResult::from(tv_show)).expect("encodes");
    let keys = keys(&encoded);
    for absent in ["title", "original_title", "release_date", "video", "gender", "known_for"] {
        assert!(!keys.contains(&absent), "{absent} must be absent for tv");
    }
    assert_eq!(encoded["media_type"], "tv");
    assert_eq!(encoded["first_air_date"], "2011-04-17");
}

#[rstest]
fn person_wire_form_has_no_media_fields(person: Person) {
    let encoded = serde_json::to_value(UnifiedResult::from(person)).expect("encodes");
    let keys = keys(&encoded);
    for absent in ["title", "first_air_date", "vote_average", "poster_path", "overview"] {
        assert!(!keys.contains(&absent), "{absent} must be absent for person");
    }
    assert_eq!(encoded["gender"], 2);
}

#[rstest]
fn tagged_upstream_items_decode_into_the_matching_variant() {
    let items: Vec<UnifiedResult> = serde_json::from_value(json!([
        {"media_type": "movie", "id": 550, "title": "Fight Club"},
        {"media_type": "tv", "id": 1399, "name": "Game of Thrones"},
        {"media_type": "person", "id": 287, "name": "Brad Pitt", "known_for": []}
    ]))
    .expect("mixed page decodes");

    let kinds: Vec<MediaType> = items.iter().map(UnifiedResult::media_type).collect();
    assert_eq!(kinds, vec![MediaType::Movie, MediaType::Tv, MediaType::Person]);
    assert_eq!(items.iter().map(UnifiedResult::id).collect::<Vec<_>>(), vec![550, 1399, 287]);
}

#[rstest]
fn unify_page_retags_and_keeps_pagination(movie: Movie) {
    let page = Page {
        pagination: Pagination {
            page: 1,
            total_pages: 1,
            total_results: 1,
        },
        results: vec![movie],
    };

    let unified = unify_page(page);
    assert_eq!(unified.pagination.total_results, 1);
    assert!(
        unified
            .results
            .iter()
            .all(|result| result.media_type() == MediaType::Movie)
    );
}
