//! Wire-only shapes for TMDb responses.
//!
//! Most bodies decode straight into domain records. These DTOs cover the
//! two shapes that need adapter-side handling: the provider's error body and
//! multi-search items whose tag may name a family we do not forward.

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Movie, Page, Person, TvShow, UnifiedResult};

/// Error body the provider attaches to non-success statuses.
#[derive(Debug, Deserialize)]
pub(super) struct TmdbErrorDto {
    #[serde(default)]
    pub(super) status_code: Option<i64>,
    pub(super) status_message: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub(super) enum MultiSearchItemDto {
    Movie(Movie),
    Tv(TvShow),
    Person(Person),
    #[serde(other)]
    Unsupported,
}

impl MultiSearchItemDto {
    fn into_unified(self) -> Option<UnifiedResult> {
        match self {
            Self::Movie(movie) => Some(movie.into()),
            Self::Tv(show) => Some(show.into()),
            Self::Person(person) => Some(person.into()),
            Self::Unsupported => None,
        }
    }
}

/// Keep supported items and drop the rest; pagination stays as reported.
pub(super) fn into_unified_page(page: Page<MultiSearchItemDto>) -> Page<UnifiedResult> {
    let received = page.results.len();
    let unified = Page {
        pagination: page.pagination,
        results: page
            .results
            .into_iter()
            .filter_map(MultiSearchItemDto::into_unified)
            .collect::<Vec<_>>(),
    };
    let skipped = received - unified.results.len();
    if skipped > 0 {
        debug!(skipped, "dropped multi-search items with unsupported media_type");
    }
    unified
}
