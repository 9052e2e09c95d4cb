//! Native resource records as the metadata provider returns them in lists.
//!
//! Each record mirrors one upstream list item shape field for field. Absent
//! upstream fields deserialise to their defaults so a sparse item never
//! fails a whole page; nullable image paths and dates stay `Option`.

use serde::{Deserialize, Serialize};

/// Movie as listed by search, popularity, and trending endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub adult: bool,
    pub backdrop_path: Option<String>,
    pub genre_ids: Vec<i64>,
    pub id: u64,
    pub original_language: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: f64,
    pub poster_path: Option<String>,
    /// `YYYY-MM-DD`, or `None` when unreleased.
    pub release_date: Option<String>,
    pub title: String,
    pub video: bool,
    pub vote_average: f64,
    pub vote_count: u64,
}

/// TV show as listed by search and trending endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvShow {
    pub adult: bool,
    pub backdrop_path: Option<String>,
    pub genre_ids: Vec<i64>,
    pub id: u64,
    pub origin_country: Vec<String>,
    pub original_language: String,
    pub original_name: String,
    pub overview: String,
    pub popularity: f64,
    pub poster_path: Option<String>,
    /// `YYYY-MM-DD`, or `None` when the show has not aired.
    pub first_air_date: Option<String>,
    pub name: String,
    pub vote_average: f64,
    pub vote_count: u64,
}

/// Work a person is best known for. Tagged by `media_type` upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum KnownFor {
    /// A film credit.
    Movie(Movie),
    /// A television credit.
    Tv(TvShow),
}

/// Person as listed by search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub adult: bool,
    /// Provider gender code: 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    pub id: u64,
    pub known_for: Vec<KnownFor>,
    pub known_for_department: String,
    pub name: String,
    pub original_name: String,
    pub popularity: f64,
    pub profile_path: Option<String>,
}

/// Pagination envelope reported by the provider.
///
/// Values are copied from the upstream response and never recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

/// One page of upstream results together with its pagination envelope.
///
/// # Examples
/// ```
/// use media_gateway::domain::{Movie, Page};
///
/// let page: Page<Movie> = serde_json::from_str(
///     r#"{"page": 2, "results": [], "total_pages": 5, "total_results": 97}"#,
/// )
/// .expect("valid page");
/// assert_eq!(page.pagination.total_results, 97);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Convert every result while keeping the pagination envelope intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            pagination: self.pagination,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            results: Vec::new(),
        }
    }
}
