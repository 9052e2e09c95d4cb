//! Normalisation of loosely typed search parameters.
//!
//! Inbound adapters hand over the raw query string values untouched; this
//! module turns them into an immutable [`SearchRequest`] whose every field
//! holds a legal value, or explains precisely which parameter was wrong.
//! Malformed optional parameters (`page`, `year`) are reported separately
//! from invalid required ones (`query`, `type`) because clients are told
//! about them under different error kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Error;

/// Language used when the caller does not choose one.
pub const DEFAULT_LANGUAGE: &str = "ja-JP";
/// Earliest release year accepted as a movie search hint.
pub const MIN_YEAR: u16 = 1900;
/// Latest release year accepted as a movie search hint.
pub const MAX_YEAR: u16 = 2100;

/// Resource family a search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Feature films.
    Movie,
    /// Television series.
    Tv,
    /// Cast and crew members.
    Person,
    /// Every family at once through the combined endpoint.
    #[default]
    All,
}

impl ResourceType {
    /// Lower-case wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label names no known [`ResourceType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource type: {0}")]
pub struct UnknownResourceType(pub String);

impl FromStr for ResourceType {
    type Err = UnknownResourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "tv" => Ok(Self::Tv),
            "person" => Ok(Self::Person),
            "all" => Ok(Self::All),
            other => Err(UnknownResourceType(other.to_owned())),
        }
    }
}

/// Search parameters exactly as they arrived on the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSearchParams {
    /// Free-text query.
    pub query: Option<String>,
    /// Requested resource family.
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    /// One-based page number.
    pub page: Option<String>,
    /// Response language tag.
    pub language: Option<String>,
    /// Release year hint for movie searches.
    pub year: Option<String>,
}

/// Reasons a raw search could not be normalised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchRequestError {
    /// A required parameter is missing or outside its allowed set.
    #[error("{message}")]
    Validation {
        /// Offending parameter name.
        field: &'static str,
        /// Client-facing explanation.
        message: &'static str,
    },
    /// An optional parameter is syntactically wrong.
    #[error("{message}")]
    Malformed {
        /// Offending parameter name.
        field: &'static str,
        /// Client-facing explanation.
        message: &'static str,
    },
}

impl SearchRequestError {
    /// Name of the parameter that failed.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } | Self::Malformed { field, .. } => field,
        }
    }
}

impl From<SearchRequestError> for Error {
    fn from(err: SearchRequestError) -> Self {
        let details = json!({ "field": err.field() });
        match err {
            SearchRequestError::Validation { message, .. } => {
                Self::validation(message).with_details(details)
            }
            SearchRequestError::Malformed { message, .. } => {
                Self::invalid_request(message).with_details(details)
            }
        }
    }
}

/// Validated, defaulted search request.
///
/// ## Invariants
/// - `query` is non-empty and trimmed.
/// - `page` is at least one.
/// - `language` is non-empty.
/// - `year`, when present, lies in `MIN_YEAR..=MAX_YEAR`.
///
/// # Examples
/// ```
/// use media_gateway::domain::{RawSearchParams, ResourceType, SearchRequest};
///
/// let raw = RawSearchParams {
///     query: Some("  Fight Club ".into()),
///     ..RawSearchParams::default()
/// };
/// let request = SearchRequest::normalize(&raw).expect("valid search");
/// assert_eq!(request.query(), "Fight Club");
/// assert_eq!(request.resource_type(), ResourceType::All);
/// assert_eq!(request.page(), 1);
/// assert_eq!(request.language(), "ja-JP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    resource_type: ResourceType,
    page: u32,
    language: String,
    year: Option<u16>,
}

impl SearchRequest {
    /// Parse, validate, and default raw parameters.
    ///
    /// Malformed `page`/`year` values are reported before missing `query` or
    /// unknown `type` values. The function performs no I/O.
    pub fn normalize(raw: &RawSearchParams) -> Result<Self, SearchRequestError> {
        let page = parse_page(raw.page.as_deref())?;
        let year = parse_year(raw.year.as_deref())?;

        let query = raw.query.as_deref().unwrap_or_default().trim();
        if query.is_empty() {
            return Err(SearchRequestError::Validation {
                field: "query",
                message: "Query parameter is required",
            });
        }

        let type_label = raw
            .resource_type
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let resource_type = if type_label.is_empty() {
            ResourceType::default()
        } else {
            type_label
                .parse()
                .map_err(|_| SearchRequestError::Validation {
                    field: "type",
                    message: "Type must be one of: movie, tv, person, all",
                })?
        };

        let language = raw.language.as_deref().unwrap_or_default().trim();
        let language = if language.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            language
        };

        Ok(Self {
            query: query.to_owned(),
            resource_type,
            page: page.unwrap_or(1),
            language: language.to_owned(),
            year,
        })
    }

    /// Trimmed free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Resource family to search.
    #[must_use]
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// One-based page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Response language tag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Release year hint, only meaningful for movie searches.
    #[must_use]
    pub fn year(&self) -> Option<u16> {
        self.year
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}

fn parse_page(raw: Option<&str>) -> Result<Option<u32>, SearchRequestError> {
    let Some(raw) = present(raw) else {
        return Ok(None);
    };
    raw.parse::<u32>()
        .ok()
        .filter(|page| *page >= 1)
        .map(Some)
        .ok_or(SearchRequestError::Malformed {
            field: "page",
            message: "invalid page parameter: must be a positive integer",
        })
}

fn parse_year(raw: Option<&str>) -> Result<Option<u16>, SearchRequestError> {
    let Some(raw) = present(raw) else {
        return Ok(None);
    };
    raw.parse::<u16>()
        .ok()
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
        .map(Some)
        .ok_or(SearchRequestError::Malformed {
            field: "year",
            message: "invalid year parameter: must be between 1900 and 2100",
        })
}
