//! Classification of provider failures into client-facing errors.
//!
//! The same upstream status means different things depending on which
//! operation observed it: a 404 from a movie lookup is `movie_not_found`, the
//! same 404 from a person lookup is `person_not_found`. [`ResourceContext`]
//! names the operation so [`translate_source_error`] can tell them apart.

use tracing::warn;

use super::ports::MetadataSourceError;
use super::{Error, ErrorCode};

const NOT_FOUND: u16 = 404;

/// Logical operation that issued an upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceContext {
    /// Lookup of the movie with this id.
    Movie(u64),
    /// Lookup of the TV show with this id.
    Tv(u64),
    /// Lookup of the person with this id.
    Person(u64),
    /// Any search endpoint.
    Search,
    /// Curated or trending listing.
    Listing,
}

impl ResourceContext {
    fn not_found(self) -> Option<Error> {
        let (code, message) = match self {
            Self::Movie(id) => (ErrorCode::MovieNotFound, format!("Movie with ID {id} not found")),
            Self::Tv(id) => (ErrorCode::TvNotFound, format!("TV show with ID {id} not found")),
            Self::Person(id) => (
                ErrorCode::PersonNotFound,
                format!("Person with ID {id} not found"),
            ),
            Self::Search | Self::Listing => return None,
        };
        Some(Error::new(code, message))
    }

    const fn failure_code(self) -> ErrorCode {
        match self {
            Self::Search => ErrorCode::SearchError,
            Self::Movie(_) | Self::Tv(_) | Self::Person(_) | Self::Listing => ErrorCode::ApiError,
        }
    }
}

/// Translate a provider failure observed while performing `action`.
///
/// `action` is the client-facing description used for generic failures,
/// e.g. `"retrieve movie details"` becomes `Failed to retrieve movie details`.
/// The raw provider message is logged but never returned.
///
/// # Examples
/// ```
/// use media_gateway::domain::ports::MetadataSourceError;
/// use media_gateway::domain::{ErrorCode, ResourceContext, translate_source_error};
///
/// let missing = MetadataSourceError::upstream(404_u16, "not found");
/// let movie = translate_source_error(&missing, ResourceContext::Movie(9), "retrieve movie details");
/// let person = translate_source_error(&missing, ResourceContext::Person(9), "retrieve person details");
///
/// assert_eq!(movie.code(), ErrorCode::MovieNotFound);
/// assert_eq!(person.code(), ErrorCode::PersonNotFound);
/// ```
pub fn translate_source_error(
    error: &MetadataSourceError,
    context: ResourceContext,
    action: &str,
) -> Error {
    warn!(error = %error, ?context, action, "metadata provider call failed");

    if error.upstream_status() == Some(NOT_FOUND) {
        if let Some(not_found) = context.not_found() {
            return not_found;
        }
    }
    Error::new(context.failure_code(), format!("Failed to {action}"))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::movie(ResourceContext::Movie(550), ErrorCode::MovieNotFound, "Movie with ID 550 not found")]
    #[case::tv(ResourceContext::Tv(1399), ErrorCode::TvNotFound, "TV show with ID 1399 not found")]
    #[case::person(ResourceContext::Person(287), ErrorCode::PersonNotFound, "Person with ID 287 not found")]
    fn upstream_404_is_resource_specific(
        #[case] context: ResourceContext,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let err = translate_source_error(
            &MetadataSourceError::upstream(404_u16, "The resource you requested could not be found."),
            context,
            "retrieve details",
        );
        assert_eq!(err.code(), code);
        assert_eq!(err.message(), message);
    }

    #[rstest]
    #[case::search_404(ResourceContext::Search, 404)]
    #[case::listing_404(ResourceContext::Listing, 404)]
    #[case::movie_401(ResourceContext::Movie(1), 401)]
    #[case::person_500(ResourceContext::Person(1), 500)]
    #[case::tv_429(ResourceContext::Tv(1), 429)]
    fn other_statuses_are_generic(#[case] context: ResourceContext, #[case] status: u16) {
        let err = translate_source_error(
            &MetadataSourceError::upstream(status, "nope"),
            context,
            "do the thing",
        );
        let expected = if context == ResourceContext::Search {
            ErrorCode::SearchError
        } else {
            ErrorCode::ApiError
        };
        assert_eq!(err.code(), expected);
        assert_eq!(err.message(), "Failed to do the thing");
    }

    #[rstest]
    #[case::transport(MetadataSourceError::transport("connection refused"))]
    #[case::timeout(MetadataSourceError::timeout("30s"))]
    #[case::decode(MetadataSourceError::decode("expected value at line 1 column 1"))]
    #[case::cancelled(MetadataSourceError::cancelled("client went away"))]
    fn statusless_failures_are_never_resource_specific(#[case] error: MetadataSourceError) {
        let movie = translate_source_error(&error, ResourceContext::Movie(550), "retrieve movie details");
        assert_eq!(movie.code(), ErrorCode::ApiError);
        assert_eq!(movie.message(), "Failed to retrieve movie details");

        let search = translate_source_error(&error, ResourceContext::Search, "perform search");
        assert_eq!(search.code(), ErrorCode::SearchError);
    }

    #[rstest]
    fn raw_provider_messages_are_not_echoed() {
        let err = translate_source_error(
            &MetadataSourceError::upstream(401_u16, "Invalid API key: You must be granted a valid key."),
            ResourceContext::Search,
            "perform search",
        );
        assert!(!err.message().contains("API key"));
    }
}
