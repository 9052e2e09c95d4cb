//! Domain primitives, services, and ports.
//!
//! Purpose: define the media records the gateway forwards, the request
//! normalisation and error vocabulary it enforces, and the services that sit
//! between inbound HTTP handlers and the outbound metadata provider.
//!
//! Public surface:
//! - Error / ErrorCode: client-facing failure payload and stable identifiers.
//! - SearchRequest: validated search parameters with defaults applied.
//! - UnifiedResult: tagged search hit over movies, TV shows, and people.
//! - MediaSearchService / MediaLookupService: driving port implementations.

pub mod call_context;
pub mod credits;
pub mod details;
pub mod error;
pub mod error_translation;
pub mod listing;
pub mod lookup_service;
pub mod media;
pub mod ports;
pub mod reviews;
pub mod search_request;
pub mod search_service;
pub mod trace_id;
pub mod unified;

pub use self::call_context::{CallContext, Interrupted};
pub use self::credits::{
    CastMember, CombinedCastCredit, CombinedCrewCredit, CrewMember, MovieCastCredit,
    MovieCrewCredit, PersonCombinedCredits, PersonCredits, PersonMovieCredits, PersonTvCredits,
    TitleCredits, TvCastCredit, TvCrewCredit,
};
pub use self::details::{
    Collection, Episode, Genre, MovieDetails, Network, PersonDetails, ProductionCompany,
    ProductionCountry, Season, SpokenLanguage, TvCreator, TvShowDetails,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::error_translation::{ResourceContext, translate_source_error};
pub use self::listing::{MovieChart, TimeWindow};
pub use self::lookup_service::MediaLookupService;
pub use self::media::{KnownFor, Movie, Page, Pagination, Person, TvShow};
pub use self::reviews::{AuthorDetails, Review, ReviewPage};
pub use self::search_request::{
    DEFAULT_LANGUAGE, MAX_YEAR, MIN_YEAR, RawSearchParams, ResourceType, SearchRequest,
    SearchRequestError, UnknownResourceType,
};
pub use self::search_service::MediaSearchService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::unified::{MediaType, UnifiedResult, unify_page};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use media_gateway::domain::{ApiResult, Error};
///
/// fn lookup(id: u64) -> ApiResult<u64> {
///     if id == 0 {
///         return Err(Error::invalid_parameter("Movie ID must be a positive integer"));
///     }
///     Ok(id)
/// }
///
/// assert!(lookup(0).is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
