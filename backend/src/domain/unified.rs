//! Tagged union over the three searchable resource shapes.
//!
//! [`UnifiedResult`] is what callers of the search endpoint receive. Each
//! variant owns the complete native record, so a result only ever carries
//! the fields its own resource defines, and converting back through the
//! matching projection returns the original record unchanged.
//!
//! On the wire the discriminant is an inline `media_type` field next to the
//! record's own fields:
//!
//! ```json
//! { "media_type": "movie", "id": 550, "title": "Fight Club", "...": "..." }
//! ```

use serde::{Deserialize, Serialize};

use super::{Movie, Page, Person, ResourceType, TvShow};

/// Discriminant of a [`UnifiedResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Person,
}

impl From<MediaType> for ResourceType {
    fn from(value: MediaType) -> Self {
        match value {
            MediaType::Movie => Self::Movie,
            MediaType::Tv => Self::Tv,
            MediaType::Person => Self::Person,
        }
    }
}

/// One search hit of any resource family.
///
/// # Examples
/// ```
/// use media_gateway::domain::{MediaType, Movie, UnifiedResult};
///
/// let movie = Movie { id: 550, title: "Fight Club".into(), ..Movie::default() };
/// let unified = UnifiedResult::from(movie.clone());
///
/// assert_eq!(unified.media_type(), MediaType::Movie);
/// assert_eq!(unified.as_movie(), Some(&movie));
/// assert!(unified.as_person().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum UnifiedResult {
    Movie(Movie),
    Tv(TvShow),
    Person(Person),
}

impl UnifiedResult {
    /// Discriminant of this result.
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        match self {
            Self::Movie(_) => MediaType::Movie,
            Self::Tv(_) => MediaType::Tv,
            Self::Person(_) => MediaType::Person,
        }
    }

    /// Provider identifier of the underlying record.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Movie(movie) => movie.id,
            Self::Tv(show) => show.id,
            Self::Person(person) => person.id,
        }
    }

    /// Movie record when the discriminant is `movie`.
    #[must_use]
    pub const fn as_movie(&self) -> Option<&Movie> {
        match self {
            Self::Movie(movie) => Some(movie),
            _ => None,
        }
    }

    /// TV show record when the discriminant is `tv`.
    #[must_use]
    pub const fn as_tv_show(&self) -> Option<&TvShow> {
        match self {
            Self::Tv(show) => Some(show),
            _ => None,
        }
    }

    /// Person record when the discriminant is `person`.
    #[must_use]
    pub const fn as_person(&self) -> Option<&Person> {
        match self {
            Self::Person(person) => Some(person),
            _ => None,
        }
    }

    /// Consume the result, keeping the movie record if there is one.
    #[must_use]
    pub fn into_movie(self) -> Option<Movie> {
        match self {
            Self::Movie(movie) => Some(movie),
            _ => None,
        }
    }

    /// Consume the result, keeping the TV show record if there is one.
    #[must_use]
    pub fn into_tv_show(self) -> Option<TvShow> {
        match self {
            Self::Tv(show) => Some(show),
            _ => None,
        }
    }

    /// Consume the result, keeping the person record if there is one.
    #[must_use]
    pub fn into_person(self) -> Option<Person> {
        match self {
            Self::Person(person) => Some(person),
            _ => None,
        }
    }
}

impl From<Movie> for UnifiedResult {
    fn from(value: Movie) -> Self {
        Self::Movie(value)
    }
}

impl From<TvShow> for UnifiedResult {
    fn from(value: TvShow) -> Self {
        Self::Tv(value)
    }
}

impl From<Person> for UnifiedResult {
    fn from(value: Person) -> Self {
        Self::Person(value)
    }
}

/// Re-tag every record of a type-specific page.
///
/// Type-specific provider endpoints return untagged items; the discriminant
/// comes from the call that fetched them.
pub fn unify_page<T>(page: Page<T>) -> Page<UnifiedResult>
where
    T: Into<UnifiedResult>,
{
    page.map(Into::into)
}

#[cfg(test)]
#[path = "unified_tests.rs"]
mod tests;
