//! Cast and crew carriers for titles and people.
//!
//! A person's film and television credits reuse the list records from
//! [`super::media`] and flatten the role-specific fields next to them, which
//! is exactly how the provider lays them out.

use serde::{Deserialize, Serialize};

use super::{Movie, TvShow};

/// Cast entry on a movie or TV show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastMember {
    pub adult: bool,
    pub gender: Option<u8>,
    pub id: u64,
    pub known_for_department: String,
    pub name: String,
    pub original_name: String,
    pub popularity: f64,
    pub profile_path: Option<String>,
    /// Movie credits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_id: Option<u64>,
    pub character: String,
    pub credit_id: String,
    pub order: u32,
}

/// Crew entry on a movie or TV show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewMember {
    pub adult: bool,
    pub gender: Option<u8>,
    pub id: u64,
    pub known_for_department: String,
    pub name: String,
    pub original_name: String,
    pub popularity: f64,
    pub profile_path: Option<String>,
    pub credit_id: String,
    pub department: String,
    pub job: String,
}

/// Cast and crew of one title, from `/movie/{id}/credits` or `/tv/{id}/credits`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleCredits {
    pub id: u64,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

/// A person's acting role in a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCastCredit {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub credit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// A person's crew job on a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCrewCredit {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub credit_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job: String,
}

/// A person's acting role on a TV show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvCastCredit {
    #[serde(flatten)]
    pub show: TvShow,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub credit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
}

/// A person's crew job on a TV show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvCrewCredit {
    #[serde(flatten)]
    pub show: TvShow,
    #[serde(default)]
    pub credit_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub job: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
}

/// Cast entry of the combined credit list, tagged by `media_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum CombinedCastCredit {
    Movie(MovieCastCredit),
    Tv(TvCastCredit),
}

/// Crew entry of the combined credit list, tagged by `media_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum CombinedCrewCredit {
    Movie(MovieCrewCredit),
    Tv(TvCrewCredit),
}

/// Credit lists for one person, generic over the entry shapes.
///
/// `PersonCredits<MovieCastCredit, MovieCrewCredit>` is the payload of
/// `/person/{id}/movie_credits`; the TV and combined variants follow the
/// same layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonCredits<C, W> {
    #[serde(default = "Vec::new")]
    pub cast: Vec<C>,
    #[serde(default = "Vec::new")]
    pub crew: Vec<W>,
    #[serde(default)]
    pub id: u64,
}

/// Film credits of a person.
pub type PersonMovieCredits = PersonCredits<MovieCastCredit, MovieCrewCredit>;
/// Television credits of a person.
pub type PersonTvCredits = PersonCredits<TvCastCredit, TvCrewCredit>;
/// Film and television credits of a person in one list.
pub type PersonCombinedCredits = PersonCredits<CombinedCastCredit, CombinedCrewCredit>;
