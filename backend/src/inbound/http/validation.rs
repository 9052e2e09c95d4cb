//! Shared validation helpers for inbound HTTP adapters.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use utoipa::IntoParams;

use crate::domain::Error;

/// Resource family named by a path identifier, used for error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdKind {
    Movie,
    TvShow,
    Person,
}

impl IdKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV show",
            Self::Person => "Person",
        }
    }
}

/// Parse a path identifier that must be a positive integer.
pub(crate) fn parse_id(raw: &str, kind: IdKind) -> Result<u64, Error> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::invalid_parameter(format!(
            "{} ID must be a positive integer",
            kind.label()
        ))),
    }
}

/// Query-string extractor where the first occurrence of a repeated key wins.
///
/// Malformed query strings surface as `invalid_request` envelopes rather than
/// the framework's plain-text rejection.
#[derive(Debug)]
pub struct FirstValueQuery<T>(pub T);

impl<T> FirstValueQuery<T> {
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for FirstValueQuery<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FirstValueQuery<T> {
    pub(crate) fn from_query(query: &str) -> Result<Self, Error> {
        let mut fields = Map::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            fields
                .entry(key.into_owned())
                .or_insert_with(|| Value::String(value.into_owned()));
        }
        serde_json::from_value(Value::Object(fields))
            .map(Self)
            .map_err(|err| Error::invalid_request(format!("Invalid query string: {err}")))
    }
}

impl<T: DeserializeOwned> FromRequest for FirstValueQuery<T> {
    type Error = Error;
    type Future = Ready<Result<Self, Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_query(req.query_string()))
    }
}

/// Optional `page` query parameter accepted by review and listing routes.
///
/// Anything that is not a positive integer falls back to the first page.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// One-based page number. Invalid values fall back to 1.
    #[param(value_type = Option<u32>, example = 1)]
    pub page: Option<String>,
}

impl PageQuery {
    pub(crate) fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1)
    }
}
