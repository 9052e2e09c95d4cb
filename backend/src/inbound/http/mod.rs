//! HTTP inbound adapter exposing the REST endpoints.
//!
//! Handlers extract and validate request input, call a driving port held in
//! [`state::HttpState`], and let [`error`] turn domain failures into the JSON
//! envelope.

pub mod error;
pub mod health;
pub mod listings;
pub mod movies;
pub mod people;
pub mod routes;
pub mod schemas;
pub mod search;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tv;
pub mod validation;

pub use error::ApiResult;
