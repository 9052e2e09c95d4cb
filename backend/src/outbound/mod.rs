//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **tmdb**: reqwest-backed client for The Movie Database
//!
//! Adapters are thin translators that convert between domain types and
//! provider-specific representations. They contain no business logic.

pub mod tmdb;
