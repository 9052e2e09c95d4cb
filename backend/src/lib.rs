//! Media metadata gateway.
//!
//! A read-only HTTP API over The Movie Database. Inbound requests are
//! validated in [`inbound`], served by the domain services in [`domain`], and
//! fulfilled by the TMDb adapter in [`outbound`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
