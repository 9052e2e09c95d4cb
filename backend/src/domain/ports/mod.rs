//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`MetadataSource`]) are implemented by outbound adapters.
//! Driving ports ([`MediaSearch`], [`MediaLookup`]) are implemented by domain
//! services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod media_lookup;
mod media_search;
mod metadata_source;

#[cfg(test)]
pub use media_lookup::MockMediaLookup;
pub use media_lookup::MediaLookup;
#[cfg(test)]
pub use media_search::MockMediaSearch;
pub use media_search::{MediaSearch, SearchOutcome};
#[cfg(test)]
pub use metadata_source::MockMetadataSource;
pub use metadata_source::{MetadataSource, MetadataSourceError};
