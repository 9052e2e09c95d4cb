//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::CallContext;
use crate::domain::ports::{MediaLookup, MediaSearch};

/// Deadline applied to each inbound call when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub search: Arc<dyn MediaSearch>,
    pub lookup: Arc<dyn MediaLookup>,
    pub request_timeout: Duration,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```ignore
    /// let state = HttpState::new(Arc::new(search), Arc::new(lookup));
    /// ```
    pub fn new(search: Arc<dyn MediaSearch>, lookup: Arc<dyn MediaLookup>) -> Self {
        Self {
            search,
            lookup,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Replace the per-request deadline.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Fresh context for one inbound call, expiring after the request timeout.
    pub(crate) fn call_context(&self) -> CallContext {
        CallContext::with_timeout(self.request_timeout)
    }
}
