//! Driving port for unified search.

use async_trait::async_trait;

use crate::domain::{CallContext, Error, Page, SearchRequest, UnifiedResult};

/// Unified results for one normalised search, ready for assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The request that produced the results, echoed back to callers.
    pub request: SearchRequest,
    /// Results and the upstream pagination envelope.
    pub page: Page<UnifiedResult>,
}

/// Use-case port answering search requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaSearch: Send + Sync {
    /// Dispatch `request` to the provider and unify the answer.
    ///
    /// Failures are already translated into client-facing domain errors.
    async fn search(
        &self,
        ctx: &CallContext,
        request: SearchRequest,
    ) -> Result<SearchOutcome, Error>;
}
