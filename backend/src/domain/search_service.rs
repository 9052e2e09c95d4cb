//! Unified search service.
//!
//! Implements the [`MediaSearch`] driving port: one upstream call per
//! search, chosen by the requested resource type, with type-specific answers
//! re-tagged into [`UnifiedResult`]s.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{MediaSearch, MetadataSource, SearchOutcome};
use crate::domain::{
    CallContext, Error, ResourceContext, ResourceType, SearchRequest, translate_source_error,
    unify_page,
};

const SEARCH_ACTION: &str = "perform search";

/// Search service over a metadata source.
#[derive(Clone)]
pub struct MediaSearchService<S> {
    source: Arc<S>,
}

impl<S> MediaSearchService<S> {
    /// Create a service reading from `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> MediaSearch for MediaSearchService<S>
where
    S: MetadataSource,
{
    async fn search(
        &self,
        ctx: &CallContext,
        request: SearchRequest,
    ) -> Result<SearchOutcome, Error> {
        info!(
            query = request.query(),
            resource_type = %request.resource_type(),
            page = request.page(),
            language = request.language(),
            "search request"
        );

        let source = self.source.as_ref();
        let page = match request.resource_type() {
            ResourceType::All => source.search_multi(ctx, &request).await,
            ResourceType::Movie => source.search_movies(ctx, &request).await.map(unify_page),
            ResourceType::Tv => source.search_tv_shows(ctx, &request).await.map(unify_page),
            ResourceType::Person => source.search_people(ctx, &request).await.map(unify_page),
        }
        .map_err(|err| translate_source_error(&err, ResourceContext::Search, SEARCH_ACTION))?;

        Ok(SearchOutcome { request, page })
    }
}

#[cfg(test)]
#[path = "search_service_tests.rs"]
mod tests;
