use anyhow::{Context, Result};
use async_trait::async_trait;

use youtube_client::types::SearchItem;
use youtube_client::{SearchParams, YouTubeClient};

use crate::types::SearchRequest;

/// Seam between the domain and whichever backend executes the search.
/// Binaries hold a real client; tests hold an in-memory stub.
#[async_trait]
pub trait VideoSearcher: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchItem>>;
}

#[async_trait]
impl VideoSearcher for YouTubeClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchItem>> {
        let params =
            SearchParams::snippet(&request.query, request.api_kind.as_str(), request.limit);

        let response = self
            .search_list(&params)
            .await
            .context("YouTube search.list request failed")?;

        tracing::info!(
            query = %request.query,
            kind = %request.requested_kind,
            count = response.items.len(),
            "Search completed"
        );

        Ok(response.items)
    }
}
