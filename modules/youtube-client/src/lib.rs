pub mod error;
pub mod types;

pub use error::{Result, YouTubeError};
pub use types::{
    PageInfo, ResourceId, SearchItem, SearchListResponse, SearchParams, Snippet, Thumbnail,
    Thumbnails,
};

use std::time::Duration;

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, api_key }
    }

    /// Construct with a shared `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    /// Execute one `search.list` call. First page only; the key is sent as
    /// the `key` query parameter alongside the search parameters.
    pub async fn search_list(&self, params: &SearchParams) -> Result<SearchListResponse> {
        let url = format!("{BASE_URL}/search");
        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let list: SearchListResponse = resp.json().await?;
        tracing::debug!(
            q = %params.q,
            kind = %params.kind,
            items = list.items.len(),
            "search.list completed"
        );
        Ok(list)
    }
}
