use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for a `search.list` call.
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    pub part: String,
    pub q: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
}

impl SearchParams {
    /// Parameters for a snippet search, the only `part` this client requests.
    pub fn snippet(q: &str, kind: &str, max_results: u32) -> Self {
        Self {
            part: "snippet".to_string(),
            q: q.to_string(),
            kind: kind.to_string(),
            max_results,
        }
    }
}

/// Top-level `search.list` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchListResponse {
    /// Absent from the body when nothing matched.
    #[serde(default)]
    pub items: Vec<SearchItem>,
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "totalResults")]
    pub total_results: Option<i64>,
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: Option<i64>,
}

/// A single search result. Deleted or unavailable resources come back
/// without a snippet, or with an empty title.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: ResourceId,
    pub snippet: Option<Snippet>,
}

impl SearchItem {
    /// Title of the underlying resource, if it is still available.
    pub fn title(&self) -> Option<&str> {
        self.snippet
            .as_ref()
            .map(|s| s.title.as_str())
            .filter(|t| !t.trim().is_empty())
    }

    /// Smallest available thumbnail URL.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.snippet.as_ref().and_then(|s| s.thumbnails.best_url())
    }
}

/// The `id` object's shape depends on the searched kind: exactly one of
/// the identifier fields is populated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceId {
    pub kind: Option<String>,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
}

/// Human-facing metadata for a search result.
#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Returns the smallest size present, falling back upward. Channels
    /// occasionally omit the `default` size.
    pub fn best_url(&self) -> Option<&str> {
        self.default
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.high.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
