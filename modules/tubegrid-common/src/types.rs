use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TubeGridError;

/// Result-count choices exposed by the search UI. The domain passes any
/// limit through; only the UI layers constrain input to this set.
pub const ALLOWED_LIMITS: [u32; 10] = [5, 15, 35, 50, 75, 100, 125, 150, 175, 200];

/// What the user asked for. Shorts have no native search filter and are
/// fetched as videos; the distinction only matters for link construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Video,
    Playlist,
    Channel,
    Shorts,
}

impl ResultKind {
    /// The `type` filter actually sent to the search API.
    pub fn api_kind(self) -> ApiSearchKind {
        match self {
            ResultKind::Video | ResultKind::Shorts => ApiSearchKind::Video,
            ResultKind::Playlist => ApiSearchKind::Playlist,
            ResultKind::Channel => ApiSearchKind::Channel,
        }
    }

    pub fn all() -> [ResultKind; 4] {
        [
            ResultKind::Video,
            ResultKind::Playlist,
            ResultKind::Channel,
            ResultKind::Shorts,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Video => "video",
            ResultKind::Playlist => "playlist",
            ResultKind::Channel => "channel",
            ResultKind::Shorts => "shorts",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultKind {
    type Err = TubeGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(ResultKind::Video),
            "playlist" => Ok(ResultKind::Playlist),
            "channel" => Ok(ResultKind::Channel),
            "shorts" => Ok(ResultKind::Shorts),
            other => Err(TubeGridError::Validation(format!(
                "Unknown result kind: {other}"
            ))),
        }
    }
}

/// Kinds the search API natively understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiSearchKind {
    Video,
    Playlist,
    Channel,
}

impl ApiSearchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiSearchKind::Video => "video",
            ApiSearchKind::Playlist => "playlist",
            ApiSearchKind::Channel => "channel",
        }
    }
}

impl fmt::Display for ApiSearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three form inputs, captured at the moment search is triggered.
/// Used once and discarded.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub keyword: String,
    pub kind: ResultKind,
    pub limit: u32,
}

impl SearchCriteria {
    pub fn new(keyword: impl Into<String>, kind: ResultKind, limit: u32) -> Self {
        Self {
            keyword: keyword.into(),
            kind,
            limit,
        }
    }

    /// Reject an empty keyword before anything touches the network.
    pub fn validate(&self) -> Result<(), TubeGridError> {
        if self.keyword.trim().is_empty() {
            return Err(TubeGridError::Validation(
                "Please enter a search keyword.".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and derive the request actually submitted to the API.
    pub fn to_request(&self) -> Result<SearchRequest, TubeGridError> {
        self.validate()?;
        Ok(SearchRequest {
            query: self.keyword.trim().to_string(),
            api_kind: self.kind.api_kind(),
            requested_kind: self.kind,
            limit: self.limit,
        })
    }
}

/// A validated request. `api_kind` is what the API sees (never shorts);
/// `requested_kind` is what the user picked and drives link shapes.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub api_kind: ApiSearchKind,
    pub requested_kind: ResultKind,
    pub limit: u32,
}
