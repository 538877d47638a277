use serde::Serialize;

use youtube_client::types::SearchItem;

use crate::links::result_link;
use crate::types::ResultKind;

/// One renderable result: title, destination link, thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub title: String,
    pub link: String,
    pub thumbnail_url: Option<String>,
}

/// What the output surface shows after a search completes. Each
/// completion fully replaces the previous view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultsView {
    /// Nothing usable came back; the surface shows the placeholder.
    Empty,
    Cards { cards: Vec<ResultCard> },
}

impl ResultsView {
    pub fn card_count(&self) -> usize {
        match self {
            ResultsView::Empty => 0,
            ResultsView::Cards { cards } => cards.len(),
        }
    }
}

/// Map one search response into the view shown on the surface.
///
/// Untitled items are deleted or unavailable upstream and are dropped
/// without comment. A response where nothing survives the filter renders
/// the placeholder, same as a genuinely empty response.
pub fn render_results(requested_kind: ResultKind, items: &[SearchItem]) -> ResultsView {
    let cards: Vec<ResultCard> = items
        .iter()
        .filter_map(|item| card_for(requested_kind, item))
        .collect();

    if cards.is_empty() {
        ResultsView::Empty
    } else {
        ResultsView::Cards { cards }
    }
}

fn card_for(kind: ResultKind, item: &SearchItem) -> Option<ResultCard> {
    let title = item.title()?;
    let id = identifier_for(kind, item)?;
    Some(ResultCard {
        title: title.to_string(),
        link: result_link(kind, id),
        thumbnail_url: item.thumbnail_url().map(str::to_string),
    })
}

/// The identifier field matching the kind the user searched for. The API
/// populates exactly one of these per item.
fn identifier_for(kind: ResultKind, item: &SearchItem) -> Option<&str> {
    match kind {
        ResultKind::Video | ResultKind::Shorts => item.id.video_id.as_deref(),
        ResultKind::Playlist => item.id.playlist_id.as_deref(),
        ResultKind::Channel => item.id.channel_id.as_deref(),
    }
}
