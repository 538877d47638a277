//! Search pipeline contract tests.
//!
//! These verify the full cycle over a stubbed backend:
//! - An empty keyword never reaches the searcher
//! - Shorts are submitted as videos but keep their link shape
//! - The rendered view tracks titled items only
//! - The surface discards completions from superseded searches

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use tubegrid_common::{
    render_results, ApiSearchKind, ResultKind, ResultsSurface, ResultsView, SearchCriteria,
    SearchRequest, VideoSearcher,
};
use youtube_client::types::{ResourceId, SearchItem, Snippet, Thumbnails};

struct StubSearcher {
    items: Vec<SearchItem>,
    calls: AtomicUsize,
}

impl StubSearcher {
    fn with_items(items: Vec<SearchItem>) -> Self {
        Self {
            items,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl VideoSearcher for StubSearcher {
    async fn search(&self, _request: &SearchRequest) -> Result<Vec<SearchItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.clone())
    }
}

fn video_item(id: &str, title: Option<&str>) -> SearchItem {
    SearchItem {
        id: ResourceId {
            kind: Some("youtube#video".to_string()),
            video_id: Some(id.to_string()),
            playlist_id: None,
            channel_id: None,
        },
        snippet: title.map(|t| Snippet {
            title: t.to_string(),
            description: String::new(),
            channel_title: None,
            published_at: None,
            thumbnails: Thumbnails::default(),
        }),
    }
}

/// Run one full cycle: criteria -> request -> backend -> view.
async fn run_search(
    searcher: &dyn VideoSearcher,
    criteria: &SearchCriteria,
) -> Result<ResultsView> {
    let request = criteria.to_request()?;
    let items = searcher.search(&request).await?;
    Ok(render_results(request.requested_kind, &items))
}

#[tokio::test]
async fn empty_keyword_never_invokes_the_backend() {
    let searcher = StubSearcher::with_items(vec![video_item("a", Some("A"))]);
    let criteria = SearchCriteria::new("   ", ResultKind::Video, 5);

    let result = run_search(&searcher, &criteria).await;

    assert!(result.is_err());
    assert_eq!(searcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn shorts_search_goes_out_as_video_and_links_as_video() {
    let criteria = SearchCriteria::new("skate trick", ResultKind::Shorts, 15);
    let request = criteria.to_request().unwrap();
    assert_eq!(request.api_kind, ApiSearchKind::Video);
    assert_eq!(request.requested_kind, ResultKind::Shorts);

    let searcher = StubSearcher::with_items(vec![video_item("sh0rt", Some("Kickflip"))]);
    let view = run_search(&searcher, &criteria).await.unwrap();

    match view {
        ResultsView::Cards { cards } => {
            assert_eq!(cards[0].link, "https://www.youtube.com/watch?v=sh0rt");
        }
        ResultsView::Empty => panic!("expected cards"),
    }
}

#[tokio::test]
async fn view_contains_only_titled_items() {
    let searcher = StubSearcher::with_items(vec![
        video_item("a", Some("First")),
        video_item("b", None),
        video_item("c", Some("Third")),
    ]);
    let criteria = SearchCriteria::new("anything", ResultKind::Video, 35);

    let view = run_search(&searcher, &criteria).await.unwrap();

    assert_eq!(view.card_count(), 2);
    assert_eq!(searcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_backend_response_renders_placeholder() {
    let searcher = StubSearcher::with_items(Vec::new());
    let criteria = SearchCriteria::new("no such thing", ResultKind::Playlist, 5);

    let view = run_search(&searcher, &criteria).await.unwrap();

    assert_eq!(view, ResultsView::Empty);
}

#[tokio::test]
async fn overlapping_searches_keep_the_newest_view() {
    let slow_searcher = StubSearcher::with_items(vec![video_item("old", Some("Old"))]);
    let fast_searcher = StubSearcher::with_items(vec![video_item("new", Some("New"))]);
    let criteria = SearchCriteria::new("race", ResultKind::Video, 5);

    let mut surface = ResultsSurface::new();

    // Two searches begin in order; the second resolves first.
    let slow_ticket = surface.begin();
    let fast_ticket = surface.begin();

    let fast_view = run_search(&fast_searcher, &criteria).await.unwrap();
    assert!(surface.complete(fast_ticket, fast_view));

    let slow_view = run_search(&slow_searcher, &criteria).await.unwrap();
    assert!(!surface.complete(slow_ticket, slow_view));

    match surface.current().unwrap() {
        ResultsView::Cards { cards } => assert_eq!(cards[0].title, "New"),
        ResultsView::Empty => panic!("expected cards"),
    }
}
