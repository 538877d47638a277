use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

use tubegrid_common::{render_results, ResultKind, SearchCriteria, VideoSearcher};

use crate::AppState;

/// Default when the page sends no count selection.
const DEFAULT_LIMIT: u32 = 5;

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
    kind: Option<String>,
    limit: Option<u32>,
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Run one search cycle and return the rendered view. The view is also
/// installed on the shared surface; completions superseded by a newer
/// search are discarded there but still returned to their caller.
pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let kind = match query.kind.as_deref() {
        None => ResultKind::Video,
        Some(s) => match s.parse::<ResultKind>() {
            Ok(kind) => kind,
            Err(e) => {
                warn!(kind = s, "Rejected search with unknown kind");
                return bad_request(e.to_string());
            }
        },
    };

    let criteria = SearchCriteria::new(
        query.q.unwrap_or_default(),
        kind,
        query.limit.unwrap_or(DEFAULT_LIMIT),
    );

    let request = match criteria.to_request() {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected search");
            return bad_request(e.to_string());
        }
    };

    // Take the ticket before awaiting so a search that begins later
    // always outranks this one on the surface.
    let ticket = state.surface.lock().await.begin();

    let items = match state.client.search(&request).await {
        Ok(items) => items,
        Err(e) => {
            warn!(query = %request.query, error = %e, "Upstream search failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Search backend failed" })),
            )
                .into_response();
        }
    };

    let view = render_results(request.requested_kind, &items);

    state.surface.lock().await.complete(ticket, view.clone());

    Json(view).into_response()
}

/// The surface's current view; an empty object before any search lands.
pub async fn api_results(State(state): State<Arc<AppState>>) -> Response {
    let surface = state.surface.lock().await;
    match surface.current() {
        Some(view) => Json(view.clone()).into_response(),
        None => Json(serde_json::json!({})).into_response(),
    }
}
