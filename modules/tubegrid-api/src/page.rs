use axum::response::Html;

/// The search page: three form inputs, one trigger, one results grid.
/// All search behavior lives behind `/api/search`; the page only binds
/// form state to the endpoint and paints the returned cards.
pub async fn search_page() -> Html<&'static str> {
    Html(include_str!("search.html"))
}
