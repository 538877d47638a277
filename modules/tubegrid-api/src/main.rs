use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tubegrid_common::{Config, ResultsSurface};
use youtube_client::YouTubeClient;

mod page;
mod rest;

pub struct AppState {
    pub client: YouTubeClient,
    pub surface: Mutex<ResultsSurface>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tubegrid=info".parse()?))
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        client: YouTubeClient::new(config.youtube_api_key.clone()),
        surface: Mutex::new(ResultsSurface::new()),
    });

    let app = Router::new()
        .route("/", get(page::search_page))
        .route("/health", get(|| async { "ok" }))
        .route("/api/search", get(rest::api_search))
        .route("/api/results", get(rest::api_results))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("TubeGrid API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
