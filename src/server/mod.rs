//! HTTP surface: a thin request/response shim over the orchestrator
//!
//! One route: `GET /crawl?page=<n>&num_chapters=<k>`. A listing failure maps
//! to `500 {"error": ...}`; every other failure has already been degraded to
//! empty data inside the pipeline, so the response is `200 {"results": [...]}`.

use crate::crawler::Orchestrator;
use crate::HarvestError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Query parameters of the crawl endpoint
#[derive(Debug, Deserialize)]
pub struct CrawlParams {
    page: Option<u32>,
    num_chapters: Option<usize>,
}

/// Builds the API router
pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/crawl", get(crawl_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(orchestrator)
}

async fn crawl_handler(
    State(orchestrator): State<Arc<Orchestrator>>,
    Query(params): Query<CrawlParams>,
) -> Response {
    let page = params.page.unwrap_or(1);
    let num_chapters = params
        .num_chapters
        .unwrap_or_else(|| orchestrator.default_num_chapters());

    match orchestrator.crawl(page, num_chapters).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Binds the listener and serves the API until the process exits
pub async fn serve(orchestrator: Arc<Orchestrator>, addr: SocketAddr) -> Result<(), HarvestError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(orchestrator)).await?;
    Ok(())
}
