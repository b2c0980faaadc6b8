use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error::SummarizeError;
use crate::pipeline::{Backend, Summarizer};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared state for the server.
#[derive(Clone)]
struct AppState {
    summarizer: Arc<Summarizer>,
}

/// Request payload for the summarize endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    /// Article URL. Required, but checked by the handler so a missing value
    /// gets the same error as an empty one. A non-string value is rejected
    /// with the rest of the body.
    #[serde(default)]
    pub url: Option<String>,
    /// Overrides the configured backend.
    #[serde(default)]
    pub backend: Option<Backend>,
    /// Overrides the configured sentence budget.
    #[serde(default)]
    pub max_sentences: Option<usize>,
}

/// Successful response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: String,
    pub original_title: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for SummarizeError {
    fn into_response(self) -> Response {
        if let SummarizeError::Internal(ref e) = self {
            tracing::error!("internal error while summarizing: {:#}", e);
        }
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the application router.
pub fn router(summarizer: Arc<Summarizer>) -> Router {
    let state = AppState { summarizer };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/summarize", post(post_summarize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn start_server(summarizer: Arc<Summarizer>, port: u16) -> anyhow::Result<()> {
    let app = router(summarizer);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

/// Handler for POST /api/summarize
async fn post_summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, SummarizeError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let reason = rejection.body_text();
            tracing::warn!("rejected request body: {}", reason);
            return Err(SummarizeError::InvalidRequest(reason));
        }
    };

    let url = request.url.unwrap_or_default();
    let mut options = state.summarizer.default_options();
    if let Some(backend) = request.backend {
        options.backend = backend;
    }
    if let Some(max_sentences) = request.max_sentences {
        options.max_sentences = max_sentences.max(1);
    }

    let result = state.summarizer.summarize_url(&url, options).await?;

    Ok(Json(SummarizeResponse {
        success: true,
        summary: result.summary,
        original_title: result.title,
    }))
}
