// src/api.rs
//! JSON facade over the derivation pipeline. Each handler loads one
//! snapshot and serves its section; the successfully-empty state is a
//! 200 with an empty collection, distinct from upstream failures.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::fetch::{FetchError, RepoSource};
use crate::portfolio::Snapshot;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn RepoSource + Send + Sync>,
    featured_limit: usize,
}

impl AppState {
    pub fn new(source: Arc<dyn RepoSource + Send + Sync>, featured_limit: usize) -> Self {
        Self {
            source,
            featured_limit,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/portfolio/{account}/experiences", get(experiences))
        .route("/portfolio/{account}/repositories", get(repositories))
        .route("/portfolio/{account}/timeline", get(timeline))
        .route("/portfolio/{account}/insights", get(insights))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
struct ErrorBody {
    section: &'static str,
    error: String,
}

struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn from_fetch(section: &'static str, err: FetchError) -> Self {
        let status = match err {
            FetchError::RemoteUnavailable { .. } => StatusCode::BAD_GATEWAY,
            FetchError::Network(_) => StatusCode::GATEWAY_TIMEOUT,
        };
        Self {
            status,
            body: ErrorBody {
                section,
                error: format!("failed to fetch {section} from GitHub: {err}"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

async fn load(state: &AppState, account: &str, section: &'static str) -> Result<Snapshot, ApiError> {
    Snapshot::load(state.source.as_ref(), account)
        .await
        .map_err(|e| ApiError::from_fetch(section, e))
}

async fn experiences(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = load(&state, &account, "experiences").await?;
    Ok(Json(snapshot.experiences()))
}

async fn repositories(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = load(&state, &account, "repositories").await?;
    Ok(Json(snapshot.repositories(state.featured_limit)))
}

async fn timeline(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = load(&state, &account, "timeline").await?;
    Ok(Json(snapshot.timeline()))
}

async fn insights(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = load(&state, &account, "insights").await?;
    Ok(Json(snapshot.insights()))
}
