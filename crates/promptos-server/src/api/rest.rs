//! REST API implementation

use crate::error::ServerError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use promptos_repository::{NewVersion, PromptVersion, VersionRepository};
use promptos_sdk::{CompileRequest, CompileResponse, PromptCompiler};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PromptCompiler>,
    pub versions: Arc<dyn VersionRepository>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Delete acknowledgement
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Create REST API router
pub fn create_router(
    engine: Arc<PromptCompiler>,
    versions: Arc<dyn VersionRepository>,
) -> Router {
    let state = AppState { engine, versions };

    Router::new()
        .route("/health", get(health))
        .route("/v1/compile", post(compile))
        .route("/v1/versions", post(save_version).get(list_versions))
        .route("/v1/versions/:id", delete(delete_version))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Compilation endpoint
#[axum::debug_handler]
async fn compile(
    State(state): State<AppState>,
    Json(payload): Json<CompileRequest>,
) -> Result<Json<CompileResponse>, ServerError> {
    info!(model = %payload.model, "received compilation request");

    let response = state.engine.compile(payload).await?;

    Ok(Json(response))
}

/// Save a prompt version
async fn save_version(
    State(state): State<AppState>,
    Json(payload): Json<NewVersion>,
) -> Result<Json<PromptVersion>, ServerError> {
    let version = state.versions.save(payload).await?;
    info!(id = %version.id, "saved prompt version");

    Ok(Json(version))
}

/// List saved prompt versions, newest first
async fn list_versions(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptVersion>>, ServerError> {
    let versions = state.versions.list().await?;

    Ok(Json(versions))
}

/// Delete a prompt version
async fn delete_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ServerError> {
    state.versions.delete(&id).await?;
    info!(%id, "deleted prompt version");

    Ok(Json(DeleteResponse {
        message: "Version deleted successfully".to_string(),
    }))
}
