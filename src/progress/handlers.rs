use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    error::ApiError,
    progress::{
        dto::UpdateProgressRequest,
        repo::{self, UserProgress, UserStats},
    },
    state::AppState,
};

pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:user_id/progress",
            get(list_progress).post(update_progress),
        )
        .route("/users/:user_id/progress/:path_id", get(list_path_progress))
}

pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id/stats", get(get_stats))
}

#[instrument(skip(state))]
pub async fn list_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<UserProgress>>, ApiError> {
    let rows = repo::list_for_user(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch user progress"))?;
    Ok(Json(rows))
}

#[instrument(skip(state))]
pub async fn list_path_progress(
    State(state): State<AppState>,
    Path((user_id, path_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<UserProgress>>, ApiError> {
    let rows = repo::list_for_path(&state.db, user_id, path_id)
        .await
        .map_err(ApiError::internal("Failed to fetch user progress"))?;
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn update_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateProgressRequest>,
) -> Result<Json<UserProgress>, ApiError> {
    if !(0..=100).contains(&payload.progress) {
        return Err(ApiError::BadRequest("Progress must be between 0 and 100"));
    }

    // Resolve the owning path so first inserts carry it too
    let module = crate::paths::repo::get_module(&state.db, payload.module_id)
        .await
        .map_err(ApiError::internal("Failed to update progress"))?
        .ok_or(ApiError::BadRequest("Unknown module"))?;

    let row = repo::upsert(
        &state.db,
        user_id,
        Some(module.learning_path_id),
        payload.module_id,
        payload.progress,
    )
    .await
    .map_err(ApiError::internal("Failed to update progress"))?;

    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserStats>, ApiError> {
    let stats = repo::get_stats(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch user stats"))?
        .ok_or(ApiError::NotFound("User stats not found"))?;
    Ok(Json(stats))
}
