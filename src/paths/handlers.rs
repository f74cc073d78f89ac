use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    error::ApiError,
    paths::{
        dto::{CreateLearningPathRequest, Difficulty},
        repo::{self, LearningPath, Module, NewLearningPath},
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/learning-paths", get(list_paths))
        .route("/learning-paths/:id/modules", get(list_modules))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/learning-paths", post(create_path))
}

#[instrument(skip(state))]
pub async fn list_paths(State(state): State<AppState>) -> Result<Json<Vec<LearningPath>>, ApiError> {
    let paths = repo::list_all(&state.db)
        .await
        .map_err(ApiError::internal("Failed to fetch learning paths"))?;
    Ok(Json(paths))
}

#[instrument(skip(state, payload))]
pub async fn create_path(
    State(state): State<AppState>,
    Json(payload): Json<CreateLearningPathRequest>,
) -> Result<Json<LearningPath>, ApiError> {
    if payload.title.trim().is_empty() || payload.language.trim().is_empty() {
        return Err(ApiError::BadRequest("Invalid learning path data"));
    }
    let difficulty = Difficulty::parse(&payload.difficulty)
        .ok_or(ApiError::BadRequest("Invalid learning path data"))?;

    let path = repo::create(
        &state.db,
        NewLearningPath {
            title: payload.title,
            description: payload.description,
            language: payload.language,
            difficulty: difficulty.as_str().to_string(),
            total_modules: payload.total_modules,
        },
    )
    .await
    .map_err(ApiError::internal("Failed to create learning path"))?;

    Ok(Json(path))
}

#[instrument(skip(state))]
pub async fn list_modules(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Module>>, ApiError> {
    let modules = repo::list_modules(&state.db, id)
        .await
        .map_err(ApiError::internal("Failed to fetch modules"))?;
    Ok(Json(modules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn module_serializes_position_as_order() {
        let module = Module {
            id: Uuid::new_v4(),
            learning_path_id: Uuid::new_v4(),
            title: "Basics".into(),
            description: None,
            position: 2,
            content: Some(serde_json::json!({"topics": ["Syntax"]})),
            is_locked: true,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&module).unwrap();
        assert_eq!(json["order"], 2);
        assert_eq!(json["isLocked"], true);
        assert!(json.get("learningPathId").is_some());
        assert!(json.get("position").is_none());
    }

    #[test]
    fn learning_path_serializes_camel_case() {
        let path = LearningPath {
            id: Uuid::new_v4(),
            title: "Complete Python Development".into(),
            description: Some("desc".into()),
            language: "python".into(),
            difficulty: "intermediate".into(),
            total_modules: 4,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["totalModules"], 4);
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }
}
