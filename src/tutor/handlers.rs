use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    error::ApiError,
    paths::repo::{LearningPath, NewLearningPath, NewModule},
    state::AppState,
    tutor::{
        curriculum,
        dto::{ChatRequest, GeneratePathRequest},
        repo::{self, ChatMessage, ChatRole},
        responder::{self, TutorReply},
    },
};

pub fn tutor_routes() -> Router<AppState> {
    Router::new()
        .route("/ai-tutor/generate-path", post(generate_path))
        .route("/ai-tutor/chat", post(chat))
}

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat-messages/:user_id", get(list_chat_messages))
}

const CHAT_HISTORY_LIMIT: i64 = 50;

#[instrument(skip(state, payload))]
pub async fn generate_path(
    State(state): State<AppState>,
    Json(payload): Json<GeneratePathRequest>,
) -> Result<Json<LearningPath>, ApiError> {
    if payload.language.trim().is_empty() {
        return Err(ApiError::BadRequest("Invalid learning path request"));
    }
    debug!(
        goals = ?payload.goals,
        time_commitment = %payload.time_commitment,
        "generate path request"
    );

    let generated = curriculum::generate_path(&payload.language, &payload.experience);

    let mut modules = Vec::with_capacity(generated.modules.len());
    for module in &generated.modules {
        let content = serde_json::to_value(module)
            .map_err(ApiError::internal("Failed to generate learning path"))?;
        modules.push(NewModule {
            title: module.title.clone(),
            description: Some(module.description.clone()),
            position: module.order,
            content,
            is_locked: module.order > 1,
        });
    }

    let path = NewLearningPath {
        title: generated.title,
        description: Some(generated.description),
        language: generated.language,
        difficulty: generated.difficulty,
        total_modules: modules.len() as i32,
    };

    let saved = crate::paths::repo::create_with_modules(&state.db, path, modules)
        .await
        .map_err(ApiError::internal("Failed to generate learning path"))?;

    Ok(Json(saved))
}

#[instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<TutorReply>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message is required"));
    }

    // The user turn is persisted before the reply is computed, the assistant
    // turn after, so history always reads user -> assistant.
    repo::insert_message(&state.db, payload.user_id, ChatRole::User, &payload.message)
        .await
        .map_err(ApiError::internal("Failed to process chat message"))?;

    let reply = responder::respond(&payload.message, payload.context.as_deref());

    repo::insert_message(
        &state.db,
        payload.user_id,
        ChatRole::Assistant,
        &reply.message,
    )
    .await
    .map_err(ApiError::internal("Failed to process chat message"))?;

    Ok(Json(reply))
}

#[instrument(skip(state))]
pub async fn list_chat_messages(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let mut messages = repo::list_recent(&state.db, user_id, CHAT_HISTORY_LIMIT)
        .await
        .map_err(ApiError::internal("Failed to fetch chat messages"))?;
    // Fetched newest-first; reverse for chronological display
    messages.reverse();
    Ok(Json(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn chat_message_serializes_timestamp_field() {
        let message = ChatMessage {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role: ChatRole::Assistant.as_str().to_string(),
            content: "Loops are control structures".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["timestamp"], "1970-01-01T00:00:00Z");
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn chat_request_accepts_optional_context() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"userId":"4fd95bda-7f61-4f50-8cd8-4b50b3fc54de","message":"what is a loop"}"#,
        )
        .unwrap();
        assert!(req.context.is_none());
        assert_eq!(req.message, "what is a loop");
    }
}
