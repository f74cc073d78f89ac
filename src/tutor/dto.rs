use serde::Deserialize;
use uuid::Uuid;

/// Body for POST /ai-tutor/generate-path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePathRequest {
    pub language: String,
    pub goals: Vec<String>,
    pub experience: String,
    pub time_commitment: String,
}

/// Body for POST /ai-tutor/chat. `context` is accepted for forward
/// compatibility; the responder currently ignores it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: Uuid,
    pub message: String,
    pub context: Option<String>,
}
