use serde::Deserialize;
use uuid::Uuid;

/// Body for POST /users/:userId/progress.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    pub module_id: Uuid,
    pub progress: i32,
}
