use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub content: String,
    #[serde(rename = "timestamp", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub async fn insert_message(
    db: &PgPool,
    user_id: Uuid,
    role: ChatRole,
    content: &str,
) -> anyhow::Result<ChatMessage> {
    let row = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO chat_messages (user_id, role, content)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, role, content, created_at
        "#,
    )
    .bind(user_id)
    .bind(role.as_str())
    .bind(content)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Most recent messages first; callers reverse for chronological display.
pub async fn list_recent(
    db: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> anyhow::Result<Vec<ChatMessage>> {
    let rows = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, user_id, role, content, created_at
        FROM chat_messages
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
