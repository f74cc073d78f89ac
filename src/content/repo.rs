use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CustomContent {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub struct NewCustomContent {
    pub user_id: Uuid,
    pub kind: &'static str,
    pub url: Option<String>,
    pub title: Option<String>,
    pub content: String,
    pub status: &'static str,
}

pub async fn insert(db: &PgPool, item: NewCustomContent) -> anyhow::Result<CustomContent> {
    let row = sqlx::query_as::<_, CustomContent>(
        r#"
        INSERT INTO custom_content (user_id, type, url, title, content, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, type, url, title, content, status, created_at
        "#,
    )
    .bind(item.user_id)
    .bind(item.kind)
    .bind(&item.url)
    .bind(&item.title)
    .bind(&item.content)
    .bind(item.status)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<CustomContent>> {
    let rows = sqlx::query_as::<_, CustomContent>(
        r#"
        SELECT id, user_id, type, url, title, content, status, created_at
        FROM custom_content
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
