use anyhow::Context;
use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub language: String,
    pub difficulty: String,
    pub total_modules: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: Uuid,
    pub learning_path_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "order")]
    pub position: i32,
    pub content: Option<serde_json::Value>,
    pub is_locked: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub struct NewLearningPath {
    pub title: String,
    pub description: Option<String>,
    pub language: String,
    pub difficulty: String,
    pub total_modules: i32,
}

pub struct NewModule {
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub content: serde_json::Value,
    pub is_locked: bool,
}

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<LearningPath>> {
    let rows = sqlx::query_as::<_, LearningPath>(
        r#"
        SELECT id, title, description, language, difficulty, total_modules, created_at
        FROM learning_paths
        ORDER BY title ASC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create(db: &PgPool, path: NewLearningPath) -> anyhow::Result<LearningPath> {
    let row = sqlx::query_as::<_, LearningPath>(
        r#"
        INSERT INTO learning_paths (title, description, language, difficulty, total_modules)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, description, language, difficulty, total_modules, created_at
        "#,
    )
    .bind(&path.title)
    .bind(&path.description)
    .bind(&path.language)
    .bind(&path.difficulty)
    .bind(path.total_modules)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn list_modules(db: &PgPool, path_id: Uuid) -> anyhow::Result<Vec<Module>> {
    let rows = sqlx::query_as::<_, Module>(
        r#"
        SELECT id, learning_path_id, title, description, position, content, is_locked, created_at
        FROM modules
        WHERE learning_path_id = $1
        ORDER BY position ASC
        "#,
    )
    .bind(path_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get_module(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Module>> {
    let row = sqlx::query_as::<_, Module>(
        r#"
        SELECT id, learning_path_id, title, description, position, content, is_locked, created_at
        FROM modules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

async fn insert_module_tx(
    tx: &mut Transaction<'_, Postgres>,
    path_id: Uuid,
    module: &NewModule,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO modules (learning_path_id, title, description, position, content, is_locked)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(path_id)
    .bind(&module.title)
    .bind(&module.description)
    .bind(module.position)
    .bind(&module.content)
    .bind(module.is_locked)
    .execute(&mut **tx)
    .await
    .context("insert module")?;
    Ok(())
}

/// Create a path and all of its modules in one transaction, so a failure
/// partway through never leaves a path with fewer modules than `total_modules`
/// claims.
pub async fn create_with_modules(
    db: &PgPool,
    path: NewLearningPath,
    modules: Vec<NewModule>,
) -> anyhow::Result<LearningPath> {
    let mut tx = db.begin().await.context("begin tx")?;

    let saved = sqlx::query_as::<_, LearningPath>(
        r#"
        INSERT INTO learning_paths (title, description, language, difficulty, total_modules)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, description, language, difficulty, total_modules, created_at
        "#,
    )
    .bind(&path.title)
    .bind(&path.description)
    .bind(&path.language)
    .bind(&path.difficulty)
    .bind(path.total_modules)
    .fetch_one(&mut *tx)
    .await
    .context("insert learning path")?;

    for module in &modules {
        insert_module_tx(&mut tx, saved.id, module).await?;
    }

    tx.commit().await.context("commit tx")?;
    Ok(saved)
}
