use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub learning_path_id: Option<Uuid>,
    pub module_id: Uuid,
    pub progress: i32,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub last_accessed: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weekly_goal: i32,
    pub hours_completed: i32,
    pub concepts_mastered: i32,
    pub streak: i32,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_active_date: Option<OffsetDateTime>,
}

/// A module counts as completed once its progress reaches 100 percent.
pub fn is_complete(progress: i32) -> bool {
    progress >= 100
}

pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<UserProgress>> {
    let rows = sqlx::query_as::<_, UserProgress>(
        r#"
        SELECT id, user_id, learning_path_id, module_id, progress, completed, last_accessed
        FROM user_progress
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn list_for_path(
    db: &PgPool,
    user_id: Uuid,
    path_id: Uuid,
) -> anyhow::Result<Vec<UserProgress>> {
    let rows = sqlx::query_as::<_, UserProgress>(
        r#"
        SELECT id, user_id, learning_path_id, module_id, progress, completed, last_accessed
        FROM user_progress
        WHERE user_id = $1 AND learning_path_id = $2
        "#,
    )
    .bind(user_id)
    .bind(path_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Update-or-insert keyed on (user, module), as two sequential statements.
/// Two concurrent calls for the same pair can both take the insert arm or
/// overwrite each other; last write wins.
pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    learning_path_id: Option<Uuid>,
    module_id: Uuid,
    progress: i32,
) -> anyhow::Result<UserProgress> {
    let existing = sqlx::query_as::<_, UserProgress>(
        r#"
        SELECT id, user_id, learning_path_id, module_id, progress, completed, last_accessed
        FROM user_progress
        WHERE user_id = $1 AND module_id = $2
        "#,
    )
    .bind(user_id)
    .bind(module_id)
    .fetch_optional(db)
    .await?;

    let row = match existing {
        Some(found) => {
            sqlx::query_as::<_, UserProgress>(
                r#"
                UPDATE user_progress
                SET progress = $1, completed = $2, last_accessed = now()
                WHERE id = $3
                RETURNING id, user_id, learning_path_id, module_id, progress, completed, last_accessed
                "#,
            )
            .bind(progress)
            .bind(is_complete(progress))
            .bind(found.id)
            .fetch_one(db)
            .await?
        }
        None => {
            sqlx::query_as::<_, UserProgress>(
                r#"
                INSERT INTO user_progress (user_id, learning_path_id, module_id, progress, completed)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, user_id, learning_path_id, module_id, progress, completed, last_accessed
                "#,
            )
            .bind(user_id)
            .bind(learning_path_id)
            .bind(module_id)
            .bind(progress)
            .bind(is_complete(progress))
            .fetch_one(db)
            .await?
        }
    };
    Ok(row)
}

pub async fn init_stats(db: &PgPool, user_id: Uuid) -> anyhow::Result<UserStats> {
    let row = sqlx::query_as::<_, UserStats>(
        r#"
        INSERT INTO user_stats (user_id)
        VALUES ($1)
        RETURNING id, user_id, weekly_goal, hours_completed, concepts_mastered, streak, last_active_date
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn get_stats(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<UserStats>> {
    let row = sqlx::query_as::<_, UserStats>(
        r#"
        SELECT id, user_id, weekly_goal, hours_completed, concepts_mastered, streak, last_active_date
        FROM user_stats
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_flips_at_one_hundred() {
        assert!(!is_complete(0));
        assert!(!is_complete(99));
        assert!(is_complete(100));
        assert!(is_complete(150));
    }

    #[test]
    fn stats_serialize_camel_case_with_nullable_date() {
        let stats = UserStats {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            weekly_goal: 15,
            hours_completed: 0,
            concepts_mastered: 0,
            streak: 0,
            last_active_date: None,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["weeklyGoal"], 15);
        assert!(json["lastActiveDate"].is_null());
    }
}
