use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::{
    content::{
        dto::{ContentStatus, ContentType},
        ingest,
        repo::{self, CustomContent, NewCustomContent},
    },
    error::ApiError,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id/custom-content", get(list_custom_content))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/custom-content", post(create_custom_content))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024)) // 10MB
}

#[derive(Default)]
struct UploadForm {
    kind: Option<String>,
    user_id: Option<String>,
    url: Option<String>,
    title: Option<String>,
    file_name: Option<String>,
    file_body: Option<Bytes>,
}

async fn read_form(mp: &mut Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();
    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Invalid multipart payload"))?
    {
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };
        match name.as_str() {
            "file" => {
                form.file_name = field.file_name().map(|s| s.to_string());
                form.file_body = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|_| ApiError::BadRequest("Invalid multipart payload"))?,
                );
            }
            "type" => form.kind = Some(read_text(field).await?),
            "userId" => form.user_id = Some(read_text(field).await?),
            "url" => form.url = Some(read_text(field).await?),
            "title" => form.title = Some(read_text(field).await?),
            other => warn!(field = %other, "ignoring unknown multipart field"),
        }
    }
    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|_| ApiError::BadRequest("Invalid multipart payload"))
}

/// POST /custom-content (multipart): `type` + `userId`, plus `file` for
/// documents or `url` for video references and websites. Ingestion runs
/// synchronously, so the row is stored already completed.
#[instrument(skip(state, mp))]
pub async fn create_custom_content(
    State(state): State<AppState>,
    mut mp: Multipart,
) -> Result<Json<CustomContent>, ApiError> {
    let form = read_form(&mut mp).await?;

    let kind = form
        .kind
        .as_deref()
        .and_then(ContentType::parse)
        .ok_or(ApiError::BadRequest("Invalid content type"))?;
    let user_id: Uuid = form
        .user_id
        .as_deref()
        .and_then(|s| s.parse().ok())
        .ok_or(ApiError::BadRequest("Invalid user id"))?;

    let (content, url, title) = match kind {
        ContentType::Document => {
            let body = form
                .file_body
                .ok_or(ApiError::BadRequest("Missing file upload"))?;
            let text = String::from_utf8_lossy(&body);
            (
                ingest::process_document(&text),
                None,
                form.title.or(form.file_name),
            )
        }
        ContentType::VideoReference => {
            let url = form.url.ok_or(ApiError::BadRequest("Missing url"))?;
            let summary = ingest::process_video_reference(&url).map_err(|e| {
                warn!(error = %e, %url, "video reference rejected");
                ApiError::BadRequest("Invalid video URL")
            })?;
            (summary, Some(url), form.title)
        }
        ContentType::Website => {
            let url = form.url.ok_or(ApiError::BadRequest("Missing url"))?;
            (ingest::process_website(&url), Some(url), form.title)
        }
    };

    let created = repo::insert(
        &state.db,
        NewCustomContent {
            user_id,
            kind: kind.as_str(),
            url,
            title,
            content,
            status: ContentStatus::Completed.as_str(),
        },
    )
    .await
    .map_err(ApiError::internal("Failed to process custom content"))?;

    Ok(Json(created))
}

#[instrument(skip(state))]
pub async fn list_custom_content(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<CustomContent>>, ApiError> {
    let items = repo::list_for_user(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch custom content"))?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn custom_content_serializes_type_field() {
        let item = CustomContent {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: ContentType::VideoReference.as_str().to_string(),
            url: Some("https://youtu.be/ABC123".into()),
            title: None,
            content: Some("summary".into()),
            status: ContentStatus::Completed.as_str().to_string(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "video-reference");
        assert_eq!(json["status"], "completed");
        assert!(json.get("kind").is_none());
    }
}
