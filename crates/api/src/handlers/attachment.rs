//! Task attachment endpoints.
//!
//! Uploads arrive as multipart form data. The binary lands on local disk
//! under the configured storage directory with a UUID-prefixed name; the
//! database row holds metadata plus the public URL the file is served at.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use planhub_core::error::CoreError;
use planhub_core::types::Id;
use planhub_db::models::attachment::{Attachment, CreateAttachment};
use planhub_db::repositories::{AttachmentRepo, TaskRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Guess a MIME type from the file extension. Unknown extensions fall
/// back to a generic binary type.
fn file_type_from_name(file_name: &str) -> &'static str {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("txt") | Some("md") => "text/plain",
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("zip") => "application/zip",
        Some("doc") | Some("docx") => "application/msword",
        Some("xls") | Some("xlsx") => "application/vnd.ms-excel",
        _ => "application/octet-stream",
    }
}

/// Strip path components from a client-supplied filename.
fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .to_string()
}

/// `GET /api/tasks/{task_id}/attachments` -- attachment metadata, oldest
/// upload first.
pub async fn list_attachments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(task_id): Path<Id>,
) -> AppResult<Json<Vec<Attachment>>> {
    if TaskRepo::find_by_id(&state.pool, task_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "task",
            id: task_id,
        }));
    }
    let attachments = AttachmentRepo::list_for_task(&state.pool, task_id).await?;
    Ok(Json(attachments))
}

/// `POST /api/tasks/{task_id}/attachments` -- upload a file. Expects a
/// multipart part named `file`.
pub async fn upload_attachment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<Id>,
    mut multipart: Multipart,
) -> AppResult<Json<Attachment>> {
    if TaskRepo::find_by_id(&state.pool, task_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "task",
            id: task_id,
        }));
    }

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .map(sanitize_file_name)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| AppError::BadRequest("File part must carry a filename".into()))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {e}")))?;
            upload = Some((file_name, data.to_vec()));
            break;
        }
    }
    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest("Missing 'file' multipart part".into()))?;

    let stored_name = format!("{}_{}", Uuid::new_v4(), file_name);
    let stored_path = state.config.storage_dir.join(&stored_name);
    tokio::fs::write(&stored_path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store file: {e}")))?;

    let file_url = format!("{}/storage/{}", state.config.public_base_url, stored_name);
    let input = CreateAttachment {
        task_id,
        user_id: auth.user_id,
        file_type: file_type_from_name(&file_name).to_string(),
        file_name,
        file_url,
    };
    let attachment = AttachmentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        attachment_id = %attachment.id,
        task_id = %task_id,
        size = data.len(),
        "Attachment uploaded"
    );
    Ok(Json(attachment))
}
