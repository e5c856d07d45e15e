//! Handler for media uploads.
//!
//! Stored files are served back under `/media` by the static file service
//! mounted in [`crate::app`].

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use pixelbox_core::media::{upload_path, MediaRef};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of a successful upload: the reference to store on a record and the
/// URL it resolves to.
#[derive(Debug, Serialize)]
pub struct UploadedMedia {
    pub media: MediaRef,
    pub url: Option<String>,
}

/// POST /api/v1/media/{folder}
///
/// Accepts a multipart form with a required `file` field. The file is
/// written under `MEDIA_ROOT/{folder}/` with a generated unique name.
pub async fn upload(
    State(state): State<AppState>,
    Path(folder): Path<String>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadedMedia>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file_data = Some((filename, data.to_vec()));
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let path = upload_path(&folder, &filename, &unique)?;

    let target = state.config.media_root.join(&path);
    if let Some(dir) = target.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
    }
    tokio::fs::write(&target, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(path = %path, bytes = data.len(), original = %filename, "Media uploaded");

    let media = MediaRef::Uploaded { path };
    let url = state.media.resolve(&media);
    Ok((StatusCode::CREATED, Json(UploadedMedia { media, url })))
}
