//! POST /api/upload - file intake
//!
//! Writes the uploaded bytes to the configured upload directory keyed by
//! filename (last writer wins; concurrent uploads of the same name race) and
//! answers with a synthesized URL. No content-type or size validation.

use crate::api::AppState;
use crate::error::{ApiError, Result};
use axum::{extract::State, Json};
use axum_extra::extract::Multipart;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_FILENAME: &str = "upload.bin";

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut filename: Option<String> = None;
    let mut contents: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest {
            message: format!("Failed to parse multipart form: {}", e),
        }
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                filename = field.file_name().map(|s| s.to_string());
                contents = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::BadRequest {
                            message: format!("Failed to read file field: {}", e),
                        })?
                        .to_vec(),
                );
            }
            _ => {
                warn!("Unknown field in multipart: {}", name);
            }
        }
    }

    let contents = contents.ok_or_else(|| ApiError::BadRequest {
        message: "Missing required field: file".to_string(),
    })?;

    let filename = sanitize_filename(filename.as_deref().unwrap_or(DEFAULT_FILENAME));
    let path = state.upload_dir.join(&filename);

    tokio::fs::write(&path, &contents).await?;

    info!("Stored upload {} ({} bytes)", path.display(), contents.len());

    Ok(Json(UploadResponse {
        url: format!("{}/{}", state.files_base_url, filename),
    }))
}

/// Keep only the final path component so the write stays inside the upload
/// directory.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    if base.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_filename() {
        assert_eq!(sanitize_filename("license.jpg"), "license.jpg");
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("a/b/c.png"), "c.png");
        assert_eq!(sanitize_filename("a\\b\\c.png"), "c.png");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_filename(""), DEFAULT_FILENAME);
        assert_eq!(sanitize_filename("uploads/"), DEFAULT_FILENAME);
    }

    #[tokio::test]
    async fn test_last_writer_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(sanitize_filename("license.jpg"));

        tokio::fs::write(&path, b"first").await.unwrap();
        tokio::fs::write(&path, b"second").await.unwrap();

        let stored = tokio::fs::read(&path).await.unwrap();
        assert_eq!(stored, b"second");
    }
}
