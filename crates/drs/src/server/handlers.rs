//! Request handlers for the upload page.
//!
//! Uploads are reviewed as-is: any bytes, empty included, go through the
//! pipeline and the model decides what they show.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use std::io::Write;

use super::ServerState;

/// Form field carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

/// Serves the upload page.
pub(super) async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

/// Reviews one uploaded image and returns the verdict as plain text.
///
/// The upload is staged in a temporary file for the duration of the review.
/// Both answered and unavailable verdicts are returned with `200 OK`; only
/// a missing `image` field (`400`) or an unreadable staged file (`500`) is
/// an error.
pub(super) async fn verdict(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> Result<String, (StatusCode, String)> {
    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (e.status(), e.body_text()))?
    {
        if field.name() == Some(IMAGE_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| (e.status(), e.body_text()))?;
            image = Some(bytes);
            break;
        }
    }

    let bytes = image.ok_or((
        StatusCode::BAD_REQUEST,
        format!("Missing '{IMAGE_FIELD}' upload"),
    ))?;

    let staged = stage_upload(&bytes).map_err(internal)?;
    tracing::info!("Reviewing upload ({} bytes) at {:?}", bytes.len(), staged.path());

    let verdict = state.referee.review(staged.path()).await.map_err(internal)?;
    Ok(verdict.to_string())
}

fn stage_upload(bytes: &[u8]) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("drs-upload-")
        .suffix(".png")
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

fn internal(err: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Review failed: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
