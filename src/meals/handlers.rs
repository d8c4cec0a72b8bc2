use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use tracing::{debug, info, instrument};

use super::dto::CalorieResponse;
use super::services::{estimate_calories, image_mime, input_image};
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meals/calories", post(calories_multipart)) // image + prompt
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}

/// POST /meals/calories (multipart)
/// Fields: `image` (jpeg/png) and an optional free-text `prompt`.
#[instrument(skip(state, mp))]
pub async fn calories_multipart(
    State(state): State<AppState>,
    mut mp: Multipart,
) -> Result<Json<CalorieResponse>, AppError> {
    let mut upload: Option<(Bytes, &'static str)> = None;
    let mut prompt = String::new();

    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(e.body_text()))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("image") | Some("file") => {
                let content_type = field.content_type().map(|s| s.to_string());
                let file_name = field.file_name().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidInput(e.body_text()))?;
                // an empty part is what a form sends when nothing was picked
                if data.is_empty() {
                    continue;
                }
                let mime = image_mime(content_type.as_deref(), file_name.as_deref())?;
                debug!(mime, bytes = data.len(), "image received");
                upload = Some((data, mime));
            }
            Some("prompt") | Some("input") => {
                prompt = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(e.body_text()))?;
            }
            _ => {}
        }
    }

    let image = input_image(upload)?;
    let resp = estimate_calories(&state, image, &prompt).await?;
    info!(response_id = %resp.id, "calorie estimate served");
    Ok(Json(resp))
}
