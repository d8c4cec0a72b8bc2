use bytes::Bytes;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::dto::CalorieResponse;
use crate::error::AppError;
use crate::model::{ModelPrompt, UploadedImage};
use crate::prompt::calorie_prompt;
use crate::state::AppState;

/// Normalises an upload's content type, accepting JPEG and PNG only.
pub(crate) fn image_mime(content_type: Option<&str>, file_name: Option<&str>) -> Result<&'static str, AppError> {
    let from_ct = content_type.map(|ct| ct.trim().to_ascii_lowercase());
    match from_ct.as_deref() {
        Some("image/jpeg") | Some("image/jpg") | Some("image/pjpeg") => return Ok("image/jpeg"),
        Some("image/png") => return Ok("image/png"),
        Some("") | Some("application/octet-stream") | None => {}
        Some(other) => return Err(AppError::UnsupportedMedia(other.to_string())),
    }

    // browsers sometimes omit the type; fall back to the extension
    let ext = file_name
        .and_then(|n| n.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => Ok("image/jpeg"),
        Some("png") => Ok("image/png"),
        _ => Err(AppError::UnsupportedMedia(
            from_ct.unwrap_or_else(|| "unknown".into()),
        )),
    }
}

pub(crate) fn input_image(upload: Option<(Bytes, &'static str)>) -> Result<UploadedImage, AppError> {
    match upload {
        Some((data, mime)) if !data.is_empty() => Ok(UploadedImage {
            mime_type: mime.to_string(),
            data,
        }),
        _ => Err(AppError::NoFile),
    }
}

pub async fn estimate_calories(
    st: &AppState,
    image: UploadedImage,
    user_input: &str,
) -> Result<CalorieResponse, AppError> {
    let size = image.data.len();
    let prompt = ModelPrompt::with_image(calorie_prompt(user_input), image);
    let text = st.model.generate(&prompt).await?;
    info!(image_bytes = size, len = text.len(), "calories estimated");
    Ok(CalorieResponse {
        id: Uuid::new_v4(),
        generated_at: OffsetDateTime::now_utc(),
        model: st.config.gemini.vision_model.clone(),
        text,
    })
}

#[cfg(test)]
mod meal_service_tests {
    use super::*;
    use crate::state::fake::FakeModel;

    #[test]
    fn accepted_mime_types() {
        assert_eq!(image_mime(Some("image/jpeg"), None).unwrap(), "image/jpeg");
        assert_eq!(image_mime(Some("image/jpg"), None).unwrap(), "image/jpeg");
        assert_eq!(image_mime(Some("IMAGE/PNG"), None).unwrap(), "image/png");
        assert_eq!(image_mime(None, Some("lunch.JPEG")).unwrap(), "image/jpeg");
        assert_eq!(
            image_mime(Some("application/octet-stream"), Some("a.png")).unwrap(),
            "image/png"
        );
    }

    #[test]
    fn rejected_mime_types() {
        assert!(matches!(
            image_mime(Some("image/gif"), Some("a.gif")),
            Err(AppError::UnsupportedMedia(ct)) if ct == "image/gif"
        ));
        assert!(matches!(
            image_mime(None, Some("notes.txt")),
            Err(AppError::UnsupportedMedia(_))
        ));
        assert!(matches!(image_mime(None, None), Err(AppError::UnsupportedMedia(_))));
    }

    #[test]
    fn no_upload_is_no_file() {
        assert!(matches!(input_image(None), Err(AppError::NoFile)));
        assert!(matches!(
            input_image(Some((Bytes::new(), "image/png"))),
            Err(AppError::NoFile)
        ));
    }

    #[tokio::test]
    async fn image_and_prompt_reach_the_model() {
        let model = FakeModel::replying("1. Rice - 200 calories\nTotal: 200");
        let st = AppState::fake(model.clone());
        let image = input_image(Some((Bytes::from_static(b"\xff\xd8\xff"), "image/jpeg"))).unwrap();

        let resp = estimate_calories(&st, image, "is it healthy?").await.unwrap();
        assert_eq!(resp.text, "1. Rice - 200 calories\nTotal: 200");

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let img = prompts[0].image.as_ref().unwrap();
        assert_eq!(img.mime_type, "image/jpeg");
        assert_eq!(&img.data[..], b"\xff\xd8\xff");
        assert!(prompts[0].text.ends_with("User note: is it healthy?"));
    }
}
