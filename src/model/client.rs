use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::dto::{Content, GenerateRequest, GenerateResponse, InlineData, Part};
use super::ModelPrompt;
use crate::config::GeminiConfig;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request to model failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("could not decode model response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("model returned no text ({})", .reason.as_deref().unwrap_or("no reason given"))]
    Empty { reason: Option<String> },
}

#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends the prompt once and returns the model's text verbatim.
    async fn generate(&self, prompt: &ModelPrompt) -> Result<String, ModelError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ModelError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, model
        )
    }

    fn model_for(&self, prompt: &ModelPrompt) -> &str {
        if prompt.image.is_some() {
            &self.config.vision_model
        } else {
            &self.config.model
        }
    }
}

pub(crate) fn build_request(prompt: &ModelPrompt) -> GenerateRequest {
    let mut parts = vec![Part::Text {
        text: prompt.text.clone(),
    }];
    if let Some(img) = &prompt.image {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: img.mime_type.clone(),
                data: STANDARD.encode(&img.data),
            },
        });
    }
    GenerateRequest {
        contents: vec![Content {
            role: Some("user".into()),
            parts,
        }],
    }
}

pub(crate) fn extract_text(body: &str) -> Result<String, ModelError> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;
    if let Some(text) = parsed.text() {
        return Ok(text);
    }
    let reason = parsed
        .prompt_feedback
        .and_then(|f| f.block_reason)
        .or_else(|| parsed.candidates.into_iter().next().and_then(|c| c.finish_reason));
    Err(ModelError::Empty { reason })
}

#[async_trait]
impl ModelClient for GeminiClient {
    #[instrument(skip(self, prompt), fields(has_image = prompt.image.is_some()))]
    async fn generate(&self, prompt: &ModelPrompt) -> Result<String, ModelError> {
        let model = self.model_for(prompt);
        let req = build_request(prompt);

        debug!(%model, prompt_len = prompt.text.len(), "calling model");
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%status, "model returned error status");
            return Err(ModelError::Status { status, body });
        }

        let text = extract_text(&body)?;
        debug!(%model, response_len = text.len(), "model answered");
        Ok(text)
    }
}

#[cfg(test)]
mod client_tests {
    use super::*;
    use crate::model::UploadedImage;
    use bytes::Bytes;
    use httpmock::prelude::*;

    fn config() -> GeminiConfig {
        config_at("http://localhost:1")
    }

    fn config_at(base_url: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: "k".into(),
            base_url: base_url.into(),
            model: "text-model".into(),
            vision_model: "vision-model".into(),
            timeout_secs: 1,
        }
    }

    #[test]
    fn text_prompt_has_single_part() {
        let req = build_request(&ModelPrompt::text("hello"));
        let json = serde_json::to_value(&req).unwrap();
        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0]["text"], "hello");
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn image_is_inlined_with_mime_type() {
        let img = UploadedImage {
            mime_type: "image/png".into(),
            data: Bytes::from_static(b"abc"),
        };
        let req = build_request(&ModelPrompt::with_image("look", img));
        let json = serde_json::to_value(&req).unwrap();
        let inline = &json["contents"][0]["parts"][1]["inline_data"];
        assert_eq!(inline["mime_type"], "image/png");
        assert_eq!(inline["data"], "YWJj");
    }

    #[test]
    fn model_is_chosen_by_attachment() {
        let client = GeminiClient::new(config()).unwrap();
        assert_eq!(client.model_for(&ModelPrompt::text("x")), "text-model");
        let img = UploadedImage {
            mime_type: "image/jpeg".into(),
            data: Bytes::new(),
        };
        assert_eq!(
            client.model_for(&ModelPrompt::with_image("x", img)),
            "vision-model"
        );
        assert_eq!(
            client.endpoint("text-model"),
            "http://localhost:1/v1beta/models/text-model:generateContent"
        );
    }

    #[test]
    fn extract_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"a"},{"text":"b"}]},"finishReason":"STOP"}]}"#;
        assert_eq!(extract_text(body).unwrap(), "ab");
    }

    #[test]
    fn blocked_prompt_is_empty_with_reason() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        match extract_text(body).unwrap_err() {
            ModelError::Empty { reason } => assert_eq!(reason.as_deref(), Some("SAFETY")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_text_parts_are_skipped() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[
            {"functionCall":{"name":"lookup","args":{"q":"oats"}}},
            {"inlineData":{"mimeType":"image/png","data":"YWJj"}},
            {"text":"Oats: 150 kcal"}
        ]},"finishReason":"STOP"}]}"#;
        assert_eq!(extract_text(body).unwrap(), "Oats: 150 kcal");
    }

    #[test]
    fn only_non_text_parts_is_empty_with_finish_reason() {
        let body = r#"{"candidates":[{"content":{"parts":[{"functionCall":{"name":"f","args":{}}}]},"finishReason":"STOP"}]}"#;
        match extract_text(body).unwrap_err() {
            ModelError::Empty { reason } => assert_eq!(reason.as_deref(), Some("STOP")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn garbage_is_decode_error() {
        assert!(matches!(extract_text("not json"), Err(ModelError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_transport_error() {
        let client = GeminiClient::new(config()).unwrap();
        let err = client.generate(&ModelPrompt::text("hi")).await.unwrap_err();
        assert!(matches!(err, ModelError::Transport(_)));
    }

    #[tokio::test]
    async fn sends_key_and_prompt_to_text_model() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/text-model:generateContent")
                    .header("x-goog-api-key", "k")
                    .body_includes("plan for me");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "candidates": [{
                            "content": {"role": "model", "parts": [{"text": "Overview"}]},
                            "finishReason": "STOP"
                        }]
                    }));
            })
            .await;

        let client = GeminiClient::new(config_at(&server.base_url())).unwrap();
        let text = client.generate(&ModelPrompt::text("plan for me")).await.unwrap();
        assert_eq!(text, "Overview");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn image_prompt_goes_to_vision_model() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/vision-model:generateContent")
                    .body_includes("\"mime_type\":\"image/jpeg\"");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "candidates": [{"content": {"parts": [{"text": "Total: 300"}]}}]
                    }));
            })
            .await;

        let img = UploadedImage {
            mime_type: "image/jpeg".into(),
            data: Bytes::from_static(b"\xff\xd8\xff"),
        };
        let client = GeminiClient::new(config_at(&server.base_url())).unwrap();
        let text = client
            .generate(&ModelPrompt::with_image("count", img))
            .await
            .unwrap();
        assert_eq!(text, "Total: 300");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_keeps_provider_body() {
        let body = r#"{"error":{"code":429,"status":"RESOURCE_EXHAUSTED"}}"#;
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1beta/models/text-model:generateContent");
                then.status(429)
                    .header("content-type", "application/json")
                    .body(body);
            })
            .await;

        let client = GeminiClient::new(config_at(&server.base_url())).unwrap();
        let err = client.generate(&ModelPrompt::text("hi")).await.unwrap_err();
        match err {
            ModelError::Status { status, body: got } => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(got, body);
            }
            other => panic!("unexpected {other:?}"),
        }
        mock.assert_async().await;
    }
}
