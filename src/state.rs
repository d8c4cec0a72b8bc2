use crate::config::AppConfig;
use crate::model::{GeminiClient, ModelClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub model: Arc<dyn ModelClient>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let model = Arc::new(GeminiClient::new(config.gemini.clone())?) as Arc<dyn ModelClient>;

        tracing::info!(
            model = %config.gemini.model,
            vision_model = %config.gemini.vision_model,
            timeout_secs = config.gemini.timeout_secs,
            "model client configured"
        );
        Ok(Self::from_parts(config, model))
    }

    pub fn from_parts(config: Arc<AppConfig>, model: Arc<dyn ModelClient>) -> Self {
        Self { config, model }
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use crate::config::GeminiConfig;
    use crate::model::{ModelError, ModelPrompt};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers every prompt with a canned reply and remembers what it was asked.
    pub struct FakeModel {
        reply: Result<String, String>,
        pub prompts: Mutex<Vec<ModelPrompt>>,
    }

    impl FakeModel {
        pub fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub fn failing(reason: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(reason.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ModelClient for FakeModel {
        async fn generate(&self, prompt: &ModelPrompt) -> Result<String, ModelError> {
            self.prompts.lock().unwrap().push(prompt.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(reason) => Err(ModelError::Empty {
                    reason: Some(reason.clone()),
                }),
            }
        }
    }

    impl AppState {
        pub fn fake(model: Arc<FakeModel>) -> Self {
            let config = Arc::new(AppConfig {
                host: "127.0.0.1".into(),
                port: 0,
                gemini: GeminiConfig {
                    api_key: "test".into(),
                    base_url: "http://fake.local".into(),
                    model: "fake".into(),
                    vision_model: "fake-vision".into(),
                    timeout_secs: 5,
                },
            });
            Self::from_parts(config, model as Arc<dyn ModelClient>)
        }
    }
}
