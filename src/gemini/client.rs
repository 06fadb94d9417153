use super::types::*;
use crate::{Result, config::GeminiConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Sends a single prompt to the model and returns the generated text.
    async fn generate_content(&self, prompt: &str) -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::json_mode(prompt);

        debug!("Calling Gemini model {}", self.model);

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(crate::Error::gemini(format!(
                "generateContent returned {}: {}",
                status, body
            )));
        }

        let response: GenerateContentResponse = response.json().await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(crate::Error::safety_blocked(reason));
        }

        response
            .text()
            .ok_or_else(|| crate::Error::gemini("Response contained no candidate text"))
    }
}
