use crate::error::{ClaimScribeError, Result};
use crate::llm::types::*;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Thin client for the Gemini `generateContent` endpoint.
///
/// The crate treats the model as an opaque function: prompt plus media in,
/// text out, or an explicit failure. Nothing downstream of this client ever
/// sees a partial or absent response.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub(crate) async fn generate_content(
        &self,
        model: &str,
        system_prompt: Option<&str>,
        contents: Vec<Content>,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents,
            system_instruction: system_prompt.map(Content::user),
        };

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(ClaimScribeError::GenerationFailed(format!(
                "Gemini API Error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let part = body
            .candidates
            .ok_or_else(|| {
                ClaimScribeError::GenerationFailed("No candidates returned".to_string())
            })?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ClaimScribeError::GenerationFailed("Empty candidates list".to_string())
            })?
            .content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| {
                ClaimScribeError::GenerationFailed("No parts in content".to_string())
            })?;

        match part {
            Part::Text { text } => Ok(text),
            _ => Err(ClaimScribeError::GenerationFailed(
                "Model returned non-text content".to_string(),
            )),
        }
    }
}
