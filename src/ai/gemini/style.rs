use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::ai::StyleAnalysisService;
use crate::media::InlineImage;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Gemini-backed style analysis: one reference image in, one dense English
/// paragraph of prompt text out.
pub struct GeminiStyleClient {
    http: GeminiHttpClient,
}

impl GeminiStyleClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    /// Deterministic mapping from an inline image to the style-analysis
    /// request shape. No I/O happens here.
    pub fn build_request(image: &InlineImage) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Some(Content::system(prompts::STYLE_SYSTEM)),
            contents: vec![Content::user_with_image(image, prompts::STYLE_USER)],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                response_mime_type: None,
                response_schema: None,
            }),
        }
    }
}

#[async_trait]
impl StyleAnalysisService for GeminiStyleClient {
    async fn analyze_style(&self, image: &InlineImage) -> Result<String> {
        tracing::debug!(
            "Requesting style analysis ({} base64 chars, {})",
            image.data.len(),
            image.media_type.as_mime()
        );

        let request = Self::build_request(image);
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        response
            .first_text()
            .ok_or_else(|| Error::AiProvider("No response from model".to_string()))
    }
}
