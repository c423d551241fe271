use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Schema,
};
use crate::ai::PoseBatchService;
use crate::media::InlineImage;
use crate::models::PoseBatch;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// Gemini-backed pose batch generation. Output is constrained to a JSON
/// array of {title, prompt} records via a response schema, then decoded and
/// validated into a [`PoseBatch`].
pub struct GeminiPoseClient {
    http: GeminiHttpClient,
}

impl GeminiPoseClient {
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

    fn pose_batch_schema() -> Schema {
        Schema::array(Schema::object(
            BTreeMap::from([
                ("title".to_string(), Schema::string()),
                ("prompt".to_string(), Schema::string()),
            ]),
            vec!["title".to_string(), "prompt".to_string()],
        ))
    }

    /// Deterministic mapping from an inline image to the batch-pose request
    /// shape. No I/O happens here.
    pub fn build_request(image: &InlineImage) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Some(Content::system(prompts::POSE_SYSTEM)),
            contents: vec![Content::user_with_image(image, prompts::POSE_USER)],
            generation_config: Some(GenerationConfig {
                temperature: None,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(Self::pose_batch_schema()),
            }),
        }
    }
}

#[async_trait]
impl PoseBatchService for GeminiPoseClient {
    async fn generate_poses(&self, image: &InlineImage) -> Result<PoseBatch> {
        tracing::debug!(
            "Requesting pose batch ({} base64 chars, {})",
            image.data.len(),
            image.media_type.as_mime()
        );

        let request = Self::build_request(image);
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let text = response
            .first_text()
            .ok_or_else(|| Error::AiProvider("No response from model".to_string()))?;

        PoseBatch::decode(&text)
    }
}
