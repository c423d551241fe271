//! AI service integration for style analysis and pose generation
//!
//! Provides the service traits the orchestrator depends on, the Gemini
//! implementations, and mock clients for tests.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiPoseClient, GeminiStyleClient};
pub use mock::{MockPoseClient, MockStyleClient};

use crate::media::InlineImage;
use crate::models::PoseBatch;
use crate::Result;
use async_trait::async_trait;

/// Produces a single descriptive style prompt from a reference image.
#[async_trait]
pub trait StyleAnalysisService: Send + Sync {
    async fn analyze_style(&self, image: &InlineImage) -> Result<String>;
}

/// Produces the eight-pose prompt batch from a reference image.
#[async_trait]
pub trait PoseBatchService: Send + Sync {
    async fn generate_poses(&self, image: &InlineImage) -> Result<PoseBatch>;
}
