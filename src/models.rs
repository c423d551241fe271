//! Data models and structures
//!
//! Defines the core data structures for uploads, generated prompts, pose
//! batches, notifications, and environment configuration.

use crate::media::MediaType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two independent studio tabs. Each mode keeps its own session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Analyzer,
    Poses,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analyzer => "analyzer",
            Self::Poses => "poses",
        }
    }
}

/// Ephemeral local reference used by the presentation layer to show a
/// preview of the uploaded image. Replaced (and thereby released) whenever a
/// new image is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle(Uuid);

impl PreviewHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl Default for PreviewHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference image owned by the active session.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub media_type: MediaType,
    pub preview: PreviewHandle,
}

impl UploadedImage {
    pub fn new(bytes: Vec<u8>, media_type: MediaType) -> Self {
        Self {
            bytes,
            media_type,
            preview: PreviewHandle::new(),
        }
    }
}

/// A single pose idea: a short label plus the full generative-AI prompt.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosePrompt {
    pub title: String,
    pub prompt: String,
}

/// Number of pose variations a batch call must produce.
pub const POSE_COUNT: usize = 8;

/// Ordered batch of exactly [`POSE_COUNT`] pose prompts. Constructed only
/// through validation, so a value of this type is never partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoseBatch {
    prompts: Vec<PosePrompt>,
}

impl PoseBatch {
    /// Validate a decoded sequence of pose prompts: exactly [`POSE_COUNT`]
    /// records, each with a non-empty title and prompt.
    pub fn new(prompts: Vec<PosePrompt>) -> Result<Self> {
        if prompts.len() != POSE_COUNT {
            return Err(Error::Decode(format!(
                "Expected {} pose prompts, got {}",
                POSE_COUNT,
                prompts.len()
            )));
        }
        for (i, pose) in prompts.iter().enumerate() {
            if pose.title.trim().is_empty() {
                return Err(Error::Decode(format!("Pose {} has an empty title", i + 1)));
            }
            if pose.prompt.trim().is_empty() {
                return Err(Error::Decode(format!("Pose {} has an empty prompt", i + 1)));
            }
        }
        Ok(Self { prompts })
    }

    /// Parse the model's JSON text into a validated batch. Any parse failure
    /// or shape mismatch discards the partial result.
    pub fn decode(text: &str) -> Result<Self> {
        let prompts: Vec<PosePrompt> = serde_json::from_str(text).map_err(|e| {
            tracing::error!("Failed to parse pose batch JSON: {}", e);
            Error::Decode(format!("Failed to parse pose batch JSON: {}", e))
        })?;
        Self::new(prompts)
    }

    pub fn prompts(&self) -> &[PosePrompt] {
        &self.prompts
    }
}

/// Result of a successful submission for either mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeResult {
    /// Single descriptive style prompt from the analyzer.
    Style(String),
    /// Eight pose-variation prompts in display order.
    Poses(PoseBatch),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Alert,
    Progress,
}

/// Transient user-facing notice. At most one of each kind is visible at a
/// time; the next call supersedes it rather than queueing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn alert(title: &str, message: &str) -> Self {
        Self {
            kind: NotificationKind::Alert,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn progress(title: &str, message: &str) -> Self {
        Self {
            kind: NotificationKind::Progress,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::Config("GEMINI_API_KEY not set".to_string()))?;
        if gemini_api_key.trim().is_empty() {
            return Err(Error::Config("GEMINI_API_KEY is empty".to_string()));
        }

        Ok(Self {
            gemini_api_key,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
        })
    }
}
