use super::{PoseBatchService, StyleAnalysisService};
use crate::media::InlineImage;
use crate::models::{PoseBatch, PosePrompt, POSE_COUNT};
use crate::prompts::POSE_SUFFIX;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum Scripted<T> {
    Ok(T),
    Err(String),
}

fn replay<T: Clone>(responses: &[Scripted<T>], call_index: usize) -> Option<Result<T>> {
    if responses.is_empty() {
        return None;
    }
    match &responses[(call_index - 1) % responses.len()] {
        Scripted::Ok(value) => Some(Ok(value.clone())),
        Scripted::Err(message) => Some(Err(Error::AiProvider(message.clone()))),
    }
}

/// Scriptable stand-in for the style analysis service.
#[derive(Clone)]
pub struct MockStyleClient {
    responses: Arc<Mutex<Vec<Scripted<String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockStyleClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(Scripted::Ok(response));
        self
    }

    pub fn with_error(self, message: String) -> Self {
        self.responses.lock().unwrap().push(Scripted::Err(message));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockStyleClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StyleAnalysisService for MockStyleClient {
    async fn analyze_style(&self, image: &InlineImage) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        replay(&responses, *count).unwrap_or_else(|| {
            Ok(format!(
                "Elegant {} wedding scene, soft natural light, shallow depth of field",
                image.media_type.as_mime()
            ))
        })
    }
}

/// Scriptable stand-in for the pose batch service.
#[derive(Clone)]
pub struct MockPoseClient {
    responses: Arc<Mutex<Vec<Scripted<PoseBatch>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockPoseClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: PoseBatch) -> Self {
        self.responses.lock().unwrap().push(Scripted::Ok(response));
        self
    }

    pub fn with_error(self, message: String) -> Self {
        self.responses.lock().unwrap().push(Scripted::Err(message));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Valid default batch covering all eight pose categories.
    pub fn default_batch() -> PoseBatch {
        let titles = [
            "Candid: Spontaneous Laughter",
            "Intimate: The Forehead Touch",
            "Artistic: Under The Veil",
            "Wide Shot: Environmental/Grand",
            "Classic Glamour: Elegant",
            "Detail: Ring/Hands/Bouquet",
            "Candid: The Whispered Secret",
            "Mood: Black & White Emotion",
        ];
        debug_assert_eq!(titles.len(), POSE_COUNT);

        let prompts = titles
            .iter()
            .map(|title| PosePrompt {
                title: title.to_string(),
                prompt: format!(
                    "{}, matching the reference image's lighting and tone {}",
                    title, POSE_SUFFIX
                ),
            })
            .collect();

        PoseBatch::new(prompts).expect("default batch is valid")
    }
}

impl Default for MockPoseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoseBatchService for MockPoseClient {
    async fn generate_poses(&self, _image: &InlineImage) -> Result<PoseBatch> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        replay(&responses, *count).unwrap_or_else(|| Ok(Self::default_batch()))
    }
}
