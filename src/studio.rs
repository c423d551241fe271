//! Session orchestration for the two studio tabs
//!
//! Sequences encode -> build request -> remote call -> decode -> state
//! update for the active mode, and exposes the notification state the
//! presentation layer renders. One call is in flight per mode at most;
//! re-entry while pending is rejected.

use crate::ai::{
    GeminiPoseClient, GeminiStyleClient, PoseBatchService, StyleAnalysisService,
};
use crate::media::{InlineImage, MediaType};
use crate::models::{Config, Mode, ModeResult, Notification, UploadedImage};
use crate::session::{SessionEvent, SessionState};
use std::path::Path;
use tracing::{error, warn};

/// Injectable service bundle used to construct [`Studio`] in tests.
pub struct StudioServices {
    pub style: Box<dyn StyleAnalysisService>,
    pub poses: Box<dyn PoseBatchService>,
}

/// Holds both tab sessions, the active mode, and the transient
/// notifications. The presentation layer drives the entry points and reads
/// state back through the accessors.
pub struct Studio {
    style: Box<dyn StyleAnalysisService>,
    poses: Box<dyn PoseBatchService>,
    active: Mode,
    analyzer_session: SessionState,
    pose_session: SessionState,
    alert: Option<Notification>,
    progress: Option<Notification>,
}

impl Studio {
    /// Build a studio from concrete service dependencies.
    pub fn with_services(services: StudioServices) -> Self {
        Self {
            style: services.style,
            poses: services.poses,
            active: Mode::Analyzer,
            analyzer_session: SessionState::default(),
            pose_session: SessionState::default(),
            alert: None,
            progress: None,
        }
    }

    /// Construct a studio backed by Gemini, sharing one HTTP connection pool
    /// across both clients.
    pub fn new(config: &Config) -> Self {
        let http_client = reqwest::Client::new();

        Self::with_services(StudioServices {
            style: Box::new(GeminiStyleClient::new_with_client(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                http_client.clone(),
            )),
            poses: Box::new(GeminiPoseClient::new_with_client(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                http_client,
            )),
        })
    }

    pub fn active_mode(&self) -> Mode {
        self.active
    }

    /// Switching tabs never touches either session's state.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.active = mode;
    }

    pub fn session(&self, mode: Mode) -> &SessionState {
        match mode {
            Mode::Analyzer => &self.analyzer_session,
            Mode::Poses => &self.pose_session,
        }
    }

    pub fn active_session(&self) -> &SessionState {
        self.session(self.active)
    }

    pub fn alert(&self) -> Option<&Notification> {
        self.alert.as_ref()
    }

    pub fn take_alert(&mut self) -> Option<Notification> {
        self.alert.take()
    }

    pub fn progress(&self) -> Option<&Notification> {
        self.progress.as_ref()
    }

    /// Validate and store a reference image for the active mode.
    ///
    /// Unsupported declared formats are rejected with an alert before any
    /// state changes; replacing an existing image releases its preview
    /// handle.
    pub fn select_image(&mut self, bytes: Vec<u8>, declared_mime: &str) {
        let media_type = match MediaType::try_from_mime(declared_mime) {
            Ok(media_type) => media_type,
            Err(e) => {
                warn!("Rejected upload: {}", e);
                self.raise_alert(
                    "Invalid Format",
                    "Please upload a JPG, PNG, or WebP image.",
                );
                return;
            }
        };

        if let Some(sniffed) = MediaType::sniff(&bytes) {
            if sniffed != media_type {
                warn!(
                    "Declared media type {} does not match sniffed {}",
                    media_type.as_mime(),
                    sniffed.as_mime()
                );
            }
        }

        self.apply(
            self.active,
            SessionEvent::ImageSelected(UploadedImage::new(bytes, media_type)),
        );
    }

    /// Read an image file and select it, inferring the declared media type
    /// from the extension. A read failure is surfaced as an alert.
    pub async fn select_image_from_path(&mut self, path: &Path) {
        let Some(media_type) = MediaType::from_path(path) else {
            warn!("Rejected upload with unsupported file: {}", path.display());
            self.raise_alert(
                "Invalid Format",
                "Please upload a JPG, PNG, or WebP image.",
            );
            return;
        };

        match tokio::fs::read(path).await {
            Ok(bytes) => self.select_image(bytes, media_type.as_mime()),
            Err(e) => {
                error!("Failed to read image file {}: {}", path.display(), e);
                self.raise_alert("Upload Failed", "The image file could not be read.");
            }
        }
    }

    /// Remove the active mode's image (and its result) without touching the
    /// other mode.
    pub fn remove_image(&mut self) {
        self.apply(self.active, SessionEvent::ImageRemoved);
    }

    /// Clear the active mode's image and result unconditionally.
    pub fn reset(&mut self) {
        self.apply(self.active, SessionEvent::Reset);
    }

    /// Submit the active mode's image for generation.
    ///
    /// Runs the full sequence for one submission: encode, build request,
    /// call the remote model, decode, update state. Any failure returns the
    /// session to idle with no result and a generic alert; the cause is
    /// logged, not shown.
    pub async fn submit(&mut self) {
        let mode = self.active;

        if self.session(mode).pending {
            self.raise_alert("Please Wait", "A request is already in progress.");
            return;
        }

        let Some(inline) = self
            .session(mode)
            .image
            .as_ref()
            .map(|img| InlineImage::from_bytes(&img.bytes, img.media_type))
        else {
            let message = match mode {
                Mode::Analyzer => "Upload a wedding style reference image first.",
                Mode::Poses => "Upload a theme reference image first.",
            };
            self.raise_alert("No Image", message);
            return;
        };

        self.show_progress(mode);
        self.apply(mode, SessionEvent::SubmitStarted);

        let outcome = match mode {
            Mode::Analyzer => self
                .style
                .analyze_style(&inline)
                .await
                .map(ModeResult::Style),
            Mode::Poses => self
                .poses
                .generate_poses(&inline)
                .await
                .map(ModeResult::Poses),
        };

        self.progress = None;

        match outcome {
            Ok(result) => self.apply(mode, SessionEvent::SubmitSucceeded(result)),
            Err(e) => {
                error!("{} submission failed: {}", mode.as_str(), e);
                self.apply(mode, SessionEvent::SubmitFailed);
                self.raise_alert(
                    "Error",
                    "The system could not process the image. Check that the API key is valid.",
                );
            }
        }
    }

    fn show_progress(&mut self, mode: Mode) {
        self.progress = Some(match mode {
            Mode::Analyzer => Notification::progress(
                "Analyzing Style...",
                "Reading texture, lighting, and mood...",
            ),
            Mode::Poses => Notification::progress(
                "Generating Variations...",
                "Creating 8 professional & candid pose prompts...",
            ),
        });
    }

    fn raise_alert(&mut self, title: &str, message: &str) {
        self.alert = Some(Notification::alert(title, message));
    }

    fn apply(&mut self, mode: Mode, event: SessionEvent) {
        let slot = match mode {
            Mode::Analyzer => &mut self.analyzer_session,
            Mode::Poses => &mut self.pose_session,
        };
        *slot = std::mem::take(slot).apply(event);
    }
}
