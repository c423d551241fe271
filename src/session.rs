//! Per-mode session state and its reducer
//!
//! Each tab owns one [`SessionState`]. State changes are expressed as
//! [`SessionEvent`] values applied through a pure reducer, returning a new
//! state instead of mutating in place.

use crate::models::{ModeResult, UploadedImage};

/// Events the orchestrator applies to a session.
#[derive(Debug)]
pub enum SessionEvent {
    /// A validated image replaces the current one. The previous preview
    /// handle is released by the replacement.
    ImageSelected(UploadedImage),
    /// Explicit removal of the current image (also discards the result).
    ImageRemoved,
    /// A valid submission started: clears the previous result and marks the
    /// session pending.
    SubmitStarted,
    /// The remote call succeeded; the result is installed atomically.
    SubmitSucceeded(ModeResult),
    /// The remote call failed; the session returns to idle with no result.
    SubmitFailed,
    /// Unconditional clear of image and result.
    Reset,
}

/// Interaction state of one tab: the uploaded image, the last result, and
/// whether a call is in flight.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    pub image: Option<UploadedImage>,
    pub result: Option<ModeResult>,
    pub pending: bool,
}

impl SessionState {
    /// Pure reducer. Consumes the previous state and returns the next one.
    pub fn apply(self, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::ImageSelected(image) => SessionState {
                image: Some(image),
                ..self
            },
            SessionEvent::ImageRemoved => SessionState {
                image: None,
                result: None,
                ..self
            },
            SessionEvent::SubmitStarted => SessionState {
                result: None,
                pending: true,
                ..self
            },
            SessionEvent::SubmitSucceeded(result) => SessionState {
                result: Some(result),
                pending: false,
                ..self
            },
            SessionEvent::SubmitFailed => SessionState {
                result: None,
                pending: false,
                ..self
            },
            SessionEvent::Reset => SessionState::default(),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.image.is_some() && !self.pending
    }
}
