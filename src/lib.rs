//! Core library for warkah-studio - wedding style analysis and pose prompts
//!
//! Turns a wedding-photo reference image into either a single descriptive
//! style prompt or eight pose-variation prompts via the Gemini API. The
//! presentation layer (CLI or otherwise) drives the [`studio::Studio`]
//! orchestrator and renders its session and notification state.

pub mod ai;
pub mod error;
pub mod media;
pub mod models;
pub mod prompts;
pub mod session;
pub mod studio;

pub use error::{Error, Result};
