//! In-memory target for testing and dry runs.

use super::Target;
use crate::core::device::ScreenRect;
use crate::error::CaptureError;
use std::sync::{Mutex, RwLock};

/// In-memory target
///
/// Reports a fixed model, rect and language list, and records the name of
/// every capture instead of taking a screenshot.
pub struct RecordingTarget {
    model: String,
    rect: ScreenRect,
    languages: Vec<String>,
    captures: RwLock<Vec<String>>,
    next_failure: Mutex<Option<CaptureError>>,
    language_lookups: RwLock<usize>,
}

impl RecordingTarget {
    /// Create a target reporting the given model and rect, with no languages
    pub fn new(model: impl Into<String>, rect: ScreenRect) -> Self {
        Self {
            model: model.into(),
            rect,
            languages: Vec::new(),
            captures: RwLock::new(Vec::new()),
            next_failure: Mutex::new(None),
            language_lookups: RwLock::new(0),
        }
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Make the next capture fail with `error`
    pub fn fail_next_capture(&self, error: CaptureError) {
        if let Ok(mut slot) = self.next_failure.lock() {
            *slot = Some(error);
        }
    }

    /// Names of successful captures, in order
    pub fn captures(&self) -> Vec<String> {
        self.captures
            .read()
            .map(|captures| captures.clone())
            .unwrap_or_default()
    }

    /// How many times the language list was read
    pub fn language_lookups(&self) -> usize {
        self.language_lookups.read().map(|n| *n).unwrap_or(0)
    }
}

impl Target for RecordingTarget {
    fn model(&self) -> String {
        self.model.clone()
    }

    fn rect(&self) -> ScreenRect {
        self.rect
    }

    fn preferred_languages(&self) -> Vec<String> {
        if let Ok(mut lookups) = self.language_lookups.write() {
            *lookups += 1;
        }
        self.languages.clone()
    }

    fn capture_screen_with_name(&self, name: &str) -> Result<(), CaptureError> {
        let failure = self
            .next_failure
            .lock()
            .map_err(|_| CaptureError::DeviceUnavailable("recording target poisoned".to_string()))?
            .take();
        if let Some(error) = failure {
            return Err(error);
        }

        let mut captures = self
            .captures
            .write()
            .map_err(|_| CaptureError::DeviceUnavailable("recording target poisoned".to_string()))?;
        captures.push(name.to_string());
        Ok(())
    }
}
