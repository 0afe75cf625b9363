//! Screenshot naming and capture.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::config::NamerConfig;
use crate::core::device::{
    classify_orientation, DeviceClass, DeviceClassTable, Orientation, ScreenRect,
};
use crate::core::filename::{FieldValues, FilenameLayout};
use crate::core::target::Target;
use crate::error::{CaptureError, ConfigError};

/// Substituted when the target reports no usable language
pub const UNKNOWN_LOCALE: &str = "unknown";

/// Device state used to name a screenshot without a live target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub model: String,
    pub rect: ScreenRect,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl DeviceSnapshot {
    pub fn new(model: impl Into<String>, rect: ScreenRect) -> Self {
        Self {
            model: model.into(),
            rect,
            languages: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }
}

/// Classification of a single screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub device: DeviceClass,
    pub orientation: Orientation,
}

/// Builder for [`ScreenshotNamer`]
pub struct ScreenshotNamerBuilder {
    config: NamerConfig,
}

impl ScreenshotNamerBuilder {
    /// Create a builder with the default table, layout and phone pattern
    pub fn new() -> Self {
        Self {
            config: NamerConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: NamerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the classification table
    pub fn table(mut self, table: DeviceClassTable) -> Self {
        self.config.table = table;
        self
    }

    /// Set the filename layout
    pub fn layout(mut self, layout: FilenameLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Set the regex a model string must match to count as a phone
    pub fn phone_model_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.phone_model_pattern = pattern.into();
        self
    }

    /// Build the namer, validating the layout and compiling the phone pattern
    pub fn build(self) -> Result<ScreenshotNamer, ConfigError> {
        self.config.layout.validate()?;

        let phone_pattern = Regex::new(&self.config.phone_model_pattern).map_err(|e| {
            ConfigError::InvalidPattern {
                pattern: self.config.phone_model_pattern.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(ScreenshotNamer {
            table: self.config.table,
            layout: self.config.layout,
            phone_pattern,
        })
    }
}

impl Default for ScreenshotNamerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Names screenshots after the device they were taken on
pub struct ScreenshotNamer {
    table: DeviceClassTable,
    layout: FilenameLayout,
    phone_pattern: Regex,
}

impl ScreenshotNamer {
    /// Create a new namer builder
    pub fn builder() -> ScreenshotNamerBuilder {
        ScreenshotNamerBuilder::new()
    }

    pub fn table(&self) -> &DeviceClassTable {
        &self.table
    }

    pub fn layout(&self) -> &FilenameLayout {
        &self.layout
    }

    pub fn is_phone(&self, model: &str) -> bool {
        self.phone_pattern.is_match(model)
    }

    pub fn classify(&self, model: &str, rect: ScreenRect) -> Classification {
        Classification {
            device: self.table.classify(self.is_phone(model), rect),
            orientation: classify_orientation(rect),
        }
    }

    /// Compose the filename for `name` without capturing anything
    pub fn filename_for(&self, name: &str, snapshot: &DeviceSnapshot) -> String {
        let classification = self.classify(&snapshot.model, snapshot.rect);
        let locale = if self.layout.includes_locale() {
            resolve_locale(&snapshot.languages)
        } else {
            String::new()
        };
        self.compose(name, &classification, &locale)
    }

    /// Name a screenshot after the target's current state and capture it
    ///
    /// Issues exactly one capture request. A failed capture is returned
    /// unchanged and is not retried. Returns the name the screenshot was
    /// saved under.
    pub fn capture_localized_screenshot<T>(
        &self,
        target: &T,
        name: &str,
    ) -> Result<String, CaptureError>
    where
        T: Target + ?Sized,
    {
        let model = target.model();
        let rect = target.rect();
        let classification = self.classify(&model, rect);

        let locale = if self.layout.includes_locale() {
            resolve_locale(&target.preferred_languages())
        } else {
            String::new()
        };

        let filename = self.compose(name, &classification, &locale);

        target.capture_screen_with_name(&filename)?;

        info!(
            model = %model,
            device = %classification.device,
            orientation = %classification.orientation,
            recognized = classification.device.is_recognized(),
            filename = %filename,
            "Captured screenshot"
        );

        Ok(filename)
    }

    fn compose(&self, name: &str, classification: &Classification, locale: &str) -> String {
        self.layout.compose(&FieldValues {
            locale,
            device: classification.device.label(),
            orientation: classification.orientation.label(),
            name,
        })
    }
}

/// First preferred language, or [`UNKNOWN_LOCALE`] if missing or blank
pub fn resolve_locale(languages: &[String]) -> String {
    match languages.first().map(|l| l.trim()) {
        Some(language) if !language.is_empty() => language.to_string(),
        _ => {
            warn!("Target reported no preferred language, using placeholder");
            UNKNOWN_LOCALE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::RecordingTarget;

    fn namer(layout: FilenameLayout) -> ScreenshotNamer {
        ScreenshotNamer::builder().layout(layout).build().unwrap()
    }

    #[test]
    fn captures_once_with_dashed_name() {
        let target = RecordingTarget::new("iPhone Simulator", ScreenRect::new(375.0, 667.0))
            .with_languages(["en"]);

        let filename = namer(FilenameLayout::dashed())
            .capture_localized_screenshot(&target, "screen1")
            .unwrap();

        assert_eq!(filename, "en-iOS-4.7-in-portrait-screen1");
        assert_eq!(target.captures(), vec!["en-iOS-4.7-in-portrait-screen1"]);
    }

    #[test]
    fn tablet_underscored_skips_locale_lookup() {
        let target = RecordingTarget::new("iPad Simulator", ScreenRect::new(1024.0, 768.0))
            .with_languages(["de"]);

        let filename = namer(FilenameLayout::underscored())
            .capture_localized_screenshot(&target, "login")
            .unwrap();

        assert_eq!(filename, "iOS-iPad___landscape___login");
        assert_eq!(target.language_lookups(), 0);
    }

    #[test]
    fn unknown_size_uses_fallback_label() {
        let target = RecordingTarget::new("iPhone", ScreenRect::new(320.0, 480.0))
            .with_languages(["fr"]);

        let filename = namer(FilenameLayout::dashed())
            .capture_localized_screenshot(&target, "x")
            .unwrap();

        assert_eq!(filename, "fr-iOS-3.5-in-portrait-x");
    }

    #[test]
    fn capture_failure_propagates_without_retry() {
        let target = RecordingTarget::new("iPhone", ScreenRect::new(375.0, 667.0));
        target.fail_next_capture(CaptureError::Rejected {
            name: "x".to_string(),
            reason: "trace not running".to_string(),
        });

        let result = namer(FilenameLayout::underscored()).capture_localized_screenshot(&target, "x");

        match result {
            Err(CaptureError::Rejected { reason, .. }) => assert_eq!(reason, "trace not running"),
            other => panic!("expected rejected capture, got {:?}", other),
        }
        assert!(target.captures().is_empty());
    }

    #[test]
    fn missing_language_becomes_placeholder() {
        let target = RecordingTarget::new("iPhone", ScreenRect::new(375.0, 667.0));

        let filename = namer(FilenameLayout::dashed())
            .capture_localized_screenshot(&target, "home")
            .unwrap();

        assert_eq!(filename, "unknown-iOS-4.7-in-portrait-home");
    }

    #[test]
    fn blank_language_becomes_placeholder() {
        assert_eq!(resolve_locale(&["  ".to_string()]), UNKNOWN_LOCALE);
        assert_eq!(resolve_locale(&[]), UNKNOWN_LOCALE);
        assert_eq!(resolve_locale(&["ja".to_string(), "en".to_string()]), "ja");
    }

    #[test]
    fn works_through_trait_object() {
        let target: Box<dyn Target> =
            Box::new(RecordingTarget::new("iPhone", ScreenRect::new(414.0, 736.0)));

        let filename = namer(FilenameLayout::underscored())
            .capture_localized_screenshot(target.as_ref(), "feed")
            .unwrap();

        assert_eq!(filename, "iOS-5.5-in___portrait___feed");
    }

    #[test]
    fn legacy_runner_configuration() {
        let namer = ScreenshotNamer::builder()
            .table(DeviceClassTable::legacy())
            .layout(FilenameLayout::runner())
            .build()
            .unwrap();
        let snapshot =
            DeviceSnapshot::new("iPhone Simulator", ScreenRect::new(320.0, 568.0)).with_language("en");

        assert_eq!(namer.filename_for("screen1", &snapshot), "iphone5-portrait-en-screen1");
    }

    #[test]
    fn custom_phone_pattern() {
        let namer = ScreenshotNamer::builder()
            .phone_model_pattern("(?i)^iphone")
            .build()
            .unwrap();
        assert!(namer.is_phone("iphone simulator"));
        assert!(!namer.is_phone("iPad"));
    }

    #[test]
    fn invalid_phone_pattern_fails_to_build() {
        let result = ScreenshotNamer::builder().phone_model_pattern("iPhone(").build();
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn classification_reports_unrecognized_sizes() {
        let namer = namer(FilenameLayout::dashed());
        let classification = namer.classify("iPhone", ScreenRect::new(375.0, 812.0));
        assert!(!classification.device.is_recognized());
        assert_eq!(classification.orientation, Orientation::Portrait);
    }

    #[test]
    fn default_phone_pattern_matches_simulator_models() {
        let namer = namer(FilenameLayout::dashed());
        assert!(namer.is_phone("iPhone Simulator"));
        assert!(!namer.is_phone("iPad Air"));
    }
}
