//! Device classification from screen size.
//!
//! Maps a screen rectangle to a device-class label using an ordered table.
//! Matching is exact: a long side of 667.5 does not match 667.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{DeviceClass, Orientation, ScreenRect};

/// Long side of a 4-inch phone, in points
pub const MAX_DIMENSION_4_INCH: f64 = 568.0;
/// Long side of a 4.7-inch phone, in points
pub const MAX_DIMENSION_4_7_INCH: f64 = 667.0;
/// Long side of a 5.5-inch phone, in points
pub const MAX_DIMENSION_5_5_INCH: f64 = 736.0;
/// Screen height above which the legacy table reports a tall phone
pub const LEGACY_TALL_PHONE_HEIGHT: f64 = 480.0;

/// How table entries are compared against a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Long side in the current orientation equals the entry exactly
    #[default]
    ExactLongSide,
    /// Raw height is strictly greater than the entry, whatever the orientation
    HeightAbove,
}

/// A single row of the classification table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceClassEntry {
    pub max_dimension: f64,
    pub label: String,
}

impl DeviceClassEntry {
    pub fn new(max_dimension: f64, label: impl Into<String>) -> Self {
        Self {
            max_dimension,
            label: label.into(),
        }
    }
}

/// Ordered classification table; first match wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceClassTable {
    pub entries: Vec<DeviceClassEntry>,
    #[serde(default)]
    pub match_policy: MatchPolicy,
    pub phone_fallback: String,
    pub tablet_label: String,
}

impl DeviceClassTable {
    /// Table keyed on exact long-side sizes (4", 4.7", 5.5" phones)
    pub fn modern() -> Self {
        Self {
            entries: vec![
                DeviceClassEntry::new(MAX_DIMENSION_4_INCH, "iOS-4-in"),
                DeviceClassEntry::new(MAX_DIMENSION_4_7_INCH, "iOS-4.7-in"),
                DeviceClassEntry::new(MAX_DIMENSION_5_5_INCH, "iOS-5.5-in"),
            ],
            match_policy: MatchPolicy::ExactLongSide,
            phone_fallback: "iOS-3.5-in".to_string(),
            tablet_label: "iOS-iPad".to_string(),
        }
    }

    /// Older table that only tells tall phones from short ones
    pub fn legacy() -> Self {
        Self {
            entries: vec![DeviceClassEntry::new(LEGACY_TALL_PHONE_HEIGHT, "iphone5")],
            match_policy: MatchPolicy::HeightAbove,
            phone_fallback: "iphone".to_string(),
            tablet_label: "ipad".to_string(),
        }
    }

    /// Classify a device. Total: every input yields a class.
    pub fn classify(&self, is_phone: bool, rect: ScreenRect) -> DeviceClass {
        if !is_phone {
            return DeviceClass::Tablet(self.tablet_label.clone());
        }

        let orientation = classify_orientation(rect);
        let matched = self
            .entries
            .iter()
            .find(|entry| self.entry_matches(entry, rect, orientation));

        match matched {
            Some(entry) => {
                debug!(
                    width = rect.width,
                    height = rect.height,
                    label = %entry.label,
                    "Matched device class"
                );
                DeviceClass::Phone(entry.label.clone())
            }
            None => {
                debug!(
                    width = rect.width,
                    height = rect.height,
                    fallback = %self.phone_fallback,
                    "No device class matched, using fallback"
                );
                DeviceClass::UnrecognizedPhone(self.phone_fallback.clone())
            }
        }
    }

    fn entry_matches(
        &self,
        entry: &DeviceClassEntry,
        rect: ScreenRect,
        orientation: Orientation,
    ) -> bool {
        match self.match_policy {
            MatchPolicy::ExactLongSide => {
                rect_matches_long_side(rect, entry.max_dimension, orientation)
            }
            MatchPolicy::HeightAbove => rect.height > entry.max_dimension,
        }
    }
}

impl Default for DeviceClassTable {
    fn default() -> Self {
        Self::modern()
    }
}

/// Landscape iff height < width; a square screen is portrait.
pub fn classify_orientation(rect: ScreenRect) -> Orientation {
    if rect.height < rect.width {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}

/// Whether the rect's long side in `orientation` is exactly `max_dimension`
pub fn rect_matches_long_side(rect: ScreenRect, max_dimension: f64, orientation: Orientation) -> bool {
    rect.long_side(orientation) == max_dimension
}

/// Classify with the modern table and return the filename label
pub fn classify_device(is_phone: bool, rect: ScreenRect) -> String {
    DeviceClassTable::modern()
        .classify(is_phone, rect)
        .label()
        .to_string()
}
