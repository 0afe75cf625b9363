//! Types for the device module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen size reported by the target, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The measurement compared against the classification table:
    /// height in portrait, width in landscape.
    pub fn long_side(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Portrait => self.height,
            Orientation::Landscape => self.width,
        }
    }
}

/// Screen orientation derived from a [`ScreenRect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Label used in filenames
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a device
///
/// An unrecognized phone still carries the fallback label so filenames stay
/// stable, but callers can tell it apart from a real table match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "label")]
pub enum DeviceClass {
    /// Any non-phone device
    Tablet(String),
    /// A phone whose screen matched a table entry
    Phone(String),
    /// A phone whose screen matched no table entry
    UnrecognizedPhone(String),
}

impl DeviceClass {
    /// Label used in filenames
    pub fn label(&self) -> &str {
        match self {
            DeviceClass::Tablet(label)
            | DeviceClass::Phone(label)
            | DeviceClass::UnrecognizedPhone(label) => label,
        }
    }

    /// False only when a phone fell through to the fallback label
    pub fn is_recognized(&self) -> bool {
        !matches!(self, DeviceClass::UnrecognizedPhone(_))
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
