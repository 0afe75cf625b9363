//! # Namer Module
//!
//! Ties classification and filename layout together.
//!
//! ## Flow
//! 1. Read model, rect and (if the layout needs it) language from the target
//! 2. Classify device and orientation
//! 3. Compose the filename
//! 4. Ask the target to capture once under that name

mod capture;

pub use capture::{
    resolve_locale, Classification, DeviceSnapshot, ScreenshotNamer,
    ScreenshotNamerBuilder, UNKNOWN_LOCALE,
};
