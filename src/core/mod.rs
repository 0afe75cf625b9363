//! # Core Module
//!
//! The screenshot naming engine.
//!
//! ## Modules
//! - `device` - Classifies screens into device classes and orientations
//! - `filename` - Composes filenames from ordered parts
//! - `target` - The automation target the namer reads from and captures through
//! - `namer` - Ties classification, layout and capture together
//! - `config` - JSON configuration for the namer

pub mod config;
pub mod device;
pub mod filename;
pub mod namer;
pub mod target;

// Re-export commonly used types
pub use config::NamerConfig;
pub use device::{DeviceClass, DeviceClassTable, Orientation, ScreenRect};
pub use filename::{compose_filename, FilenameLayout};
pub use namer::{DeviceSnapshot, ScreenshotNamer};
pub use target::{RecordingTarget, Target};
