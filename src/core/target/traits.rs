//! Target trait definition.

use crate::core::device::ScreenRect;
use crate::error::CaptureError;

/// The device or simulator screenshots are taken from
///
/// Implemented by whatever drives the automation session. The namer only
/// reads from it and asks it to capture.
pub trait Target: Send + Sync {
    /// Model string as reported by the device (e.g. "iPhone Simulator")
    fn model(&self) -> String;

    /// Current screen rectangle, in the current orientation
    fn rect(&self) -> ScreenRect;

    /// Preferred languages of the frontmost app, most preferred first
    fn preferred_languages(&self) -> Vec<String>;

    /// Save a screenshot under `name`
    ///
    /// Errors are returned to the caller of the namer untouched.
    fn capture_screen_with_name(&self, name: &str) -> Result<(), CaptureError>;
}
