//! # Screenshot Namer
//!
//! Names UI-test screenshots after the device they were taken on.
//!
//! A screenshot called `"login"` taken on a 4.7" phone in portrait with an
//! English UI becomes `en-iOS-4.7-in-portrait-login`. The device class comes
//! from an ordered table of known screen sizes, the orientation from the
//! screen rectangle, and the language from the app under test.
//!
//! ## Architecture
//! - `core` - Classification, filename layout and the target abstraction
//! - `error` - Error types
//!
//! ## Example
//! ```rust
//! use screenshot_namer::core::{FilenameLayout, RecordingTarget, ScreenRect, ScreenshotNamer};
//!
//! let namer = ScreenshotNamer::builder()
//!     .layout(FilenameLayout::dashed())
//!     .build()?;
//! let target = RecordingTarget::new("iPhone Simulator", ScreenRect::new(375.0, 667.0))
//!     .with_languages(["en"]);
//!
//! let name = namer.capture_localized_screenshot(&target, "screen1")?;
//! assert_eq!(name, "en-iOS-4.7-in-portrait-screen1");
//! # Ok::<(), screenshot_namer::NamerError>(())
//! ```

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{NamerError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. `RUST_LOG` takes
/// precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
