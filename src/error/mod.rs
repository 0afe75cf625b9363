//! # Error Module
//!
//! Error types for the screenshot namer.
//!
//! ## Design Principles
//! - **Classification never fails** - every rectangle maps to a label
//! - **Capture errors pass through** - whatever the target reports reaches the caller as-is
//! - **Include context** - paths, patterns, screenshot names

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum NamerError {
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors reported by a [`Target`](crate::core::target::Target) when saving a screenshot
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("Failed to write screenshot {name}: {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Capture of {name} was rejected: {reason}")]
    Rejected { name: String, reason: String },
}

/// Errors that occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid phone model pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid filename layout: {0}")]
    InvalidLayout(String),
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, NamerError>;
