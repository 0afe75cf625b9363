//! # Filename Module
//!
//! Composes screenshot filenames from ordered parts.
//!
//! ## Layouts
//! - `dashed` - `{language}-{device}-{orientation}-{name}`
//! - `underscored` - `{device}___{orientation}___{name}`
//! - `runner` - `{device}-{orientation}-{language}-{name}`
//!
//! Parts are joined as-is. A delimiter embedded in a part is not escaped.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One slot in a filename layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilenameField {
    Locale,
    Device,
    Orientation,
    Name,
}

/// Field order plus delimiter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenameLayout {
    pub fields: Vec<FilenameField>,
    pub delimiter: String,
}

impl FilenameLayout {
    /// Build a custom layout, rejecting empty or repeated fields
    pub fn new(
        fields: Vec<FilenameField>,
        delimiter: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let layout = Self {
            fields,
            delimiter: delimiter.into(),
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn dashed() -> Self {
        Self {
            fields: vec![
                FilenameField::Locale,
                FilenameField::Device,
                FilenameField::Orientation,
                FilenameField::Name,
            ],
            delimiter: "-".to_string(),
        }
    }

    pub fn underscored() -> Self {
        Self {
            fields: vec![
                FilenameField::Device,
                FilenameField::Orientation,
                FilenameField::Name,
            ],
            delimiter: "___".to_string(),
        }
    }

    pub fn runner() -> Self {
        Self {
            fields: vec![
                FilenameField::Device,
                FilenameField::Orientation,
                FilenameField::Locale,
                FilenameField::Name,
            ],
            delimiter: "-".to_string(),
        }
    }

    /// Whether the target's locale has to be looked up for this layout
    pub fn includes_locale(&self) -> bool {
        self.fields.contains(&FilenameField::Locale)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.is_empty() {
            return Err(ConfigError::InvalidLayout("layout has no fields".to_string()));
        }
        if self.delimiter.is_empty() {
            return Err(ConfigError::InvalidLayout("delimiter is empty".to_string()));
        }
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].contains(field) {
                return Err(ConfigError::InvalidLayout(format!(
                    "field {:?} appears more than once",
                    field
                )));
            }
        }
        Ok(())
    }

    /// Arrange field values in layout order
    pub fn parts(&self, values: &FieldValues<'_>) -> FilenameParts {
        let parts = self
            .fields
            .iter()
            .map(|field| match field {
                FilenameField::Locale => values.locale,
                FilenameField::Device => values.device,
                FilenameField::Orientation => values.orientation,
                FilenameField::Name => values.name,
            })
            .map(str::to_string)
            .collect();
        FilenameParts(parts)
    }

    pub fn compose(&self, values: &FieldValues<'_>) -> String {
        self.parts(values).join(&self.delimiter)
    }
}

impl Default for FilenameLayout {
    fn default() -> Self {
        Self::dashed()
    }
}

/// Values available for a single screenshot
#[derive(Debug, Clone, Copy)]
pub struct FieldValues<'a> {
    pub locale: &'a str,
    pub device: &'a str,
    pub orientation: &'a str,
    pub name: &'a str,
}

/// Ordered filename parts, before joining
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameParts(pub Vec<String>);

impl FilenameParts {
    pub fn join(&self, delimiter: &str) -> String {
        compose_filename(&self.0, delimiter)
    }
}

/// Join parts with a delimiter
pub fn compose_filename<S: AsRef<str>>(parts: &[S], delimiter: &str) -> String {
    parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<&str>>()
        .join(delimiter)
}
