//! File-backed configuration
//!
//! Any serde type can be stored as TOML or RON. The format is chosen from the
//! file extension, so a scene saved as `corridor.ron` loads back from the same
//! path without further hints.

use std::fmt;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

/// On-disk encodings understood by [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from `path`'s extension, ignoring case
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Decode `text` in this format
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string())),
            Self::Ron => ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Encode `value` as human-readable text in this format
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string())),
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "TOML"),
            Self::Ron => write!(f, "RON"),
        }
    }
}

/// Serde types that can be read from and written to a config file
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Read and decode the file at `path`
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;

        log::debug!("Loading {format} config from {}", path.display());
        Self::from_str_with_format(&text, format)
    }

    /// Decode in-memory `text`
    fn from_str_with_format(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        format.parse(text)
    }

    /// Encode and write to `path`, replacing any existing file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = format.render(self)?;

        log::debug!("Saving {format} config to {}", path.display());
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// Failures while reading, writing or validating configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The text is not valid for its format
    #[error("Parse error: {0}")]
    Parse(String),

    /// The value could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The path has no `.toml` or `.ron` extension
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value parsed fine but is outside its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
