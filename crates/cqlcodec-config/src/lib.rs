//! Codec configuration loaded from TOML.
//!
//! ```toml
//! [timestamp]
//! offset = "+02:00"
//! ```

use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;
use time::{UtcOffset, format_description::BorrowedFormatItem, macros::format_description};

const OFFSET_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid timestamp offset '{value}': expected ±HH:MM or Z")]
    InvalidOffset { value: String },
}

///
/// CodecConfig
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CodecConfig {
    pub timestamp: TimestampConfig,
}

impl CodecConfig {
    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(source)?;

        raw.validate()
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    #[must_use]
    pub const fn with_timestamp_offset(mut self, offset: UtcOffset) -> Self {
        self.timestamp.offset = offset;
        self
    }
}

///
/// TimestampConfig
///
/// `offset` is the fixed UTC offset timestamps are rendered at, both in
/// query literals and in decoded row values.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimestampConfig {
    pub offset: UtcOffset,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            offset: UtcOffset::UTC,
        }
    }
}

/// Parse `±HH:MM` (or `Z`) into a fixed offset.
pub fn parse_offset(value: &str) -> Result<UtcOffset, ConfigError> {
    if value.eq_ignore_ascii_case("z") {
        return Ok(UtcOffset::UTC);
    }

    UtcOffset::parse(value, OFFSET_FORMAT).map_err(|_| ConfigError::InvalidOffset {
        value: value.to_string(),
    })
}

// serde shapes

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    timestamp: RawTimestampConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTimestampConfig {
    offset: Option<String>,
}

impl RawConfig {
    fn validate(self) -> Result<CodecConfig, ConfigError> {
        let offset = match self.timestamp.offset.as_deref() {
            Some(value) => parse_offset(value)?,
            None => UtcOffset::UTC,
        };

        Ok(CodecConfig {
            timestamp: TimestampConfig { offset },
        })
    }
}

///
/// TESTS
///
