//! Error types for configuration loading.
//!
//! Playback itself never fails; only parsing a configuration document can.

/// Errors raised while parsing or validating a [`Config`](crate::config::Config).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("Parse error: {reason}")]
    Parse { reason: String },

    /// A field is outside its allowed range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::InvalidValue { .. } => "validation",
        }
    }

    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
