//! Error types for sign-table loading.
//!
//! Only loading is fallible. Resolution against a loaded table never errors.

/// Errors raised while parsing or validating a sign-table document.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TableError {
    /// The document is not valid JSON or does not match the schema.
    #[error("Parse error: {reason}")]
    Parse { reason: String },

    /// A pose references a handshape or letter that is not defined.
    #[error("Unknown handshape '{shape}' referenced by {context}")]
    UnknownShape { shape: String, context: String },

    /// Letter keys must be a single lowercase letter a-z.
    #[error("Invalid letter key '{key}'")]
    InvalidLetter { key: String },

    /// Word keys must be lowercase, single-spaced, and at most the resolver window long.
    #[error("Invalid word key '{key}': {reason}")]
    InvalidWordKey { key: String, reason: String },

    /// A joint value or wrist angle is NaN or infinite.
    #[error("Non-finite joint value in {context}")]
    NonFinite { context: String },

    /// Structural problem in a sign entry (pose count, durations).
    #[error("Sign '{key}' is malformed: {reason}")]
    MalformedSign { key: String, reason: String },

    /// The document declares a base table that differs from the one supplied.
    #[error("Table for {language} extends {expected} but was applied to {actual}")]
    BaseMismatch {
        language: String,
        expected: String,
        actual: String,
    },

    /// The document declares a base table but was loaded standalone.
    #[error("Table for {language} extends {base}; load it with SignTable::extend_from_json_str")]
    MissingBase { language: String, base: String },

    /// The alphabet does not cover every letter a-z.
    #[error("Alphabet incomplete, missing letters: {missing}")]
    IncompleteAlphabet { missing: String },
}

impl TableError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::UnknownShape { .. } | Self::MissingBase { .. } | Self::BaseMismatch { .. } => {
                "reference"
            }
            Self::InvalidLetter { .. }
            | Self::InvalidWordKey { .. }
            | Self::NonFinite { .. }
            | Self::MalformedSign { .. }
            | Self::IncompleteAlphabet { .. } => "validation",
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
