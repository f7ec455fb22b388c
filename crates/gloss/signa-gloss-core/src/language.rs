//! Sign-language variant selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language mode. Unknown names deserialize (and parse) to ASL.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LanguageMode {
    #[default]
    Asl,
    Isl,
}

impl LanguageMode {
    pub const ALL: [LanguageMode; 2] = [LanguageMode::Asl, LanguageMode::Isl];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asl => "asl",
            Self::Isl => "isl",
        }
    }

    /// Strict parse; `None` for names that are not a known variant.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asl" | "american" => Some(Self::Asl),
            "isl" | "indian" => Some(Self::Isl),
            _ => None,
        }
    }

    /// Lenient parse used at the configuration boundary: unknown modes fall back to ASL.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::warn!("unknown language mode '{s}', falling back to asl");
            Self::Asl
        })
    }
}

impl From<&str> for LanguageMode {
    fn from(s: &str) -> Self {
        Self::parse_or_default(s)
    }
}

impl From<String> for LanguageMode {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
