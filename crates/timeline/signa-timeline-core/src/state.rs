//! Playback state and host-facing mode selectors.

use serde::{Deserialize, Serialize};

/// Top-level playback state. Position within the script is data, not state.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

impl PlaybackState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Signs (word signs with fingerspelling fallback) or spell (every word fingerspelled).
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Signs,
    Spell,
}

/// Render-adapter view. Carried through to frames; never affects playback.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Single hand close-up.
    #[default]
    Hand,
    /// Both hands; the adapter mirrors the active hand.
    Dual,
    /// Full avatar with face.
    Avatar,
}
