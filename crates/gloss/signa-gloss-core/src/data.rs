//! Canonical sign animation model.

use serde::{Deserialize, Serialize};
use signa_pose_core::{HandPose, REST_POSE};

/// Held handshape vs. keyframed movement.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SignKind {
    Static,
    Motion,
}

/// Coarse lexical category, carried for vocabulary listings.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SignCategory {
    Greeting,
    Expression,
    Phrase,
    Pronoun,
    Verb,
    Noun,
    Adjective,
    Adverb,
    Emotion,
    Time,
    Response,
    Question,
    Quantity,
    #[default]
    Other,
}

impl SignCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Expression => "expression",
            Self::Phrase => "phrase",
            Self::Pronoun => "pronoun",
            Self::Verb => "verb",
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Emotion => "emotion",
            Self::Time => "time",
            Self::Response => "response",
            Self::Question => "question",
            Self::Quantity => "quantity",
            Self::Other => "other",
        }
    }
}

/// A named, categorized animation unit for one word or phrase.
///
/// Invariants (checked by the table loader): a static sign has exactly one pose,
/// a motion sign at least two, and `durations`, when present, has one entry per pose.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SignAnimation {
    /// Gloss label, e.g. `THANK-YOU`.
    pub gloss: String,
    #[serde(default)]
    pub category: SignCategory,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SignKind,
    pub poses: Vec<HandPose>,
    /// Hold time per keyframe in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durations: Option<Vec<u32>>,
    #[serde(default, rename = "loop")]
    pub looped: bool,
}

impl SignAnimation {
    /// Hold time used when a keyframe has no configured duration.
    pub const DEFAULT_KEYFRAME_MS: u32 = 500;

    #[inline]
    pub fn is_motion(&self) -> bool {
        matches!(self.kind, SignKind::Motion)
    }

    #[inline]
    pub fn keyframe_count(&self) -> usize {
        self.poses.len()
    }

    /// Keyframe pose, clamped to the last keyframe; rest pose for an empty sign.
    pub fn pose(&self, keyframe: usize) -> &HandPose {
        match self.poses.len() {
            0 => &REST_POSE,
            n => &self.poses[keyframe.min(n - 1)],
        }
    }

    /// Configured hold for a keyframe, if any.
    #[inline]
    pub fn duration_ms(&self, keyframe: usize) -> Option<u32> {
        self.durations.as_ref().and_then(|d| d.get(keyframe).copied())
    }

    /// Hold for a keyframe with a caller-supplied fallback.
    #[inline]
    pub fn duration_or(&self, keyframe: usize, fallback_ms: u32) -> u32 {
        self.duration_ms(keyframe).unwrap_or(fallback_ms)
    }

    /// Sum of all keyframe holds.
    pub fn total_duration_ms(&self, fallback_ms: u32) -> u32 {
        (0..self.poses.len())
            .map(|k| self.duration_or(k, fallback_ms))
            .sum()
    }

    /// Validate structural invariants.
    pub fn validate_basic(&self) -> Result<(), String> {
        match self.kind {
            SignKind::Static if self.poses.len() != 1 => {
                return Err(format!(
                    "static sign needs exactly one pose, found {}",
                    self.poses.len()
                ));
            }
            SignKind::Motion if self.poses.len() < 2 => {
                return Err(format!(
                    "motion sign needs at least two keyframes, found {}",
                    self.poses.len()
                ));
            }
            _ => {}
        }
        if let Some(d) = &self.durations {
            if d.len() != self.poses.len() {
                return Err(format!(
                    "durations has {} entries for {} keyframes",
                    d.len(),
                    self.poses.len()
                ));
            }
            if d.iter().any(|ms| *ms == 0) {
                return Err("durations must be > 0 ms".into());
            }
        }
        if self.poses.iter().any(|p| !p.is_finite()) {
            return Err("pose contains a non-finite value".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(durations: Option<Vec<u32>>) -> SignAnimation {
        SignAnimation {
            gloss: "TEST".into(),
            category: SignCategory::Other,
            description: String::new(),
            kind: SignKind::Motion,
            poses: vec![REST_POSE, REST_POSE, REST_POSE],
            durations,
            looped: false,
        }
    }

    #[test]
    fn missing_durations_fall_back() {
        let a = motion(None);
        assert_eq!(a.duration_or(1, SignAnimation::DEFAULT_KEYFRAME_MS), 500);
        assert_eq!(a.total_duration_ms(500), 1500);
        assert!(a.validate_basic().is_ok());
    }

    #[test]
    fn mismatched_durations_are_rejected() {
        assert!(motion(Some(vec![100, 200])).validate_basic().is_err());
        assert!(motion(Some(vec![100, 0, 100])).validate_basic().is_err());
        assert!(motion(Some(vec![100, 200, 300])).validate_basic().is_ok());
    }

    #[test]
    fn pose_lookup_clamps() {
        let a = motion(Some(vec![1, 2, 3]));
        assert_eq!(a.pose(99), &REST_POSE);
    }
}
