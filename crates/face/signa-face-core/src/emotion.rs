//! Keyword and punctuation sentiment scoring.
//!
//! Each whitespace token (lowercased, non-letters removed) adds 1 to every category whose
//! keyword list contains it. `!` adds to excited/surprised and `?` to thinking/confused.
//! Neutral starts with a small baseline so it wins when nothing matches, and categories
//! are visited in declaration order so earlier ones win exact ties.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Baseline score for neutral.
pub const NEUTRAL_BASELINE: f32 = 0.5;
/// Score at which intensity saturates to 1.
pub const INTENSITY_SATURATION: f32 = 3.0;

const EXCLAIM_EXCITED: f32 = 0.5;
const EXCLAIM_SURPRISED: f32 = 0.3;
const QUESTION_THINKING: f32 = 0.5;
const QUESTION_CONFUSED: f32 = 0.3;

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Sad,
    Surprised,
    Angry,
    Thinking,
    Excited,
    Confused,
}

impl Emotion {
    pub const COUNT: usize = 8;

    /// All emotions in scoring order (neutral first).
    pub const ALL: [Emotion; Emotion::COUNT] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprised,
        Emotion::Angry,
        Emotion::Thinking,
        Emotion::Excited,
        Emotion::Confused,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Surprised => "surprised",
            Self::Angry => "angry",
            Self::Thinking => "thinking",
            Self::Excited => "excited",
            Self::Confused => "confused",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|e| e.as_str() == s)
    }

    /// Keywords that score for this category. Neutral has none.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Neutral => &[],
            Self::Happy => &[
                "happy", "glad", "joy", "great", "love", "wonderful", "amazing", "good", "smile",
                "fun", "excellent", "fantastic", "delighted", "pleased", "nice", "beautiful",
                "thanks", "thank",
            ],
            Self::Sad => &[
                "sad", "sorry", "unhappy", "cry", "crying", "miss", "lonely", "depressed",
                "upset", "hurt", "tears", "grief", "unfortunately", "alone",
            ],
            Self::Surprised => &[
                "wow", "surprised", "surprise", "whoa", "omg", "unbelievable", "shocked",
                "unexpected", "really", "suddenly",
            ],
            Self::Angry => &[
                "angry", "mad", "hate", "furious", "annoyed", "frustrated", "rage", "terrible",
                "awful", "unfair",
            ],
            Self::Thinking => &[
                "think", "thinking", "wonder", "maybe", "perhaps", "consider", "hmm", "idea",
                "believe", "guess", "why", "what", "how",
            ],
            Self::Excited => &[
                "excited", "exciting", "thrilled", "party", "celebrate", "finally", "hooray",
                "awesome", "incredible", "yay",
            ],
            Self::Confused => &[
                "confused", "confusing", "huh", "unsure", "puzzled", "strange", "weird",
                "unclear", "lost",
            ],
        }
    }

    /// Head roll in radians at full intensity.
    pub fn head_tilt_bias(&self) -> f32 {
        match self {
            Self::Neutral => 0.0,
            Self::Happy => 0.05,
            Self::Sad => -0.12,
            Self::Surprised => 0.08,
            Self::Angry => -0.06,
            Self::Thinking => 0.15,
            Self::Excited => 0.06,
            Self::Confused => 0.2,
        }
    }
}

impl From<String> for Emotion {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or_else(|| {
            log::warn!("unknown emotion '{s}', using neutral");
            Self::Neutral
        })
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`analyze_emotion`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmotionAnalysis {
    pub emotion: Emotion,
    /// In [0, 1]; always 0 for neutral.
    pub intensity: f32,
    /// Raw score per emotion, indexed by [`Emotion::index`].
    pub scores: [f32; Emotion::COUNT],
}

impl EmotionAnalysis {
    #[inline]
    pub fn score(&self, emotion: Emotion) -> f32 {
        self.scores[emotion.index()]
    }

    /// Head roll for this analysis (bias scaled by intensity).
    #[inline]
    pub fn head_tilt(&self) -> f32 {
        self.emotion.head_tilt_bias() * self.intensity
    }
}

/// Score `text` and pick the dominant emotion. Never fails.
pub fn analyze_emotion(text: &str) -> EmotionAnalysis {
    let mut scores = [0.0f32; Emotion::COUNT];
    scores[Emotion::Neutral.index()] = NEUTRAL_BASELINE;

    let lower = text.to_lowercase();
    for raw in lower.split_whitespace() {
        let token: String = raw.chars().filter(|c| c.is_alphabetic()).collect();
        if token.is_empty() {
            continue;
        }
        for emotion in Emotion::ALL {
            if emotion.keywords().contains(&token.as_str()) {
                scores[emotion.index()] += 1.0;
            }
        }
    }

    for c in text.chars() {
        match c {
            '!' => {
                scores[Emotion::Excited.index()] += EXCLAIM_EXCITED;
                scores[Emotion::Surprised.index()] += EXCLAIM_SURPRISED;
            }
            '?' => {
                scores[Emotion::Thinking.index()] += QUESTION_THINKING;
                scores[Emotion::Confused.index()] += QUESTION_CONFUSED;
            }
            _ => {}
        }
    }

    let mut best = Emotion::Neutral;
    for emotion in Emotion::ALL {
        if scores[emotion.index()] > scores[best.index()] {
            best = emotion;
        }
    }

    let intensity = match best {
        Emotion::Neutral => 0.0,
        e => (scores[e.index()] / INTENSITY_SATURATION).min(1.0),
    };

    EmotionAnalysis {
        emotion: best,
        intensity,
        scores,
    }
}
