//! Text -> gloss script.
//!
//! Text is lowercased, stripped of everything except ASCII letters and whitespace, and
//! split into words. The resolver then scans left to right, preferring the longest
//! phrase in the active table (3, then 2, then 1 words). Words with no sign become
//! fingerspelling items whose letters are looked up one by one; letters without a pose
//! are dropped. Resolution never fails.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use signa_pose_core::{HandPose, REST_POSE};

use crate::builtin::sign_table;
use crate::data::SignAnimation;
use crate::language::LanguageMode;
use crate::table::SignTable;

/// Longest phrase window the resolver tries, in words.
pub const MAX_PHRASE_WORDS: usize = 3;

/// English function words that carry no sign of their own.
pub const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "am", "be", "been", "being", "to", "of", "and",
    "but", "or", "for", "nor", "on", "at", "by", "with", "in", "it", "its", "this", "that",
    "these", "those", "do", "does", "did", "has", "have", "had", "will", "would", "shall",
    "should", "may", "might", "can", "could", "must",
];

/// Suffixes stripped (in order) when stemming is enabled.
const STEM_SUFFIXES: [&str; 4] = ["ing", "ed", "es", "s"];

/// Optional resolver behaviour. The default is plain greedy phrase matching.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Skip function words that are not part of a matched phrase.
    pub drop_function_words: bool,
    /// Retry unmatched single words with common suffixes removed before fingerspelling.
    pub stem_suffixes: bool,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GlossKind {
    Word,
    Fingerspell,
}

impl GlossKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Fingerspell => "fingerspell",
        }
    }
}

/// One fingerspelled letter (uppercase) and its pose.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FingerspellLetter {
    pub letter: char,
    pub pose: HandPose,
}

/// Payload of a gloss item.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GlossSign {
    Word { animation: Arc<SignAnimation> },
    Fingerspell { letters: Vec<FingerspellLetter> },
}

/// A resolved script unit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SignGlossItem {
    /// Display string, uppercase (`HELLO`, `THANK YOU`, `VERY`).
    pub value: String,
    /// Lowercase words consumed from the input.
    pub source: String,
    #[serde(flatten)]
    pub sign: GlossSign,
}

impl SignGlossItem {
    #[inline]
    pub fn kind(&self) -> GlossKind {
        match self.sign {
            GlossSign::Word { .. } => GlossKind::Word,
            GlossSign::Fingerspell { .. } => GlossKind::Fingerspell,
        }
    }

    #[inline]
    pub fn animation(&self) -> Option<&SignAnimation> {
        match &self.sign {
            GlossSign::Word { animation } => Some(animation),
            GlossSign::Fingerspell { .. } => None,
        }
    }

    #[inline]
    pub fn letters(&self) -> &[FingerspellLetter] {
        match &self.sign {
            GlossSign::Word { .. } => &[],
            GlossSign::Fingerspell { letters } => letters,
        }
    }

    /// Number of discrete positions: keyframes for a word, letters for fingerspelling.
    pub fn step_count(&self) -> usize {
        match &self.sign {
            GlossSign::Word { animation } => animation.keyframe_count(),
            GlossSign::Fingerspell { letters } => letters.len(),
        }
    }

    /// Pose at a keyframe or letter index, clamped; rest pose when the item has no steps.
    pub fn pose_at(&self, step: usize) -> &HandPose {
        match &self.sign {
            GlossSign::Word { animation } => animation.pose(step),
            GlossSign::Fingerspell { letters } => match letters.len() {
                0 => &REST_POSE,
                n => &letters[step.min(n - 1)].pose,
            },
        }
    }

    /// Text voiced by lip-sync at a step: the whole value for a word, the current letter
    /// for fingerspelling.
    pub fn speech_text(&self, step: usize) -> String {
        match &self.sign {
            GlossSign::Word { .. } => self.value.clone(),
            GlossSign::Fingerspell { letters } => letters
                .get(step)
                .map(|l| l.letter.to_string())
                .unwrap_or_default(),
        }
    }

    /// Gloss notation token: the sign's gloss for words, `#WORD` for fingerspelling.
    pub fn notation(&self) -> String {
        match &self.sign {
            GlossSign::Word { animation } => animation.gloss.clone(),
            GlossSign::Fingerspell { .. } => format!("#{}", self.value),
        }
    }
}

/// Lowercase, strip non-letters, split on whitespace.
pub fn normalize_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Resolve text against the built-in table for `mode` with default options.
pub fn text_to_sign_gloss(text: &str, mode: LanguageMode) -> Vec<SignGlossItem> {
    resolve_gloss(text, sign_table(mode), &ResolverConfig::default())
}

/// Every word as a fingerspelling item, ignoring word signs.
pub fn text_to_fingerspell(text: &str, mode: LanguageMode) -> Vec<SignGlossItem> {
    let table = sign_table(mode);
    normalize_words(text)
        .iter()
        .map(|w| fingerspell_item(w, table))
        .collect()
}

/// Greedy longest-phrase resolution against an arbitrary table.
pub fn resolve_gloss(text: &str, table: &SignTable, config: &ResolverConfig) -> Vec<SignGlossItem> {
    let words = normalize_words(text);
    let window = MAX_PHRASE_WORDS.min(table.max_phrase_words()).max(1);
    let mut items = Vec::with_capacity(words.len());
    let mut i = 0;

    'scan: while i < words.len() {
        let longest = window.min(words.len() - i);
        for n in (1..=longest).rev() {
            if n == 1 && config.drop_function_words && is_function_word(&words[i]) {
                i += 1;
                continue 'scan;
            }
            let key = words[i..i + n].join(" ");
            if let Some(animation) = table.word(&key) {
                items.push(word_item(&key, &key, animation.clone()));
                i += n;
                continue 'scan;
            }
        }

        let word = &words[i];
        let stemmed = if config.stem_suffixes {
            stem_lookup(word, table)
        } else {
            None
        };
        match stemmed {
            Some((base, animation)) => items.push(word_item(&base, word, animation)),
            None => items.push(fingerspell_item(word, table)),
        }
        i += 1;
    }
    items
}

/// Space-joined gloss notation, e.g. `THANK-YOU #VERY #MUCH`.
pub fn gloss_notation(items: &[SignGlossItem]) -> String {
    items
        .iter()
        .map(SignGlossItem::notation)
        .collect::<Vec<_>>()
        .join(" ")
}

#[inline]
fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(&word)
}

fn stem_lookup(word: &str, table: &SignTable) -> Option<(String, Arc<SignAnimation>)> {
    STEM_SUFFIXES.iter().find_map(|suffix| {
        let base = word.strip_suffix(suffix)?;
        if base.len() < 2 {
            return None;
        }
        table
            .word(base)
            .map(|animation| (base.to_owned(), animation.clone()))
    })
}

fn word_item(key: &str, source: &str, animation: Arc<SignAnimation>) -> SignGlossItem {
    SignGlossItem {
        value: key.to_uppercase(),
        source: source.to_owned(),
        sign: GlossSign::Word { animation },
    }
}

fn fingerspell_item(word: &str, table: &SignTable) -> SignGlossItem {
    let letters = word
        .chars()
        .filter_map(|c| {
            table.letter_pose(c).map(|pose| FingerspellLetter {
                letter: c.to_ascii_uppercase(),
                pose: *pose,
            })
        })
        .collect();
    SignGlossItem {
        value: word.to_uppercase(),
        source: word.to_owned(),
        sign: GlossSign::Fingerspell { letters },
    }
}
