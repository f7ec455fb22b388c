//! Sign-table documents: JSON schema, resolution of handshape references, and validation.
//!
//! Document shape (see `data/asl.json`):
//! - `language`: "asl" | "isl"; optional `extends`: base language whose table is inherited.
//! - `handshapes`: named reusable hand configurations.
//! - `letters`: letter -> pose.
//! - `words`: lowercase word or phrase -> sign entry.
//!
//! A pose is either explicit (`thumb`..`pinky` as `[mcp_curl, mcp_spread, pip_curl, dip_curl]`,
//! optional `wrist` as `[pitch, yaw, roll]`) or a reference `{ "shape": name, "wrist"? }`
//! resolved against handshapes first, then letters. A reference's wrist replaces the
//! referenced pose's wrist.

use std::sync::Arc;

use hashbrown::HashMap;
use indexmap::IndexMap;
use serde::Deserialize;
use signa_pose_core::{FingerPose, HandPose, Wrist};

use crate::data::{SignAnimation, SignCategory, SignKind};
use crate::error::TableError;
use crate::language::LanguageMode;
use crate::resolver::MAX_PHRASE_WORDS;

/// Letter -> fingerspelling pose.
pub type LetterPoses = HashMap<char, HandPose>;

/// Word or phrase -> animation, in authored order.
pub type WordAnimations = IndexMap<String, Arc<SignAnimation>>;

/// A fully resolved, validated sign table for one language variant.
#[derive(Clone, Debug)]
pub struct SignTable {
    language: LanguageMode,
    handshapes: HashMap<String, HandPose>,
    letters: LetterPoses,
    words: WordAnimations,
    max_phrase_words: usize,
}

impl SignTable {
    /// Parse a standalone table document.
    pub fn from_json_str(s: &str) -> Result<Self, TableError> {
        let doc: TableDocument = serde_json::from_str(s)?;
        if let Some(base) = doc.extends {
            return Err(TableError::MissingBase {
                language: doc.language.to_string(),
                base: base.to_string(),
            });
        }
        let empty = SignTable::empty(doc.language);
        empty.merge_document(doc)
    }

    /// Parse a document that overrides or extends `self`. Entries in the document win.
    pub fn extend_from_json_str(&self, s: &str) -> Result<Self, TableError> {
        let doc: TableDocument = serde_json::from_str(s)?;
        if let Some(base) = doc.extends {
            if base != self.language {
                return Err(TableError::BaseMismatch {
                    language: doc.language.to_string(),
                    expected: base.to_string(),
                    actual: self.language.to_string(),
                });
            }
        }
        self.merge_document(doc)
    }

    fn empty(language: LanguageMode) -> Self {
        Self {
            language,
            handshapes: HashMap::new(),
            letters: HashMap::new(),
            words: IndexMap::new(),
            max_phrase_words: 0,
        }
    }

    fn merge_document(&self, doc: TableDocument) -> Result<Self, TableError> {
        let mut out = self.clone();
        out.language = doc.language;

        // Handshapes may reference earlier handshapes or base letters, never letters
        // from this document (those may themselves reference handshapes).
        for (name, raw) in &doc.handshapes {
            let pose = out.resolve_pose(raw, &format!("handshape '{name}'"))?;
            out.handshapes.insert(name.clone(), pose);
        }

        // Explicit letters first so that references between letters resolve regardless
        // of document order.
        let (explicit, referenced): (Vec<_>, Vec<_>) = doc
            .letters
            .iter()
            .partition(|(_, raw)| matches!(raw, RawPose::Explicit { .. }));
        for (key, raw) in explicit.into_iter().chain(referenced) {
            let letter = parse_letter_key(key)?;
            let pose = out.resolve_pose(raw, &format!("letter '{key}'"))?;
            out.letters.insert(letter, pose);
        }

        for (key, raw) in &doc.words {
            validate_word_key(key)?;
            let anim = out.build_sign(key, raw)?;
            out.words.insert(key.clone(), Arc::new(anim));
        }

        out.max_phrase_words = out
            .words
            .keys()
            .map(|k| k.split(' ').count())
            .max()
            .unwrap_or(0);
        Ok(out)
    }

    fn resolve_pose(&self, raw: &RawPose, context: &str) -> Result<HandPose, TableError> {
        let pose = match raw {
            RawPose::Shape { shape, wrist } => {
                let base = self
                    .handshapes
                    .get(shape.as_str())
                    .copied()
                    .or_else(|| {
                        let mut chars = shape.chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => self.letters.get(&c).copied(),
                            _ => None,
                        }
                    })
                    .ok_or_else(|| TableError::UnknownShape {
                        shape: shape.clone(),
                        context: context.to_string(),
                    })?;
                match wrist {
                    Some(w) => base.with_wrist(Wrist::from_array(*w)),
                    None => base,
                }
            }
            RawPose::Explicit {
                thumb,
                index,
                middle,
                ring,
                pinky,
                wrist,
            } => HandPose::new(
                FingerPose::from_array(*thumb),
                FingerPose::from_array(*index),
                FingerPose::from_array(*middle),
                FingerPose::from_array(*ring),
                FingerPose::from_array(*pinky),
                wrist.map(Wrist::from_array),
            ),
        };
        if !pose.is_finite() {
            return Err(TableError::NonFinite {
                context: context.to_string(),
            });
        }
        Ok(pose)
    }

    fn build_sign(&self, key: &str, raw: &RawSign) -> Result<SignAnimation, TableError> {
        let context = format!("word '{key}'");
        let poses = raw
            .poses
            .iter()
            .map(|p| self.resolve_pose(p, &context))
            .collect::<Result<Vec<_>, _>>()?;
        let anim = SignAnimation {
            gloss: raw
                .gloss
                .clone()
                .unwrap_or_else(|| key.to_uppercase().replace(' ', "-")),
            category: raw.category,
            description: raw.description.clone(),
            kind: raw.kind,
            poses,
            durations: raw.durations.clone(),
            looped: raw.looped,
        };
        anim.validate_basic()
            .map_err(|reason| TableError::MalformedSign {
                key: key.to_string(),
                reason,
            })?;
        Ok(anim)
    }

    #[inline]
    pub fn language(&self) -> LanguageMode {
        self.language
    }

    #[inline]
    pub fn letters(&self) -> &LetterPoses {
        &self.letters
    }

    #[inline]
    pub fn words(&self) -> &WordAnimations {
        &self.words
    }

    /// Case-insensitive letter lookup.
    pub fn letter_pose(&self, letter: char) -> Option<&HandPose> {
        self.letters.get(&letter).or_else(|| {
            let mut lower = letter.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) if l != letter => self.letters.get(&l),
                _ => None,
            }
        })
    }

    /// Word/phrase lookup. Callers pass lowercase, single-spaced keys.
    #[inline]
    pub fn word(&self, key: &str) -> Option<&Arc<SignAnimation>> {
        self.words.get(key)
    }

    /// Named handshape lookup.
    #[inline]
    pub fn handshape(&self, name: &str) -> Option<&HandPose> {
        self.handshapes.get(name)
    }

    /// Longest phrase key, in words.
    #[inline]
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Check that every letter a-z has a pose.
    pub fn validate_alphabet(&self) -> Result<(), TableError> {
        let missing: String = ('a'..='z')
            .filter(|c| !self.letters.contains_key(c))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TableError::IncompleteAlphabet { missing })
        }
    }
}

fn parse_letter_key(key: &str) -> Result<char, TableError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Ok(c),
        _ => Err(TableError::InvalidLetter {
            key: key.to_string(),
        }),
    }
}

fn validate_word_key(key: &str) -> Result<(), TableError> {
    let invalid = |reason: &str| TableError::InvalidWordKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };
    if key.is_empty() {
        return Err(invalid("empty key"));
    }
    if key.chars().any(|c| c.is_uppercase()) {
        return Err(invalid("keys must be lowercase"));
    }
    if !key.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(invalid("keys may only contain letters and spaces"));
    }
    let words: Vec<&str> = key.split_whitespace().collect();
    if words.join(" ") != key {
        return Err(invalid("words must be separated by single spaces"));
    }
    if words.len() > MAX_PHRASE_WORDS {
        return Err(invalid(&format!(
            "phrases are limited to {MAX_PHRASE_WORDS} words"
        )));
    }
    Ok(())
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct TableDocument {
    language: LanguageMode,
    #[serde(default)]
    extends: Option<LanguageMode>,
    #[serde(default)]
    handshapes: IndexMap<String, RawPose>,
    #[serde(default)]
    letters: IndexMap<String, RawPose>,
    #[serde(default)]
    words: IndexMap<String, RawSign>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPose {
    // Reference form must come first: explicit poses never carry `shape`.
    Shape {
        shape: String,
        #[serde(default)]
        wrist: Option<[f32; 3]>,
    },
    Explicit {
        thumb: [f32; 4],
        index: [f32; 4],
        middle: [f32; 4],
        ring: [f32; 4],
        pinky: [f32; 4],
        #[serde(default)]
        wrist: Option<[f32; 3]>,
    },
}

#[derive(Debug, Deserialize)]
struct RawSign {
    #[serde(default)]
    gloss: Option<String>,
    #[serde(default)]
    category: SignCategory,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    kind: SignKind,
    poses: Vec<RawPose>,
    #[serde(default)]
    durations: Option<Vec<u32>>,
    #[serde(default, rename = "loop")]
    looped: bool,
}
