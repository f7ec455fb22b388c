//! Vocabulary listing for host UIs.

use serde::{Deserialize, Serialize};

use crate::builtin::sign_table;
use crate::data::{SignCategory, SignKind};
use crate::language::LanguageMode;
use crate::table::SignTable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VocabularyEntry {
    pub key: String,
    pub gloss: String,
    pub category: SignCategory,
    pub description: String,
    pub kind: SignKind,
    pub keyframes: usize,
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl SignTable {
    /// Every word entry, in authored order.
    pub fn vocabulary(&self) -> Vec<VocabularyEntry> {
        self.words()
            .iter()
            .map(|(key, anim)| VocabularyEntry {
                key: key.clone(),
                gloss: anim.gloss.clone(),
                category: anim.category,
                description: anim.description.clone(),
                kind: anim.kind,
                keyframes: anim.keyframe_count(),
                looped: anim.looped,
            })
            .collect()
    }
}

/// Vocabulary of the built-in table for `mode`.
pub fn sign_vocabulary(mode: LanguageMode) -> Vec<VocabularyEntry> {
    sign_table(mode).vocabulary()
}
