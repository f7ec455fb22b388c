//! Signa Gloss Core
//!
//! Static letter/word sign tables for two sign-language variants (ASL, ISL) and the
//! greedy resolver that turns free text into an ordered script of gloss items
//! (word signs and letter-by-letter fingerspelling).
//!
//! Tables are authored as JSON documents (see `data/`) and validated on load; the
//! built-in ones are parsed once and shared process-wide.

pub mod builtin;
pub mod data;
pub mod error;
pub mod language;
pub mod resolver;
pub mod table;
pub mod vocabulary;

// Re-exports for consumers (timeline, adapters)
pub use builtin::{get_letter_poses, get_word_animations, sign_table};
pub use data::{SignAnimation, SignCategory, SignKind};
pub use error::TableError;
pub use language::LanguageMode;
pub use resolver::{
    gloss_notation, normalize_words, resolve_gloss, text_to_fingerspell, text_to_sign_gloss,
    FingerspellLetter, GlossKind, GlossSign, ResolverConfig, SignGlossItem, MAX_PHRASE_WORDS,
};
pub use table::{LetterPoses, SignTable, WordAnimations};
pub use vocabulary::{sign_vocabulary, VocabularyEntry};
