//! Built-in ASL and ISL tables, compiled in and parsed once per process.

use once_cell::sync::Lazy;

use crate::language::LanguageMode;
use crate::table::{LetterPoses, SignTable, WordAnimations};

const ASL_JSON: &str = include_str!("../data/asl.json");
const ISL_JSON: &str = include_str!("../data/isl.json");

static ASL: Lazy<SignTable> = Lazy::new(|| {
    let table = SignTable::from_json_str(ASL_JSON).expect("built-in ASL table should parse");
    log::debug!(
        "loaded built-in asl table: {} letters, {} words",
        table.letters().len(),
        table.words().len()
    );
    table
});

static ISL: Lazy<SignTable> = Lazy::new(|| {
    let table = ASL
        .extend_from_json_str(ISL_JSON)
        .expect("built-in ISL table should parse");
    log::debug!(
        "loaded built-in isl table: {} letters, {} words",
        table.letters().len(),
        table.words().len()
    );
    table
});

/// Shared table for a language mode.
pub fn sign_table(mode: LanguageMode) -> &'static SignTable {
    match mode {
        LanguageMode::Asl => &ASL,
        LanguageMode::Isl => &ISL,
    }
}

/// Letter -> pose for every letter a-z.
#[inline]
pub fn get_letter_poses(mode: LanguageMode) -> &'static LetterPoses {
    sign_table(mode).letters()
}

/// Word or phrase -> animation for the curated vocabulary.
#[inline]
pub fn get_word_animations(mode: LanguageMode) -> &'static WordAnimations {
    sign_table(mode).words()
}
