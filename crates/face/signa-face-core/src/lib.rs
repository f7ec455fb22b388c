//! Signa Face Core
//!
//! Secondary animation channels generated from text, independent of the hand pose:
//! a keyword/punctuation emotion scorer with facial-expression presets, and a
//! character -> viseme lip-sync generator with time sampling. All operations are total
//! over arbitrary strings.

pub mod emotion;
pub mod expression;
pub mod lipsync;
pub mod viseme;

pub use emotion::{analyze_emotion, Emotion, EmotionAnalysis};
pub use expression::{
    expression_preset, get_expression, lerp_expression, FacialExpression, NEUTRAL_EXPRESSION,
};
pub use lipsync::{
    generate_lip_sync, get_viseme_at_time, ms_per_char, LipSyncFrame, LipSyncTrack,
    DEFAULT_WORDS_PER_MINUTE,
};
pub use viseme::{char_to_viseme, lerp_viseme, Viseme, VisemeName, REST_VISEME};
