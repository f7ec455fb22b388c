//! Timeline configuration.
//!
//! Every field has a serde default, so `{}` is a valid document. Durations are in
//! milliseconds at speed 1.0; the active speed multiplier divides all of them.

use serde::{Deserialize, Serialize};
use signa_gloss_core::{LanguageMode, ResolverConfig};

use crate::error::ConfigError;
use crate::state::{DisplayMode, ViewMode};

pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;

/// Tuning constants for advancement timing and the lip-sync clock.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    /// Hold for a motion keyframe without a configured duration.
    pub default_keyframe_ms: u32,
    /// Hold for a static (single-pose) sign.
    pub static_hold_ms: u32,
    /// Hold per fingerspelled letter.
    pub letter_ms: u32,
    /// Pause between gloss items.
    pub item_pause_ms: u32,
    /// Pause before a looping sign restarts.
    pub loop_pause_ms: u32,
    /// Restarts allowed per looping sign before moving on; `None` loops forever.
    pub loop_repeats: Option<u32>,
    /// Lip-sync sampler period.
    pub sampler_interval_ms: u32,
    /// Speaking rate at speed 1.0.
    pub words_per_minute: f64,
    /// Initial speed multiplier.
    pub speed: f32,
    /// Upper bound on timer firings processed by one `update`.
    pub max_firings_per_update: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            default_keyframe_ms: 500,
            static_hold_ms: 700,
            letter_ms: 600,
            item_pause_ms: 400,
            loop_pause_ms: 300,
            loop_repeats: Some(1),
            sampler_interval_ms: 50,
            words_per_minute: 150.0,
            speed: 1.0,
            max_firings_per_update: 10_000,
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("default_keyframe_ms", self.default_keyframe_ms),
            ("static_hold_ms", self.static_hold_ms),
            ("letter_ms", self.letter_ms),
            ("sampler_interval_ms", self.sampler_interval_ms),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::invalid(field, "must be > 0 ms"));
            }
        }
        if !(self.words_per_minute.is_finite() && self.words_per_minute > 0.0) {
            return Err(ConfigError::invalid(
                "words_per_minute",
                "must be a positive number",
            ));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(ConfigError::invalid(
                "speed",
                format!("must be within {MIN_SPEED}..={MAX_SPEED}"),
            ));
        }
        if self.max_firings_per_update == 0 {
            return Err(ConfigError::invalid("max_firings_per_update", "must be > 0"));
        }
        Ok(())
    }
}

/// Aggregated timeline configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub timeline: TimelineConfig,
    pub resolver: ResolverConfig,
    pub language: LanguageMode,
    pub display_mode: DisplayMode,
    pub view: ViewMode,
}

impl Config {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timeline.validate()
    }
}

/// Clamp a requested speed into the supported range; non-finite requests become 1.0.
pub fn clamp_speed(speed: f32) -> f32 {
    if !speed.is_finite() {
        log::warn!("non-finite speed {speed}, using 1.0");
        return 1.0;
    }
    let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
    if clamped != speed {
        log::warn!("speed {speed} clamped to {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = Config::from_json_str("{}").expect("defaults");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.timeline.loop_repeats, Some(1));
        assert_eq!(cfg.language, LanguageMode::Asl);
    }

    #[test]
    fn partial_documents_merge_with_defaults() {
        let cfg = Config::from_json_str(
            r#"{ "timeline": { "letter_ms": 300, "loop_repeats": null }, "language": "isl",
                 "display_mode": "spell", "resolver": { "stem_suffixes": true } }"#,
        )
        .expect("parse");
        assert_eq!(cfg.timeline.letter_ms, 300);
        assert_eq!(cfg.timeline.loop_repeats, None);
        assert_eq!(cfg.timeline.item_pause_ms, 400);
        assert_eq!(cfg.language, LanguageMode::Isl);
        assert_eq!(cfg.display_mode, DisplayMode::Spell);
        assert!(cfg.resolver.stem_suffixes);
        assert!(!cfg.resolver.drop_function_words);
    }

    #[test]
    fn unknown_language_falls_back() {
        let cfg = Config::from_json_str(r#"{ "language": "bsl" }"#).expect("parse");
        assert_eq!(cfg.language, LanguageMode::Asl);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = Config::from_json_str(r#"{ "timeline": { "speed": 3.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "speed"));
        let err = Config::from_json_str(r#"{ "timeline": { "letter_ms": 0 } }"#).unwrap_err();
        assert_eq!(err.category(), "validation");
        let err = Config::from_json_str(r#"{ "timeline": { "words_per_minute": -1 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(
            Config::from_json_str("{ nope").unwrap_err().category(),
            "parse"
        );
    }

    #[test]
    fn speed_clamping() {
        assert_eq!(clamp_speed(4.0), MAX_SPEED);
        assert_eq!(clamp_speed(0.1), MIN_SPEED);
        assert_eq!(clamp_speed(f32::NAN), 1.0);
        assert_eq!(clamp_speed(1.5), 1.5);
    }
}
