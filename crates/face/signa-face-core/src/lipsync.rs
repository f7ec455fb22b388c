//! Text -> timed viseme frames.
//!
//! Base time per character is `60_000 / (wpm * 5)` ms (five characters per word). Vowels
//! are held 1.3x, consonants 0.8x, and rest characters (spaces, punctuation, unmapped
//! letters) 1x. Frames are contiguous: each starts where the previous one ends.

use serde::{Deserialize, Serialize};

use crate::viseme::{char_to_viseme, lerp_viseme, Viseme, VisemeName, REST_VISEME};

pub const DEFAULT_WORDS_PER_MINUTE: f64 = 150.0;
pub const CHARS_PER_WORD: f64 = 5.0;
pub const VOWEL_HOLD: f64 = 1.3;
pub const CONSONANT_HOLD: f64 = 0.8;

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LipSyncFrame {
    pub viseme: VisemeName,
    pub character: char,
    /// Offset from utterance start (ms).
    pub time: f64,
    /// Hold (ms).
    pub duration: f64,
}

impl LipSyncFrame {
    #[inline]
    pub fn end(&self) -> f64 {
        self.time + self.duration
    }
}

/// Milliseconds per character at `wpm`; invalid rates use the default.
pub fn ms_per_char(words_per_minute: f64) -> f64 {
    let wpm = if words_per_minute.is_finite() && words_per_minute > 0.0 {
        words_per_minute
    } else {
        DEFAULT_WORDS_PER_MINUTE
    };
    60_000.0 / (wpm * CHARS_PER_WORD)
}

/// Generate frames for `text`. Empty text yields no frames.
pub fn generate_lip_sync(text: &str, words_per_minute: f64) -> Vec<LipSyncFrame> {
    let base = ms_per_char(words_per_minute);
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    let mut frames = Vec::with_capacity(chars.len());
    let mut time = 0.0;

    for (i, &c) in chars.iter().enumerate() {
        let in_th = (c == 't' && chars.get(i + 1) == Some(&'h'))
            || (c == 'h' && i > 0 && chars[i - 1] == 't');
        let viseme = if in_th {
            VisemeName::Dental
        } else {
            char_to_viseme(c)
        };
        let factor = if viseme.is_vowel() {
            VOWEL_HOLD
        } else if viseme.is_rest() {
            1.0
        } else {
            CONSONANT_HOLD
        };
        let duration = base * factor;
        frames.push(LipSyncFrame {
            viseme,
            character: c,
            time,
            duration,
        });
        time += duration;
    }
    frames
}

/// Viseme of the last frame starting at or before `t`; rest before the first frame
/// or for an empty list.
pub fn get_viseme_at_time(frames: &[LipSyncFrame], t: f64) -> Viseme {
    frames
        .iter()
        .rev()
        .find(|f| f.time <= t)
        .map(|f| f.viseme.shape())
        .unwrap_or(REST_VISEME)
}

/// A generated utterance with its total length.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LipSyncTrack {
    frames: Vec<LipSyncFrame>,
    total_ms: f64,
}

impl LipSyncTrack {
    pub fn new(text: &str, words_per_minute: f64) -> Self {
        Self::from_frames(generate_lip_sync(text, words_per_minute))
    }

    pub fn from_frames(frames: Vec<LipSyncFrame>) -> Self {
        let total_ms = frames.last().map(LipSyncFrame::end).unwrap_or(0.0);
        Self { frames, total_ms }
    }

    #[inline]
    pub fn frames(&self) -> &[LipSyncFrame] {
        &self.frames
    }

    #[inline]
    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn is_finished(&self, t: f64) -> bool {
        t >= self.total_ms
    }

    /// Current viseme while speaking, rest once the utterance has ended.
    pub fn sample(&self, t: f64) -> Viseme {
        if self.is_finished(t) {
            return REST_VISEME;
        }
        get_viseme_at_time(&self.frames, t)
    }

    /// Like [`sample`](Self::sample), but cross-fades into the next frame during the last
    /// `blend_ms` of each frame.
    pub fn sample_blended(&self, t: f64, blend_ms: f64) -> Viseme {
        if self.is_finished(t) {
            return REST_VISEME;
        }
        let Some(i) = self.frames.iter().rposition(|f| f.time <= t) else {
            return REST_VISEME;
        };
        let frame = &self.frames[i];
        let current = frame.viseme.shape();
        let remaining = frame.end() - t;
        if blend_ms <= 0.0 || remaining >= blend_ms {
            return current;
        }
        let next = self
            .frames
            .get(i + 1)
            .map(|f| f.viseme.shape())
            .unwrap_or(REST_VISEME);
        let k = (1.0 - remaining / blend_ms).clamp(0.0, 1.0) as f32;
        lerp_viseme(&current, &next, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn durations_follow_speech_rhythm() {
        let frames = generate_lip_sync("ab ", 120.0);
        // 60000 / (120 * 5) = 100 ms per character.
        approx(frames[0].duration, 130.0, 1e-9);
        approx(frames[1].duration, 80.0, 1e-9);
        approx(frames[2].duration, 100.0, 1e-9);
        approx(frames[2].time, 210.0, 1e-9);
    }

    #[test]
    fn th_is_dental() {
        let frames = generate_lip_sync("The", 150.0);
        assert_eq!(frames[0].viseme, VisemeName::Dental);
        assert_eq!(frames[1].viseme, VisemeName::Dental);
        assert_eq!(frames[2].viseme, VisemeName::E);
        let t = generate_lip_sync("at", 150.0);
        assert_eq!(t[1].viseme, VisemeName::Alveolar);
    }

    #[test]
    fn invalid_rate_uses_default() {
        for wpm in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            approx(ms_per_char(wpm), 80.0, 1e-9);
        }
    }

    #[test]
    fn sample_rests_after_the_end() {
        let track = LipSyncTrack::new("a", 120.0);
        assert_eq!(track.sample(10.0).name, VisemeName::A);
        assert_eq!(track.sample(130.0), REST_VISEME);
        // The raw query holds the last frame.
        assert_eq!(get_viseme_at_time(track.frames(), 500.0).name, VisemeName::A);
    }

    #[test]
    fn blended_sampling_crossfades_at_frame_end() {
        let track = LipSyncTrack::new("ao", 120.0);
        let early = track.sample_blended(10.0, 40.0);
        assert_eq!(early, VisemeName::A.shape());
        // 120 ms into a 130 ms frame with 40 ms blending: 75% toward O.
        let late = track.sample_blended(120.0, 40.0);
        assert_eq!(late.name, VisemeName::O);
        let expected = lerp_viseme(&VisemeName::A.shape(), &VisemeName::O.shape(), 0.75);
        assert!((late.lip_round - expected.lip_round).abs() < 1e-5);
        assert_eq!(track.sample_blended(-5.0, 40.0), REST_VISEME);
    }
}
