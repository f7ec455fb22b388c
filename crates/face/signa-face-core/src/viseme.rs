//! Mouth shapes and the character -> viseme table.

use std::fmt;

use serde::{Deserialize, Serialize};
use signa_pose_core::lerp_f32;

/// Viseme category.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VisemeName {
    #[default]
    Rest,
    /// m b p
    Bilabial,
    /// f v
    Labiodental,
    /// th
    Dental,
    /// t d n l
    Alveolar,
    /// s z c j
    Sibilant,
    /// k g q x
    Velar,
    R,
    W,
    A,
    E,
    I,
    O,
    U,
}

impl VisemeName {
    pub const ALL: [VisemeName; 14] = [
        VisemeName::Rest,
        VisemeName::Bilabial,
        VisemeName::Labiodental,
        VisemeName::Dental,
        VisemeName::Alveolar,
        VisemeName::Sibilant,
        VisemeName::Velar,
        VisemeName::R,
        VisemeName::W,
        VisemeName::A,
        VisemeName::E,
        VisemeName::I,
        VisemeName::O,
        VisemeName::U,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Bilabial => "bilabial",
            Self::Labiodental => "labiodental",
            Self::Dental => "dental",
            Self::Alveolar => "alveolar",
            Self::Sibilant => "sibilant",
            Self::Velar => "velar",
            Self::R => "r",
            Self::W => "w",
            Self::A => "a",
            Self::E => "e",
            Self::I => "i",
            Self::O => "o",
            Self::U => "u",
        }
    }

    #[inline]
    pub fn is_vowel(&self) -> bool {
        matches!(self, Self::A | Self::E | Self::I | Self::O | Self::U)
    }

    #[inline]
    pub fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }

    /// Mouth shape for this category.
    pub fn shape(&self) -> Viseme {
        let v = |mouth_open, mouth_width, lip_round, tongue_out, jaw_open, upper_lip_raise| Viseme {
            name: *self,
            mouth_open,
            mouth_width,
            lip_round,
            tongue_out,
            jaw_open,
            upper_lip_raise,
        };
        match self {
            Self::Rest => v(0.0, 0.5, 0.0, 0.0, 0.0, 0.0),
            Self::Bilabial => v(0.0, 0.45, 0.1, 0.0, 0.05, 0.0),
            Self::Labiodental => v(0.1, 0.5, 0.0, 0.0, 0.1, 0.4),
            Self::Dental => v(0.2, 0.5, 0.0, 0.6, 0.15, 0.1),
            Self::Alveolar => v(0.25, 0.5, 0.0, 0.2, 0.2, 0.1),
            Self::Sibilant => v(0.1, 0.65, 0.0, 0.0, 0.1, 0.2),
            Self::Velar => v(0.3, 0.5, 0.0, 0.0, 0.3, 0.1),
            Self::R => v(0.25, 0.4, 0.5, 0.0, 0.2, 0.1),
            Self::W => v(0.15, 0.25, 0.9, 0.0, 0.1, 0.0),
            Self::A => v(0.8, 0.6, 0.0, 0.0, 0.7, 0.2),
            Self::E => v(0.5, 0.75, 0.0, 0.0, 0.4, 0.2),
            Self::I => v(0.35, 0.8, 0.0, 0.0, 0.25, 0.15),
            Self::O => v(0.6, 0.35, 0.8, 0.0, 0.5, 0.1),
            Self::U => v(0.3, 0.25, 0.95, 0.0, 0.25, 0.0),
        }
    }
}

impl fmt::Display for VisemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Six mouth scalars plus the category they came from.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Viseme {
    pub name: VisemeName,
    pub mouth_open: f32,
    pub mouth_width: f32,
    pub lip_round: f32,
    pub tongue_out: f32,
    pub jaw_open: f32,
    pub upper_lip_raise: f32,
}

pub const REST_VISEME: Viseme = Viseme {
    name: VisemeName::Rest,
    mouth_open: 0.0,
    mouth_width: 0.5,
    lip_round: 0.0,
    tongue_out: 0.0,
    jaw_open: 0.0,
    upper_lip_raise: 0.0,
};

impl Default for Viseme {
    fn default() -> Self {
        REST_VISEME
    }
}

/// Fixed single-character map (lowercase input). The `th` digraph is handled by the
/// lip-sync generator.
pub fn char_to_viseme(c: char) -> VisemeName {
    match c {
        'm' | 'b' | 'p' => VisemeName::Bilabial,
        'f' | 'v' => VisemeName::Labiodental,
        't' | 'd' | 'n' | 'l' => VisemeName::Alveolar,
        's' | 'z' | 'c' | 'j' => VisemeName::Sibilant,
        'k' | 'g' | 'q' | 'x' => VisemeName::Velar,
        'r' => VisemeName::R,
        'w' => VisemeName::W,
        'a' => VisemeName::A,
        'e' => VisemeName::E,
        'i' | 'y' => VisemeName::I,
        'o' => VisemeName::O,
        'u' => VisemeName::U,
        _ => VisemeName::Rest,
    }
}

/// Interpolate every numeric field; `name` snaps to `b` once `t > 0.5`.
pub fn lerp_viseme(a: &Viseme, b: &Viseme, t: f32) -> Viseme {
    Viseme {
        name: if t > 0.5 { b.name } else { a.name },
        mouth_open: lerp_f32(a.mouth_open, b.mouth_open, t),
        mouth_width: lerp_f32(a.mouth_width, b.mouth_width, t),
        lip_round: lerp_f32(a.lip_round, b.lip_round, t),
        tongue_out: lerp_f32(a.tongue_out, b.tongue_out, t),
        jaw_open: lerp_f32(a.jaw_open, b.jaw_open, t),
        upper_lip_raise: lerp_f32(a.upper_lip_raise, b.upper_lip_raise, t),
    }
}
