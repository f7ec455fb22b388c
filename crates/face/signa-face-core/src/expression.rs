//! Facial expression parameter vector, emotion presets, and blending.

use serde::{Deserialize, Serialize};
use signa_pose_core::lerp_f32;

use crate::emotion::Emotion;

/// Flat vector of facial parameters plus the emotion it expresses.
///
/// Eye openness and pupil size are in [0, 1] with 1 = fully open; gaze is [-1, 1];
/// brow height/angle are signed offsets from rest; mouth and cheek values are [0, 1].
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FacialExpression {
    pub eye_open_left: f32,
    pub eye_open_right: f32,
    pub eye_squint: f32,
    pub gaze_x: f32,
    pub gaze_y: f32,
    pub pupil_size: f32,
    pub brow_height_left: f32,
    pub brow_height_right: f32,
    pub brow_angle_left: f32,
    pub brow_angle_right: f32,
    pub mouth_smile: f32,
    pub mouth_open: f32,
    pub mouth_width: f32,
    pub jaw_open: f32,
    pub cheek_puff: f32,
    pub nose_wrinkle: f32,
    pub blush: f32,
    pub emotion: Emotion,
    pub intensity: f32,
}

pub const NEUTRAL_EXPRESSION: FacialExpression = FacialExpression {
    eye_open_left: 1.0,
    eye_open_right: 1.0,
    eye_squint: 0.0,
    gaze_x: 0.0,
    gaze_y: 0.0,
    pupil_size: 0.5,
    brow_height_left: 0.0,
    brow_height_right: 0.0,
    brow_angle_left: 0.0,
    brow_angle_right: 0.0,
    mouth_smile: 0.0,
    mouth_open: 0.0,
    mouth_width: 0.5,
    jaw_open: 0.0,
    cheek_puff: 0.0,
    nose_wrinkle: 0.0,
    blush: 0.0,
    emotion: Emotion::Neutral,
    intensity: 0.0,
};

impl Default for FacialExpression {
    fn default() -> Self {
        NEUTRAL_EXPRESSION
    }
}

impl FacialExpression {
    /// Combine every numeric field of `self` and `other`; tag fields come from `self`.
    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            eye_open_left: f(self.eye_open_left, other.eye_open_left),
            eye_open_right: f(self.eye_open_right, other.eye_open_right),
            eye_squint: f(self.eye_squint, other.eye_squint),
            gaze_x: f(self.gaze_x, other.gaze_x),
            gaze_y: f(self.gaze_y, other.gaze_y),
            pupil_size: f(self.pupil_size, other.pupil_size),
            brow_height_left: f(self.brow_height_left, other.brow_height_left),
            brow_height_right: f(self.brow_height_right, other.brow_height_right),
            brow_angle_left: f(self.brow_angle_left, other.brow_angle_left),
            brow_angle_right: f(self.brow_angle_right, other.brow_angle_right),
            mouth_smile: f(self.mouth_smile, other.mouth_smile),
            mouth_open: f(self.mouth_open, other.mouth_open),
            mouth_width: f(self.mouth_width, other.mouth_width),
            jaw_open: f(self.jaw_open, other.jaw_open),
            cheek_puff: f(self.cheek_puff, other.cheek_puff),
            nose_wrinkle: f(self.nose_wrinkle, other.nose_wrinkle),
            blush: f(self.blush, other.blush),
            emotion: self.emotion,
            intensity: f(self.intensity, other.intensity),
        }
    }

    /// Numeric fields in declaration order (excluding the emotion tag and intensity).
    pub fn to_array(&self) -> [f32; 17] {
        [
            self.eye_open_left,
            self.eye_open_right,
            self.eye_squint,
            self.gaze_x,
            self.gaze_y,
            self.pupil_size,
            self.brow_height_left,
            self.brow_height_right,
            self.brow_angle_left,
            self.brow_angle_right,
            self.mouth_smile,
            self.mouth_open,
            self.mouth_width,
            self.jaw_open,
            self.cheek_puff,
            self.nose_wrinkle,
            self.blush,
        ]
    }
}

/// Full-intensity preset for an emotion.
pub fn expression_preset(emotion: Emotion) -> FacialExpression {
    let base = FacialExpression {
        emotion,
        intensity: 1.0,
        ..NEUTRAL_EXPRESSION
    };
    match emotion {
        Emotion::Neutral => NEUTRAL_EXPRESSION,
        Emotion::Happy => FacialExpression {
            eye_open_left: 0.85,
            eye_open_right: 0.85,
            eye_squint: 0.35,
            pupil_size: 0.6,
            brow_height_left: 0.15,
            brow_height_right: 0.15,
            mouth_smile: 0.9,
            mouth_open: 0.2,
            mouth_width: 0.75,
            jaw_open: 0.1,
            cheek_puff: 0.2,
            blush: 0.3,
            ..base
        },
        Emotion::Sad => FacialExpression {
            eye_open_left: 0.6,
            eye_open_right: 0.6,
            gaze_y: -0.4,
            pupil_size: 0.45,
            brow_height_left: 0.1,
            brow_height_right: 0.1,
            brow_angle_left: 0.5,
            brow_angle_right: 0.5,
            mouth_smile: -0.6,
            mouth_width: 0.4,
            ..base
        },
        Emotion::Surprised => FacialExpression {
            eye_open_left: 1.0,
            eye_open_right: 1.0,
            pupil_size: 0.8,
            brow_height_left: 0.7,
            brow_height_right: 0.7,
            mouth_open: 0.7,
            mouth_width: 0.4,
            jaw_open: 0.6,
            ..base
        },
        Emotion::Angry => FacialExpression {
            eye_open_left: 0.7,
            eye_open_right: 0.7,
            eye_squint: 0.5,
            pupil_size: 0.35,
            brow_height_left: -0.4,
            brow_height_right: -0.4,
            brow_angle_left: -0.6,
            brow_angle_right: -0.6,
            mouth_smile: -0.4,
            mouth_width: 0.55,
            nose_wrinkle: 0.6,
            blush: 0.2,
            ..base
        },
        Emotion::Thinking => FacialExpression {
            eye_open_left: 0.8,
            eye_open_right: 0.9,
            eye_squint: 0.2,
            gaze_x: 0.4,
            gaze_y: 0.5,
            brow_height_left: 0.35,
            brow_height_right: -0.05,
            brow_angle_left: 0.2,
            mouth_smile: -0.1,
            mouth_width: 0.4,
            ..base
        },
        Emotion::Excited => FacialExpression {
            eye_open_left: 1.0,
            eye_open_right: 1.0,
            pupil_size: 0.75,
            brow_height_left: 0.5,
            brow_height_right: 0.5,
            mouth_smile: 1.0,
            mouth_open: 0.6,
            mouth_width: 0.8,
            jaw_open: 0.45,
            blush: 0.35,
            ..base
        },
        Emotion::Confused => FacialExpression {
            eye_open_left: 0.75,
            eye_open_right: 0.95,
            eye_squint: 0.25,
            gaze_x: -0.2,
            brow_height_left: -0.2,
            brow_height_right: 0.45,
            brow_angle_left: -0.3,
            brow_angle_right: 0.3,
            mouth_smile: -0.2,
            mouth_width: 0.45,
            ..base
        },
    }
}

/// Neutral blended toward the emotion's preset by `intensity` (clamped to [0, 1]).
pub fn get_expression(emotion: Emotion, intensity: f32) -> FacialExpression {
    let k = if intensity.is_finite() {
        intensity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let preset = expression_preset(emotion);
    FacialExpression {
        emotion,
        intensity: k,
        ..NEUTRAL_EXPRESSION.zip_with(&preset, |n, p| n + (p - n) * k)
    }
}

/// Interpolate every numeric field; the emotion tag snaps to `b` once `t > 0.5`.
pub fn lerp_expression(a: &FacialExpression, b: &FacialExpression, t: f32) -> FacialExpression {
    FacialExpression {
        emotion: if t > 0.5 { b.emotion } else { a.emotion },
        ..a.zip_with(b, |x, y| lerp_f32(x, y, t))
    }
}
