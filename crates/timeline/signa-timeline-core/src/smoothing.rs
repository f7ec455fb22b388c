//! Per-frame smoothing toward the timeline's discrete targets, for render adapters.
//!
//! The timeline publishes exact keyframe/letter poses; adapters that want motion
//! between them run a `FrameSmoother` at display rate. Each update moves the displayed
//! values toward the latest frame by `1 - 0.5^(dt / half_life)`.

use serde::{Deserialize, Serialize};
use signa_face_core::{lerp_expression, lerp_viseme, FacialExpression, Viseme};
use signa_pose_core::{interpolate_pose, lerp_f32, HandPose};

use crate::outputs::RenderFrame;

/// Smoothed channel values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SmoothedFrame {
    pub pose: HandPose,
    pub expression: FacialExpression,
    pub viseme: Viseme,
    pub head_tilt: f32,
}

impl From<&RenderFrame> for SmoothedFrame {
    fn from(frame: &RenderFrame) -> Self {
        Self {
            pose: frame.pose,
            expression: frame.expression,
            viseme: frame.viseme,
            head_tilt: frame.head_tilt,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FrameSmoother {
    half_life_ms: f64,
    current: Option<SmoothedFrame>,
}

impl Default for FrameSmoother {
    fn default() -> Self {
        Self::new(60.0)
    }
}

impl FrameSmoother {
    /// `half_life_ms <= 0` disables smoothing (every update snaps to the target).
    pub fn new(half_life_ms: f64) -> Self {
        Self {
            half_life_ms,
            current: None,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<&SmoothedFrame> {
        self.current.as_ref()
    }

    /// Forget the displayed state; the next update snaps.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Blend factor for a step of `dt_ms`.
    pub fn alpha(&self, dt_ms: f64) -> f32 {
        if !(self.half_life_ms > 0.0) {
            return 1.0;
        }
        let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        (1.0 - 0.5f64.powf(dt / self.half_life_ms)) as f32
    }

    /// Move toward `target` and return the displayed values.
    pub fn update(&mut self, target: &RenderFrame, dt_ms: f64) -> &SmoothedFrame {
        let t = self.alpha(dt_ms);
        let next = match &self.current {
            None => SmoothedFrame::from(target),
            Some(cur) => SmoothedFrame {
                pose: interpolate_pose(&cur.pose, &target.pose, t),
                expression: lerp_expression(&cur.expression, &target.expression, t),
                viseme: lerp_viseme(&cur.viseme, &target.viseme, t),
                head_tilt: lerp_f32(cur.head_tilt, target.head_tilt, t),
            },
        };
        self.current.insert(next)
    }
}
