//! Output contracts from the timeline.
//!
//! `RenderFrame` is everything a render adapter reads each displayed frame; events are
//! the semantic transitions since the previous `update`.

use serde::{Deserialize, Serialize};
use signa_face_core::{FacialExpression, Viseme, NEUTRAL_EXPRESSION, REST_VISEME};
use signa_gloss_core::GlossKind;
use signa_pose_core::{HandPose, REST_POSE};

use crate::ids::SessionId;
use crate::state::{PlaybackState, ViewMode};

/// Position metadata for progress bars.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// Current gloss item.
    pub index: usize,
    /// Number of gloss items in the script.
    pub total: usize,
    /// Keyframe within a word item (0 otherwise).
    pub keyframe: usize,
    /// Letter within a fingerspelling item (0 otherwise).
    pub letter: usize,
    /// Display value of the current item, empty without a script.
    pub value: String,
}

/// Sampled output for one displayed frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderFrame {
    pub state: PlaybackState,
    pub pose: HandPose,
    pub expression: FacialExpression,
    pub viseme: Viseme,
    /// Head roll in radians.
    pub head_tilt: f32,
    pub progress: Progress,
    pub view: ViewMode,
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self {
            state: PlaybackState::Idle,
            pose: REST_POSE,
            expression: NEUTRAL_EXPRESSION,
            viseme: REST_VISEME,
            head_tilt: 0.0,
            progress: Progress::default(),
            view: ViewMode::default(),
        }
    }
}

/// Discrete semantic signals emitted by the timeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum TimelineEvent {
    Started {
        session: SessionId,
        index: usize,
    },
    Paused {
        index: usize,
    },
    Completed {
        items: usize,
    },
    Reset,
    ScriptChanged {
        items: usize,
        notation: String,
    },
    ItemChanged {
        index: usize,
        kind: GlossKind,
        value: String,
    },
    KeyframeAdvanced {
        index: usize,
        keyframe: usize,
    },
    LetterAdvanced {
        index: usize,
        letter_index: usize,
        letter: char,
    },
    Looped {
        index: usize,
        count: u32,
    },
}

/// Outputs returned by Timeline::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimelineOutputs {
    pub frame: RenderFrame,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl TimelineOutputs {
    #[inline]
    pub fn has_event(&self, pred: impl Fn(&TimelineEvent) -> bool) -> bool {
        self.events.iter().any(pred)
    }
}
