//! Input contracts for the timeline.
//!
//! Commands mirror the controller's methods so hosts can drive it by message passing.
//! They are applied in order at the start of `Timeline::update`.

use serde::{Deserialize, Serialize};
use signa_gloss_core::LanguageMode;

use crate::state::{DisplayMode, ViewMode};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct TimelineInputs {
    #[serde(default)]
    pub commands: Vec<TimelineCommand>,
}

impl TimelineInputs {
    pub fn new(commands: Vec<TimelineCommand>) -> Self {
        Self { commands }
    }
}

impl From<TimelineCommand> for TimelineInputs {
    fn from(cmd: TimelineCommand) -> Self {
        Self {
            commands: vec![cmd],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum TimelineCommand {
    Play,
    Pause,
    Stop,
    Reset,
    StepForward,
    StepBackward,
    JumpTo { index: usize },
    SetSpeed { speed: f32 },
    SetText { text: String },
    SetLanguage { language: LanguageMode },
    SetDisplayMode { mode: DisplayMode },
    SetView { view: ViewMode },
}
