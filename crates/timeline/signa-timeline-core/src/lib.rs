//! Signa Timeline Core
//!
//! Playback state machine for text-to-sign animation. Owns the gloss script for the
//! current (text, language, display mode), advances keyframes, letters and items on a
//! cooperative logical clock, and coordinates the lip-sync and emotion channels into
//! one `RenderFrame` per host update.

pub mod config;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod smoothing;
pub mod state;
pub mod timeline;
pub mod timer;

// Re-exports for consumers (render adapters, hosts)
pub use config::{clamp_speed, Config, TimelineConfig, MAX_SPEED, MIN_SPEED};
pub use error::ConfigError;
pub use ids::{SessionAllocator, SessionId};
pub use inputs::{TimelineCommand, TimelineInputs};
pub use outputs::{Progress, RenderFrame, TimelineEvent, TimelineOutputs};
pub use smoothing::{FrameSmoother, SmoothedFrame};
pub use state::{DisplayMode, PlaybackState, ViewMode};
pub use timeline::{Advance, Timeline};
pub use timer::{PendingTimer, RepeatingTimer, TimerSlot};

pub use signa_face_core as face;
pub use signa_gloss_core as gloss;
pub use signa_pose_core as pose;
