//! Signa Pose Core (renderer-agnostic)
//!
//! Hierarchical joint-angle model of a single hand (five fingers with three joints
//! each, plus an optional wrist orientation) and the pure interpolation helpers used
//! by render adapters to smooth between discrete pose targets.

pub mod interp;
pub mod pose;

pub use interp::{interpolate_finger, interpolate_pose, interpolate_wrist, lerp_f32, lerp_vec3};
pub use pose::{mirror_pose, Finger, FingerPose, HandPose, JointBend, JointCurl, Wrist, REST_POSE};
