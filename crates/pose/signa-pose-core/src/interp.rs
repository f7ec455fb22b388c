//! Interpolation helpers:
//! - lerp_f32 / lerp_vec3 (component-wise linear)
//! - interpolate_finger (all four joint scalars)
//! - interpolate_pose (five fingers + wrist, missing wrist read as zero)
//!
//! All helpers are pure and total: `t` outside [0,1] extrapolates.

use crate::pose::{FingerPose, HandPose, JointBend, JointCurl, Wrist};

/// Linear interpolation of scalars. Exact at both endpoints.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

#[inline]
pub fn interpolate_finger(a: &FingerPose, b: &FingerPose, t: f32) -> FingerPose {
    FingerPose {
        mcp: JointBend {
            curl: lerp_f32(a.mcp.curl, b.mcp.curl, t),
            spread: lerp_f32(a.mcp.spread, b.mcp.spread, t),
        },
        pip: JointCurl {
            curl: lerp_f32(a.pip.curl, b.pip.curl, t),
        },
        dip: JointCurl {
            curl: lerp_f32(a.dip.curl, b.dip.curl, t),
        },
    }
}

/// Wrist lerp; `None` on either side is treated as all-zero.
#[inline]
pub fn interpolate_wrist(a: Option<Wrist>, b: Option<Wrist>, t: f32) -> Option<Wrist> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let wa = a.unwrap_or(Wrist::ZERO).to_array();
    let wb = b.unwrap_or(Wrist::ZERO).to_array();
    Some(Wrist::from_array(lerp_vec3(wa, wb, t)))
}

/// Component-wise interpolation of two hand poses.
pub fn interpolate_pose(a: &HandPose, b: &HandPose, t: f32) -> HandPose {
    HandPose {
        thumb: interpolate_finger(&a.thumb, &b.thumb, t),
        index: interpolate_finger(&a.index, &b.index, t),
        middle: interpolate_finger(&a.middle, &b.middle, t),
        ring: interpolate_finger(&a.ring, &b.ring, t),
        pinky: interpolate_finger(&a.pinky, &b.pinky, t),
        wrist: interpolate_wrist(a.wrist, b.wrist, t),
    }
}
