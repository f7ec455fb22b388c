//! Hand pose data model.
//!
//! Joint values are approximate radians (curl) or normalized lateral deviation
//! (spread). They are not clamped here; renderers interpret them.

use serde::{Deserialize, Serialize};

/// Base (metacarpophalangeal) joint: flexion plus lateral spread.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct JointBend {
    pub curl: f32,
    pub spread: f32,
}

/// Hinge joint (PIP/DIP): flexion only.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct JointCurl {
    pub curl: f32,
}

/// Per-finger joint state.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FingerPose {
    pub mcp: JointBend,
    pub pip: JointCurl,
    pub dip: JointCurl,
}

impl FingerPose {
    pub const STRAIGHT: FingerPose = FingerPose::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(mcp_curl: f32, mcp_spread: f32, pip_curl: f32, dip_curl: f32) -> Self {
        Self {
            mcp: JointBend {
                curl: mcp_curl,
                spread: mcp_spread,
            },
            pip: JointCurl { curl: pip_curl },
            dip: JointCurl { curl: dip_curl },
        }
    }

    /// Compact `[mcp_curl, mcp_spread, pip_curl, dip_curl]` form used by table documents.
    #[inline]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.mcp.curl, self.mcp.spread, self.pip.curl, self.dip.curl]
    }

    /// Sum of flexion across the three joints; handy for "is this finger closed" checks.
    #[inline]
    pub fn total_curl(&self) -> f32 {
        self.mcp.curl + self.pip.curl + self.dip.curl
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

/// Wrist orientation in radians.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Wrist {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Wrist {
    pub const ZERO: Wrist = Wrist::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    #[inline]
    pub const fn from_array(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.pitch, self.yaw, self.roll]
    }
}

/// Finger selector.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// Five named fingers plus an optional wrist orientation.
///
/// Poses are immutable values: table entries are shared constants and new poses
/// are produced by interpolation, never by mutating an existing one.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandPose {
    pub thumb: FingerPose,
    pub index: FingerPose,
    pub middle: FingerPose,
    pub ring: FingerPose,
    pub pinky: FingerPose,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrist: Option<Wrist>,
}

impl HandPose {
    #[inline]
    pub const fn new(
        thumb: FingerPose,
        index: FingerPose,
        middle: FingerPose,
        ring: FingerPose,
        pinky: FingerPose,
        wrist: Option<Wrist>,
    ) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
            wrist,
        }
    }

    #[inline]
    pub fn finger(&self, finger: Finger) -> &FingerPose {
        match finger {
            Finger::Thumb => &self.thumb,
            Finger::Index => &self.index,
            Finger::Middle => &self.middle,
            Finger::Ring => &self.ring,
            Finger::Pinky => &self.pinky,
        }
    }

    /// Fingers in thumb-to-pinky order.
    #[inline]
    pub fn fingers(&self) -> [&FingerPose; 5] {
        [
            &self.thumb,
            &self.index,
            &self.middle,
            &self.ring,
            &self.pinky,
        ]
    }

    /// Wrist orientation with a missing wrist read as all-zero.
    #[inline]
    pub fn wrist_or_zero(&self) -> Wrist {
        self.wrist.unwrap_or(Wrist::ZERO)
    }

    /// Copy of this pose with the wrist replaced.
    #[inline]
    pub fn with_wrist(mut self, wrist: Wrist) -> Self {
        self.wrist = Some(wrist);
        self
    }

    pub fn is_finite(&self) -> bool {
        self.fingers().iter().all(|f| f.is_finite())
            && self
                .wrist
                .map(|w| w.to_array().iter().all(|v| v.is_finite()))
                .unwrap_or(true)
    }
}

/// Idle pose shown whenever no gloss item is active: relaxed, slightly curled hand.
pub const REST_POSE: HandPose = HandPose::new(
    FingerPose::new(0.1, 0.2, 0.1, 0.0),
    FingerPose::new(0.2, -0.05, 0.2, 0.1),
    FingerPose::new(0.2, 0.0, 0.25, 0.1),
    FingerPose::new(0.25, 0.05, 0.3, 0.15),
    FingerPose::new(0.3, 0.1, 0.3, 0.15),
    None,
);

/// Mirror a right-hand pose onto the left hand (spread, yaw and roll flip sign).
///
/// Render adapters use this for two-handed views; the core only ever produces one hand.
pub fn mirror_pose(pose: &HandPose) -> HandPose {
    let flip = |f: &FingerPose| FingerPose::new(f.mcp.curl, -f.mcp.spread, f.pip.curl, f.dip.curl);
    HandPose {
        thumb: flip(&pose.thumb),
        index: flip(&pose.index),
        middle: flip(&pose.middle),
        ring: flip(&pose.ring),
        pinky: flip(&pose.pinky),
        wrist: pose.wrist.map(|w| Wrist::new(w.pitch, -w.yaw, -w.roll)),
    }
}
