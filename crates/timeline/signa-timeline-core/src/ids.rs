//! Playback session identifiers.
//!
//! Every `play` opens a new session. Timer firings carry the session that scheduled
//! them and are ignored when it is no longer the active one.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

/// Monotonic allocator for SessionId.
#[derive(Default, Debug)]
pub struct SessionAllocator {
    next: u64,
}

impl SessionAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> SessionId {
        let id = SessionId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
