//! Cooperative timers on the timeline's logical millisecond clock.
//!
//! `TimerSlot` holds at most one pending one-shot timer: scheduling replaces whatever
//! was pending. `RepeatingTimer` is a fixed-period ticker that coalesces missed ticks.
//! Neither owns a thread; the timeline polls them from `update`.

use crate::ids::SessionId;

/// A scheduled one-shot firing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingTimer<A> {
    pub due_ms: f64,
    pub session: SessionId,
    pub action: A,
}

/// Single-slot one-shot timer.
#[derive(Debug)]
pub struct TimerSlot<A> {
    pending: Option<PendingTimer<A>>,
}

impl<A> Default for TimerSlot<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A: Copy> TimerSlot<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` at `now + delay_ms`, returning the timer it replaced.
    pub fn schedule(
        &mut self,
        now_ms: f64,
        delay_ms: f64,
        session: SessionId,
        action: A,
    ) -> Option<PendingTimer<A>> {
        let delay = if delay_ms.is_finite() { delay_ms.max(0.0) } else { 0.0 };
        self.pending.replace(PendingTimer {
            due_ms: now_ms + delay,
            session,
            action,
        })
    }

    #[inline]
    pub fn cancel(&mut self) -> Option<PendingTimer<A>> {
        self.pending.take()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn due_ms(&self) -> Option<f64> {
        self.pending.map(|p| p.due_ms)
    }

    #[inline]
    pub fn peek(&self) -> Option<&PendingTimer<A>> {
        self.pending.as_ref()
    }

    /// Remove and return the pending timer if it is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: f64) -> Option<PendingTimer<A>> {
        if self.pending.map_or(false, |p| p.due_ms <= now_ms) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Time left before the pending timer fires.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending.map(|p| (p.due_ms - now_ms).max(0.0))
    }

    /// Multiply the remaining time of the pending timer by `factor`.
    pub fn rescale(&mut self, now_ms: f64, factor: f64) {
        if let Some(p) = self.pending.as_mut() {
            let remaining = (p.due_ms - now_ms).max(0.0);
            p.due_ms = now_ms + remaining * factor;
        }
    }
}

/// Fixed-period ticker.
#[derive(Debug)]
pub struct RepeatingTimer {
    interval_ms: f64,
    next_due_ms: Option<f64>,
    session: Option<SessionId>,
}

impl RepeatingTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(1.0),
            next_due_ms: None,
            session: None,
        }
    }

    /// Start ticking; the first tick is one interval after `now_ms`.
    pub fn start(&mut self, now_ms: f64, session: SessionId) {
        self.next_due_ms = Some(now_ms + self.interval_ms);
        self.session = Some(session);
    }

    pub fn stop(&mut self) {
        self.next_due_ms = None;
        self.session = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    #[inline]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.next_due_ms
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// If a tick is due by `limit_ms`, return the latest due tick time and its session,
    /// skipping earlier ticks that were missed.
    pub fn take_due(&mut self, limit_ms: f64) -> Option<(f64, SessionId)> {
        let due = self.next_due_ms?;
        let session = self.session?;
        if due > limit_ms {
            return None;
        }
        let missed = ((limit_ms - due) / self.interval_ms).floor();
        let fire_at = due + missed * self.interval_ms;
        self.next_due_ms = Some(fire_at + self.interval_ms);
        Some((fire_at, session))
    }
}
