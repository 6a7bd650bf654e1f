//! Frame coalescing and debounce bookkeeping.
//!
//! Both types are plain state: the browser glue asks them whether to schedule
//! a frame or timer, and whether a firing callback is still current.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Collapses any number of triggers into at most one pending frame.
///
/// `request` returns `true` only for the trigger that must actually call
/// `requestAnimationFrame`; later triggers piggyback on the pending frame.
/// `begin_pass` clears the flag before the recompute runs, so a trigger that
/// arrives after the pass has read its inputs schedules a fresh frame.
#[derive(Debug, Default, Clone)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger. Returns whether the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Start a recompute pass. Returns `false` for a stray frame with no
    /// pending request.
    pub fn begin_pass(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        true
    }

    /// Give up on the pending frame (e.g. the browser refused to schedule it).
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

/// Ticket handed out by [`Debouncer::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Last-scheduled-ticket-wins debounce.
///
/// Every `schedule` invalidates earlier tickets; a timer callback runs its
/// work only if its ticket is still current.
#[derive(Debug, Default, Clone)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
