//! Latest-request-wins bookkeeping.
//!
//! Typing in the dashboard search box issues a listing request per keystroke,
//! and responses can arrive out of order. Each request takes a [`Ticket`]
//! before it is sent; when its response arrives the caller applies it only if
//! [`RequestSequence::is_current`] still holds.

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Whether `ticket` belongs to the most recently issued request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
