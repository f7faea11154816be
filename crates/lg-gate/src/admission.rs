//! Queue entries, admission outcomes, and occupancy snapshots.

use lg_core::{AgentId, GateId, TravelLeg};

/// One agent's place in a gate queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub agent: AgentId,
    pub leg:   TravelLeg,
}

/// Outcome of a request to enter a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Admission {
    /// The agent may occupy the gate.
    Admitted,
    /// Not yet admissible; the ticket stays queued.  Only returned by the
    /// non-blocking and bounded variants.
    Waiting,
    /// The gate was shut down.  The caller must not enter and must unwind.
    Cancelled,
}

impl Admission {
    #[inline]
    pub fn is_admitted(self) -> bool {
        matches!(self, Admission::Admitted)
    }

    #[inline]
    pub fn is_cancelled(self) -> bool {
        matches!(self, Admission::Cancelled)
    }
}

/// Occupancy of one gate, read under a single lock so `occupants` never
/// outnumbers `queued`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSnapshot {
    pub id:        GateId,
    /// Admitted agents, in queue order.
    pub occupants: Vec<AgentId>,
    /// Admitted plus waiting tickets.
    pub queued:    usize,
    pub cancelled: bool,
}
