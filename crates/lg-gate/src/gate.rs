//! The gate admission controller.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use lg_core::{AgentId, GateId, TravelLeg};
use tracing::debug;

use crate::{Admission, GateSnapshot, Ticket};

/// Queue and cancellation flag, guarded together by the gate's mutex.
#[derive(Default)]
struct GateState {
    queue:     Vec<Ticket>,
    cancelled: bool,
}

impl GateState {
    fn position(&self, agent: AgentId) -> Option<usize> {
        self.queue.iter().position(|t| t.agent == agent)
    }

    /// Append a ticket unless `agent` already holds one.  Returns its position.
    fn enqueue(&mut self, agent: AgentId, leg: TravelLeg) -> usize {
        match self.position(agent) {
            Some(pos) => pos,
            None => {
                self.queue.push(Ticket { agent, leg });
                self.queue.len() - 1
            }
        }
    }

    /// Capacity and direction rules for the ticket at `pos`.
    fn admissible(&self, pos: usize, capacity: usize) -> bool {
        if pos >= capacity {
            return false;
        }
        let Some(ticket) = self.queue.get(pos) else {
            return false;
        };
        self.queue[..pos].iter().all(|ahead| ahead.leg == ticket.leg)
    }

    /// One evaluation of the admission predicate for `agent`.
    fn poll(&mut self, agent: AgentId, leg: TravelLeg, capacity: usize) -> Admission {
        if self.cancelled {
            return Admission::Cancelled;
        }
        let pos = self.enqueue(agent, leg);
        if self.admissible(pos, capacity) {
            Admission::Admitted
        } else {
            Admission::Waiting
        }
    }

    /// The admitted prefix: the leading same-leg run, cut at `capacity`.
    fn occupants(&self, capacity: usize) -> impl Iterator<Item = &Ticket> {
        let head_leg = self.queue.first().map(|t| t.leg);
        self.queue
            .iter()
            .take(capacity)
            .take_while(move |t| Some(t.leg) == head_leg)
    }
}

// ── Gate ──────────────────────────────────────────────────────────────────────

/// Admission controller for one shared region.
///
/// `Gate` is `Send + Sync`; share it by reference or `Arc`.  The queue is
/// the only mutable state and is touched only under the gate's own mutex.
/// No caller code runs while that mutex is held, so a poisoned lock still
/// guards a consistent queue and is recovered rather than propagated.
pub struct Gate {
    id:       GateId,
    capacity: usize,
    state:    Mutex<GateState>,
    changed:  Condvar,
}

impl Gate {
    /// Create an open gate admitting at most `capacity` agents (minimum 1).
    pub fn new(id: GateId, capacity: usize) -> Self {
        Self {
            id,
            capacity: capacity.max(1),
            state:    Mutex::new(GateState::default()),
            changed:  Condvar::new(),
        }
    }

    pub fn id(&self) -> GateId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Request entry and block until admitted or cancelled.
    ///
    /// The first call enqueues `(agent, leg)`; later calls from the same
    /// agent reuse that ticket.  Never returns [`Admission::Waiting`].
    pub fn enter(&self, agent: AgentId, leg: TravelLeg) -> Admission {
        let mut state = self.lock();
        let mut waited = false;
        loop {
            match state.poll(agent, leg, self.capacity) {
                Admission::Waiting => {
                    if !waited {
                        debug!(gate = %self.id, %agent, %leg, queued = state.queue.len(), "waiting for gate");
                        waited = true;
                    }
                    state = self.changed.wait(state).unwrap_or_else(PoisonError::into_inner);
                }
                outcome => {
                    debug!(gate = %self.id, %agent, %leg, ?outcome, "gate request resolved");
                    return outcome;
                }
            }
        }
    }

    /// Like [`enter`](Self::enter) but gives up after `timeout`, returning
    /// [`Admission::Waiting`] with the ticket still queued.
    pub fn enter_timeout(&self, agent: AgentId, leg: TravelLeg, timeout: Duration) -> Admission {
        let deadline = Instant::now() + timeout;
        let mut state = self.lock();
        loop {
            let outcome = state.poll(agent, leg, self.capacity);
            if outcome != Admission::Waiting {
                return outcome;
            }
            let now = Instant::now();
            if now >= deadline {
                return Admission::Waiting;
            }
            state = self
                .changed
                .wait_timeout(state, deadline - now)
                .map(|(guard, _)| guard)
                .unwrap_or_else(|poisoned| poisoned.into_inner().0);
        }
    }

    /// Evaluate the admission predicate once without blocking.
    ///
    /// Enqueues on first call exactly like [`enter`](Self::enter).
    pub fn try_enter(&self, agent: AgentId, leg: TravelLeg) -> Admission {
        self.lock().poll(agent, leg, self.capacity)
    }

    /// Remove `agent`'s ticket and wake every waiter.
    ///
    /// Returns `false` (and changes nothing) if the agent holds no ticket,
    /// so a second leave is harmless.
    pub fn leave(&self, agent: AgentId) -> bool {
        let removed = {
            let mut state = self.lock();
            match state.position(agent) {
                Some(pos) => {
                    state.queue.remove(pos);
                    true
                }
                None => false,
            }
        };
        if removed {
            debug!(gate = %self.id, %agent, "left gate");
            self.changed.notify_all();
        }
        removed
    }

    /// Permanently close the gate and wake every waiter.
    ///
    /// Returns `true` only for the call that actually closed it.
    pub fn cancel(&self) -> bool {
        let first = {
            let mut state = self.lock();
            !std::mem::replace(&mut state.cancelled, true)
        };
        self.changed.notify_all();
        if first {
            debug!(gate = %self.id, "gate cancelled");
        }
        first
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// Agents currently admitted, in queue order.
    pub fn occupants(&self) -> Vec<AgentId> {
        self.lock().occupants(self.capacity).map(|t| t.agent).collect()
    }

    /// Occupants, queue length, and the cancelled flag in one consistent read.
    pub fn snapshot(&self) -> GateSnapshot {
        let state = self.lock();
        GateSnapshot {
            id:        self.id,
            occupants: state.occupants(self.capacity).map(|t| t.agent).collect(),
            queued:    state.queue.len(),
            cancelled: state.cancelled,
        }
    }

    /// The full queue, admitted and waiting, in request order.
    pub fn queue(&self) -> Vec<Ticket> {
        self.lock().queue.clone()
    }

    /// Number of queued tickets (admitted + waiting).
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    /// `true` if `agent` holds a ticket, admitted or not.
    pub fn is_queued(&self, agent: AgentId) -> bool {
        self.lock().position(agent).is_some()
    }
}

impl std::fmt::Debug for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Gate")
            .field("id", &self.id)
            .field("capacity", &self.capacity)
            .field("queue", &state.queue)
            .field("cancelled", &state.cancelled)
            .finish()
    }
}
