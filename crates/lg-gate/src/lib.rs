//! `lg-gate` — admission control for one shared gate region.
//!
//! # Rules
//!
//! Every request appends a ticket `(agent, leg)` to the gate's queue once.
//! The ticket at queue position `pos` is admitted when both hold:
//!
//! 1. **capacity** — `pos < capacity`;
//! 2. **direction** — every ticket ahead of it has the same leg.
//!
//! The predicate is re-evaluated against the live queue whenever a ticket
//! leaves, so tickets drift forward as earlier agents exit.  Queue order
//! gives FIFO admission within one leg, and an opposing stream is let
//! through as soon as the tickets ahead of it have drained.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`gate`]      | `Gate` — mutex + condvar admission controller          |
//! | [`admission`] | `Admission` outcome, `Ticket` queue entry, `GateSnapshot` |
//!
//! # Blocking
//!
//! [`Gate::enter`] is the only blocking call in the simulation.  It parks
//! on a condition variable (no polling) until admitted or until
//! [`Gate::cancel`] is called.  [`Gate::try_enter`] evaluates the same
//! predicate without blocking, for single-threaded drivers.

pub mod admission;
pub mod gate;


pub use admission::{Admission, GateSnapshot, Ticket};
pub use gate::Gate;
