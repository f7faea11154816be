//! `lg-sim` — the supervisor and the drivers that step agents.
//!
//! # One step
//!
//! ```text
//! Supervisor::step(agent):
//!   ① candidate = MotionEngine::advance(agent)          (pure)
//!   ② region    = Geometry::gate_at(candidate)
//!   ③ region is a gate the agent does not hold
//!        → Gate::enter(agent, leg)      blocks; Cancelled aborts the step
//!   ④ region is none and the agent holds a gate
//!        → Gate::leave(agent)
//!   ⑤ commit candidate, publish the agent's view to the registry
//!   ⑥ report Finished once a cross-track agent leaves the field
//! ```
//!
//! # Drivers
//!
//! | Driver                  | Scheduling                                      |
//! |-------------------------|-------------------------------------------------|
//! | [`Sim`]                 | cooperative: one non-blocking step per agent per `tick()` |
//! | [`spawn_worker`]        | one thread per agent, blocking steps on a fixed interval |
//! | [`Spawner`]             | creates agents at random intervals and starts their workers |
//!
//! # Locking
//!
//! Each gate has its own lock; no operation takes both.  The registry has
//! a separate lock and is never touched while a gate lock is held.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lg_core::{Point, SimConfig};
//! use lg_agent::AgentBuilder;
//! use lg_sim::{NoopObserver, Sim, SupervisorBuilder};
//!
//! let supervisor = Arc::new(SupervisorBuilder::new(SimConfig::default()).build()?);
//! let mut sim = Sim::new(supervisor);
//! sim.spawn(AgentBuilder::track(Point::default(), 1.5))?;
//! sim.run_ticks(1_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod registry;
pub mod sim;
pub mod spawner;
pub mod supervisor;
pub mod worker;


pub use builder::SupervisorBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use lg_gate::GateSnapshot;
pub use registry::{Registry, Snapshot};
pub use sim::{Sim, TickSummary};
pub use spawner::Spawner;
pub use supervisor::{StepOutcome, Supervisor};
pub use worker::{ExitReason, WorkerExit, drive, spawn_worker};
