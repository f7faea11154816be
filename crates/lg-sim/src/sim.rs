//! The cooperative driver: every agent stepped once per `tick()` on the
//! caller's thread.

use std::sync::Arc;

use lg_agent::{Agent, AgentBuilder};
use lg_core::{AgentId, Tick};
use tracing::{debug, trace};

use crate::{SimObserver, SimResult, StepOutcome, Supervisor};

/// Counts for one cooperative tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub moved:     usize,
    pub waiting:   usize,
    pub finished:  usize,
    pub cancelled: usize,
}

/// Single-threaded driver over a set of owned agents.
///
/// Uses [`Supervisor::step_cooperative`], so an agent that cannot enter a
/// gate yet simply holds its position until a later tick.  A blocking step
/// here would deadlock: the agents it waits on are stepped by this same
/// thread.
pub struct Sim {
    pub supervisor: Arc<Supervisor>,

    /// Agents driven by this `Sim`, in registration order.
    pub agents: Vec<Agent>,

    /// The next tick to run.
    pub tick: Tick,
}

impl Sim {
    pub fn new(supervisor: Arc<Supervisor>) -> Self {
        Self { supervisor, agents: Vec::new(), tick: Tick::ZERO }
    }

    /// Register a new agent with the supervisor and drive it from now on.
    pub fn spawn(&mut self, builder: AgentBuilder) -> SimResult<AgentId> {
        let agent = self.supervisor.register(builder)?;
        let id = agent.id;
        self.agents.push(agent);
        Ok(id)
    }

    /// Step every agent once.
    ///
    /// Returns `None` without advancing the tick while paused or after
    /// shutdown.  Finished and cancelled agents are removed by id after the
    /// full pass, so removal never disturbs agents not yet stepped.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> Option<TickSummary> {
        if !self.supervisor.is_running() || self.supervisor.is_paused() {
            return None;
        }
        let now = self.tick;
        observer.on_tick_start(now);

        let mut summary = TickSummary::default();
        let mut done: Vec<AgentId> = Vec::new();
        for agent in &mut self.agents {
            match self.supervisor.step_cooperative(agent) {
                StepOutcome::Moved => summary.moved += 1,
                StepOutcome::Waiting => summary.waiting += 1,
                StepOutcome::Finished => {
                    summary.finished += 1;
                    done.push(agent.id);
                }
                StepOutcome::Cancelled => {
                    summary.cancelled += 1;
                    done.push(agent.id);
                }
            }
        }

        if !done.is_empty() {
            let supervisor = &self.supervisor;
            self.agents.retain_mut(|agent| {
                if !done.contains(&agent.id) {
                    return true;
                }
                supervisor.release(agent);
                supervisor.deregister(agent.id);
                debug!(agent = %agent.id, %now, "agent removed");
                false
            });
        }

        trace!(%now, ?summary, "tick complete");
        observer.on_tick_end(now, &summary);
        let interval = self.supervisor.config().snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.supervisor.snapshot());
        }

        self.tick = now.next();
        Some(summary)
    }

    /// Call [`tick`](Self::tick) `n` times, stopping early after shutdown.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if !self.supervisor.is_running() {
                break;
            }
            self.tick(observer);
        }
        observer.on_sim_end(self.tick);
    }

    /// Agents currently driven.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
