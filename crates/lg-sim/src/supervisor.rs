//! The `Supervisor`: gates, geometry, motion, registry, and run flags.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use lg_agent::{Agent, AgentBuilder, Route};
use lg_core::{AgentId, GateId, SimConfig, TravelLeg};
use lg_gate::{Admission, Gate};
use lg_mobility::MotionEngine;
use lg_spatial::Geometry;
use tracing::{debug, info};

use crate::{Registry, SimError, SimResult, Snapshot};

/// What one step did to an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The candidate position was committed.
    Moved,
    /// The agent is queued for a gate and stays put.  Cooperative steps only.
    Waiting,
    /// The agent committed its last position and has left the field; stop
    /// driving it and deregister it.
    Finished,
    /// A gate wait observed shutdown.  Nothing was committed; stop driving.
    Cancelled,
}

/// Owns both gates, the geometry, and the live-agent registry.
///
/// Share as `Arc<Supervisor>`; every method takes `&self`.  Agents are
/// never stored here: each driver owns its `Agent` and passes it in by
/// `&mut` on every step.
pub struct Supervisor {
    config:   SimConfig,
    geometry: Geometry,
    engine:   MotionEngine,
    gates:    [Gate; GateId::COUNT],
    registry: Registry,
    next_id:  AtomicU32,
    running:  AtomicBool,
    paused:   AtomicBool,
}

impl Supervisor {
    /// Use [`SupervisorBuilder`][crate::SupervisorBuilder], which validates
    /// `config` first.
    pub(crate) fn new(config: SimConfig, geometry: Geometry) -> Self {
        let gates = GateId::ALL.map(|id| Gate::new(id, config.gate_capacity));
        Self {
            engine: MotionEngine::new(&geometry),
            config,
            geometry,
            gates,
            registry: Registry::new(),
            next_id:  AtomicU32::new(0),
            running:  AtomicBool::new(true),
            paused:   AtomicBool::new(false),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.index()]
    }

    pub fn gates(&self) -> &[Gate; GateId::COUNT] {
        &self.gates
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ── Agent lifecycle ───────────────────────────────────────────────────

    /// Issue an id, place the agent at its route's origin, and publish it.
    pub fn register(&self, builder: AgentBuilder) -> SimResult<Agent> {
        if !self.is_running() {
            return Err(SimError::ShutDown);
        }
        if !builder.has_valid_speed() {
            return Err(SimError::InvalidSpeed(builder.speed));
        }
        let id = AgentId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let origin = match builder.route {
            Route::Loop  => self.geometry.loop_origin(),
            Route::Cross => self.geometry.cross_origin(),
        };
        let agent = builder.build(id, origin);
        self.registry.publish(agent.view());
        debug!(agent = %id, route = ?agent.route, speed = agent.speed, "agent registered");
        Ok(agent)
    }

    /// Overwrite the registry's view of `agent`.
    pub fn publish(&self, agent: &Agent) {
        self.registry.publish(agent.view());
    }

    /// Drop `agent` from the registry.  Returns `false` if it was not there.
    pub fn deregister(&self, agent: AgentId) -> bool {
        self.registry.remove(agent)
    }

    /// Leave the gate `agent` holds, if any.  Returns whether a ticket was
    /// released.
    pub fn release(&self, agent: &mut Agent) -> bool {
        match agent.held_gate.take() {
            Some(gate) => self.gate(gate).leave(agent.id),
            None => false,
        }
    }

    pub fn agent_count(&self) -> usize {
        self.registry.len()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance `agent` one tick, blocking while a gate is full or held by
    /// the opposing direction.  Never returns [`StepOutcome::Waiting`].
    pub fn step(&self, agent: &mut Agent) -> StepOutcome {
        self.step_with(agent, Gate::enter)
    }

    /// Advance `agent` one tick without blocking.  An agent that cannot
    /// enter its next gate yet keeps its ticket and stays where it is.
    pub fn step_cooperative(&self, agent: &mut Agent) -> StepOutcome {
        self.step_with(agent, Gate::try_enter)
    }

    fn step_with<F>(&self, agent: &mut Agent, request: F) -> StepOutcome
    where
        F: Fn(&Gate, AgentId, TravelLeg) -> Admission,
    {
        let candidate = self.engine.advance(agent);

        match self.geometry.gate_at(candidate.position) {
            Some(target) if agent.held_gate != Some(target) => {
                let gate = self.gate(target);
                match request(gate, agent.id, agent.leg) {
                    Admission::Admitted => {
                        if let Some(previous) = agent.held_gate.replace(target) {
                            self.gate(previous).leave(agent.id);
                        }
                        candidate.commit(agent);
                    }
                    Admission::Waiting => return StepOutcome::Waiting,
                    Admission::Cancelled => {
                        gate.leave(agent.id);
                        return StepOutcome::Cancelled;
                    }
                }
            }
            Some(_) => candidate.commit(agent),
            None => {
                self.release(agent);
                candidate.commit(agent);
            }
        }

        self.publish(agent);
        if candidate.finished {
            StepOutcome::Finished
        } else {
            StepOutcome::Moved
        }
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// Read-only copy of every live agent and both gate queues.
    ///
    /// The registry is copied and released before any gate is inspected.
    pub fn snapshot(&self) -> Snapshot {
        let agents = self.registry.views();
        let gates = self.gates.iter().map(Gate::snapshot).collect();
        Snapshot { agents, gates }
    }

    // ── Run control ───────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Stop the simulation: clear the running flag and cancel both gates,
    /// waking every blocked agent.  Only the first call has any effect.
    pub fn shutdown(&self) -> bool {
        if !self.running.swap(false, Ordering::AcqRel) {
            return false;
        }
        for gate in &self.gates {
            gate.cancel();
        }
        info!(live_agents = self.registry.len(), "simulation shutting down");
        true
    }

    /// Advisory to drivers and spawners only; gates ignore it.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Release);
    }

    /// Flip the pause flag, returning the new state.
    pub fn toggle_pause(&self) -> bool {
        let now_paused = !self.paused.fetch_xor(true, Ordering::AcqRel);
        info!(paused = now_paused, "pause toggled");
        now_paused
    }
}
