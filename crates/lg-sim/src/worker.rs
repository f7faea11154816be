//! Threaded driver: one worker thread per agent.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use lg_agent::Agent;
use lg_core::AgentId;
use tracing::info;

use crate::{SimResult, StepOutcome, Supervisor};

/// Why a worker stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The agent left the field.
    Finished,
    /// A gate wait was cancelled by shutdown.
    Cancelled,
    /// Shutdown was observed between steps.
    Shutdown,
}

/// Returned by a worker thread when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerExit {
    pub agent:  AgentId,
    pub reason: ExitReason,
    /// Steps actually taken (paused intervals excluded).
    pub ticks:  u64,
}

/// Start a named worker thread that drives `agent` until it finishes or
/// the simulation shuts down.
pub fn spawn_worker(supervisor: Arc<Supervisor>, agent: Agent) -> SimResult<JoinHandle<WorkerExit>> {
    let handle = thread::Builder::new()
        .name(format!("lg-agent-{}", agent.id.0))
        .spawn(move || drive(&supervisor, agent))?;
    Ok(handle)
}

/// The per-agent loop.  Runs on the calling thread.
///
/// Sleeps `tick_interval` between steps and skips steps while paused.  On
/// exit the agent's gate, if any, is released and the agent deregistered.
pub fn drive(supervisor: &Supervisor, mut agent: Agent) -> WorkerExit {
    let interval = supervisor.config().tick_interval;
    let mut ticks = 0u64;

    let reason = loop {
        if !supervisor.is_running() {
            break ExitReason::Shutdown;
        }
        thread::sleep(interval);
        if supervisor.is_paused() {
            continue;
        }
        match supervisor.step(&mut agent) {
            StepOutcome::Moved | StepOutcome::Waiting => ticks += 1,
            StepOutcome::Finished => {
                ticks += 1;
                break ExitReason::Finished;
            }
            StepOutcome::Cancelled => break ExitReason::Cancelled,
        }
    };

    supervisor.release(&mut agent);
    supervisor.deregister(agent.id);
    info!(agent = %agent.id, ?reason, ticks, "worker exiting");

    WorkerExit { agent: agent.id, reason, ticks }
}
