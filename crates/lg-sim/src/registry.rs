//! Read-only registry of live agents, for renderers and other observers.
//!
//! Drivers publish an [`AgentView`] copy after each committed step; nothing
//! outside the owning driver ever holds a reference to an `Agent` itself.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lg_agent::AgentView;
use lg_core::{AgentId, GateId};
use lg_gate::GateSnapshot;
use rustc_hash::FxHashMap;

/// Agent id → latest published view.
#[derive(Default)]
pub struct Registry {
    views: Mutex<FxHashMap<AgentId, AgentView>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<AgentId, AgentView>> {
        self.views.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or overwrite the view for `view.id`.
    pub fn publish(&self, view: AgentView) {
        self.lock().insert(view.id, view);
    }

    /// Remove `agent`.  Returns `false` if it was not registered.
    pub fn remove(&self, agent: AgentId) -> bool {
        self.lock().remove(&agent).is_some()
    }

    pub fn get(&self, agent: AgentId) -> Option<AgentView> {
        self.lock().get(&agent).copied()
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.lock().contains_key(&agent)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All views, sorted by agent id.
    pub fn views(&self) -> Vec<AgentView> {
        let mut views: Vec<AgentView> = self.lock().values().copied().collect();
        views.sort_unstable_by_key(|v| v.id);
        views
    }
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

/// Everything a renderer may draw.  Owned copy; safe to keep.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Live agents sorted by id.
    pub agents: Vec<AgentView>,
    pub gates:  Vec<GateSnapshot>,
}

impl Snapshot {
    pub fn agent(&self, id: AgentId) -> Option<&AgentView> {
        self.agents
            .binary_search_by_key(&id, |v| v.id)
            .ok()
            .and_then(|i| self.agents.get(i))
    }

    pub fn gate(&self, id: GateId) -> Option<&GateSnapshot> {
        self.gates.iter().find(|g| g.id == id)
    }
}
