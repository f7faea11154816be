//! Agent state and its read-only view.

use lg_core::{AgentId, GateId, Point, TravelLeg};

use crate::Route;

/// A single travelling agent.
///
/// Fields are `pub` so the motion engine and supervisor can update them
/// directly; the driver that owns the agent is the only writer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Issued by the supervisor at registration; never reused.
    pub id: AgentId,

    pub route: Route,

    pub position: Point,

    /// Lateral shift applied to the whole loop path, fixed at spawn.
    pub offset: Point,

    /// Units travelled per tick.  Always finite and `> 0`.
    pub speed: f32,

    pub leg: TravelLeg,

    /// Gate this agent currently occupies, if any.
    pub held_gate: Option<GateId>,
}

impl Agent {
    /// `true` while the agent occupies a gate.
    #[inline]
    pub fn holds_gate(&self) -> bool {
        self.held_gate.is_some()
    }

    /// Copy of the fields a renderer is allowed to see.
    pub fn view(&self) -> AgentView {
        AgentView {
            id:        self.id,
            position:  self.position,
            leg:       self.leg,
            held_gate: self.held_gate,
        }
    }
}

/// Read-only snapshot row for one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:        AgentId,
    pub position:  Point,
    pub leg:       TravelLeg,
    pub held_gate: Option<GateId>,
}
