//! Result of one motion step.

use lg_core::{Point, TravelLeg};

/// Candidate state for an agent after one tick.
///
/// Nothing is applied until the supervisor calls [`Advance::commit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    /// Where the agent would be after this tick.
    pub position: Point,

    /// The agent's leg after this tick.  Differs from the current leg only
    /// when a corner was reached.
    pub leg: TravelLeg,

    /// `true` once a cross-track agent has left the field.
    pub finished: bool,
}

impl Advance {
    /// `true` if this step reached a corner.
    #[inline]
    pub fn turned(&self, from: TravelLeg) -> bool {
        self.leg != from
    }

    /// Write position and leg into `agent`.
    #[inline]
    pub fn commit(&self, agent: &mut lg_agent::Agent) {
        agent.position = self.position;
        agent.leg      = self.leg;
    }
}
