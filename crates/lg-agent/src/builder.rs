//! Agent construction.
//!
//! An [`AgentBuilder`] describes an agent that does not exist yet: which
//! route it follows, its lateral offset and its speed.  The supervisor turns
//! it into an [`Agent`] by issuing an id and picking the route's origin.
//!
//! ```rust
//! use lg_agent::{AgentBuilder, Route};
//! use lg_core::{AgentId, Point, TravelLeg};
//!
//! let agent = AgentBuilder::new(Route::Loop, Point::new(5.0, -5.0), 1.5)
//!     .build(AgentId(0), Point::new(150.0, 100.0));
//!
//! assert_eq!(agent.position, Point::new(155.0, 95.0));
//! assert_eq!(agent.leg, TravelLeg::Right);
//! ```

use lg_core::{AgentId, Point, TravelLeg};

use crate::Agent;

/// Which path an agent follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    /// Laps the rectangular loop forever, starting on the `Right` leg.
    Loop,
    /// Crosses the field top to bottom, then leaves.
    Cross,
}

impl Route {
    /// The leg an agent on this route starts with.
    pub fn initial_leg(self) -> TravelLeg {
        match self {
            Route::Loop  => TravelLeg::Right,
            Route::Cross => TravelLeg::StraightDown,
        }
    }
}

/// Blueprint for one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentBuilder {
    pub route:  Route,
    pub offset: Point,
    pub speed:  f32,
}

impl AgentBuilder {
    pub fn new(route: Route, offset: Point, speed: f32) -> Self {
        Self { route, offset, speed }
    }

    /// A loop agent.
    pub fn track(offset: Point, speed: f32) -> Self {
        Self::new(Route::Loop, offset, speed)
    }

    /// A cross-track agent.
    pub fn cross(offset: Point, speed: f32) -> Self {
        Self::new(Route::Cross, offset, speed)
    }

    /// `true` if the speed is usable by the motion engine.
    pub fn has_valid_speed(&self) -> bool {
        self.speed.is_finite() && self.speed > 0.0
    }

    /// Place the agent at `origin + offset` with the route's initial leg.
    pub fn build(self, id: AgentId, origin: Point) -> Agent {
        Agent {
            id,
            route:     self.route,
            position:  origin.offset_by(self.offset),
            offset:    self.offset,
            speed:     self.speed,
            leg:       self.route.initial_leg(),
            held_gate: None,
        }
    }
}
