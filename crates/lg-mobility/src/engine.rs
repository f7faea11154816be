//! Motion engine: advances one agent by one tick.

use lg_agent::Agent;
use lg_core::{Point, Rect, TravelLeg};
use lg_spatial::Geometry;
use tracing::trace;

use crate::Advance;

/// Computes candidate positions along the loop or the cross-track.
///
/// Holds copies of the two rectangles it needs, so it is `Copy` and can be
/// shared freely between drivers without borrowing the geometry.
#[derive(Debug, Clone, Copy)]
pub struct MotionEngine {
    loop_bounds: Rect,
    field:       Rect,
}

impl MotionEngine {
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            loop_bounds: geometry.loop_bounds(),
            field:       geometry.field(),
        }
    }

    /// Compute `agent`'s position after one tick.
    ///
    /// Loop legs are clamped to the agent's own (offset) corner and switch
    /// to the next leg there.  `StraightDown` only moves down and reports
    /// `finished` once `y` passes the bottom of the field.
    pub fn advance(&self, agent: &Agent) -> Advance {
        let Point { x, y } = agent.position;
        let speed = agent.speed;

        let start_x = self.loop_bounds.x + agent.offset.x;
        let end_x   = self.loop_bounds.right() + agent.offset.x;
        let start_y = self.loop_bounds.y + agent.offset.y;
        let end_y   = self.loop_bounds.bottom() + agent.offset.y;

        // A loop leg that reaches its corner stops on it and turns.
        let (position, turned) = match agent.leg {
            TravelLeg::Right => {
                let nx = x + speed;
                (Point::new(nx.min(end_x), y), nx >= end_x)
            }
            TravelLeg::Down => {
                let ny = y + speed;
                (Point::new(x, ny.min(end_y)), ny >= end_y)
            }
            TravelLeg::Left => {
                let nx = x - speed;
                (Point::new(nx.max(start_x), y), nx <= start_x)
            }
            TravelLeg::Up => {
                let ny = y - speed;
                (Point::new(x, ny.max(start_y)), ny <= start_y)
            }
            TravelLeg::StraightDown => (Point::new(x, y + speed), false),
        };
        let leg = if turned { agent.leg.next() } else { agent.leg };

        let finished = leg == TravelLeg::StraightDown && position.y > self.field.bottom();
        if leg != agent.leg {
            trace!(agent = %agent.id, from = %agent.leg, to = %leg, "corner reached");
        }

        Advance { position, leg, finished }
    }
}
