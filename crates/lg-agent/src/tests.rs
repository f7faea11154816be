//! Unit tests for lg-agent.

#[cfg(test)]
mod builder {
    use lg_core::{AgentId, Point, TravelLeg};
    use crate::{AgentBuilder, Route};

    #[test]
    fn track_agent_starts_right_at_offset_origin() {
        let a = AgentBuilder::track(Point::new(-10.0, 20.0), 1.0)
            .build(AgentId(3), Point::new(150.0, 100.0));
        assert_eq!(a.id, AgentId(3));
        assert_eq!(a.route, Route::Loop);
        assert_eq!(a.position, Point::new(140.0, 120.0));
        assert_eq!(a.offset, Point::new(-10.0, 20.0));
        assert_eq!(a.leg, TravelLeg::Right);
        assert!(!a.holds_gate());
    }

    #[test]
    fn cross_agent_starts_straight_down() {
        let a = AgentBuilder::cross(Point::new(5.0, 0.0), 2.0)
            .build(AgentId(0), Point::new(450.0, 0.0));
        assert_eq!(a.leg, TravelLeg::StraightDown);
        assert_eq!(a.position, Point::new(455.0, 0.0));
    }

    #[test]
    fn speed_validation() {
        assert!(AgentBuilder::track(Point::default(), 0.5).has_valid_speed());
        assert!(!AgentBuilder::track(Point::default(), 0.0).has_valid_speed());
        assert!(!AgentBuilder::track(Point::default(), -1.0).has_valid_speed());
        assert!(!AgentBuilder::track(Point::default(), f32::INFINITY).has_valid_speed());
    }
}

#[cfg(test)]
mod view {
    use lg_core::{AgentId, GateId, Point};
    use crate::AgentBuilder;

    #[test]
    fn view_mirrors_agent() {
        let mut a = AgentBuilder::track(Point::default(), 1.0)
            .build(AgentId(9), Point::new(1.0, 2.0));
        a.held_gate = Some(GateId(1));
        let v = a.view();
        assert_eq!(v.id, AgentId(9));
        assert_eq!(v.position, Point::new(1.0, 2.0));
        assert_eq!(v.leg, a.leg);
        assert_eq!(v.held_gate, Some(GateId(1)));
    }
}
