//! Unit tests for lg-mobility.

use lg_agent::{Agent, AgentBuilder};
use lg_core::{AgentId, Point};
use lg_spatial::Geometry;

use crate::MotionEngine;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn engine() -> MotionEngine {
    MotionEngine::new(&Geometry::standard())
}

/// Loop agent at the reference loop origin (150, 100) plus `offset`.
fn loop_agent(offset: Point, speed: f32) -> Agent {
    AgentBuilder::track(offset, speed).build(AgentId(0), Point::new(150.0, 100.0))
}

fn cross_agent(speed: f32) -> Agent {
    AgentBuilder::cross(Point::default(), speed).build(AgentId(1), Point::new(450.0, 0.0))
}

/// Apply `n` advances, returning the number of corners turned.
fn run(eng: &MotionEngine, agent: &mut Agent, n: usize) -> usize {
    let mut turns = 0;
    for _ in 0..n {
        let adv = eng.advance(agent);
        if adv.turned(agent.leg) {
            turns += 1;
        }
        adv.commit(agent);
    }
    turns
}

// ── Straight movement ─────────────────────────────────────────────────────────

#[cfg(test)]
mod straight {
    use lg_core::{Point, TravelLeg};
    use super::*;

    #[test]
    fn right_leg_moves_by_speed() {
        let a = loop_agent(Point::default(), 2.0);
        let adv = engine().advance(&a);
        assert_eq!(adv.position, Point::new(152.0, 100.0));
        assert_eq!(adv.leg, TravelLeg::Right);
        assert!(!adv.finished);
    }

    #[test]
    fn advance_is_pure() {
        let a = loop_agent(Point::default(), 2.0);
        let before = a.clone();
        let _ = engine().advance(&a);
        assert_eq!(a, before);
    }

    #[test]
    fn each_leg_moves_along_its_axis() {
        let eng = engine();
        let mut a = loop_agent(Point::default(), 1.0);
        a.position = Point::new(300.0, 300.0);

        a.leg = TravelLeg::Down;
        assert_eq!(eng.advance(&a).position, Point::new(300.0, 301.0));
        a.leg = TravelLeg::Left;
        assert_eq!(eng.advance(&a).position, Point::new(299.0, 300.0));
        a.leg = TravelLeg::Up;
        assert_eq!(eng.advance(&a).position, Point::new(300.0, 299.0));
    }
}

// ── Corners ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod corners {
    use lg_core::{Point, TravelLeg};
    use super::*;

    #[test]
    fn overshoot_is_clamped_onto_corner() {
        let mut a = loop_agent(Point::default(), 3.0);
        a.position = Point::new(649.0, 100.0);
        let adv = engine().advance(&a);
        assert_eq!(adv.position, Point::new(650.0, 100.0));
        assert_eq!(adv.leg, TravelLeg::Down);
    }

    #[test]
    fn corners_respect_offset() {
        let mut a = loop_agent(Point::new(-10.0, 15.0), 5.0);
        a.leg = TravelLeg::Up;
        a.position = Point::new(140.0, 117.0);
        let adv = engine().advance(&a);
        assert_eq!(adv.position, Point::new(140.0, 115.0));
        assert_eq!(adv.leg, TravelLeg::Right);
    }

    #[test]
    fn turns_follow_the_leg_cycle() {
        let eng = engine();
        let mut a = loop_agent(Point::new(-4.0, 6.0), 7.0);
        let mut legs = Vec::new();
        while legs.len() < 8 {
            let adv = eng.advance(&a);
            if adv.turned(a.leg) {
                assert_eq!(adv.leg, a.leg.next());
                legs.push(adv.leg);
            }
            adv.commit(&mut a);
        }
        use TravelLeg::*;
        assert_eq!(legs, [Down, Left, Up, Right, Down, Left, Up, Right]);
    }

    #[test]
    fn landing_exactly_on_corner_turns() {
        let mut a = loop_agent(Point::default(), 5.0);
        a.leg = TravelLeg::Down;
        a.position = Point::new(650.0, 495.0);
        let adv = engine().advance(&a);
        assert_eq!(adv.position, Point::new(650.0, 500.0));
        assert_eq!(adv.leg, TravelLeg::Left);
    }

    #[test]
    fn full_lap_returns_to_origin() {
        let eng = engine();
        // 500 × 400 loop at speed 50: 10 + 8 + 10 + 8 = 36 steps.
        let mut a = loop_agent(Point::default(), 50.0);
        let turns = run(&eng, &mut a, 36);
        assert_eq!(turns, 4);
        assert_eq!(a.position, Point::new(150.0, 100.0));
        assert_eq!(a.leg, TravelLeg::Right);
    }

    #[test]
    fn uneven_speed_visits_each_corner_once_per_lap() {
        let eng = engine();
        let mut a = loop_agent(Point::new(7.0, -3.0), 3.0);
        let mut corners = Vec::new();
        for _ in 0..700 {
            let adv = eng.advance(&a);
            if adv.turned(a.leg) {
                corners.push(adv.position);
            }
            adv.commit(&mut a);
            if corners.len() == 4 {
                break;
            }
        }
        assert_eq!(
            corners,
            [
                Point::new(657.0, 97.0),
                Point::new(657.0, 497.0),
                Point::new(157.0, 497.0),
                Point::new(157.0, 97.0),
            ]
        );
    }
}

// ── Cross-track ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cross_track {
    use lg_core::{Point, TravelLeg};
    use super::*;

    #[test]
    fn straight_down_never_turns() {
        let eng = engine();
        let mut a = cross_agent(7.0);
        assert_eq!(run(&eng, &mut a, 50), 0);
        assert_eq!(a.leg, TravelLeg::StraightDown);
        assert_eq!(a.position, Point::new(450.0, 350.0));
    }

    #[test]
    fn finishes_only_past_field_bottom() {
        let eng = engine();
        let mut a = cross_agent(1.0);
        a.position = Point::new(450.0, 599.0);
        let adv = eng.advance(&a);
        assert_eq!(adv.position.y, 600.0);
        assert!(!adv.finished);
        adv.commit(&mut a);
        assert!(eng.advance(&a).finished);
    }

    #[test]
    fn loop_agents_never_finish() {
        let eng = engine();
        let mut a = loop_agent(Point::new(0.0, 25.0), 2.0);
        for _ in 0..2_000 {
            let adv = eng.advance(&a);
            assert!(!adv.finished);
            adv.commit(&mut a);
        }
    }
}
