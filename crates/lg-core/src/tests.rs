//! Unit tests for lg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, GateId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn gate_id_rejects_oversized_index() {
        assert!(GateId::try_from(300usize).is_err());
        assert_eq!(GateId::ALL, [GateId(0), GateId(1)]);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(GateId::default(), GateId(u8::MAX));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(GateId(1).to_string(), "GateId(1)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point, Rect};

    #[test]
    fn containment_is_half_open() {
        let r = Rect::new(10.0, 20.0, 5.0, 5.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(14.99, 24.99)));
        assert!(!r.contains(Point::new(15.0, 22.0)));
        assert!(!r.contains(Point::new(12.0, 25.0)));
        assert!(!r.contains(Point::new(9.99, 22.0)));
    }

    #[test]
    fn adjacent_rects_never_share_a_point() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let edge = Point::new(10.0, 5.0);
        assert!(!a.contains(edge));
        assert!(b.contains(edge));
    }

    #[test]
    fn encloses_and_well_formed() {
        let field = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert!(field.encloses(&Rect::new(150.0, 100.0, 500.0, 400.0)));
        assert!(!field.encloses(&Rect::new(750.0, 100.0, 100.0, 10.0)));
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, f32::NAN, 1.0, 1.0).is_well_formed());
    }

    #[test]
    fn offset_by_translates() {
        let p = Point::new(1.0, 2.0).offset_by(Point::new(-3.0, 0.5));
        assert_eq!(p, Point::new(-2.0, 2.5));
    }
}

#[cfg(test)]
mod leg {
    use crate::TravelLeg;

    #[test]
    fn loop_cycle_returns_to_start() {
        let mut leg = TravelLeg::Right;
        let mut seen = vec![leg];
        for _ in 0..4 {
            leg = leg.next();
            seen.push(leg);
        }
        assert_eq!(
            seen,
            [TravelLeg::Right, TravelLeg::Down, TravelLeg::Left, TravelLeg::Up, TravelLeg::Right]
        );
    }

    #[test]
    fn straight_down_never_turns() {
        assert_eq!(TravelLeg::StraightDown.next(), TravelLeg::StraightDown);
        assert!(!TravelLeg::StraightDown.is_loop());
        assert!(TravelLeg::Up.is_loop());
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::SimConfig;

    #[test]
    fn default_is_valid() {
        let c = SimConfig::default();
        assert_eq!(c.gate_capacity, 4);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let c = SimConfig { gate_capacity: 0, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn inverted_speed_range_rejected() {
        let c = SimConfig { speed_min: 3.0, speed_max: 1.0, ..SimConfig::default() };
        assert!(c.validate().is_err());
        let c = SimConfig { speed_min: 0.0, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn inverted_spawn_interval_rejected() {
        let c = SimConfig {
            spawn_interval_min: Duration::from_secs(2),
            spawn_interval_max: Duration::from_secs(1),
            ..SimConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_tick_interval_rejected() {
        let c = SimConfig { tick_interval: Duration::ZERO, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0u32..1_000), b.gen_range(0u32..1_000));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(7);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let s0: Vec<u64> = (0..8).map(|_| c0.gen_range(0..u64::MAX)).collect();
        let s1: Vec<u64> = (0..8).map(|_| c1.gen_range(0..u64::MAX)).collect();
        assert_ne!(s0, s1);
    }

    #[test]
    fn gen_range_respects_bounds() {
        let mut r = SimRng::new(1);
        for _ in 0..1_000 {
            let v: f32 = r.gen_range(0.5..=2.0);
            assert!((0.5..=2.0).contains(&v));
        }
    }
}
