//! Unit tests for lg-spatial.

#[cfg(test)]
mod standard_layout {
    use lg_core::{GateId, Point, Rect};
    use crate::Geometry;

    #[test]
    fn reference_dimensions() {
        let g = Geometry::standard();
        assert_eq!(g.field(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(g.loop_bounds(), Rect::new(150.0, 100.0, 500.0, 400.0));
        assert_eq!(g.gate_bounds(GateId(0)), Some(Rect::new(400.0, 50.0, 100.0, 100.0)));
        assert_eq!(g.gate_bounds(GateId(1)), Some(Rect::new(400.0, 450.0, 100.0, 100.0)));
        assert_eq!(g.track_thickness(), 100.0);
        assert_eq!(g.cross_origin(), Point::new(450.0, 0.0));
        assert_eq!(g.loop_origin(), Point::new(150.0, 100.0));
    }

    #[test]
    fn gates_sit_on_horizontal_loop_edges() {
        let g = Geometry::standard();
        // Top edge of the loop runs at y = 100, bottom at y = 500.
        assert_eq!(g.gate_at(Point::new(420.0, 100.0)), Some(GateId(0)));
        assert_eq!(g.gate_at(Point::new(480.0, 500.0)), Some(GateId(1)));
        // Cross-track centre line hits both gates.
        assert_eq!(g.gate_at(Point::new(450.0, 60.0)), Some(GateId(0)));
        assert_eq!(g.gate_at(Point::new(450.0, 540.0)), Some(GateId(1)));
    }

    #[test]
    fn points_outside_gates() {
        let g = Geometry::standard();
        assert_eq!(g.gate_at(Point::new(150.0, 100.0)), None);
        assert_eq!(g.gate_at(Point::new(450.0, 300.0)), None);
        // Right edge of gate 0 is exclusive.
        assert_eq!(g.gate_at(Point::new(500.0, 100.0)), None);
        assert_eq!(g.gate_at(Point::new(399.99, 100.0)), None);
        assert_eq!(g.gate_at(Point::new(400.0, 100.0)), Some(GateId(0)));
    }

    #[test]
    fn past_field_is_strict() {
        let g = Geometry::standard();
        assert!(!g.is_past_field(Point::new(450.0, 600.0)));
        assert!(g.is_past_field(Point::new(450.0, 600.5)));
    }
}

#[cfg(test)]
mod builder {
    use lg_core::{GateId, Point, Rect};
    use crate::{GeometryBuilder, SpatialError};

    fn field() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn missing_loop_errors() {
        let r = GeometryBuilder::new(field()).build();
        assert!(matches!(r, Err(SpatialError::Missing(_))));
    }

    #[test]
    fn gate_outside_field_errors() {
        let r = GeometryBuilder::new(field())
            .loop_bounds(Rect::new(10.0, 10.0, 80.0, 80.0))
            .gates([Rect::new(90.0, 0.0, 20.0, 20.0), Rect::new(0.0, 0.0, 5.0, 5.0)])
            .build();
        assert!(matches!(r, Err(SpatialError::OutOfField { what: "gate", .. })));
    }

    #[test]
    fn degenerate_gate_errors() {
        let r = GeometryBuilder::new(field())
            .loop_bounds(Rect::new(10.0, 10.0, 80.0, 80.0))
            .gates([Rect::new(10.0, 10.0, 0.0, 20.0), Rect::new(0.0, 0.0, 5.0, 5.0)])
            .build();
        assert!(matches!(r, Err(SpatialError::InvalidRect { .. })));
    }

    #[test]
    fn bad_thickness_errors() {
        let r = GeometryBuilder::new(field())
            .loop_bounds(Rect::new(10.0, 10.0, 80.0, 80.0))
            .gates([Rect::new(10.0, 10.0, 5.0, 5.0), Rect::new(0.0, 0.0, 5.0, 5.0)])
            .track_thickness(-1.0)
            .build();
        assert!(matches!(r, Err(SpatialError::InvalidThickness(_))));
    }

    #[test]
    fn default_cross_origin_is_top_centre() {
        let g = GeometryBuilder::new(field())
            .loop_bounds(Rect::new(10.0, 10.0, 80.0, 80.0))
            .gates([Rect::new(10.0, 10.0, 5.0, 5.0), Rect::new(0.0, 0.0, 5.0, 5.0)])
            .build()
            .unwrap();
        assert_eq!(g.cross_origin(), Point::new(50.0, 0.0));
    }

    #[test]
    fn overlapping_gates_resolve_to_lowest_id() {
        let g = GeometryBuilder::new(field())
            .loop_bounds(Rect::new(10.0, 10.0, 80.0, 80.0))
            .gates([Rect::new(20.0, 20.0, 20.0, 20.0), Rect::new(10.0, 10.0, 40.0, 40.0)])
            .build()
            .unwrap();
        assert_eq!(g.gate_at(Point::new(25.0, 25.0)), Some(GateId(0)));
        assert_eq!(g.gate_at(Point::new(12.0, 12.0)), Some(GateId(1)));
    }
}
