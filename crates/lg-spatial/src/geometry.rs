//! Layout representation and builder.
//!
//! # Reference layout
//!
//! ```text
//!  (0,0) ┌────────────────────────── field 800×600 ───────────┐
//!        │               ┌gate 0┐                              │
//!        │    ┌──────────┼──────┼──────────────┐ loop          │
//!        │    │          └──────┘              │ {150,100,     │
//!        │    │          cross-track x=400..500│  500,400}     │
//!        │    │          ┌gate 1┐              │               │
//!        │    └──────────┼──────┼──────────────┘               │
//!        │               └──────┘                              │
//!        └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Spatial index
//!
//! Gate rectangles are bulk-loaded into an R-tree (via `rstar`).  Point
//! queries use the half-open [`Rect::contains`] test, so a point on a shared
//! edge belongs to exactly one gate.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use lg_core::{GateId, Point, Rect};

use crate::{SpatialError, SpatialResult};

// ── R-tree gate entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct GateEntry {
    rect: Rect,
    id:   GateId,
}

impl RTreeObject for GateEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.x, self.rect.y],
            [self.rect.right(), self.rect.bottom()],
        )
    }
}

impl PointDistance for GateEntry {
    /// Squared distance from `point` to the nearest point of the rectangle
    /// (zero inside).
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = (self.rect.x - point[0]).max(point[0] - self.rect.right()).max(0.0);
        let dy = (self.rect.y - point[1]).max(point[1] - self.rect.bottom()).max(0.0);
        dx * dx + dy * dy
    }

    /// Half-open, matching [`Rect::contains`].
    fn contains_point(&self, point: &[f32; 2]) -> bool {
        self.rect.contains(Point::new(point[0], point[1]))
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Immutable layout: field, loop path, gate regions.
///
/// Do not construct directly; use [`GeometryBuilder`] or
/// [`Geometry::standard`].
pub struct Geometry {
    field:           Rect,
    loop_bounds:     Rect,
    gates:           [Rect; GateId::COUNT],
    track_thickness: f32,
    cross_origin:    Point,
    gate_idx:        RTree<GateEntry>,
}

impl Geometry {
    /// The reference 800×600 layout.
    ///
    /// Loop `{150, 100, 500, 400}` drawn with a 100-unit stroke, a vertical
    /// cross-track spanning x = 400..500, and one gate where the cross-track
    /// meets each horizontal loop edge.
    pub fn standard() -> Geometry {
        const FIELD_W: f32 = 800.0;
        const FIELD_H: f32 = 600.0;
        const TRACK_W: f32 = FIELD_W / 2.0;
        const TRACK_H: f32 = FIELD_H / 2.0;
        const THICKNESS: f32 = 100.0;
        const CROSS_X: f32 = FIELD_W * 0.5;
        const CROSS_W: f32 = 100.0;

        let loop_x = (FIELD_W - TRACK_W - THICKNESS) / 2.0;
        let loop_y = (FIELD_H - TRACK_H - THICKNESS) / 2.0;
        let loop_end_x = FIELD_W - THICKNESS * 1.5;
        let loop_end_y = FIELD_H - THICKNESS;

        let gate_top_y = FIELD_H / 2.0 - TRACK_H / 2.0 - THICKNESS;
        let gate_bottom_y = FIELD_H / 2.0 + TRACK_H / 2.0;

        let gates = [
            Rect::new(CROSS_X, gate_top_y, CROSS_W, THICKNESS),
            Rect::new(CROSS_X, gate_bottom_y, CROSS_W, THICKNESS),
        ];
        Geometry::assemble(
            Rect::new(0.0, 0.0, FIELD_W, FIELD_H),
            Rect::new(loop_x, loop_y, loop_end_x - loop_x, loop_end_y - loop_y),
            gates,
            THICKNESS,
            Point::new(CROSS_X + CROSS_W / 2.0, 0.0),
        )
    }

    fn assemble(
        field:           Rect,
        loop_bounds:     Rect,
        gates:           [Rect; GateId::COUNT],
        track_thickness: f32,
        cross_origin:    Point,
    ) -> Geometry {
        let entries = gates
            .iter()
            .zip(GateId::ALL)
            .map(|(&rect, id)| GateEntry { rect, id })
            .collect();
        Geometry {
            field,
            loop_bounds,
            gates,
            track_thickness,
            cross_origin,
            gate_idx: RTree::bulk_load(entries),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn field(&self) -> Rect {
        self.field
    }

    /// The loop path.  Agents travel its perimeter (plus their own offset).
    pub fn loop_bounds(&self) -> Rect {
        self.loop_bounds
    }

    pub fn gate_bounds(&self, gate: GateId) -> Option<Rect> {
        self.gates.get(gate.index()).copied()
    }

    pub fn gates(&self) -> &[Rect; GateId::COUNT] {
        &self.gates
    }

    /// Stroke width of the loop; spawn offsets are a fraction of it.
    pub fn track_thickness(&self) -> f32 {
        self.track_thickness
    }

    /// Where loop agents enter: the loop's top-left corner.
    pub fn loop_origin(&self) -> Point {
        Point::new(self.loop_bounds.x, self.loop_bounds.y)
    }

    /// Where cross-track agents enter, at the top of the field.
    pub fn cross_origin(&self) -> Point {
        self.cross_origin
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The gate region containing `p`, if any.  Lowest `GateId` wins when
    /// regions overlap.
    pub fn gate_at(&self, p: Point) -> Option<GateId> {
        self.gate_idx
            .locate_all_at_point(&[p.x, p.y])
            .map(|e| e.id)
            .min()
    }

    /// `true` once `p` has left the field through its lower edge.
    #[inline]
    pub fn is_past_field(&self, p: Point) -> bool {
        p.y > self.field.bottom()
    }
}

// ── GeometryBuilder ───────────────────────────────────────────────────────────

/// Construct a [`Geometry`] piece by piece, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use lg_core::{Point, Rect};
/// use lg_spatial::GeometryBuilder;
///
/// let geo = GeometryBuilder::new(Rect::new(0.0, 0.0, 200.0, 200.0))
///     .loop_bounds(Rect::new(20.0, 20.0, 160.0, 160.0))
///     .gates([Rect::new(90.0, 10.0, 20.0, 20.0), Rect::new(90.0, 170.0, 20.0, 20.0)])
///     .track_thickness(20.0)
///     .cross_origin(Point::new(100.0, 0.0))
///     .build()
///     .unwrap();
/// assert!(geo.gate_at(Point::new(95.0, 20.0)).is_some());
/// ```
pub struct GeometryBuilder {
    field:           Rect,
    loop_bounds:     Option<Rect>,
    gates:           Option<[Rect; GateId::COUNT]>,
    track_thickness: f32,
    cross_origin:    Option<Point>,
}

impl GeometryBuilder {
    pub fn new(field: Rect) -> Self {
        Self {
            field,
            loop_bounds:     None,
            gates:           None,
            track_thickness: 1.0,
            cross_origin:    None,
        }
    }

    pub fn loop_bounds(mut self, rect: Rect) -> Self {
        self.loop_bounds = Some(rect);
        self
    }

    pub fn gates(mut self, gates: [Rect; GateId::COUNT]) -> Self {
        self.gates = Some(gates);
        self
    }

    pub fn track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness;
        self
    }

    /// Defaults to the top edge of the field, horizontally centred.
    pub fn cross_origin(mut self, p: Point) -> Self {
        self.cross_origin = Some(p);
        self
    }

    /// Validate every rectangle and build the gate index.
    pub fn build(self) -> SpatialResult<Geometry> {
        let field = self.field;
        check_rect("field", field)?;

        let loop_bounds = self.loop_bounds.ok_or(SpatialError::Missing("loop bounds"))?;
        check_rect("loop bounds", loop_bounds)?;
        check_inside("loop bounds", loop_bounds, field)?;

        let gates = self.gates.ok_or(SpatialError::Missing("gate bounds"))?;
        for gate in gates {
            check_rect("gate", gate)?;
            check_inside("gate", gate, field)?;
        }

        if !self.track_thickness.is_finite() || self.track_thickness <= 0.0 {
            return Err(SpatialError::InvalidThickness(self.track_thickness));
        }

        let cross_origin = self
            .cross_origin
            .unwrap_or_else(|| Point::new(field.x + field.width / 2.0, field.y));

        Ok(Geometry::assemble(field, loop_bounds, gates, self.track_thickness, cross_origin))
    }
}

fn check_rect(what: &'static str, rect: Rect) -> SpatialResult<()> {
    if rect.is_well_formed() {
        Ok(())
    } else {
        Err(SpatialError::InvalidRect { what, rect })
    }
}

fn check_inside(what: &'static str, rect: Rect, field: Rect) -> SpatialResult<()> {
    if field.encloses(&rect) {
        Ok(())
    } else {
        Err(SpatialError::OutOfField { what, rect, field })
    }
}
